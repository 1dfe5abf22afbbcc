//! Injectable random source
//!
//! Mashup generation and the display refresher both draw uniform indices.
//! Hiding the draw behind a trait lets tests script the exact sequence.

use rand::Rng;

/// Source of uniform random indices.
pub trait RandomSource {
    /// Uniform draw in `[0, len)`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Production source backed by the thread-local rand generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandomSource;

impl RandomSource for ThreadRandomSource {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Replays a fixed sequence of indices, then wraps around.
///
/// Used by tests that need deterministic mashup or font-size draws.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<usize>,
    pos: usize,
}

impl ScriptedSource {
    /// `values` must be non-empty; every draw reads from the script.
    pub fn new(values: Vec<usize>) -> Self {
        assert!(!values.is_empty(), "ScriptedSource needs at least one value");
        Self { values, pos: 0 }
    }
}

impl RandomSource for ScriptedSource {
    fn pick_index(&mut self, len: usize) -> usize {
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_source_in_range() {
        let mut rng = ThreadRandomSource;
        for _ in 0..100 {
            assert!(rng.pick_index(5) < 5);
        }
    }

    #[test]
    fn test_scripted_source_replays_and_wraps() {
        let mut rng = ScriptedSource::new(vec![0, 3, 2]);
        assert_eq!(rng.pick_index(5), 0);
        assert_eq!(rng.pick_index(5), 3);
        assert_eq!(rng.pick_index(5), 2);
        assert_eq!(rng.pick_index(5), 0);
    }

    #[test]
    #[should_panic(expected = "at least one value")]
    fn test_scripted_source_rejects_empty_script() {
        let _ = ScriptedSource::new(Vec::new());
    }

    #[test]
    fn test_scripted_source_clamps_to_len() {
        let mut rng = ScriptedSource::new(vec![7]);
        assert_eq!(rng.pick_index(5), 2);
    }
}
