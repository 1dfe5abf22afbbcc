//! Display refresher
//!
//! Periodically re-rolls the cosmetic font size. The draw itself is pure;
//! scheduling belongs to the host event loop, which checks [`Refresher::due`]
//! each pass. One refresher per app instance, dropped with it.

use std::time::{Duration, Instant};

use crate::rng::RandomSource;

/// Smallest font size the refresher produces.
pub const FONT_MIN: u16 = 14;
/// Number of distinct sizes; the draw lands in `[FONT_MIN, FONT_MIN + FONT_SPAN)`.
pub const FONT_SPAN: u16 = 20;

/// Refresh period.
pub const REFRESH_PERIOD: Duration = Duration::from_millis(2000);

/// Elapsed-time gate for the periodic font re-roll.
#[derive(Debug)]
pub struct Refresher {
    period: Duration,
    last_tick: Instant,
}

impl Refresher {
    pub fn new() -> Self {
        Self::with_period(REFRESH_PERIOD)
    }

    pub fn with_period(period: Duration) -> Self {
        Self {
            period,
            last_tick: Instant::now(),
        }
    }

    /// Has a full period elapsed since the last tick?
    pub fn due(&self) -> bool {
        self.last_tick.elapsed() >= self.period
    }

    /// Time left until the next tick, for event-poll timeouts.
    pub fn timeout(&self) -> Duration {
        self.period.saturating_sub(self.last_tick.elapsed())
    }

    /// Re-roll the font size and reset the period.
    pub fn tick(&mut self, rng: &mut dyn RandomSource) -> u16 {
        self.last_tick = Instant::now();
        draw_font_size(rng)
    }
}

impl Default for Refresher {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniform draw in `[14, 33]`.
pub fn draw_font_size(rng: &mut dyn RandomSource) -> u16 {
    FONT_MIN + rng.pick_index(FONT_SPAN as usize) as u16
}
