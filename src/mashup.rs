//! Mashup Generator
//!
//! Pairs two randomly drawn moods and produces a canned (or default) piece
//! of combined advice.

use crate::catalog::MOODS;
use crate::rng::RandomSource;

/// Known ordered label pairs with dedicated advice.
const COMBOS: &[(&str, &str, &str)] = &[
    (
        "Happy",
        "Sad",
        "Try laughing and crying simultaneously while hopping on one foot! 😂😢",
    ),
    (
        "Stressed",
        "Relaxed",
        "Meditate intensely while running a marathon! 🧘‍♂️🏃‍♂️",
    ),
    (
        "Neutral",
        "Happy",
        "Express joy with the most monotone voice possible! 😐😊",
    ),
];

/// Fallback advice for pairs without a dedicated entry.
const DEFAULT_ADVICE: &str = "Do a cartwheel while solving quantum physics equations! 🤸‍♂️🤯";

/// Advice for an ordered label pair. Order matters: ("Sad", "Happy") is a miss.
fn advice_for(label1: &str, label2: &str) -> &'static str {
    COMBOS
        .iter()
        .find(|&&(a, b, _)| a == label1 && b == label2)
        .map_or(DEFAULT_ADVICE, |&(_, _, advice)| advice)
}

/// Draw two moods with replacement and format the mashup line.
///
/// Always returns `"<label1>-<label2>: <advice>"`.
pub fn generate_mashup(rng: &mut dyn RandomSource) -> String {
    let mood1 = &MOODS[rng.pick_index(MOODS.len())];
    let mood2 = &MOODS[rng.pick_index(MOODS.len())];
    format!(
        "{}-{}: {}",
        mood1.label,
        mood2.label,
        advice_for(mood1.label, mood2.label)
    )
}
