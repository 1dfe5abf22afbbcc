//! Mood Catalog
//!
//! Fixed set of known moods with their ironic responses and weird advice.
//! The catalog is static data; nothing mutates it at runtime.

use ratatui::style::Color;

/// A single mood and everything we say about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodDefinition {
    /// Unique key, e.g. "happy"
    pub id: &'static str,
    /// Human-readable name shown in the picker
    pub label: &'static str,
    /// Ironic response shown when this mood is selected
    pub message: &'static str,
    /// Weird advice shown next to timeline entries
    pub advice: &'static str,
    /// Display color (cosmetic only)
    pub color: Color,
}

/// The five known moods, in picker order.
pub const MOODS: &[MoodDefinition] = &[
    MoodDefinition {
        id: "happy",
        label: "Happy",
        message: "Oh no, you're happy? That's terrible! Here's a tissue 🤧",
        advice: "Try stubbing your toe to balance out the happiness!",
        color: Color::Blue,
    },
    MoodDefinition {
        id: "sad",
        label: "Sad",
        message: "You're sad? PARTY TIME! Let's dance! 💃🕺✨",
        advice: "Quick! Watch cat videos in reverse!",
        color: Color::Yellow,
    },
    MoodDefinition {
        id: "stressed",
        label: "Stressed",
        message: "Stressed? Perfect weather for a picnic! 🧺🌞",
        advice: "Try juggling water balloons indoors!",
        color: Color::Magenta,
    },
    MoodDefinition {
        id: "relaxed",
        label: "Relaxed",
        message: "Relaxed?! QUICK, PANIC ABOUT EVERYTHING! 😱",
        advice: "Count backwards from infinity, NOW!",
        color: Color::Red,
    },
    MoodDefinition {
        id: "neutral",
        label: "Neutral",
        message: "NEUTRAL?! THIS IS THE MOST EXTREME THING EVER!!! 🎢🎪🎭",
        advice: "Try expressing ALL emotions at once!",
        color: Color::Green,
    },
];

/// Look a mood up by id.
///
/// A miss is not an error: callers render nothing for unknown ids.
pub fn find_by_id(id: &str) -> Option<&'static MoodDefinition> {
    MOODS.iter().find(|m| m.id == id)
}
