//! # Weird Mood Tracker
//!
//! A novelty terminal mood tracker: pick a mood, get jokingly inverted
//! advice, build streaks of repeated picks, and watch the display randomly
//! re-style itself. All session logic lives in pure state transitions so it
//! can be tested without a terminal.

pub mod catalog;
pub mod mashup;
pub mod refresher;
pub mod rng;
pub mod session;
pub mod tui;

pub use catalog::{find_by_id, MoodDefinition, MOODS};
pub use rng::{RandomSource, ScriptedSource, ThreadRandomSource};
pub use session::{MoodHistoryEntry, SessionState};
