//! Session state and the mood-selection transition
//!
//! All mutable state lives in one [`SessionState`] value with a single
//! explicit reducer, [`SessionState::select_mood`]. This keeps the logic
//! testable without a terminal harness.

use crate::catalog;
use crate::mashup;
use crate::rng::RandomSource;

/// One selection event, appended to the timeline and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodHistoryEntry {
    /// Capture time, already display-formatted (e.g. "14:02:51")
    pub timestamp: String,
    /// Catalog id of the selected mood; may reference an unknown id
    pub mood_id: String,
    /// The mood's message at selection time; `None` on a catalog miss
    pub resolved_message: Option<String>,
}

/// Mutable state owned by the running app instance.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Last selected mood id
    pub current_mood_id: Option<String>,
    /// Chronological selection timeline, append-only
    pub history: Vec<MoodHistoryEntry>,
    /// Most recently generated mashup line
    pub mashup_text: Option<String>,
    /// Run length of identical selections at the tail of the timeline
    pub streak_count: u32,
    /// Cosmetic, refreshed by the display refresher
    pub display_font_size: u16,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            display_font_size: 16,
            ..Self::default()
        }
    }

    /// Apply a mood selection.
    ///
    /// Sets the current mood, appends a history entry, recomputes the
    /// streak, and regenerates the mashup line. Unknown ids degrade to an
    /// entry with no resolved message; they never fail or touch existing
    /// entries.
    pub fn select_mood(&mut self, id: &str, timestamp: String, rng: &mut dyn RandomSource) {
        // Streak compares against the entry that was last BEFORE this
        // append, so capture it first.
        let previous_mood = self.history.last().map(|e| e.mood_id.clone());

        self.current_mood_id = Some(id.to_string());

        let resolved_message = catalog::find_by_id(id).map(|m| m.message.to_string());
        self.history.push(MoodHistoryEntry {
            timestamp,
            mood_id: id.to_string(),
            resolved_message,
        });

        self.streak_count = match previous_mood.as_deref() {
            Some(prev) if prev == id => self.streak_count + 1,
            _ => 1,
        };

        self.mashup_text = Some(mashup::generate_mashup(rng));

        tracing::debug!(mood = id, streak = self.streak_count, "mood selected");
    }

    /// The catalog entry for the current selection, if any resolves.
    pub fn current_mood(&self) -> Option<&'static catalog::MoodDefinition> {
        self.current_mood_id
            .as_deref()
            .and_then(catalog::find_by_id)
    }

    /// The newest `n` timeline entries, newest first.
    pub fn recent_history(&self, n: usize) -> impl Iterator<Item = &MoodHistoryEntry> {
        self.history.iter().rev().take(n)
    }
}
