//! Application state and main loop
//!
//! Owns the [`SessionState`] and drives it from key events; the display
//! refresher piggybacks on the event-poll timeout so exactly one tick
//! source exists and it dies with the loop.

use chrono::Local;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Frame;

use super::terminal::{self, Tui};
use super::ui;
use crate::catalog::MOODS;
use crate::refresher::Refresher;
use crate::rng::{RandomSource, ThreadRandomSource};
use crate::session::SessionState;

/// How many timeline entries the UI shows.
pub const HISTORY_SHOWN: usize = 5;

/// Main TUI application state
pub struct App {
    /// Should the app exit?
    pub should_quit: bool,
    /// All mood-tracking state
    pub state: SessionState,
    /// Periodic font-size re-roll
    refresher: Refresher,
    /// Randomness for mashups and the refresher
    rng: Box<dyn RandomSource>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new App with the production random source
    pub fn new() -> Self {
        Self::with_rng(Box::new(ThreadRandomSource))
    }

    /// Create a new App with an injected random source
    pub fn with_rng(rng: Box<dyn RandomSource>) -> Self {
        Self {
            should_quit: false,
            state: SessionState::new(),
            refresher: Refresher::new(),
            rng,
        }
    }

    /// Run the main event loop
    pub fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        terminal::set_title("Weird Mood Tracker");

        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;

            // Sleep at most until the next refresher tick
            if event::poll(self.refresher.timeout())? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                    _ => {}
                }
            }

            if self.refresher.due() {
                self.state.display_font_size = self.refresher.tick(self.rng.as_mut());
            }
        }

        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        ui::render(frame, &self.state);
    }

    /// Handle a key event
    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => self.state.current_mood_id = None,
            KeyCode::Char(c) => {
                if let Some(idx) = c.to_digit(10) {
                    let idx = idx as usize;
                    if (1..=MOODS.len()).contains(&idx) {
                        self.select(MOODS[idx - 1].id);
                    }
                }
            }
            _ => {}
        }
    }

    /// Apply a mood selection with the current wall-clock timestamp
    fn select(&mut self, id: &str) {
        let timestamp = Local::now().format("%H:%M:%S").to_string();
        self.state.select_mood(id, timestamp, self.rng.as_mut());
    }
}
