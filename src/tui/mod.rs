//! Terminal interface for the mood tracker
//!
//! ## Architecture
//!
//! - `app.rs` - Application state and event handling
//! - `terminal.rs` - Terminal setup/teardown
//! - `ui.rs` - Layout and rendering

pub mod app;
pub mod terminal;
pub mod ui;

// Re-exports
pub use app::App;
pub use terminal::{init, restore, Tui};

use color_eyre::Result;

/// Run the TUI application
///
/// Initializes the terminal, runs the app loop, and restores on exit.
pub fn run() -> Result<()> {
    let mut terminal = terminal::init()?;

    let mut app = App::new();
    let result = app.run(&mut terminal);

    // Always restore terminal, even on error
    terminal::restore()?;

    result
}
