//! Terminal setup and teardown
//!
//! Handles crossterm terminal initialization and restoration.
//!
//! Critical: Includes custom panic hook to restore terminal on crash.

use std::io::{self, stdout, Write};
use std::panic;

use color_eyre::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Type alias for our terminal backend
pub type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Install panic hook that restores terminal before showing panic info.
/// Without this, a panic in raw mode leaves the terminal unusable.
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal FIRST, before printing anything
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen, crossterm::cursor::Show);

        original_hook(panic_info);
    }));
}

/// Initialize the terminal for TUI mode
///
/// - Installs custom panic hook (critical for terminal restoration)
/// - Enables raw mode (no line buffering)
/// - Enters alternate screen (preserves scrollback)
pub fn init() -> Result<Tui> {
    // Install panic hook BEFORE entering raw mode
    install_panic_hook();

    let _ = color_eyre::install();

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to normal mode
pub fn restore() -> Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen, crossterm::cursor::Show)?;
    Ok(())
}

/// Set the terminal title
pub fn set_title(title: &str) {
    let mut stdout = stdout();
    // OSC 0 ; title ST - works in most terminals
    let _ = write!(stdout, "\x1b]0;{title}\x1b\\");
    let _ = stdout.flush();
}
