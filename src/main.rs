use clap::Parser;

use weird_mood_tracker::tui;

/// Terminal mood tracker that responds with absurd inverted advice
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Enable info-level logging
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug-level logging
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.debug {
        tracing::Level::DEBUG
    } else if args.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    // Logs go to stderr so they never fight the TUI for stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("starting weird-mood-tracker {}", env!("CARGO_PKG_VERSION"));

    match tui::run() {
        Ok(()) => {
            tracing::info!("shutting down normally");
            Ok(())
        }
        Err(e) => {
            tracing::error!("tui error: {e}");
            Err(anyhow::anyhow!(e))
        }
    }
}
