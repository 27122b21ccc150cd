//! Logging setup for the CLI.

use tracing::Level;

/// Install a plain stderr subscriber. Stdout stays reserved for command
/// output.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_max_level(level)
        .init();
}
