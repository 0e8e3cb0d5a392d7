//! Log output for the demo binary.
//!
//! The library crates log through the `log` facade; `tracing-subscriber`
//! picks those records up and prints them to standard error.

use tracing_subscriber::filter::LevelFilter;

/// Install the global subscriber, showing records up to `level`.
///
/// Panics if a global subscriber is already installed.
pub fn init(level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Map `-q` / `-v` flags to a level. Warnings are shown by default.
pub fn level_for(quiet: bool, verbose: u8) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
