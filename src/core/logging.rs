use tracing::{debug, Level};

/// Maps a count of `-v` flags onto a level, starting from `base`
pub fn level_for_verbosity(base: Level, verbosity: u8) -> Level {
    let ladder = [Level::ERROR, Level::WARN, Level::INFO, Level::DEBUG, Level::TRACE];
    let start = ladder.iter().position(|l| *l == base).unwrap_or(1);
    ladder[(start + verbosity as usize).min(ladder.len() - 1)]
}

/// Installs a console subscriber writing to stderr
///
/// Stdout is left to the decoded output. Calling this twice is harmless.
pub fn setup_console_logging(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_level(true)
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();

    debug!("Console logging initialized with level: {}", level);
}
