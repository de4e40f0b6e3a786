// src/logging.rs
use log::LevelFilter;

/// Map `-v` occurrences to a log level. Without flags only warnings show.
#[must_use]
pub const fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger. The level comes from the command line only.
pub fn init(verbose: u8) {
    if let Err(err) = env_logger::Builder::new()
        .filter_level(level_for(verbose))
        .format_timestamp(None)
        .format_target(false)
        .target(env_logger::Target::Stderr)
        .try_init()
    {
        log::debug!("logger already installed: {err}");
    }
}
