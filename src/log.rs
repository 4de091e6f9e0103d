// src/log.rs
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::consts::LOG_ENV;

/// Default filter for a `-v` count: warn, info, debug, trace.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber: human-readable lines on stderr, filtered by
/// `RACE_SCRAPE_LOG` when set, else by `verbosity`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("race_scrape={}", level_for(verbosity))));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
