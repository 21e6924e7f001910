//! Logging setup.
//!
//! Library crates log through `log`; the subscriber installed here picks
//! those records up along with any `tracing` events.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count, or `None` when no flag was given.
pub fn verbosity_directive(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Builds the filter: `-v` flags first, then `RUST_LOG`, then the
/// configured level.
pub fn build_filter(verbose: u8, config_level: &str) -> EnvFilter {
    match verbosity_directive(verbose) {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config_level)),
    }
}

/// Installs the global subscriber, writing to stderr so stdout carries
/// only the rendered diagram. A second call is a no-op.
pub fn init(verbose: u8, config_level: &str) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose, config_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if result.is_ok() {
        tracing::debug!(verbose, config_level, "Logging initialized");
    }
}
