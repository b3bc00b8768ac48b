//! Logging setup: `log` records from the library crates are routed through
//! a `tracing-subscriber` fmt layer on stderr.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, e.g. `RV_LOG=rv_db=debug`
const LOG_ENV: &str = "RV_LOG";

/// Install the global subscriber. Safe to call more than once.
pub(crate) fn init(verbose: bool, config_level: &str) {
    let filter = build_filter(verbose, std::env::var(LOG_ENV).ok(), config_level);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// `--verbose` wins over `RV_LOG`, which wins over the config file.
/// Unparsable directives fall back to `warn`.
fn build_filter(verbose: bool, env_directive: Option<String>, config_level: &str) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    env_directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .or_else(|| EnvFilter::try_new(config_level).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}
