//! Logging init: stderr subscriber that also receives `log` records from the library crates.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor the config file sets one
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Pick the filter directive: `--verbose` wins, then `RUST_LOG`, then the config value.
pub fn build_env_filter(verbose: bool, configured: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }

    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(configured.unwrap_or(DEFAULT_LOG_FILTER)))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(verbose: bool, configured: Option<&str>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(verbose, configured))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))
}
