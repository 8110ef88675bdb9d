//! Tracing setup for the resvctl CLI
//!
//! Usage:
//!   resvctl --debug serve                 # Debug logging to console
//!   RUST_LOG=resvctl_server=debug resvctl # Fine-grained log control

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (used when RUST_LOG is not set)
    pub debug: bool,
}

/// Initialize console tracing.
///
/// `RUST_LOG` always wins; otherwise the level is `debug` or `info`
/// depending on `config.debug`.
pub fn init(config: &TracingConfig) -> Result<()> {
    let default_level = if config.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug) // Show targets in debug mode
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
