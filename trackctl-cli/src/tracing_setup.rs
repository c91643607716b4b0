//! Tracing setup for the trackctl CLI
//!
//! Usage:
//!   trackctl --debug ...                 # Debug logging to console
//!   trackctl --log-json ...              # One JSON object per event
//!   RUST_LOG=trackctl_core=debug trackctl serve
//!
//! Environment variables:
//!   RUST_LOG                             # Log filter (default: info)

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (sets RUST_LOG=debug if not already set)
    pub debug: bool,
    /// Emit JSON lines instead of the compact format
    pub json: bool,
}

fn env_filter(debug: bool) -> EnvFilter {
    let fallback = if debug { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the global subscriber.
pub fn init(config: &TracingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config.debug))
        .with_target(config.debug); // Show targets in debug mode

    if config.json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    }
    .map_err(|err| anyhow!(err))
}
