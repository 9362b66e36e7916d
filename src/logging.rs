//! Logging setup.
//!
//! Events go to stderr through `tracing_subscriber::fmt`. `RUST_LOG` wins
//! over the configured level when it is set.

use crate::config::Config;
use crate::error::{ConfigError, ConfigResult};
use tracing_subscriber::EnvFilter;

/// Build the filter used by [`init`].
pub fn env_filter(config: &Config) -> ConfigResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.log_level)
            .map_err(|_| ConfigError::InvalidLogFilter(config.log_level.clone())),
    }
}

/// Install the global subscriber.
///
/// Returns `Ok(false)` if a subscriber was already installed.
pub fn init(config: &Config) -> ConfigResult<bool> {
    let filter = env_filter(config)?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(level = %config.log_level, "Logging initialised");
    }
    Ok(installed)
}
