//! Structured logging setup on top of `tracing`.

use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::ConfigError;

/// Environment variable that overrides the log filter.
pub const LOG_ENV: &str = "HAWKULAR_LOG";

/// Install a stderr subscriber.
///
/// `HAWKULAR_LOG` takes precedence over `default_level` when it is set.
/// Calling this twice returns an error instead of replacing the subscriber.
pub fn init_logging(default_level: &str) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| ConfigError::Logging(e.to_string()))?;

    Registry::default()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .map_err(|e| ConfigError::Logging(e.to_string()))
}
