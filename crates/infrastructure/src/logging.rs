//! Logging setup
//!
//! A `tracing-subscriber` registry with an `EnvFilter` and one `fmt`
//! layer, plain or JSON. `RUST_LOG` wins over the configured filter.

use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::error::InfrastructureError;

/// Build the filter: `RUST_LOG`, then `override_filter`, then the config
///
/// # Errors
///
/// Returns `Logging` if the chosen directive string does not parse.
pub fn build_filter(
    config: &LoggingConfig,
    override_filter: Option<&str>,
) -> Result<EnvFilter, InfrastructureError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let directives = override_filter.unwrap_or(&config.filter);
    EnvFilter::try_new(directives).map_err(|e| InfrastructureError::Logging(e.to_string()))
}

/// Install the global subscriber
///
/// Output goes to stderr so command output on stdout stays clean.
///
/// # Errors
///
/// Returns `Logging` if the filter is invalid or a subscriber is already
/// installed.
pub fn init_logging(
    config: &LoggingConfig,
    override_filter: Option<&str>,
) -> Result<(), InfrastructureError> {
    let filter = build_filter(config, override_filter)?;

    let json_layer = config
        .json
        .then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr));
    let text_layer = (!config.json)
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| InfrastructureError::Logging(e.to_string()))?;

    debug!(json = config.json, "Logging initialized");
    Ok(())
}
