//! Infrastructure errors

use domain::DomainError;
use thiserror::Error;

/// Errors raised while wiring up the application
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// Configuration could not be read
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Configuration was read but is invalid
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Fixture file could not be read
    #[error("Failed to read fixture {path}: {source}")]
    FixtureIo {
        /// Path that was read
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Fixture content is malformed
    #[error("Malformed fixture: {0}")]
    FixtureFormat(#[from] serde_json::Error),

    /// Fixture content is inconsistent
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Logging was already initialised or the filter is invalid
    #[error("Logging initialisation failed: {0}")]
    Logging(String),
}
