//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// External service (place lookup) error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Device location was denied or cannot be determined
    #[error("Location unavailable: {0}")]
    GeolocationUnavailable(String),

    /// Map widget could not be initialised or updated
    #[error("Map unavailable: {0}")]
    MapUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::ExternalService(_))
    }

    /// Message suitable for showing to a rider
    #[must_use]
    pub fn user_notice(&self) -> String {
        match self {
            Self::GeolocationUnavailable(_) => {
                "Unable to get your current location. Please search manually.".to_string()
            },
            Self::MapUnavailable(reason) => format!("Failed to load map: {reason}"),
            Self::ExternalService(_) => {
                "Location search is unavailable right now. Try a bus stop name instead."
                    .to_string()
            },
            other => other.to_string(),
        }
    }
}
