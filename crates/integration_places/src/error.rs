//! Place service error types

use thiserror::Error;

/// Errors that can occur during place lookups
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Connection to the place service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the place service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the service response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Nothing matched the query
    #[error("No place found for: {0}")]
    NotFound(String),

    /// API key missing or rejected
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// Query rejected before sending
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl PlacesError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::RequestFailed(_)
                | Self::Timeout { .. }
                | Self::RateLimitExceeded { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(PlacesError::ConnectionFailed("test".to_string()).is_retryable());
        assert!(PlacesError::RequestFailed("test".to_string()).is_retryable());
        assert!(PlacesError::Timeout { timeout_secs: 10 }.is_retryable());
        assert!(
            PlacesError::RateLimitExceeded {
                retry_after_secs: Some(2)
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_non_retryable_errors() {
        assert!(!PlacesError::NotFound("x".to_string()).is_retryable());
        assert!(!PlacesError::Unauthorized("x".to_string()).is_retryable());
        assert!(!PlacesError::ParseError("x".to_string()).is_retryable());
        assert!(!PlacesError::InvalidQuery("x".to_string()).is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = PlacesError::NotFound("Lake View".to_string());
        assert!(err.to_string().contains("Lake View"));

        let err = PlacesError::Timeout { timeout_secs: 7 };
        assert!(err.to_string().contains('7'));
    }
}
