//! Device geolocation port

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for asking the device where the rider is
///
/// Implementations return [`ApplicationError::GeolocationUnavailable`] when
/// the rider denied access or no fix is available.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeolocationPort: Send + Sync {
    /// Current position of the device
    async fn current_location(&self) -> Result<GeoLocation, ApplicationError>;
}
