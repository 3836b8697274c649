//! Device location adapter - Implements GeolocationPort from configuration
//!
//! A terminal has no location sensor; the rider's position comes from the
//! `device_location` setting. No setting behaves like a denied permission.

use application::error::ApplicationError;
use application::ports::GeolocationPort;
use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use tracing::debug;

use crate::config::GeoLocationConfig;

/// Geolocation backed by a fixed, configured position
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfiguredGeolocation {
    location: Option<GeoLocation>,
}

impl ConfiguredGeolocation {
    /// Report `location`, or fail when `None`
    #[must_use]
    pub const fn new(location: Option<GeoLocation>) -> Self {
        Self { location }
    }

    /// Build from the `device_location` setting
    ///
    /// Out-of-range coordinates count as no fix.
    #[must_use]
    pub fn from_config(config: Option<&GeoLocationConfig>) -> Self {
        Self::new(config.and_then(GeoLocationConfig::to_geo_location))
    }
}

#[async_trait]
impl GeolocationPort for ConfiguredGeolocation {
    async fn current_location(&self) -> Result<GeoLocation, ApplicationError> {
        debug!(available = self.location.is_some(), "Device location requested");
        self.location.ok_or_else(|| {
            ApplicationError::GeolocationUnavailable("no device location configured".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_configured_location_is_reported() {
        let config = GeoLocationConfig {
            latitude: 23.26,
            longitude: 77.41,
        };
        let geo = ConfiguredGeolocation::from_config(Some(&config));
        let location = geo.current_location().await.unwrap();
        assert!((location.latitude() - 23.26).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_missing_location_is_unavailable() {
        let err = ConfiguredGeolocation::default()
            .current_location()
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::GeolocationUnavailable(_)));
    }

    #[tokio::test]
    async fn test_out_of_range_config_is_unavailable() {
        let config = GeoLocationConfig {
            latitude: 95.0,
            longitude: 0.0,
        };
        let geo = ConfiguredGeolocation::from_config(Some(&config));
        assert!(geo.current_location().await.is_err());
    }
}
