//! Maps configuration: place service credentials and map defaults

use std::fmt;

use integration_places::PlacesConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::GeoLocationConfig;

/// Highest zoom level a map widget accepts
pub const MAX_ZOOM: u8 = 22;

/// Map and place service configuration
///
/// `api_key` is the only credential the app needs. It unlocks both the map
/// widget and place search; without it both degrade to a notice.
#[derive(Clone, Serialize, Deserialize)]
pub struct MapsAppConfig {
    /// Maps/places API key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Place service base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Country code place results are restricted to (default: "in")
    #[serde(default = "default_country_filter")]
    pub country_filter: String,

    /// Maximum place suggestions (default: 5)
    #[serde(default = "default_autocomplete_limit")]
    pub autocomplete_limit: u8,

    /// Place cache TTL in minutes, 0 disables (default: 60)
    #[serde(default = "default_cache_ttl_minutes")]
    pub cache_ttl_minutes: u32,

    /// Minimum gap between place requests in milliseconds (default: 500)
    #[serde(default = "default_min_request_interval_ms")]
    pub min_request_interval_ms: u64,

    /// Initial map centre
    #[serde(default = "default_center")]
    pub center: GeoLocationConfig,

    /// Initial zoom level (default: 13)
    #[serde(default = "default_zoom")]
    pub zoom: u8,
}

impl fmt::Debug for MapsAppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapsAppConfig")
            .field(
                "api_key",
                &if self.api_key.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("country_filter", &self.country_filter)
            .field("autocomplete_limit", &self.autocomplete_limit)
            .field("cache_ttl_minutes", &self.cache_ttl_minutes)
            .field("min_request_interval_ms", &self.min_request_interval_ms)
            .field("center", &self.center)
            .field("zoom", &self.zoom)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://us1.locationiq.com/v1".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_country_filter() -> String {
    "in".to_string()
}

const fn default_autocomplete_limit() -> u8 {
    5
}

const fn default_cache_ttl_minutes() -> u32 {
    60
}

const fn default_min_request_interval_ms() -> u64 {
    500
}

const fn default_center() -> GeoLocationConfig {
    GeoLocationConfig {
        latitude: 23.2599,
        longitude: 77.4126,
    }
}

const fn default_zoom() -> u8 {
    13
}

impl Default for MapsAppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            country_filter: default_country_filter(),
            autocomplete_limit: default_autocomplete_limit(),
            cache_ttl_minutes: default_cache_ttl_minutes(),
            min_request_interval_ms: default_min_request_interval_ms(),
            center: default_center(),
            zoom: default_zoom(),
        }
    }
}

impl MapsAppConfig {
    /// Get the API key as a string reference (for API calls)
    #[must_use]
    pub fn api_key_str(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(ExposeSecret::expose_secret)
            .filter(|key| !key.trim().is_empty())
    }

    /// Convert to `integration_places::PlacesConfig`
    #[must_use]
    pub fn to_places_config(&self) -> PlacesConfig {
        PlacesConfig {
            api_key: self.api_key_str().map(str::to_string),
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            country_filter: self.country_filter.clone(),
            autocomplete_limit: self.autocomplete_limit,
            cache_ttl_minutes: self.cache_ttl_minutes,
            min_request_interval_ms: self.min_request_interval_ms,
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.to_places_config()
            .validate()
            .map_err(|e| format!("maps.{e}"))?;

        if self.center.to_geo_location().is_none() {
            return Err(format!(
                "maps.center is out of range: {}, {}",
                self.center.latitude, self.center.longitude
            ));
        }

        if self.zoom > MAX_ZOOM {
            return Err(format!("maps.zoom must be {MAX_ZOOM} or less"));
        }

        Ok(())
    }
}
