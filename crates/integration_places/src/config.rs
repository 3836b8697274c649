//! Place service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the LocationIQ place service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesConfig {
    /// API key sent as the `key` query parameter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Base URL of the API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// ISO country code results are restricted to (empty for worldwide)
    #[serde(default = "default_country_filter")]
    pub country_filter: String,

    /// Maximum number of autocomplete results
    #[serde(default = "default_autocomplete_limit")]
    pub autocomplete_limit: u8,

    /// Cache TTL in minutes (0 to disable caching)
    #[serde(default = "default_cache_ttl_minutes")]
    pub cache_ttl_minutes: u32,

    /// Minimum gap between two requests in milliseconds
    #[serde(default = "default_min_request_interval_ms")]
    pub min_request_interval_ms: u64,
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

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            country_filter: default_country_filter(),
            autocomplete_limit: default_autocomplete_limit(),
            cache_ttl_minutes: default_cache_ttl_minutes(),
            min_request_interval_ms: default_min_request_interval_ms(),
        }
    }
}

impl PlacesConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: Some("test-key".to_string()),
            timeout_secs: 5,
            cache_ttl_minutes: 0,
            min_request_interval_ms: 0,
            ..Default::default()
        }
    }

    /// Check if caching is enabled
    #[must_use]
    pub const fn caching_enabled(&self) -> bool {
        self.cache_ttl_minutes > 0
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        url::Url::parse(&self.base_url).map_err(|e| format!("base_url is not a valid URL: {e}"))?;

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.autocomplete_limit == 0 {
            return Err("autocomplete_limit must be greater than 0".to_string());
        }

        if self.autocomplete_limit > 20 {
            return Err("autocomplete_limit must be 20 or less".to_string());
        }

        Ok(())
    }
}
