//! Application configuration
//!
//! Sources, in increasing priority: built-in defaults, an optional
//! `citybus.toml` (or the file passed on the command line), and
//! environment variables prefixed with `CITYBUS_`, using `__` between
//! nesting levels (e.g. `CITYBUS_MAPS__API_KEY`).
//!
//! Split into focused sub-modules:
//! - `maps`: place service credentials and map defaults

mod maps;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub use maps::{MAX_ZOOM, MapsAppConfig};

use crate::error::InfrastructureError;

/// Default configuration file name (without extension)
pub const DEFAULT_CONFIG_FILE: &str = "citybus";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "CITYBUS";

/// Geographic location configuration (latitude/longitude pair)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocationConfig {
    /// Latitude (-90.0 to 90.0)
    pub latitude: f64,
    /// Longitude (-180.0 to 180.0)
    pub longitude: f64,
}

impl GeoLocationConfig {
    /// Convert to domain `GeoLocation` value object
    ///
    /// Returns `None` if coordinates are invalid.
    #[must_use]
    pub fn to_geo_location(&self) -> Option<domain::GeoLocation> {
        domain::GeoLocation::new(self.latitude, self.longitude).ok()
    }
}

/// Where the transit snapshot comes from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// JSON fixture to load instead of the built-in Bhopal network
    #[serde(default)]
    pub fixture_path: Option<PathBuf>,
}

/// Log output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter in `EnvFilter` syntax (default: "warn")
    #[serde(default = "default_log_filter")]
    pub filter: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Maps and place service configuration
    #[serde(default)]
    pub maps: MapsAppConfig,

    /// Transit data source
    #[serde(default)]
    pub data: DataConfig,

    /// Fixed position standing in for device geolocation (optional)
    #[serde(default)]
    pub device_location: Option<GeoLocationConfig>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `citybus.toml` (if present) and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file (required) or the default
    /// `citybus.toml` (optional), then the environment
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit file is missing or a source cannot
    /// be parsed.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => {
                debug!(path = %path.display(), "Loading configuration file");
                config::File::from(path).required(true)
            },
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(file)
            // Override with environment variables (e.g., CITYBUS_MAPS__ZOOM)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` naming the first offending setting.
    pub fn validate(&self) -> Result<(), InfrastructureError> {
        self.maps
            .validate()
            .map_err(InfrastructureError::InvalidConfig)?;

        if let Some(location) = &self.device_location {
            if location.to_geo_location().is_none() {
                return Err(InfrastructureError::InvalidConfig(format!(
                    "device_location is out of range: {}, {}",
                    location.latitude, location.longitude
                )));
            }
        }

        info!(
            places = self.maps.api_key_str().is_some(),
            fixture = ?self.data.fixture_path,
            "Configuration validated"
        );
        Ok(())
    }
}
