//! Transit fixture loading
//!
//! The network snapshot is a JSON document with `stops`, `routes` and
//! `buses` arrays. A built-in Bhopal network is compiled in; a file can
//! replace it through `data.fixture_path`.

use std::path::Path;

use application::TransitDataStore;
use domain::{KnownStop, LiveBus, Route};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::DataConfig;
use crate::error::InfrastructureError;

const BHOPAL_FIXTURE: &str = include_str!("../data/bhopal.json");

/// Raw network snapshot as stored on disk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransitFixture {
    /// Stops in display order
    #[serde(default)]
    pub stops: Vec<KnownStop>,
    /// Routes in display order
    #[serde(default)]
    pub routes: Vec<Route>,
    /// Live bus positions
    #[serde(default)]
    pub buses: Vec<LiveBus>,
}

impl TransitFixture {
    /// The built-in Bhopal network: 5 stops, 4 routes, 4 buses
    ///
    /// # Errors
    ///
    /// Only fails if the embedded document is malformed.
    pub fn bhopal() -> Result<Self, InfrastructureError> {
        Self::from_json(BHOPAL_FIXTURE)
    }

    /// Parse a fixture document
    ///
    /// # Errors
    ///
    /// Returns `FixtureFormat` for malformed JSON or invalid values
    /// (bad coordinates, colours, times).
    pub fn from_json(json: &str) -> Result<Self, InfrastructureError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a fixture file
    ///
    /// # Errors
    ///
    /// Returns `FixtureIo` if the file cannot be read, or `FixtureFormat`
    /// if its content is malformed.
    pub fn from_path(path: &Path) -> Result<Self, InfrastructureError> {
        debug!(path = %path.display(), "Reading transit fixture");
        let json = std::fs::read_to_string(path).map_err(|source| InfrastructureError::FixtureIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Build the validated snapshot
    ///
    /// # Errors
    ///
    /// Returns a domain error for duplicate ids or routes through unknown
    /// stops.
    pub fn into_store(self) -> Result<TransitDataStore, InfrastructureError> {
        Ok(TransitDataStore::new(self.stops, self.routes, self.buses)?)
    }
}

/// Load the snapshot selected by the data configuration
///
/// # Errors
///
/// Returns an error if the fixture cannot be read, parsed or validated.
pub fn load_transit_data(config: &DataConfig) -> Result<TransitDataStore, InfrastructureError> {
    let fixture = match &config.fixture_path {
        Some(path) => {
            info!(path = %path.display(), "Loading transit data from file");
            TransitFixture::from_path(path)?
        },
        None => TransitFixture::bhopal()?,
    };
    fixture.into_store()
}
