//! Place search port
//!
//! Lets a rider pick any location (not just a bus stop) as a journey
//! endpoint. Adapters in the infrastructure layer implement this port with a
//! third-party place/geocoding service.

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// A place resolved by the place service: a coordinate plus display address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceCandidate {
    /// Formatted address (or place name)
    pub address: String,
    /// Resolved coordinate
    pub location: GeoLocation,
}

impl PlaceCandidate {
    /// Create a candidate
    #[must_use]
    pub fn new(address: impl Into<String>, location: GeoLocation) -> Self {
        Self {
            address: address.into(),
            location,
        }
    }
}

/// Port for place autocomplete and geocoding
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlaceSearchPort: Send + Sync {
    /// Autocomplete a partially typed place name
    async fn search_places(&self, query: &str) -> Result<Vec<PlaceCandidate>, ApplicationError>;

    /// Resolve a full address to a single place
    async fn resolve_address(&self, address: &str) -> Result<PlaceCandidate, ApplicationError>;

    /// Describe a coordinate as a human-readable address
    async fn describe_location(
        &self,
        location: &GeoLocation,
    ) -> Result<String, ApplicationError>;
}
