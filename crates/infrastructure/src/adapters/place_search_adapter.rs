//! Place search adapter - Implements PlaceSearchPort using integration_places

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{PlaceCandidate, PlaceSearchPort};
use async_trait::async_trait;
use domain::{DomainError, value_objects::GeoLocation};
use integration_places::{LocationIqPlacesClient, Place, PlacesClient, PlacesError};
use tracing::{debug, instrument, warn};

use crate::config::MapsAppConfig;

/// Adapter for place autocomplete and geocoding
pub struct PlaceSearchAdapter {
    client: Arc<dyn PlacesClient>,
    limit: u8,
}

impl std::fmt::Debug for PlaceSearchAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaceSearchAdapter")
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}

impl PlaceSearchAdapter {
    /// Wrap an existing client
    #[must_use]
    pub fn new(client: Arc<dyn PlacesClient>, limit: u8) -> Self {
        Self { client, limit }
    }

    /// Build a LocationIQ-backed adapter from the maps configuration
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if no API key is set or the HTTP client
    /// cannot be built.
    pub fn from_config(config: &MapsAppConfig) -> Result<Self, ApplicationError> {
        let places = config.to_places_config();
        let client = LocationIqPlacesClient::new(&places)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(Arc::new(client), places.autocomplete_limit))
    }

    fn map_error(err: PlacesError) -> ApplicationError {
        match err {
            PlacesError::NotFound(query) => DomainError::not_found("Place", query).into(),
            PlacesError::Unauthorized(reason) => {
                ApplicationError::Configuration(format!("Place service rejected the key: {reason}"))
            },
            other => ApplicationError::ExternalService(other.to_string()),
        }
    }

    fn to_candidate(place: Place) -> PlaceCandidate {
        PlaceCandidate::new(place.display_name, place.location)
    }
}

#[async_trait]
impl PlaceSearchPort for PlaceSearchAdapter {
    #[instrument(skip(self))]
    async fn search_places(&self, query: &str) -> Result<Vec<PlaceCandidate>, ApplicationError> {
        match self.client.autocomplete(query, self.limit).await {
            Ok(places) => {
                debug!(count = places.len(), "Place suggestions received");
                Ok(places.into_iter().map(Self::to_candidate).collect())
            },
            // The service answers 404 when nothing matches a partial query
            Err(PlacesError::NotFound(_)) => Ok(Vec::new()),
            Err(e) => {
                warn!(error = %e, "Place autocomplete failed");
                Err(Self::map_error(e))
            },
        }
    }

    #[instrument(skip(self))]
    async fn resolve_address(&self, address: &str) -> Result<PlaceCandidate, ApplicationError> {
        self.client
            .geocode(address)
            .await
            .map(Self::to_candidate)
            .map_err(Self::map_error)
    }

    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn describe_location(&self, location: &GeoLocation) -> Result<String, ApplicationError> {
        self.client
            .reverse_geocode(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error)
    }
}
