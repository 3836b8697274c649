//! Place picker
//!
//! Async front for the place service and device location, used when the
//! journey search is in "any location" mode. Picks are handed to
//! [`JourneySearch::select_place`](super::JourneySearch::select_place).

use std::{fmt, sync::Arc};

use domain::GeoLocation;
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{GeolocationPort, PlaceCandidate, PlaceSearchPort},
};

/// Address given to a pick made from the device location
pub const CURRENT_LOCATION_LABEL: &str = "Current Location";

/// Service for picking arbitrary places as journey endpoints
pub struct PlacePicker {
    places: Arc<dyn PlaceSearchPort>,
    geolocation: Arc<dyn GeolocationPort>,
}

impl fmt::Debug for PlacePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlacePicker").finish_non_exhaustive()
    }
}

impl PlacePicker {
    /// Create a picker over the place service and device location
    pub fn new(places: Arc<dyn PlaceSearchPort>, geolocation: Arc<dyn GeolocationPort>) -> Self {
        Self {
            places,
            geolocation,
        }
    }

    /// Autocomplete a place name; blank input skips the service
    #[instrument(skip(self))]
    pub async fn suggest_places(
        &self,
        query: &str,
    ) -> Result<Vec<PlaceCandidate>, ApplicationError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }
        let candidates = self.places.search_places(query).await?;
        debug!(count = candidates.len(), "Place suggestions received");
        Ok(candidates)
    }

    /// Resolve a chosen address to a single place
    #[instrument(skip(self))]
    pub async fn pick_address(&self, address: &str) -> Result<PlaceCandidate, ApplicationError> {
        let place = self.places.resolve_address(address).await?;
        info!(location = %place.location, "Resolved address");
        Ok(place)
    }

    /// Use the device position as a pick
    ///
    /// # Errors
    ///
    /// `GeolocationUnavailable` when the device gives no fix; callers show
    /// [`ApplicationError::user_notice`] and fall back to manual search.
    #[instrument(skip(self))]
    pub async fn pick_current_location(&self) -> Result<PlaceCandidate, ApplicationError> {
        let location = self.geolocation.current_location().await.map_err(|e| {
            warn!(error = %e, "Device location unavailable");
            e
        })?;
        Ok(PlaceCandidate::new(CURRENT_LOCATION_LABEL, location))
    }

    /// Current device position
    #[instrument(skip(self))]
    pub async fn current_location(&self) -> Result<GeoLocation, ApplicationError> {
        self.geolocation.current_location().await
    }

    /// Human-readable address of a coordinate
    #[instrument(skip(self))]
    pub async fn describe(&self, location: &GeoLocation) -> Result<String, ApplicationError> {
        self.places.describe_location(location).await
    }
}
