//! GeoJSON map renderer - Implements MapRendererPort
//!
//! Keeps the displayed markers and polylines and exports them as a GeoJSON
//! `FeatureCollection` that any web map can load. Like a hosted map widget,
//! it refuses to initialise without a maps API key.

use std::collections::BTreeMap;

use application::error::ApplicationError;
use application::ports::MapRendererPort;
use application::services::{Marker, MarkerDiff, MarkerKey, Polyline};
use domain::value_objects::GeoLocation;
use serde_json::{Value, json};
use tracing::{debug, info};

/// Map view state
#[derive(Debug, Clone, Copy, PartialEq)]
struct Viewport {
    center: GeoLocation,
    zoom: u8,
}

/// Renders the map scene to GeoJSON
#[derive(Debug, Default)]
pub struct GeoJsonMapRenderer {
    has_api_key: bool,
    viewport: Option<Viewport>,
    markers: BTreeMap<MarkerKey, Marker>,
    polylines: Vec<Polyline>,
}

impl GeoJsonMapRenderer {
    /// Create a renderer; `has_api_key` gates initialisation
    #[must_use]
    pub fn new(has_api_key: bool) -> Self {
        Self {
            has_api_key,
            ..Self::default()
        }
    }

    /// Whether `initialize` succeeded
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.viewport.is_some()
    }

    /// Number of markers on display
    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Displayed markers, ordered by key
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.markers.values()
    }

    /// Export the display as a GeoJSON `FeatureCollection`
    ///
    /// Polylines come first so markers draw over them. The viewport is
    /// carried in a top-level `view` member.
    #[must_use]
    pub fn feature_collection(&self) -> Value {
        let lines = self.polylines.iter().map(|line| {
            json!({
                "type": "Feature",
                "geometry": {
                    "type": "LineString",
                    "coordinates": line.path.iter().map(position).collect::<Vec<_>>(),
                },
                "properties": {
                    "route_id": line.route_id,
                    "stroke": line.color,
                },
            })
        });
        let points = self.markers.values().map(|marker| {
            json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": position(&marker.location),
                },
                "properties": {
                    "marker": marker.key,
                    "marker-color": marker.color,
                    "detail": marker.detail,
                },
            })
        });

        let mut collection = json!({
            "type": "FeatureCollection",
            "features": lines.chain(points).collect::<Vec<_>>(),
        });
        if let (Some(viewport), Some(object)) = (self.viewport, collection.as_object_mut()) {
            object.insert(
                "view".to_string(),
                json!({
                    "center": position(&viewport.center),
                    "zoom": viewport.zoom,
                }),
            );
        }
        collection
    }
}

/// GeoJSON positions are `[longitude, latitude]`
fn position(location: &GeoLocation) -> [f64; 2] {
    [location.longitude(), location.latitude()]
}

impl MapRendererPort for GeoJsonMapRenderer {
    fn initialize(&mut self, center: GeoLocation, zoom: u8) -> Result<(), ApplicationError> {
        if !self.has_api_key {
            return Err(ApplicationError::MapUnavailable("missing API key".to_string()));
        }
        self.viewport = Some(Viewport { center, zoom });
        info!(%center, zoom, "Map initialized");
        Ok(())
    }

    fn apply(&mut self, diff: &MarkerDiff, polylines: &[Polyline]) -> Result<(), ApplicationError> {
        if !self.is_initialized() {
            return Err(ApplicationError::MapUnavailable(
                "map is not initialized".to_string(),
            ));
        }

        for key in &diff.removed {
            if self.markers.remove(key).is_none() {
                debug!(?key, "Removed marker was not displayed");
            }
        }
        for marker in diff.added.iter().chain(&diff.updated) {
            self.markers.insert(marker.key.clone(), marker.clone());
        }
        self.polylines = polylines.to_vec();

        debug!(
            added = diff.added.len(),
            removed = diff.removed.len(),
            updated = diff.updated.len(),
            markers = self.markers.len(),
            "Applied marker diff"
        );
        Ok(())
    }
}
