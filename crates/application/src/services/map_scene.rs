//! Map scene
//!
//! The core describes what the map should show as a flat list of markers
//! and polylines. Renderers receive a [`MarkerDiff`] against what they
//! already display, so marker identity lives here and nowhere else.

use std::collections::HashMap;

use domain::{
    GeoLocation, KnownStop, Route,
    value_objects::{BusId, Occupancy, RouteColor, RouteId, StopId},
};
use serde::Serialize;
use tracing::debug;

use super::{live_tracking::BusStatus, TransitDataStore};

/// Default map centre (Bhopal city bus stand)
pub const DEFAULT_CENTER: GeoLocation = GeoLocation::new_unchecked(23.2599, 77.4126);

/// Default zoom level
pub const DEFAULT_ZOOM: u8 = 13;

/// Which layers to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapLayers {
    /// Stop markers
    pub stops: bool,
    /// Live bus markers
    pub buses: bool,
    /// Route polylines
    pub routes: bool,
}

impl Default for MapLayers {
    fn default() -> Self {
        Self {
            stops: true,
            buses: true,
            routes: true,
        }
    }
}

/// Stable identity of a marker across scenes
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum MarkerKey {
    /// Marker for a stop
    Stop(StopId),
    /// Marker for a live bus
    Bus(BusId),
}

/// Info-window content of a marker
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MarkerDetail {
    /// Stop info
    Stop {
        /// Stop name
        name: String,
        /// Short stop code
        code: String,
        /// "Route <number> (<name>)" per serving route
        routes: Vec<String>,
        /// Amenity tags
        amenities: Vec<String>,
    },
    /// Live bus info
    Bus {
        /// "Bus <number>"
        title: String,
        /// Route name
        route_name: String,
        /// Next stop name
        next_stop: String,
        /// "Arriving in N minutes"
        arrival: String,
        /// Crowding level
        occupancy: Occupancy,
        /// "On time", "N min late" or "N min early"
        delay: String,
    },
}

/// A marker the map should display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Identity
    pub key: MarkerKey,
    /// Position
    pub location: GeoLocation,
    /// Marker colour
    pub color: RouteColor,
    /// Info-window content
    pub detail: MarkerDetail,
}

/// A route drawn as a line through its stops
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polyline {
    /// Route drawn
    pub route_id: RouteId,
    /// Stroke colour
    pub color: RouteColor,
    /// Stop coordinates in visit order
    pub path: Vec<GeoLocation>,
}

/// Everything the map should display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapScene {
    /// Map centre
    pub center: GeoLocation,
    /// Zoom level
    pub zoom: u8,
    /// Stop markers first, then bus markers
    pub markers: Vec<Marker>,
    /// One polyline per route
    pub polylines: Vec<Polyline>,
}

impl MapScene {
    /// Describe the snapshot under the given layer toggles
    #[must_use]
    pub fn build(
        store: &TransitDataStore,
        layers: MapLayers,
        center: GeoLocation,
        zoom: u8,
    ) -> Self {
        let mut markers = Vec::new();
        if layers.stops {
            markers.extend(store.stops().iter().map(|stop| stop_marker(store, stop)));
        }
        if layers.buses {
            markers.extend(
                store
                    .buses()
                    .iter()
                    .map(|bus| bus_marker(&BusStatus::resolve(store, bus))),
            );
        }

        let polylines = if layers.routes {
            store
                .routes()
                .iter()
                .map(|route| Polyline {
                    route_id: route.id().clone(),
                    color: route.color().clone(),
                    path: store.route_path(route),
                })
                .collect()
        } else {
            Vec::new()
        };

        debug!(
            markers = markers.len(),
            polylines = polylines.len(),
            "Built map scene"
        );

        Self {
            center,
            zoom,
            markers,
            polylines,
        }
    }

    /// Find a marker by key
    #[must_use]
    pub fn marker(&self, key: &MarkerKey) -> Option<&Marker> {
        self.markers.iter().find(|m| &m.key == key)
    }
}

fn stop_marker(store: &TransitDataStore, stop: &KnownStop) -> Marker {
    let routes = stop
        .routes()
        .iter()
        .map(|id| store.route(id).map_or_else(|| id.to_string(), Route::label))
        .collect();

    Marker {
        key: MarkerKey::Stop(stop.id().clone()),
        location: stop.location(),
        color: RouteColor::default_marker(),
        detail: MarkerDetail::Stop {
            name: stop.name().to_string(),
            code: stop.code().to_string(),
            routes,
            amenities: stop.amenities().iter().map(|a| a.as_str().to_string()).collect(),
        },
    }
}

fn bus_marker(status: &BusStatus<'_>) -> Marker {
    let bus = status.bus();
    Marker {
        key: MarkerKey::Bus(bus.id().clone()),
        location: bus.location(),
        color: status.color(),
        detail: MarkerDetail::Bus {
            title: status.title(),
            route_name: status.route_name().to_string(),
            next_stop: status.next_stop_name().to_string(),
            arrival: status.arrival_label(),
            occupancy: status.occupancy(),
            delay: status.delay().to_string(),
        },
    }
}

/// Changes needed to turn one marker set into another
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MarkerDiff {
    /// Markers to create, in the new scene's order
    pub added: Vec<Marker>,
    /// Markers to drop, in the old scene's order
    pub removed: Vec<MarkerKey>,
    /// Markers whose position or content changed
    pub updated: Vec<Marker>,
}

impl MarkerDiff {
    /// Diff two marker sets by key
    #[must_use]
    pub fn between(previous: &[Marker], next: &[Marker]) -> Self {
        let before: HashMap<&MarkerKey, &Marker> =
            previous.iter().map(|m| (&m.key, m)).collect();
        let after: HashMap<&MarkerKey, &Marker> = next.iter().map(|m| (&m.key, m)).collect();

        let mut diff = Self::default();
        for marker in next {
            match before.get(&marker.key) {
                None => diff.added.push(marker.clone()),
                Some(old) if *old != marker => diff.updated.push(marker.clone()),
                Some(_) => {},
            }
        }
        diff.removed = previous
            .iter()
            .filter(|m| !after.contains_key(&m.key))
            .map(|m| m.key.clone())
            .collect();
        diff
    }

    /// Whether nothing changed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.updated.is_empty()
    }
}
