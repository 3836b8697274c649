//! Live bus tracking
//!
//! Resolves each live bus against the static snapshot. The live feed may
//! name routes or stops the snapshot lacks, so every label has a fallback.

use domain::{
    KnownStop, LiveBus, Route,
    value_objects::{DelayStatus, Occupancy, RouteColor},
};

use super::TransitDataStore;

const UNKNOWN_ROUTE: &str = "Unknown Route";
const UNKNOWN_STOP: &str = "Unknown";

/// A live bus together with its resolved route and next stop
#[derive(Debug, Clone, Copy)]
pub struct BusStatus<'a> {
    bus: &'a LiveBus,
    route: Option<&'a Route>,
    next_stop: Option<&'a KnownStop>,
}

impl<'a> BusStatus<'a> {
    /// Resolve a bus against the snapshot
    #[must_use]
    pub fn resolve(store: &'a TransitDataStore, bus: &'a LiveBus) -> Self {
        Self {
            bus,
            route: store.route(bus.route_id()),
            next_stop: store.stop(bus.next_stop_id()),
        }
    }

    /// The underlying live record
    #[must_use]
    pub const fn bus(&self) -> &'a LiveBus {
        self.bus
    }

    /// The bus's route, if the snapshot knows it
    #[must_use]
    pub const fn route(&self) -> Option<&'a Route> {
        self.route
    }

    /// The next stop, if the snapshot knows it
    #[must_use]
    pub const fn next_stop(&self) -> Option<&'a KnownStop> {
        self.next_stop
    }

    /// "Bus <route number>", or the bus id when the route is unknown
    #[must_use]
    pub fn title(&self) -> String {
        match self.route {
            Some(route) => format!("Bus {}", route.number()),
            None => format!("Bus {}", self.bus.id()),
        }
    }

    /// Route name with fallback
    #[must_use]
    pub fn route_name(&self) -> &'a str {
        self.route.map_or(UNKNOWN_ROUTE, Route::name)
    }

    /// Next stop name with fallback
    #[must_use]
    pub fn next_stop_name(&self) -> &'a str {
        self.next_stop.map_or(UNKNOWN_STOP, KnownStop::name)
    }

    /// "Arriving in N minutes"
    #[must_use]
    pub fn arrival_label(&self) -> String {
        format!("Arriving in {} minutes", self.bus.eta_minutes())
    }

    /// Route colour, or the default marker colour
    #[must_use]
    pub fn color(&self) -> RouteColor {
        self.route
            .map_or_else(RouteColor::default_marker, |route| route.color().clone())
    }

    /// Delay against the timetable
    #[must_use]
    pub const fn delay(&self) -> DelayStatus {
        self.bus.delay_status()
    }

    /// Crowding level
    #[must_use]
    pub const fn occupancy(&self) -> Occupancy {
        self.bus.occupancy()
    }
}

/// Every live bus resolved against the snapshot, in feed order
#[must_use]
pub fn live_statuses(store: &TransitDataStore) -> Vec<BusStatus<'_>> {
    store
        .buses()
        .iter()
        .map(|bus| BusStatus::resolve(store, bus))
        .collect()
}
