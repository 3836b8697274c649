//! Transit data store
//!
//! Read-only snapshot of the network: stops, routes and live buses, loaded
//! once at startup and shared as `Arc<TransitDataStore>`. Iteration keeps
//! the input order; lookups by identifier go through hash indexes.

use std::collections::HashMap;
use std::hash::Hash;

use domain::{
    DomainError, GeoLocation, KnownStop, LiveBus, Route,
    value_objects::{BusId, RouteId, StopId},
};
use tracing::{debug, info};

/// Immutable snapshot of the bus network
#[derive(Debug, Clone)]
pub struct TransitDataStore {
    stops: Vec<KnownStop>,
    routes: Vec<Route>,
    buses: Vec<LiveBus>,
    stop_index: HashMap<StopId, usize>,
    route_index: HashMap<RouteId, usize>,
    bus_index: HashMap<BusId, usize>,
}

impl TransitDataStore {
    /// Build a snapshot, validating identifiers and route paths
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` when two records of one kind share an id, and
    /// `DanglingReference` when a route's stop sequence names a stop that
    /// is not in `stops`. Stop route lists and live bus references are not
    /// checked; lookups for those fall back to "Unknown" labels.
    pub fn new(
        stops: Vec<KnownStop>,
        routes: Vec<Route>,
        buses: Vec<LiveBus>,
    ) -> Result<Self, DomainError> {
        let stop_index = build_index("Stop", &stops, KnownStop::id)?;
        let route_index = build_index("Route", &routes, Route::id)?;
        let bus_index = build_index("Bus", &buses, LiveBus::id)?;

        for route in &routes {
            if let Some(missing) = route.stops().iter().find(|id| !stop_index.contains_key(*id)) {
                return Err(DomainError::dangling(
                    format!("Route {}", route.id()),
                    "Stop",
                    missing.as_str(),
                ));
            }
        }

        info!(
            stops = stops.len(),
            routes = routes.len(),
            buses = buses.len(),
            "Transit snapshot loaded"
        );

        Ok(Self {
            stops,
            routes,
            buses,
            stop_index,
            route_index,
            bus_index,
        })
    }

    /// An empty snapshot
    #[must_use]
    pub fn empty() -> Self {
        Self {
            stops: Vec::new(),
            routes: Vec::new(),
            buses: Vec::new(),
            stop_index: HashMap::new(),
            route_index: HashMap::new(),
            bus_index: HashMap::new(),
        }
    }

    /// All stops in load order
    #[must_use]
    pub fn stops(&self) -> &[KnownStop] {
        &self.stops
    }

    /// All routes in load order
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// All live buses in load order
    #[must_use]
    pub fn buses(&self) -> &[LiveBus] {
        &self.buses
    }

    /// Look up a stop
    #[must_use]
    pub fn stop(&self, id: &StopId) -> Option<&KnownStop> {
        let found = self.stop_index.get(id).map(|&i| &self.stops[i]);
        if found.is_none() {
            debug!(%id, "Stop lookup missed");
        }
        found
    }

    /// Look up a route
    #[must_use]
    pub fn route(&self, id: &RouteId) -> Option<&Route> {
        let found = self.route_index.get(id).map(|&i| &self.routes[i]);
        if found.is_none() {
            debug!(%id, "Route lookup missed");
        }
        found
    }

    /// Look up a live bus
    #[must_use]
    pub fn bus(&self, id: &BusId) -> Option<&LiveBus> {
        self.bus_index.get(id).map(|&i| &self.buses[i])
    }

    /// Find a stop whose name equals `name`, ignoring case
    #[must_use]
    pub fn stop_named(&self, name: &str) -> Option<&KnownStop> {
        let wanted = name.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }
        self.stops.iter().find(|s| s.name().to_lowercase() == wanted)
    }

    /// Routes whose stop sequence contains the stop, in load order
    pub fn routes_serving<'a>(&'a self, stop: &'a StopId) -> impl Iterator<Item = &'a Route> + 'a {
        self.routes.iter().filter(move |r| r.serves(stop))
    }

    /// Coordinates of a route's stops in visit order
    #[must_use]
    pub fn route_path(&self, route: &Route) -> Vec<GeoLocation> {
        route
            .stops()
            .iter()
            .filter_map(|id| self.stop(id))
            .map(KnownStop::location)
            .collect()
    }
}

impl Default for TransitDataStore {
    fn default() -> Self {
        Self::empty()
    }
}

fn build_index<T, K>(
    entity_type: &str,
    items: &[T],
    key: impl Fn(&T) -> &K,
) -> Result<HashMap<K, usize>, DomainError>
where
    K: Clone + Eq + Hash + AsRef<str>,
{
    let mut index = HashMap::with_capacity(items.len());
    for (position, item) in items.iter().enumerate() {
        let id = key(item);
        if index.insert(id.clone(), position).is_some() {
            return Err(DomainError::duplicate(entity_type, id.as_ref()));
        }
    }
    Ok(index)
}
