//! Stops near a coordinate, with walking time and next arrival

use domain::{GeoLocation, KnownStop};
use tracing::debug;

use super::TransitDataStore;

/// Walking speed used for time estimates, in metres per minute
pub const WALKING_SPEED_M_PER_MIN: f64 = 75.0;

/// A stop with its distance from the rider
#[derive(Debug, Clone, Copy)]
pub struct NearbyStop<'a> {
    /// The stop
    pub stop: &'a KnownStop,
    /// Great-circle distance in metres
    pub distance_meters: f64,
    /// Walking time, rounded up to whole minutes
    pub walking_minutes: u32,
    /// Soonest arrival of a live bus heading to this stop
    pub next_bus_minutes: Option<u32>,
}

/// Minutes needed to walk `distance_meters`, rounded up
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn walking_minutes(distance_meters: f64) -> u32 {
    (distance_meters.max(0.0) / WALKING_SPEED_M_PER_MIN).ceil() as u32
}

/// The `limit` stops closest to `origin`, nearest first
#[must_use]
pub fn nearby_stops(
    store: &TransitDataStore,
    origin: GeoLocation,
    limit: usize,
) -> Vec<NearbyStop<'_>> {
    let mut nearby: Vec<NearbyStop<'_>> = store
        .stops()
        .iter()
        .map(|stop| {
            let distance_meters = origin.distance_meters(&stop.location());
            NearbyStop {
                stop,
                distance_meters,
                walking_minutes: walking_minutes(distance_meters),
                next_bus_minutes: store
                    .buses()
                    .iter()
                    .filter(|bus| bus.next_stop_id() == stop.id())
                    .map(domain::LiveBus::eta_minutes)
                    .min(),
            }
        })
        .collect();

    nearby.sort_by(|a, b| a.distance_meters.total_cmp(&b.distance_meters));
    nearby.truncate(limit);

    debug!(%origin, found = nearby.len(), "Ranked nearby stops");
    nearby
}
