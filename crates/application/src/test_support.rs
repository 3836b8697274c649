//! Shared fixture for unit tests: the Bhopal demo network

use domain::{
    GeoLocation, KnownStop, LiveBus, Route, Stop,
    value_objects::{Amenity, BusId, Fare, Occupancy, OperatingHours, RouteColor, RouteId, Schedule, StopId},
};

use crate::services::TransitDataStore;

pub fn stop_id(id: &str) -> StopId {
    StopId::parse(id).unwrap()
}

pub fn route_id(id: &str) -> RouteId {
    RouteId::parse(id).unwrap()
}

pub fn known(store: &TransitDataStore, id: &str) -> Stop {
    store.stop(&stop_id(id)).unwrap().clone().into()
}

fn stop(id: &str, name: &str, code: &str, at: (f64, f64), routes: &[&str], amenities: &[&str]) -> KnownStop {
    KnownStop::new(stop_id(id), name, code, GeoLocation::new(at.0, at.1).unwrap())
        .with_routes(routes.iter().map(|r| route_id(r)))
        .with_amenities(amenities.iter().map(|a| Amenity::new(*a)))
}

#[allow(clippy::too_many_arguments)]
fn route(
    id: &str,
    name: &str,
    number: &str,
    color: &str,
    stops: &[&str],
    frequency: u32,
    hours: (&str, &str),
    fare_minor: u32,
) -> Route {
    Route::new(
        route_id(id),
        name,
        number,
        RouteColor::parse(color).unwrap(),
        stops.iter().map(|s| stop_id(s)).collect(),
        Schedule::new(frequency, OperatingHours::parse(hours.0, hours.1).unwrap()).unwrap(),
        Fare::from_minor_units(fare_minor),
    )
}

fn bus(id: &str, route: &str, at: (f64, f64), next: &str, eta: u32, occupancy: Occupancy, delay: i32) -> LiveBus {
    LiveBus::new(
        BusId::parse(id).unwrap(),
        route_id(route),
        GeoLocation::new(at.0, at.1).unwrap(),
        stop_id(next),
        eta,
        occupancy,
        delay,
    )
}

pub fn bhopal_network() -> TransitDataStore {
    let stops = vec![
        stop("1", "City Bus Stand", "CBS001", (23.2599, 77.4126), &["R1", "R2", "R3"], &["shelter", "seating", "water"]),
        stop("2", "Railway Station", "RWS002", (23.2665, 77.4005), &["R1", "R4"], &["shelter", "seating", "toilet", "water"]),
        stop("3", "Government Hospital", "GH003", (23.2456, 77.4234), &["R2", "R3"], &["shelter", "seating"]),
        stop("4", "College Square", "CS004", (23.2789, 77.3987), &["R1", "R2", "R4"], &["shelter", "seating", "shops"]),
        stop("5", "Market Area", "MA005", (23.2543, 77.4156), &["R3", "R4"], &["shelter", "seating", "shops", "water"]),
    ];
    let routes = vec![
        route("R1", "City Circle", "101", "#3B82F6", &["1", "2", "4"], 15, ("06:00", "22:00"), 1000),
        route("R2", "Hospital Route", "102", "#10B981", &["1", "3", "4"], 20, ("06:30", "21:30"), 800),
        route("R3", "Market Express", "103", "#F59E0B", &["1", "3", "5"], 12, ("07:00", "20:00"), 1200),
        route("R4", "Station Connector", "104", "#EF4444", &["2", "4", "5"], 25, ("06:00", "23:00"), 1500),
    ];
    let buses = vec![
        bus("BUS001", "R1", (23.2632, 77.4065), "2", 3, Occupancy::Medium, -2),
        bus("BUS002", "R1", (23.2723, 77.4012), "4", 7, Occupancy::High, 5),
        bus("BUS003", "R2", (23.2511, 77.4191), "3", 12, Occupancy::Low, 0),
        bus("BUS004", "R3", (23.2578, 77.4142), "5", 5, Occupancy::Medium, 3),
    ];
    TransitDataStore::new(stops, routes, buses).unwrap()
}
