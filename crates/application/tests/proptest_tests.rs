//! Property-based and scenario tests for stop suggestions, route matching
//! and the journey search session

use std::sync::Arc;

use application::{Endpoint, JourneySearch, PlaceCandidate, TransitDataStore, find_routes, suggest};
use domain::{
    GeoLocation, KnownStop, Route, Stop,
    value_objects::{Fare, OperatingHours, RouteColor, RouteId, Schedule, StopId},
};
use proptest::prelude::*;

// ============================================================================
// Generators
// ============================================================================

const NAME_WORDS: &[&str] = &[
    "City", "Bus", "Stand", "Railway", "Station", "Market", "Area", "College", "Square",
    "Hospital", "MP", "Nagar", "Lake", "View",
];

fn make_stop(index: usize, name: &str) -> KnownStop {
    KnownStop::new(
        StopId::parse(format!("S{index}")).unwrap(),
        name,
        format!("C{index:03}"),
        GeoLocation::new_unchecked(23.2 + index as f64 * 0.001, 77.4),
    )
}

fn make_route(index: usize, stops: &[usize]) -> Route {
    Route::new(
        RouteId::parse(format!("R{index}")).unwrap(),
        format!("Route {index}"),
        format!("{}", 100 + index),
        RouteColor::default_marker(),
        stops
            .iter()
            .map(|s| StopId::parse(format!("S{s}")).unwrap())
            .collect(),
        Schedule::new(15, OperatingHours::parse("06:00", "22:00").unwrap()).unwrap(),
        Fare::from_minor_units(1000),
    )
}

fn stop_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::collection::vec(prop::sample::select(NAME_WORDS), 1..4).prop_map(|w| w.join(" ")),
        0..12,
    )
}

fn stops_from(names: &[String]) -> Vec<KnownStop> {
    names
        .iter()
        .enumerate()
        .map(|(i, n)| make_stop(i, n))
        .collect()
}

/// Eight stops and up to six routes over them
fn network() -> impl Strategy<Value = Vec<Route>> {
    prop::collection::vec(prop::collection::vec(0usize..8, 1..5), 0..6).prop_map(|paths| {
        paths
            .iter()
            .enumerate()
            .map(|(i, p)| make_route(i, p))
            .collect()
    })
}

fn stop_at(index: usize) -> Stop {
    make_stop(index, &format!("Stop {index}")).into()
}

fn ids(routes: &[&Route]) -> Vec<String> {
    routes.iter().map(|r| r.id().to_string()).collect()
}

// ============================================================================
// Suggestion Properties
// ============================================================================

mod suggestion_tests {
    use super::*;

    proptest! {
        #[test]
        fn empty_query_suggests_nothing(names in stop_names()) {
            let stops = stops_from(&names);
            prop_assert!(suggest("", &stops).is_empty());
        }

        #[test]
        fn every_suggestion_contains_query(names in stop_names(), query in "[a-zA-Z ]{1,6}") {
            let stops = stops_from(&names);
            prop_assume!(!query.trim().is_empty());
            for stop in suggest(&query, &stops) {
                prop_assert!(stop.name().to_lowercase().contains(&query.to_lowercase()));
            }
        }

        #[test]
        fn suggestions_are_a_subsequence(names in stop_names(), query in "[a-zA-Z]{1,3}") {
            let stops = stops_from(&names);
            let suggested = suggest(&query, &stops);
            let mut remaining = stops.iter();
            for stop in suggested {
                prop_assert!(remaining.any(|s| s.id() == stop.id()));
            }
        }

        #[test]
        fn suggest_is_idempotent(names in stop_names(), query in "[a-zA-Z]{1,3}") {
            let stops = stops_from(&names);
            let first: Vec<&StopId> = suggest(&query, &stops).iter().map(|s| s.id()).collect();
            let second: Vec<&StopId> = suggest(&query, &stops).iter().map(|s| s.id()).collect();
            prop_assert_eq!(first, second);
        }
    }
}

// ============================================================================
// Route Matching Properties
// ============================================================================

mod route_matching_tests {
    use super::*;

    proptest! {
        #[test]
        fn matching_is_symmetric(routes in network(), a in 0usize..8, b in 0usize..8) {
            let (a, b) = (stop_at(a), stop_at(b));
            let forward = ids(&find_routes(Some(&a), Some(&b), &routes));
            let backward = ids(&find_routes(Some(&b), Some(&a), &routes));
            prop_assert_eq!(forward, backward);
        }

        #[test]
        fn same_endpoint_gives_routes_through_it(routes in network(), a in 0usize..8) {
            let stop = stop_at(a);
            let expected: Vec<String> = routes
                .iter()
                .filter(|r| r.serves(stop.id()))
                .map(|r| r.id().to_string())
                .collect();
            prop_assert_eq!(ids(&find_routes(Some(&stop), Some(&stop), &routes)), expected);
        }

        #[test]
        fn every_match_serves_both(routes in network(), a in 0usize..8, b in 0usize..8) {
            let (a, b) = (stop_at(a), stop_at(b));
            let found = find_routes(Some(&a), Some(&b), &routes);
            for route in &found {
                prop_assert!(route.serves(a.id()) && route.serves(b.id()));
            }
            let shared = routes.iter().filter(|r| r.serves(a.id()) && r.serves(b.id())).count();
            prop_assert_eq!(found.len(), shared);
        }

        #[test]
        fn unset_side_matches_nothing(routes in network(), a in 0usize..8) {
            let stop = stop_at(a);
            prop_assert!(find_routes(Some(&stop), None, &routes).is_empty());
            prop_assert!(find_routes(None, Some(&stop), &routes).is_empty());
        }
    }
}

// ============================================================================
// Journey Scenarios
// ============================================================================

mod scenario_tests {
    use super::*;

    fn small_network() -> Arc<TransitDataStore> {
        let stops = vec![
            make_stop(1, "City Bus Stand"),
            make_stop(2, "Railway Station"),
            make_stop(3, "Government Hospital"),
            make_stop(4, "College Square"),
        ];
        let routes = vec![make_route(1, &[1, 2, 4]), make_route(2, &[1, 3, 4])];
        Arc::new(TransitDataStore::new(stops, routes, Vec::new()).unwrap())
    }

    #[test]
    fn bus_stand_to_railway_station_takes_first_route() {
        let mut search = JourneySearch::new(small_network());
        search
            .select_stop(Endpoint::Origin, &StopId::parse("S1").unwrap())
            .unwrap();
        search
            .select_stop(Endpoint::Destination, &StopId::parse("S2").unwrap())
            .unwrap();

        assert!(search.search());
        let routes = search.results().unwrap();
        assert_eq!(ids(&routes), ["R1"]);
    }

    #[test]
    fn typing_rail_suggests_railway_station() {
        let mut search = JourneySearch::new(small_network());
        search.type_query(Endpoint::Origin, "Rail");
        let names: Vec<&str> = search
            .suggestions(Endpoint::Origin)
            .iter()
            .map(|s| s.name())
            .collect();
        assert_eq!(names, ["Railway Station"]);
    }

    #[test]
    fn external_origin_finds_no_routes() {
        let mut search = JourneySearch::new(small_network());
        search.select_place(
            Endpoint::Origin,
            PlaceCandidate::new("New Market, Bhopal", GeoLocation::new_unchecked(23.2336, 77.4007)),
        );
        search
            .select_stop(Endpoint::Destination, &StopId::parse("S4").unwrap())
            .unwrap();

        assert!(search.search());
        assert_eq!(search.results().map(|r| r.len()), Some(0));
    }
}
