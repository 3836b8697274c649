//! Terminal rendering of transit views

use application::{BusStatus, NearbyStop, TransitDataStore};
use domain::{KnownStop, Route};

/// Distance for display: metres below 1 km, kilometres above
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{} m", meters.round() as u64)
    } else {
        format!("{:.1} km", meters / 1000.0)
    }
}

/// "CBS001  City Bus Stand  · 101, 102, 104  · 🏠 💺 💧"
pub fn stop_line(store: &TransitDataStore, stop: &KnownStop) -> String {
    let routes = stop
        .routes()
        .iter()
        .map(|id| {
            store
                .route(id)
                .map_or_else(|| id.to_string(), |route| route.number().to_string())
        })
        .collect::<Vec<_>>()
        .join(", ");
    let amenities = stop
        .amenities()
        .iter()
        .map(domain::Amenity::glyph)
        .collect::<Vec<_>>()
        .join(" ");

    format!("{}  {}  · {routes}  · {amenities}", stop.code(), stop.name())
}

/// "Bus 101 · City Circle → Railway Station · Arriving in 3 minutes · medium · 2 min early"
pub fn bus_line(status: &BusStatus<'_>) -> String {
    format!(
        "{} · {} → {} · {} · {} · {}",
        status.title(),
        status.route_name(),
        status.next_stop_name(),
        status.arrival_label(),
        status.occupancy(),
        status.delay()
    )
}

/// "Railway Station · 850 m · 12 min walk · next bus in 3 min"
pub fn nearby_line(nearby: &NearbyStop<'_>) -> String {
    let next_bus = nearby
        .next_bus_minutes
        .map_or_else(|| "no bus due".to_string(), |m| format!("next bus in {m} min"));
    format!(
        "{} · {} · {} min walk · {next_bus}",
        nearby.stop.name(),
        format_distance(nearby.distance_meters),
        nearby.walking_minutes
    )
}

/// Route list for a journey, or the empty-result notice
pub fn journey_lines(routes: &[&Route]) -> Vec<String> {
    if routes.is_empty() {
        return vec!["No direct routes found between these stops.".to_string()];
    }
    routes.iter().map(|route| route.format_summary()).collect()
}

#[cfg(test)]
mod tests {
    use application::{live_statuses, nearby_stops};
    use domain::GeoLocation;
    use infrastructure::TransitFixture;

    use super::*;

    fn bhopal() -> TransitDataStore {
        TransitFixture::bhopal().unwrap().into_store().unwrap()
    }

    #[test]
    fn distance_formatting() {
        assert_eq!(format_distance(0.0), "0 m");
        assert_eq!(format_distance(849.6), "850 m");
        assert_eq!(format_distance(1000.0), "1.0 km");
        assert_eq!(format_distance(2450.0), "2.5 km");
    }

    #[test]
    fn stop_line_lists_route_numbers() {
        let store = bhopal();
        let line = stop_line(&store, &store.stops()[0]);
        assert!(line.starts_with("CBS001  City Bus Stand"));
        assert!(line.contains("101"));
    }

    #[test]
    fn bus_line_has_every_field() {
        let store = bhopal();
        let statuses = live_statuses(&store);
        let line = bus_line(&statuses[0]);
        assert!(line.starts_with("Bus 101"));
        assert!(line.contains("Arriving in"));
        assert!(line.ends_with("2 min early"));
    }

    #[test]
    fn nearby_line_at_a_stop() {
        let store = bhopal();
        let origin = store.stops()[1].location();
        let nearby = nearby_stops(&store, origin, 1);
        let line = nearby_line(&nearby[0]);
        assert!(line.starts_with("Railway Station · 0 m · 0 min walk"));
    }

    #[test]
    fn nearby_line_far_away() {
        let store = bhopal();
        let nearby = nearby_stops(&store, GeoLocation::new_unchecked(23.0, 77.0), 1);
        assert!(nearby_line(&nearby[0]).contains(" km · "));
    }

    #[test]
    fn empty_journey_notice() {
        assert_eq!(
            journey_lines(&[]),
            vec!["No direct routes found between these stops.".to_string()]
        );
    }
}
