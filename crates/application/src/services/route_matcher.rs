//! Route matching between two endpoints
//!
//! Matching is by stop membership only. Direction along the route is not
//! checked, so swapping origin and destination gives the same routes.

use domain::{Route, Stop};
use tracing::debug;

/// Routes whose stop sequence contains both endpoints, in input order
///
/// Returns nothing while either endpoint is unset. Endpoints are compared
/// by identifier, so a place picked through the place service never
/// matches a route.
#[must_use]
pub fn find_routes<'a>(
    origin: Option<&Stop>,
    destination: Option<&Stop>,
    routes: &'a [Route],
) -> Vec<&'a Route> {
    let (Some(origin), Some(destination)) = (origin, destination) else {
        return Vec::new();
    };

    let matches: Vec<&Route> = routes
        .iter()
        .filter(|route| route.serves(origin.id()) && route.serves(destination.id()))
        .collect();

    debug!(
        origin = %origin.id(),
        destination = %destination.id(),
        matches = matches.len(),
        "Matched routes"
    );
    matches
}
