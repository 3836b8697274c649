//! Stop name suggestions for the journey search inputs

use domain::KnownStop;
use tracing::debug;

/// Stops whose name contains `query`, ignoring case, in input order
///
/// A blank query yields nothing. Otherwise the query is matched as typed,
/// so a trailing space narrows the match the same way it would on screen.
#[must_use]
pub fn suggest<'a>(query: &str, stops: &'a [KnownStop]) -> Vec<&'a KnownStop> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let matches: Vec<&KnownStop> = stops
        .iter()
        .filter(|stop| stop.name().to_lowercase().contains(&needle))
        .collect();

    debug!(query, matches = matches.len(), "Filtered stop suggestions");
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::bhopal_network;

    fn names<'a>(stops: &[&'a KnownStop]) -> Vec<&'a str> {
        stops.iter().map(|s| s.name()).collect()
    }

    #[test]
    fn blank_query_suggests_nothing() {
        let store = bhopal_network();
        assert!(suggest("", store.stops()).is_empty());
        assert!(suggest("   ", store.stops()).is_empty());
    }

    #[test]
    fn prefix_matches_single_stop() {
        let store = bhopal_network();
        assert_eq!(names(&suggest("Rail", store.stops())), ["Railway Station"]);
    }

    #[test]
    fn matching_ignores_case() {
        let store = bhopal_network();
        assert_eq!(names(&suggest("MARKET", store.stops())), ["Market Area"]);
        assert_eq!(names(&suggest("hosp", store.stops())), ["Government Hospital"]);
    }

    #[test]
    fn infix_matches_keep_input_order() {
        let store = bhopal_network();
        assert_eq!(
            names(&suggest("a", store.stops())),
            [
                "City Bus Stand",
                "Railway Station",
                "Government Hospital",
                "College Square",
                "Market Area"
            ]
        );
        assert_eq!(
            names(&suggest("st", store.stops())),
            ["City Bus Stand", "Railway Station"]
        );
    }

    #[test]
    fn no_match_is_empty() {
        let store = bhopal_network();
        assert!(suggest("Airport", store.stops()).is_empty());
    }

    #[test]
    fn query_is_not_trimmed() {
        let store = bhopal_network();
        assert_eq!(names(&suggest("bus ", store.stops())), ["City Bus Stand"]);
        assert!(suggest(" Rail", store.stops()).is_empty());
    }
}
