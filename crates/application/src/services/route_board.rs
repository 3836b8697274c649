//! Route board: every route with its service status at a given time

use chrono::NaiveTime;
use domain::{Route, ServiceStatus};

use super::TransitDataStore;

/// A route and whether it is running
#[derive(Debug, Clone, Copy)]
pub struct RouteBoardEntry<'a> {
    /// The route
    pub route: &'a Route,
    /// Status at the board's time
    pub status: ServiceStatus,
}

impl RouteBoardEntry<'_> {
    /// One-line summary followed by the status label
    #[must_use]
    pub fn line(&self) -> String {
        format!("{} · {}", self.route.format_summary(), self.status)
    }
}

/// All routes in load order with their status at `at`
#[must_use]
pub fn route_board(store: &TransitDataStore, at: NaiveTime) -> Vec<RouteBoardEntry<'_>> {
    store
        .routes()
        .iter()
        .map(|route| RouteBoardEntry {
            route,
            status: route.status_at(at),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::bhopal_network;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn early_morning_only_first_routes_run() {
        let store = bhopal_network();
        let statuses: Vec<ServiceStatus> =
            route_board(&store, at(6, 15)).iter().map(|e| e.status).collect();
        assert_eq!(
            statuses,
            [
                ServiceStatus::Active,
                ServiceStatus::Inactive,
                ServiceStatus::Inactive,
                ServiceStatus::Active
            ]
        );
    }

    #[test]
    fn late_evening_only_station_connector_runs() {
        let store = bhopal_network();
        let active: Vec<&str> = route_board(&store, at(22, 30))
            .iter()
            .filter(|e| e.status == ServiceStatus::Active)
            .map(|e| e.route.number())
            .collect();
        assert_eq!(active, ["104"]);
    }

    #[test]
    fn line_ends_with_status() {
        let store = bhopal_network();
        let board = route_board(&store, at(12, 0));
        assert!(board[0].line().starts_with("🚌 101 City Circle"));
        assert!(board[0].line().ends_with(&ServiceStatus::Active.to_string()));
    }
}
