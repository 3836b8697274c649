//! Live bus position snapshot

use serde::{Deserialize, Serialize};

use crate::value_objects::{BusId, DelayStatus, GeoLocation, Occupancy, RouteId, StopId};

/// Position and status of a bus at the time the snapshot was taken
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveBus {
    id: BusId,
    route_id: RouteId,
    location: GeoLocation,
    next_stop_id: StopId,
    eta_minutes: u32,
    occupancy: Occupancy,
    delay_minutes: i32,
}

impl LiveBus {
    /// Create a live bus record
    #[must_use]
    pub const fn new(
        id: BusId,
        route_id: RouteId,
        location: GeoLocation,
        next_stop_id: StopId,
        eta_minutes: u32,
        occupancy: Occupancy,
        delay_minutes: i32,
    ) -> Self {
        Self {
            id,
            route_id,
            location,
            next_stop_id,
            eta_minutes,
            occupancy,
            delay_minutes,
        }
    }

    /// Bus identifier
    #[must_use]
    pub const fn id(&self) -> &BusId {
        &self.id
    }

    /// Route the bus is running on
    #[must_use]
    pub const fn route_id(&self) -> &RouteId {
        &self.route_id
    }

    /// Current position
    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        self.location
    }

    /// Stop the bus reaches next
    #[must_use]
    pub const fn next_stop_id(&self) -> &StopId {
        &self.next_stop_id
    }

    /// Minutes until the bus reaches its next stop
    #[must_use]
    pub const fn eta_minutes(&self) -> u32 {
        self.eta_minutes
    }

    /// Current load
    #[must_use]
    pub const fn occupancy(&self) -> Occupancy {
        self.occupancy
    }

    /// Signed delay in minutes (negative means early)
    #[must_use]
    pub const fn delay_minutes(&self) -> i32 {
        self.delay_minutes
    }

    /// Delay classified for display
    #[must_use]
    pub const fn delay_status(&self) -> DelayStatus {
        DelayStatus::from_minutes(self.delay_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_status_is_derived() {
        let bus = LiveBus::new(
            BusId::parse("BUS001").unwrap(),
            RouteId::parse("R1").unwrap(),
            GeoLocation::new_unchecked(23.2632, 77.4065),
            StopId::parse("2").unwrap(),
            3,
            Occupancy::Medium,
            -2,
        );
        assert_eq!(bus.delay_status(), DelayStatus::Early(2));
        assert_eq!(bus.eta_minutes(), 3);
        assert_eq!(bus.next_stop_id().as_str(), "2");
    }

    #[test]
    fn deserializes_snapshot_record() {
        let json = r#"{
            "id": "BUS002",
            "route_id": "R1",
            "location": { "latitude": 23.2723, "longitude": 77.4012 },
            "next_stop_id": "4",
            "eta_minutes": 7,
            "occupancy": "high",
            "delay_minutes": 5
        }"#;
        let bus: LiveBus = serde_json::from_str(json).unwrap();
        assert_eq!(bus.occupancy(), Occupancy::High);
        assert_eq!(bus.delay_status(), DelayStatus::Late(5));
    }

    #[test]
    fn negative_eta_is_rejected() {
        let json = r#"{
            "id": "BUS009",
            "route_id": "R1",
            "location": { "latitude": 23.0, "longitude": 77.0 },
            "next_stop_id": "4",
            "eta_minutes": -1,
            "occupancy": "low",
            "delay_minutes": 0
        }"#;
        assert!(serde_json::from_str::<LiveBus>(json).is_err());
    }
}
