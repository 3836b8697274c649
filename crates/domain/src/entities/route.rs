//! Bus route entity

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::value_objects::{Fare, RouteColor, RouteId, Schedule, StopId};

/// Whether a route is running at a given moment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    /// Inside the operating window
    Active,
    /// Outside the operating window
    Inactive,
}

impl ServiceStatus {
    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A bus route with its ordered stop sequence
///
/// The order of `stops` is the path the bus drives. Route matching only
/// looks at membership; the order matters for drawing the path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    id: RouteId,
    name: String,
    number: String,
    color: RouteColor,
    stops: Vec<StopId>,
    schedule: Schedule,
    fare: Fare,
}

impl Route {
    /// Create a route
    #[must_use]
    pub fn new(
        id: RouteId,
        name: impl Into<String>,
        number: impl Into<String>,
        color: RouteColor,
        stops: Vec<StopId>,
        schedule: Schedule,
        fare: Fare,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            number: number.into(),
            color,
            stops,
            schedule,
            fare,
        }
    }

    /// Route identifier
    #[must_use]
    pub const fn id(&self) -> &RouteId {
        &self.id
    }

    /// Display name (e.g. "City Circle")
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Public route number (e.g. "101")
    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Colour used for the path and bus markers
    #[must_use]
    pub const fn color(&self) -> &RouteColor {
        &self.color
    }

    /// Stops in visit order
    #[must_use]
    pub fn stops(&self) -> &[StopId] {
        &self.stops
    }

    /// Headway and operating window
    #[must_use]
    pub const fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Flat fare
    #[must_use]
    pub const fn fare(&self) -> Fare {
        self.fare
    }

    /// Whether the stop sequence contains the given stop
    #[must_use]
    pub fn serves(&self, stop: &StopId) -> bool {
        self.stops.contains(stop)
    }

    /// Running status at a wall-clock time
    #[must_use]
    pub fn status_at(&self, time: NaiveTime) -> ServiceStatus {
        if self.schedule.operating_hours().contains(time) {
            ServiceStatus::Active
        } else {
            ServiceStatus::Inactive
        }
    }

    /// Short label such as "Route 101 (City Circle)"
    #[must_use]
    pub fn label(&self) -> String {
        format!("Route {} ({})", self.number, self.name)
    }

    /// One-line summary for listings
    #[must_use]
    pub fn format_summary(&self) -> String {
        format!(
            "🚌 {} {} · every {}min · {} · {} · {} stops",
            self.number,
            self.name,
            self.schedule.frequency_minutes(),
            self.schedule.operating_hours(),
            self.fare,
            self.stops.len()
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_summary())
    }
}
