//! Value Objects - Immutable, identity-less domain primitives

mod amenity;
mod delay;
mod fare;
mod geo_location;
mod identifiers;
mod occupancy;
mod route_color;
mod schedule;

pub use amenity::Amenity;
pub use delay::{DelaySeverity, DelayStatus};
pub use fare::Fare;
pub use geo_location::GeoLocation;
pub use identifiers::{BusId, RouteId, StopId};
pub use occupancy::Occupancy;
pub use route_color::RouteColor;
pub use schedule::{OperatingHours, Schedule};
