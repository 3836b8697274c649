//! Bus stop entities
//!
//! A stop is either one of the network's own stops ([`KnownStop`]) or a
//! location picked through the place service ([`ExternalStop`]). Both carry
//! an identifier, a name and a coordinate, and both are compared by
//! identifier only when matching routes.

use serde::{Deserialize, Serialize};

use crate::value_objects::{Amenity, GeoLocation, RouteId, StopId};

/// A stop that belongs to the bus network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnownStop {
    id: StopId,
    name: String,
    code: String,
    location: GeoLocation,
    #[serde(default)]
    routes: Vec<RouteId>,
    #[serde(default)]
    amenities: Vec<Amenity>,
}

impl KnownStop {
    /// Create a stop without routes or amenities
    #[must_use]
    pub fn new(
        id: StopId,
        name: impl Into<String>,
        code: impl Into<String>,
        location: GeoLocation,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            code: code.into(),
            location,
            routes: Vec::new(),
            amenities: Vec::new(),
        }
    }

    /// Set the routes serving this stop
    #[must_use]
    pub fn with_routes(mut self, routes: impl IntoIterator<Item = RouteId>) -> Self {
        self.routes = routes.into_iter().collect();
        self
    }

    /// Set the amenity tags
    #[must_use]
    pub fn with_amenities(mut self, amenities: impl IntoIterator<Item = Amenity>) -> Self {
        self.amenities = amenities.into_iter().collect();
        self
    }

    /// Stop identifier
    #[must_use]
    pub const fn id(&self) -> &StopId {
        &self.id
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short stop code printed on the pole (e.g. "CBS001")
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Position of the stop
    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        self.location
    }

    /// Routes listed as serving this stop
    #[must_use]
    pub fn routes(&self) -> &[RouteId] {
        &self.routes
    }

    /// Amenity tags
    #[must_use]
    pub fn amenities(&self) -> &[Amenity] {
        &self.amenities
    }
}

/// A location picked through the place service, shaped like a stop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalStop {
    id: StopId,
    name: String,
    location: GeoLocation,
}

impl ExternalStop {
    /// Synthesize a stop for a resolved place, with a freshly generated id
    #[must_use]
    pub fn from_place(address: impl Into<String>, location: GeoLocation) -> Self {
        Self {
            id: StopId::generate_place(),
            name: address.into(),
            location,
        }
    }

    /// Stop identifier (generated)
    #[must_use]
    pub const fn id(&self) -> &StopId {
        &self.id
    }

    /// Address as returned by the place service
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved position
    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        self.location
    }
}

/// Either a network stop or a place-service pick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Stop {
    /// Stop from the network data
    Known(KnownStop),
    /// Place picked through the place service
    External(ExternalStop),
}

impl Stop {
    /// Stop identifier
    #[must_use]
    pub const fn id(&self) -> &StopId {
        match self {
            Self::Known(stop) => stop.id(),
            Self::External(stop) => stop.id(),
        }
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Known(stop) => stop.name(),
            Self::External(stop) => stop.name(),
        }
    }

    /// Position
    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        match self {
            Self::Known(stop) => stop.location(),
            Self::External(stop) => stop.location(),
        }
    }

    /// Stop code, absent for external picks
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Known(stop) => Some(stop.code()),
            Self::External(_) => None,
        }
    }

    /// Routes serving the stop; always empty for external picks
    #[must_use]
    pub fn routes(&self) -> &[RouteId] {
        match self {
            Self::Known(stop) => stop.routes(),
            Self::External(_) => &[],
        }
    }

    /// Amenity tags; always empty for external picks
    #[must_use]
    pub fn amenities(&self) -> &[Amenity] {
        match self {
            Self::Known(stop) => stop.amenities(),
            Self::External(_) => &[],
        }
    }

    /// Whether the stop came from the place service
    #[must_use]
    pub const fn is_external(&self) -> bool {
        matches!(self, Self::External(_))
    }

    /// Identity comparison, ignoring every field but the id
    #[must_use]
    pub fn same_stop(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl From<KnownStop> for Stop {
    fn from(stop: KnownStop) -> Self {
        Self::Known(stop)
    }
}

impl From<ExternalStop> for Stop {
    fn from(stop: ExternalStop) -> Self {
        Self::External(stop)
    }
}
