//! String identifiers for stops, routes and buses
//!
//! Identifiers come from the static network data ("1", "R1", "BUS001"), so
//! unlike UUID-backed ids they are opaque non-blank strings. Each kind gets
//! its own type so a route id can never be looked up as a stop id.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::DomainError;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Parse a ", $label, " identifier, rejecting blank input")]
            pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(DomainError::InvalidIdentifier(format!(
                        "{} id must not be empty",
                        $label
                    )));
                }
                Ok(Self(value))
            }

            /// Borrow the identifier as a string slice
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

string_id!(
    /// Identifier of a bus stop
    StopId,
    "stop"
);

string_id!(
    /// Identifier of a bus route
    RouteId,
    "route"
);

string_id!(
    /// Identifier of a tracked bus
    BusId,
    "bus"
);

impl StopId {
    /// Prefix used for stops synthesized from a place-service pick
    pub const PLACE_PREFIX: &'static str = "place-";

    /// Generate a fresh identifier for a stop picked through the place service
    #[must_use]
    pub fn generate_place() -> Self {
        Self(format!("{}{}", Self::PLACE_PREFIX, Uuid::new_v4()))
    }

    /// Whether this identifier was generated for a place-service pick
    #[must_use]
    pub fn is_place(&self) -> bool {
        self.0.starts_with(Self::PLACE_PREFIX)
    }
}
