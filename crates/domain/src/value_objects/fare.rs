//! Fare value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// A flat route fare, stored in minor currency units (paise)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fare(u32);

impl Fare {
    /// Create a fare from minor units
    #[must_use]
    pub const fn from_minor_units(minor_units: u32) -> Self {
        Self(minor_units)
    }

    /// Create a fare from whole rupees
    #[must_use]
    pub const fn from_major_units(major_units: u32) -> Self {
        Self(major_units.saturating_mul(100))
    }

    /// The amount in minor units
    #[must_use]
    pub const fn minor_units(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
