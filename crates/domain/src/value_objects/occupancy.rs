//! Bus occupancy level

use serde::{Deserialize, Serialize};
use std::fmt;

/// How full a bus currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occupancy {
    /// Plenty of seats
    Low,
    /// Some standing room
    Medium,
    /// Crowded
    High,
}

impl Occupancy {
    /// Lower-case label as used in the data feed
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Indicator colour (green / amber / red)
    #[must_use]
    pub const fn color_hex(&self) -> &'static str {
        match self {
            Self::Low => "#10B981",
            Self::Medium => "#F59E0B",
            Self::High => "#EF4444",
        }
    }
}

impl fmt::Display for Occupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Occupancy {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err("Invalid occupancy level"),
        }
    }
}
