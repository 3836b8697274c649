//! Route colour value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A `#RRGGBB` colour used when drawing a route and its buses
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RouteColor(String);

impl RouteColor {
    /// Fallback colour for markers whose route is unknown
    pub const DEFAULT_HEX: &'static str = "#3B82F6";

    /// Parse a hex colour, normalising it to upper case
    ///
    /// # Errors
    ///
    /// Returns `InvalidColor` unless the input is `#` followed by six hex digits.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let digits = value
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| DomainError::InvalidColor(value.to_string()))?;
        Ok(Self(format!("#{}", digits.to_ascii_uppercase())))
    }

    /// The fallback colour
    #[must_use]
    pub fn default_marker() -> Self {
        Self(Self::DEFAULT_HEX.to_string())
    }

    /// The colour as a `#RRGGBB` string
    #[must_use]
    pub fn as_hex(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RouteColor {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RouteColor> for String {
    fn from(color: RouteColor) -> Self {
        color.0
    }
}
