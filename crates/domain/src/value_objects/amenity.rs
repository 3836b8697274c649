//! Stop amenity tag

use serde::{Deserialize, Serialize};
use std::fmt;

/// A free-form amenity tag on a stop ("shelter", "seating", ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amenity(String);

impl Amenity {
    /// Create an amenity tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The raw tag
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Glyph shown next to the tag; unknown tags get a pin
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self.0.as_str() {
            "shelter" => "🏠",
            "seating" => "💺",
            "water" => "💧",
            "toilet" => "🚻",
            "shops" => "🛍️",
            _ => "📍",
        }
    }
}

impl fmt::Display for Amenity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Amenity {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_glyphs() {
        assert_eq!(Amenity::new("shelter").glyph(), "🏠");
        assert_eq!(Amenity::new("toilet").glyph(), "🚻");
    }

    #[test]
    fn unknown_tag_gets_pin() {
        assert_eq!(Amenity::new("wifi").glyph(), "📍");
    }
}
