//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// Identifier is empty or otherwise malformed
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Coordinates outside of the valid latitude/longitude range
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    /// Route colour is not a `#RRGGBB` hex string
    #[error("Invalid colour: {0}")]
    InvalidColor(String),

    /// Operating-hours window could not be parsed or is empty
    #[error("Invalid operating hours: {0}")]
    InvalidOperatingHours(String),

    /// Route schedule is not usable (e.g. zero frequency)
    #[error("Invalid schedule: {0}")]
    InvalidSchedule(String),

    /// Two records of the same kind share an identifier
    #[error("Duplicate {entity_type} id: {id}")]
    DuplicateId { entity_type: String, id: String },

    /// A record references another record that does not exist
    #[error("{owner} references unknown {entity_type}: {id}")]
    DanglingReference {
        owner: String,
        entity_type: String,
        id: String,
    },

    /// Entity not found
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// Create a duplicate id error
    pub fn duplicate(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// Create a dangling reference error
    pub fn dangling(
        owner: impl Into<String>,
        entity_type: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self::DanglingReference {
            owner: owner.into(),
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_creates_correct_error() {
        let err = DomainError::not_found("Stop", "9");
        match err {
            DomainError::NotFound { entity_type, id } => {
                assert_eq!(entity_type, "Stop");
                assert_eq!(id, "9");
            },
            _ => unreachable!("Expected NotFound error"),
        }
    }

    #[test]
    fn not_found_error_message_is_correct() {
        let err = DomainError::not_found("Route", "R9");
        assert_eq!(err.to_string(), "Route not found: R9");
    }

    #[test]
    fn duplicate_error_message() {
        let err = DomainError::duplicate("Stop", "1");
        assert_eq!(err.to_string(), "Duplicate Stop id: 1");
    }

    #[test]
    fn dangling_reference_message() {
        let err = DomainError::dangling("Route R1", "Stop", "42");
        assert_eq!(err.to_string(), "Route R1 references unknown Stop: 42");
    }

    #[test]
    fn invalid_color_message() {
        let err = DomainError::InvalidColor("blue".to_string());
        assert_eq!(err.to_string(), "Invalid colour: blue");
    }
}
