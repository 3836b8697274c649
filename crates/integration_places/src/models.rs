//! Place models

use domain::value_objects::GeoLocation;
use serde::{Deserialize, Serialize};

use crate::error::PlacesError;

/// A place returned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Full formatted address
    pub display_name: String,
    /// Coordinates
    pub location: GeoLocation,
}

/// Raw place object as returned by the search and autocomplete endpoints
///
/// Coordinates arrive as strings.
#[derive(Debug, Deserialize)]
pub(crate) struct RawPlace {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl TryFrom<RawPlace> for Place {
    type Error = PlacesError;

    fn try_from(raw: RawPlace) -> Result<Self, Self::Error> {
        let lat: f64 = raw
            .lat
            .parse()
            .map_err(|_| PlacesError::ParseError(format!("Invalid latitude: {}", raw.lat)))?;
        let lon: f64 = raw
            .lon
            .parse()
            .map_err(|_| PlacesError::ParseError(format!("Invalid longitude: {}", raw.lon)))?;
        let location =
            GeoLocation::new(lat, lon).map_err(|e| PlacesError::ParseError(e.to_string()))?;

        Ok(Self {
            display_name: raw.display_name.unwrap_or_else(|| location.to_string()),
            location,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_place_conversion() {
        let json = r#"{"lat": "23.2332", "lon": "77.4302", "display_name": "DB City Mall, Bhopal"}"#;
        let raw: RawPlace = serde_json::from_str(json).unwrap();
        let place = Place::try_from(raw).unwrap();
        assert_eq!(place.display_name, "DB City Mall, Bhopal");
        assert!((place.location.latitude() - 23.2332).abs() < 1e-9);
        assert!((place.location.longitude() - 77.4302).abs() < 1e-9);
    }

    #[test]
    fn test_missing_name_falls_back_to_coordinates() {
        let raw: RawPlace = serde_json::from_str(r#"{"lat": "23.25", "lon": "77.41"}"#).unwrap();
        let place = Place::try_from(raw).unwrap();
        assert_eq!(place.display_name, "23.2500, 77.4100");
    }

    #[test]
    fn test_bad_coordinates_rejected() {
        let raw: RawPlace = serde_json::from_str(r#"{"lat": "north", "lon": "77.41"}"#).unwrap();
        assert!(matches!(
            Place::try_from(raw),
            Err(PlacesError::ParseError(_))
        ));

        let raw: RawPlace = serde_json::from_str(r#"{"lat": "123.0", "lon": "77.41"}"#).unwrap();
        assert!(Place::try_from(raw).is_err());
    }

    #[test]
    fn test_empty_list_parses() {
        let places: Vec<RawPlace> = serde_json::from_str("[]").unwrap();
        assert!(places.is_empty());
    }
}
