//! Geolocation payload (`geo:` URI)

use crate::error::{Error, Result};
use crate::payload::FieldSet;

/// A geographic coordinate pair serialized as a `geo:` URI
///
/// Coordinates are validated as finite decimal numbers but emitted exactly as
/// the user typed them; the builder does not reformat precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoLocation {
    /// Latitude as entered
    pub lat: String,
    /// Longitude as entered
    pub lon: String,
}

impl GeoLocation {
    /// Convert a field set (`lat`, `lon`) into a coordinate record
    pub fn from_fields(fields: &FieldSet) -> Result<Self> {
        let lat = fields.trimmed("lat");
        let lon = fields.trimmed("lon");

        if lat.is_empty() || lon.is_empty() {
            return Err(Error::Validation(
                "Location: latitude and longitude are required".to_string(),
            ));
        }

        for value in [lat, lon] {
            match value.parse::<f64>() {
                Ok(parsed) if parsed.is_finite() => {}
                _ => {
                    return Err(Error::Validation(format!(
                        "Location: '{value}' is not a number (e.g. -1.249, -78.616)"
                    )));
                }
            }
        }

        Ok(Self {
            lat: lat.to_string(),
            lon: lon.to_string(),
        })
    }

    /// Serialize to a `geo:` URI
    pub fn encode(&self) -> String {
        format!("geo:{},{}", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_emitted_verbatim() {
        let fields = FieldSet::new().with("lat", "-1.249").with("lon", "-78.616");
        let record = GeoLocation::from_fields(&fields).unwrap();
        assert_eq!(record.encode(), "geo:-1.249,-78.616");
    }

    #[test]
    fn test_trailing_zero_preserved() {
        let fields = FieldSet::new().with("lat", "10.50").with("lon", "0");
        let record = GeoLocation::from_fields(&fields).unwrap();
        assert_eq!(record.encode(), "geo:10.50,0");
    }

    #[test]
    fn test_non_numeric_rejected() {
        let fields = FieldSet::new().with("lat", "abc").with("lon", "1");
        assert!(matches!(
            GeoLocation::from_fields(&fields),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        let fields = FieldSet::new().with("lat", "inf").with("lon", "1");
        assert!(matches!(
            GeoLocation::from_fields(&fields),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_missing_longitude_rejected() {
        let fields = FieldSet::new().with("lat", "1.0");
        assert!(matches!(
            GeoLocation::from_fields(&fields),
            Err(Error::Validation(_))
        ));
    }
}
