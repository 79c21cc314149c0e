//! Sign record model
//!
//! One row of the NYC parking-regulation dataset. The upstream payload is
//! loosely typed: coordinates arrive as JSON strings, the sign description
//! moves between field names across dataset revisions, and any field may be
//! absent. Decoding is tolerant; records without usable coordinates are
//! skipped by callers rather than treated as errors.

use serde::{Deserialize, Deserializer};

use crate::geo::LatLng;

/// A parking-regulation record from the open-data feed
#[derive(Debug, Clone, Deserialize)]
pub struct SignRecord {
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub location: Option<LocationField>,
    #[serde(default)]
    pub sign_description: Option<String>,
    #[serde(default)]
    pub sign_text: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// GeoJSON-style point carried by some records
#[derive(Debug, Clone, Deserialize)]
pub struct LocationField {
    /// `[longitude, latitude]`
    #[serde(default)]
    pub coordinates: Option<Vec<f64>>,
}

impl SignRecord {
    /// The record's position, preferring the flat latitude/longitude fields
    /// and falling back to the GeoJSON point
    pub fn coords(&self) -> Option<LatLng> {
        if let (Some(lat), Some(lng)) = (self.latitude, self.longitude) {
            return Some(LatLng::new(lat, lng));
        }
        let coordinates = self.location.as_ref()?.coordinates.as_ref()?;
        if coordinates.len() >= 2 {
            Some(LatLng::new(coordinates[1], coordinates[0]))
        } else {
            None
        }
    }

    /// The sign description, whichever field carries it in this revision
    pub fn rule_text(&self) -> Option<&str> {
        [&self.sign_description, &self.sign_text, &self.description]
            .into_iter()
            .find_map(|f| f.as_deref())
            .filter(|s| !s.trim().is_empty())
    }
}

/// Socrata serves numeric columns as JSON strings; accept both shapes
fn de_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrStr {
        Num(f64),
        Str(String),
    }

    Ok(match Option::<NumOrStr>::deserialize(deserializer)? {
        Some(NumOrStr::Num(n)) => Some(n),
        Some(NumOrStr::Str(s)) => s.trim().parse().ok(),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_string_coordinates() {
        let record: SignRecord = serde_json::from_str(
            r#"{
                "latitude": "40.7128",
                "longitude": "-74.0060",
                "sign_description": "NO PARKING ANYTIME"
            }"#,
        )
        .unwrap();

        let coords = record.coords().unwrap();
        assert!((coords.lat - 40.7128).abs() < 1e-9);
        assert!((coords.lng + 74.0060).abs() < 1e-9);
        assert_eq!(record.rule_text(), Some("NO PARKING ANYTIME"));
    }

    #[test]
    fn test_decode_numeric_coordinates() {
        let record: SignRecord =
            serde_json::from_str(r#"{"latitude": 40.7, "longitude": -74.0}"#).unwrap();
        assert!(record.coords().is_some());
    }

    #[test]
    fn test_location_fallback() {
        let record: SignRecord = serde_json::from_str(
            r#"{
                "location": {"type": "Point", "coordinates": [-73.99, 40.73]},
                "sign_text": "2 HR PARKING 8AM-6PM"
            }"#,
        )
        .unwrap();

        let coords = record.coords().unwrap();
        assert!((coords.lat - 40.73).abs() < 1e-9);
        assert!((coords.lng + 73.99).abs() < 1e-9);
        assert_eq!(record.rule_text(), Some("2 HR PARKING 8AM-6PM"));
    }

    #[test]
    fn test_missing_coordinates() {
        let record: SignRecord =
            serde_json::from_str(r#"{"sign_description": "NO STANDING"}"#).unwrap();
        assert!(record.coords().is_none());
    }

    #[test]
    fn test_unparseable_coordinate_string() {
        let record: SignRecord =
            serde_json::from_str(r#"{"latitude": "n/a", "longitude": "-74.0"}"#).unwrap();
        assert!(record.latitude.is_none());
        assert!(record.coords().is_none());
    }

    #[test]
    fn test_rule_text_field_priority() {
        let record: SignRecord = serde_json::from_str(
            r#"{
                "sign_description": "NO PARKING MONDAY 8AM-6PM",
                "description": "legacy field"
            }"#,
        )
        .unwrap();
        assert_eq!(record.rule_text(), Some("NO PARKING MONDAY 8AM-6PM"));
    }

    #[test]
    fn test_blank_rule_text_is_none() {
        let record: SignRecord = serde_json::from_str(r#"{"sign_description": "  "}"#).unwrap();
        assert_eq!(record.rule_text(), None);
    }
}
