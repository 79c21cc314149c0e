//! Input validation utilities

use crate::constants::MAX_NOTE_LENGTH;
use crate::geo::{LatLng, NYC_BOUNDS};

/// Validate a latitude value
pub fn validate_latitude(lat: f64) -> Result<(), &'static str> {
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err("Latitude must be between -90 and 90");
    }
    Ok(())
}

/// Validate a longitude value
pub fn validate_longitude(lng: f64) -> Result<(), &'static str> {
    if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

/// Validate a coordinate pair and require it inside the NYC service area
pub fn validate_nyc_position(lat: f64, lng: f64) -> Result<(), &'static str> {
    validate_latitude(lat)?;
    validate_longitude(lng)?;
    if !NYC_BOUNDS.contains(LatLng::new(lat, lng)) {
        return Err("Position is outside the New York City service area");
    }
    Ok(())
}

/// Validate a search radius in meters against a configured maximum
pub fn validate_radius(radius_meters: f64, max_meters: f64) -> Result<(), &'static str> {
    if !radius_meters.is_finite() || radius_meters <= 0.0 {
        return Err("Radius must be a positive number of meters");
    }
    if radius_meters > max_meters {
        return Err("Radius exceeds the maximum search radius");
    }
    Ok(())
}

/// Validate a report or reminder note
pub fn validate_note(note: &str) -> Result<(), &'static str> {
    let trimmed = note.trim();
    if trimmed.is_empty() {
        return Err("Note cannot be empty");
    }
    if trimmed.len() > MAX_NOTE_LENGTH as usize {
        return Err("Note exceeds the maximum length");
    }
    Ok(())
}

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_latitude() {
        assert!(validate_latitude(40.7128).is_ok());
        assert!(validate_latitude(-90.0).is_ok());
        assert!(validate_latitude(91.0).is_err());
        assert!(validate_latitude(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_longitude() {
        assert!(validate_longitude(-74.0060).is_ok());
        assert!(validate_longitude(180.0).is_ok());
        assert!(validate_longitude(-180.5).is_err());
    }

    #[test]
    fn test_validate_nyc_position() {
        assert!(validate_nyc_position(40.7128, -74.0060).is_ok());
        // Valid coordinates, but Boston
        assert!(validate_nyc_position(42.3601, -71.0589).is_err());
        assert!(validate_nyc_position(200.0, -74.0).is_err());
    }

    #[test]
    fn test_validate_radius() {
        assert!(validate_radius(500.0, 5000.0).is_ok());
        assert!(validate_radius(0.0, 5000.0).is_err());
        assert!(validate_radius(-10.0, 5000.0).is_err());
        assert!(validate_radius(6000.0, 5000.0).is_err());
    }

    #[test]
    fn test_validate_note() {
        assert!(validate_note("blocked by a hydrant").is_ok());
        assert!(validate_note("   ").is_err());
        assert!(validate_note(&"x".repeat(501)).is_err());
    }

    #[test]
    fn test_sanitize_string() {
        assert_eq!(sanitize_string("  hello\u{0007} world  "), "hello world");
        assert_eq!(sanitize_string("line\nbreak"), "line\nbreak");
    }
}
