//! Geographic coordinate validation

use crate::error::{FloodError, Result};

/// Ensure a latitude/longitude pair is a valid geographic coordinate
pub fn validate_coordinates(lat: f64, lng: f64) -> Result<()> {
    if !lat.is_finite() || !lng.is_finite() {
        return Err(FloodError::invalid("Coordinates must be numeric values"));
    }
    if !(-90.0..=90.0).contains(&lat) {
        return Err(FloodError::invalid(format!(
            "Invalid latitude: {}. Must be between -90 and 90",
            lat
        )));
    }
    if !(-180.0..=180.0).contains(&lng) {
        return Err(FloodError::invalid(format!(
            "Invalid longitude: {}. Must be between -180 and 180",
            lng
        )));
    }
    Ok(())
}

/// Parse and validate coordinates typed as text
pub fn parse_coordinates(lat: &str, lng: &str) -> Result<(f64, f64)> {
    let parse = |s: &str| {
        s.trim()
            .parse::<f64>()
            .map_err(|_| FloodError::invalid("Coordinates must be numeric values"))
    };
    let (lat, lng) = (parse(lat)?, parse(lng)?);
    validate_coordinates(lat, lng)?;
    Ok((lat, lng))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid() {
        assert!(validate_coordinates(23.8103, 90.4125).is_ok());
        assert!(validate_coordinates(-90.0, 180.0).is_ok());
    }

    #[test]
    fn test_latitude_out_of_range() {
        let err = validate_coordinates(200.0, 90.0).unwrap_err();
        assert!(matches!(err, FloodError::InvalidInput(msg) if msg.contains("latitude")));
    }

    #[test]
    fn test_longitude_out_of_range() {
        assert!(validate_coordinates(23.0, -180.5).is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse_coordinates(" 22.3569", "91.7832 ").unwrap(), (22.3569, 91.7832));
        assert!(parse_coordinates("north", "91").is_err());
        assert!(parse_coordinates("NaN", "91").is_err());
    }
}
