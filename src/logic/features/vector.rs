//! Feature Vector - Raw model features in layout order
//!
//! Uses the centralized layout from `layout.rs` for column ordering and
//! enforces the numeric domain of each field before anything is scaled.

use serde::{Deserialize, Serialize};

use super::layout::{FEATURE_COUNT, FEATURE_LAYOUT};
use crate::error::{FloodError, Result};
use crate::logic::geo::District;

// ============================================================================
// RAW FEATURE VECTOR
// ============================================================================

/// One observation in raw (unscaled) units.
///
/// Field order mirrors `FEATURE_LAYOUT`. Never build the model input from
/// struct field order; always go through [`FeatureVector::to_array`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub max_temp: f64,
    pub min_temp: f64,
    pub rainfall: f64,
    pub relative_humidity: f64,
    pub wind_speed: f64,
    pub cloud_coverage: f64,
    pub bright_sunshine: f64,
    pub x_cor: f64,
    pub y_cor: f64,
    pub altitude: f64,
}

/// Weather values entered for a district (everything except coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub max_temp: f64,
    pub min_temp: f64,
    pub rainfall: f64,
    pub relative_humidity: f64,
    pub wind_speed: f64,
    pub cloud_coverage: f64,
    pub bright_sunshine: f64,
    pub altitude: f64,
}

impl Default for WeatherObservation {
    /// Form defaults of the prediction page
    fn default() -> Self {
        Self {
            max_temp: 25.0,
            min_temp: 15.0,
            rainfall: 50.0,
            relative_humidity: 60.0,
            wind_speed: 10.0,
            cloud_coverage: 30.0,
            bright_sunshine: 6.0,
            altitude: 100.0,
        }
    }
}

impl FeatureVector {
    /// Enrich an observation with a district's coordinates
    pub fn for_district(district: &District, weather: &WeatherObservation) -> Self {
        Self {
            max_temp: weather.max_temp,
            min_temp: weather.min_temp,
            rainfall: weather.rainfall,
            relative_humidity: weather.relative_humidity,
            wind_speed: weather.wind_speed,
            cloud_coverage: weather.cloud_coverage,
            bright_sunshine: weather.bright_sunshine,
            x_cor: district.x,
            y_cor: district.y,
            altitude: weather.altitude,
        }
    }

    /// Values in exact `FEATURE_LAYOUT` order
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.max_temp,
            self.min_temp,
            self.rainfall,
            self.relative_humidity,
            self.wind_speed,
            self.cloud_coverage,
            self.bright_sunshine,
            self.x_cor,
            self.y_cor,
            self.altitude,
        ]
    }

    /// Get feature by name
    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        super::layout::feature_index(name).map(|i| self.to_array()[i])
    }

    /// Check every field against a domain
    pub fn validate(&self, bounds: &FeatureBounds) -> Result<()> {
        for ((name, value), (min, max)) in FEATURE_LAYOUT
            .iter()
            .zip(self.to_array())
            .zip(bounds.ranges)
        {
            if !value.is_finite() {
                return Err(FloodError::invalid(format!("{} is not a finite number", name)));
            }
            if value < min || value > max {
                return Err(FloodError::invalid(format!(
                    "{} = {} is outside [{}, {}]",
                    name, value, min, max
                )));
            }
        }
        Ok(())
    }

    /// Convert to JSON for logging
    pub fn to_log_entry(&self) -> serde_json::Value {
        serde_json::Value::Object(
            FEATURE_LAYOUT
                .iter()
                .zip(self.to_array())
                .map(|(name, value)| (name.to_string(), serde_json::json!(value)))
                .collect(),
        )
    }
}

// ============================================================================
// FEATURE DOMAINS
// ============================================================================

/// Inclusive `(min, max)` per feature, in layout order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureBounds {
    pub ranges: [(f64, f64); FEATURE_COUNT],
}

impl FeatureBounds {
    /// Ranges offered by the prediction form
    pub const fn interactive() -> Self {
        Self {
            ranges: [
                (0.0, 50.0),     // Max Temp
                (0.0, 50.0),     // Min Temp
                (0.0, 500.0),    // Rainfall
                (0.0, 100.0),    // Relative Humidity
                (0.0, 100.0),    // Wind Speed
                (0.0, 100.0),    // Cloud Coverage
                (0.0, 24.0),     // Bright Sunshine
                (-90.0, 90.0),   // X_COR
                (-180.0, 180.0), // Y_COR
                (0.0, 5000.0),   // ALT
            ],
        }
    }

    /// Physically plausible station records.
    ///
    /// Monthly rainfall totals in the historical dataset exceed the form's
    /// 500 mm cap during the monsoon, so the dataset is checked against these.
    pub const fn historical() -> Self {
        Self {
            ranges: [
                (-20.0, 60.0),
                (-20.0, 60.0),
                (0.0, 5000.0),
                (0.0, 100.0),
                (0.0, 200.0),
                (0.0, 100.0),
                (0.0, 24.0),
                (-90.0, 90.0),   // X_COR is station latitude
                (-180.0, 180.0), // Y_COR is station longitude
                (-500.0, 9000.0),
            ],
        }
    }
}

impl Default for FeatureBounds {
    fn default() -> Self {
        Self::interactive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::geo::lookup_district;

    fn dhaka_vector() -> FeatureVector {
        let dhaka = lookup_district("Dhaka").unwrap();
        FeatureVector::for_district(dhaka, &WeatherObservation::default())
    }

    #[test]
    fn test_array_follows_layout() {
        let v = dhaka_vector();
        let values = v.to_array();
        assert_eq!(values[0], 25.0);
        assert_eq!(values[2], 50.0);
        assert_eq!(values[7], 23.810331);
        assert_eq!(values[8], 90.412521);
        assert_eq!(values[9], 100.0);
        assert_eq!(v.get_by_name("Relative Humidity"), Some(60.0));
        assert_eq!(v.get_by_name("Month"), None);
    }

    #[test]
    fn test_validate_defaults() {
        assert!(dhaka_vector().validate(&FeatureBounds::interactive()).is_ok());
    }

    #[test]
    fn test_validate_out_of_range() {
        let mut v = dhaka_vector();
        v.rainfall = 650.0;
        let err = v.validate(&FeatureBounds::interactive()).unwrap_err();
        assert!(matches!(err, FloodError::InvalidInput(msg) if msg.contains("Rainfall")));

        // Monsoon totals are fine for historical records
        assert!(v.validate(&FeatureBounds::historical()).is_ok());
    }

    #[test]
    fn test_validate_negative_and_nan() {
        let mut v = dhaka_vector();
        v.wind_speed = -1.0;
        assert!(v.validate(&FeatureBounds::interactive()).is_err());

        let mut v = dhaka_vector();
        v.bright_sunshine = f64::NAN;
        assert!(v.validate(&FeatureBounds::interactive()).is_err());
    }

    #[test]
    fn test_historical_rejects_impossible_coordinates() {
        let mut v = dhaka_vector();
        v.x_cor = 200.0;
        let err = v.validate(&FeatureBounds::historical()).unwrap_err();
        assert!(matches!(err, FloodError::InvalidInput(msg) if msg.contains("X_COR")));

        let mut v = dhaka_vector();
        v.y_cor = 9999.0;
        assert!(v.validate(&FeatureBounds::historical()).is_err());
    }

    #[test]
    fn test_log_entry_named() {
        let entry = dhaka_vector().to_log_entry();
        assert_eq!(entry["Max Temp"], 25.0);
        assert_eq!(entry["ALT"], 100.0);
    }
}
