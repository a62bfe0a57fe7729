//! Integration Tests for the feature pipeline
//!
//! Scaler artifact on disk → assembler → tensor, end to end.

use super::layout::FEATURE_LAYOUT;
use super::{assemble, FeatureScaler, FeatureVector, WeatherObservation};
use crate::logic::geo::{lookup_district, DISTRICTS};
use crate::logic::model::testing::form_range_scaler;
use approx::assert_abs_diff_eq;

#[test]
fn test_artifact_round_trip_then_assemble() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scaler.json");
    let fitted = form_range_scaler();
    std::fs::write(&path, serde_json::to_vec_pretty(&fitted.to_artifact()).unwrap()).unwrap();

    let loaded = FeatureScaler::load(&path).unwrap();
    let raw = FeatureVector::for_district(lookup_district("Habiganj").unwrap(), &WeatherObservation::default());

    let from_disk = assemble(&loaded, &raw, 7).unwrap();
    let in_memory = assemble(&fitted, &raw, 7).unwrap();
    assert_eq!(from_disk, in_memory);
}

#[test]
fn test_form_values_scale_into_unit_range() {
    let scaler = form_range_scaler();
    for district in DISTRICTS {
        let raw = FeatureVector::for_district(district, &WeatherObservation::default());
        let tensor = assemble(&scaler, &raw, 3).unwrap();
        for (name, v) in FEATURE_LAYOUT.iter().zip(tensor.values()) {
            assert!((0.0..=1.0).contains(&v), "{} of {} scaled to {}", name, district.name, v);
        }
    }
}

#[test]
fn test_dhaka_reference_values() {
    let scaler = form_range_scaler();
    let raw = FeatureVector::for_district(lookup_district("Dhaka").unwrap(), &WeatherObservation::default());
    let values = assemble(&scaler, &raw, 6).unwrap().values();

    assert_abs_diff_eq!(values[0], 0.5, epsilon = 1e-12); // 25 / 50
    assert_abs_diff_eq!(values[2], 0.1, epsilon = 1e-12); // 50 / 500
    assert_abs_diff_eq!(values[9], 0.02, epsilon = 1e-12); // 100 / 5000
    assert_abs_diff_eq!(values[10], 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(values[11], -1.0, epsilon = 1e-9);
}
