//! Command tests against a stub-backed pipeline

use std::sync::Arc;

use super::*;
use crate::config::AppConfig;
use crate::logic::features::WeatherObservation;
use crate::logic::model::testing::{form_range_scaler, LogisticStub};
use crate::logic::model::RiskLabel;
use crate::logic::pipeline::FloodPipeline;

const DATASET: &str = "\
Station Names,Month,Max Temp,Min Temp,Rainfall,Relative Humidity,Wind Speed,Cloud Coverage,Bright Sunshine,X_COR,Y_COR,ALT
Barisal,1,29.4,12.2,0,68,0.45,0.6,7.8,22.701002,90.353451,4
Ishurdi,2,33.9,15.0,14,61,0.5,1.0,8.0,24.1,89.0,14
Sylhet,7,31.4,25.1,820,87,1.1,6.9,3.0,24.894930,91.868706,35
";

fn test_config(dir: &tempfile::TempDir) -> AppConfig {
    AppConfig {
        model_path: dir.path().join("flood_model.onnx"),
        scaler_path: dir.path().join("scaler.json"),
        dataset_path: dir.path().join("flood.csv"),
        data_dir: dir.path().join("data"),
        model_sha256: None,
    }
}

fn loaded_state(dir: &tempfile::TempDir) -> AppState {
    let pipeline = FloodPipeline::new(form_range_scaler(), Arc::new(LogisticStub::rain_sensitive()));
    AppState::with_pipeline(test_config(dir), pipeline)
}

fn dhaka_request(month: u32) -> PredictionRequest {
    PredictionRequest {
        district: "Dhaka".to_string(),
        month,
        weather: WeatherObservation::default(),
    }
}

#[test]
fn test_prediction_response() {
    let dir = tempfile::tempdir().unwrap();
    let state = loaded_state(&dir);

    let response = run_prediction(&state, dhaka_request(6)).unwrap();
    assert_eq!(response.district, "Dhaka");
    assert_eq!(response.lat, 23.810331);
    assert_eq!(response.label, RiskLabel::Low);
    assert!(response.summary.starts_with("Low Risk ("));
}

#[test]
fn test_prediction_request_from_form_json() {
    let json = r#"{
        "district": "Habiganj", "month": 7,
        "max_temp": 31, "min_temp": 25, "rainfall": 450,
        "relative_humidity": 95, "wind_speed": 10, "cloud_coverage": 80,
        "bright_sunshine": 3, "altitude": 35
    }"#;
    let request: PredictionRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.weather.rainfall, 450.0);

    let dir = tempfile::tempdir().unwrap();
    let response = run_prediction(&loaded_state(&dir), request).unwrap();
    assert_eq!(response.label, RiskLabel::High);
}

#[test]
fn test_invalid_inputs_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let state = loaded_state(&dir);

    assert!(run_prediction(&state, dhaka_request(13)).is_err());

    let mut request = dhaka_request(6);
    request.district = "Atlantis".to_string();
    assert!(run_prediction(&state, request).is_err());
}

#[test]
fn test_commands_need_loaded_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::new(test_config(&dir));

    assert!(!is_model_loaded(&state).unwrap());
    assert!(run_prediction(&state, dhaka_request(6)).is_err());
    assert!(get_engine_status(&state).is_err());

    // Artifacts are missing on disk
    assert!(load_model(&state).is_err());
    assert!(!state.is_loaded());
}

#[test]
fn test_loaded_pipeline_cannot_be_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let state = loaded_state(&dir);

    let other = FloodPipeline::new(form_range_scaler(), Arc::new(LogisticStub::new([0.0; 12], 5.0)));
    assert!(matches!(state.install(other), Err(crate::error::FloodError::InvalidInput(_))));
    assert!(load_model(&state).is_err());

    // Original engine still serves predictions
    assert_eq!(run_prediction(&state, dhaka_request(6)).unwrap().label, RiskLabel::Low);
}

#[test]
fn test_install_once_on_empty_state() {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::new(test_config(&dir));

    let pipeline = FloodPipeline::new(form_range_scaler(), Arc::new(LogisticStub::rain_sensitive()));
    state.install(pipeline.clone()).unwrap();
    assert!(state.is_loaded());
    assert!(state.install(pipeline).is_err());
}

#[test]
fn test_risk_map_from_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let state = loaded_state(&dir);
    std::fs::write(&state.config.dataset_path, DATASET).unwrap();

    let map = get_risk_map(&state, None).unwrap();
    assert_eq!(map.points.len(), 2);
    assert_eq!(map.center, (23.6850, 90.3563));
    assert_eq!(map.geojson["features"].as_array().unwrap().len(), 2);
    assert_eq!(map.alerts.len(), 1);
    assert_eq!(map.alerts[0].district, "Sylhet");
}

#[test]
fn test_score_dataset_override_path() {
    let dir = tempfile::tempdir().unwrap();
    let state = loaded_state(&dir);
    let other = dir.path().join("other.csv");
    std::fs::write(&other, DATASET).unwrap();

    let scored = score_dataset(&state, Some(other.display().to_string())).unwrap();
    assert_eq!(scored.len(), 2);
    assert!(score_dataset(&state, None).is_err());
}

#[test]
fn test_subscribe_writes_record() {
    let dir = tempfile::tempdir().unwrap();
    let state = loaded_state(&dir);

    assert!(subscribe(&state, "user@example.com".into(), "Dhaka".into()).unwrap());
    assert!(subscribe(&state, "bad".into(), "Dhaka".into()).is_err());
    assert!(subscribe(&state, "user@example.com".into(), "".into()).is_err());

    let stored = state.subscriptions().load_all().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].email, "user@example.com");
}

#[test]
fn test_reference_commands() {
    assert_eq!(list_districts().unwrap().len(), 59);
    assert_eq!(get_layout_info().unwrap().input_shape, [1, 12, 1]);

    let colored = classify_probability(0.5).unwrap();
    assert_eq!(colored["label"], "High Risk");
    assert_eq!(colored["color"], "#c0392b");
    assert!(classify_probability(1.5).is_err());

    assert!(validate_location("23.8".into(), "90.4".into()).is_ok());
    assert!(validate_location("200".into(), "90.4".into()).is_err());
}

#[test]
fn test_engine_status_for_stub() {
    let dir = tempfile::tempdir().unwrap();
    let status = get_engine_status(&loaded_state(&dir)).unwrap();
    assert_eq!(status["engine"], "logistic-stub");
    assert_eq!(status["scaler"], "min_max");
    assert!(status["status"].is_null());
}
