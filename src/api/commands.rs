//! Commands - API for the presentation layer
//!
//! Every command takes the shared [`AppState`] and returns a serializable
//! value, with errors flattened to strings for the caller.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::state::AppState;
use crate::logic::batch::{self, MapPoint, RiskAlert, ScoredRow, MAP_CENTER, MAP_ZOOM};
use crate::logic::features::layout::LayoutInfo;
use crate::logic::features::WeatherObservation;
use crate::logic::geo::{self, District};
use crate::logic::model::{classify, RiskLabel};
use crate::logic::pipeline::FloodPipeline;
use crate::logic::subscription::{Subscription, SubscriptionStore};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Prediction form input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub district: String,
    pub month: u32,
    #[serde(flatten)]
    pub weather: WeatherObservation,
}

/// Prediction shown to the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub district: String,
    pub lat: f64,
    pub lng: f64,
    pub month: u32,
    pub probability: f64,
    pub label: RiskLabel,
    pub summary: String,
}

/// Everything the map page needs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskMap {
    pub center: (f64, f64),
    pub zoom: u8,
    pub points: Vec<MapPoint>,
    pub geojson: serde_json::Value,
    pub alerts: Vec<RiskAlert>,
}

// ============================================================================
// MODEL COMMANDS
// ============================================================================

/// Load scaler and model from the configured paths. Only once per process.
pub fn load_model(state: &AppState) -> Result<bool, String> {
    if state.is_loaded() {
        return Err("scaler and model are already loaded".to_string());
    }
    let pipeline = FloodPipeline::load(&state.config).map_err(|e| e.to_string())?;
    state.install(pipeline).map_err(|e| e.to_string())?;
    Ok(true)
}

pub fn is_model_loaded(state: &AppState) -> Result<bool, String> {
    Ok(state.is_loaded())
}

/// Runtime status of the loaded engine
pub fn get_engine_status(state: &AppState) -> Result<serde_json::Value, String> {
    let pipeline = state.pipeline().map_err(|e| e.to_string())?;
    let status = pipeline.engine_status();

    Ok(serde_json::json!({
        "engine": pipeline.engine().describe(),
        "scaler": pipeline.scaler().kind(),
        "status": status,
        "layout": LayoutInfo::current(),
    }))
}

// ============================================================================
// PREDICTION COMMANDS
// ============================================================================

/// Run one prediction from the form input
pub fn run_prediction(state: &AppState, request: PredictionRequest) -> Result<PredictionResponse, String> {
    let district = geo::find_district(&request.district).map_err(|e| e.to_string())?;
    geo::validate_coordinates(district.x, district.y).map_err(|e| e.to_string())?;

    let pipeline = state.pipeline().map_err(|e| e.to_string())?;
    let result = pipeline
        .predict_district(district.name, &request.weather, request.month)
        .map_err(|e| e.to_string())?;

    Ok(PredictionResponse {
        district: district.name.to_string(),
        lat: district.x,
        lng: district.y,
        month: request.month,
        probability: result.probability,
        label: result.label,
        summary: result.summary(),
    })
}

/// Label and marker color for a probability
pub fn classify_probability(probability: f64) -> Result<serde_json::Value, String> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(format!("probability must be in [0, 1], got {}", probability));
    }
    let label = classify(probability);
    let (r, g, b) = label.color();

    Ok(serde_json::json!({
        "label": label,
        "color": format!("#{:02x}{:02x}{:02x}", r, g, b),
    }))
}

// ============================================================================
// MAP COMMANDS
// ============================================================================

fn dataset_path(state: &AppState, path: Option<String>) -> PathBuf {
    path.map(PathBuf::from)
        .unwrap_or_else(|| state.config.dataset_path.clone())
}

/// Score the historical dataset (configured path unless overridden)
pub fn score_dataset(state: &AppState, path: Option<String>) -> Result<Vec<ScoredRow>, String> {
    let pipeline = state.pipeline().map_err(|e| e.to_string())?;
    let rows = batch::load_dataset(&dataset_path(state, path)).map_err(|e| e.to_string())?;
    pipeline.score_dataset(&rows).map_err(|e| e.to_string())
}

/// Scored dataset as map points, GeoJSON and alerts
pub fn get_risk_map(state: &AppState, path: Option<String>) -> Result<RiskMap, String> {
    let scored = score_dataset(state, path)?;
    let points = batch::map_points(&scored);

    Ok(RiskMap {
        center: MAP_CENTER,
        zoom: MAP_ZOOM,
        geojson: batch::to_geojson(&points),
        alerts: batch::risk_alerts(&scored),
        points,
    })
}

// ============================================================================
// REFERENCE DATA COMMANDS
// ============================================================================

pub fn list_districts() -> Result<Vec<District>, String> {
    Ok(geo::DISTRICTS.to_vec())
}

pub fn get_layout_info() -> Result<LayoutInfo, String> {
    Ok(LayoutInfo::current())
}

/// Check a user supplied coordinate pair
pub fn validate_location(lat: String, lng: String) -> Result<serde_json::Value, String> {
    let (lat, lng) = geo::parse_coordinates(&lat, &lng).map_err(|e| e.to_string())?;
    Ok(serde_json::json!({ "lat": lat, "lng": lng }))
}

// ============================================================================
// SUBSCRIPTION COMMANDS
// ============================================================================

pub fn subscribe(state: &AppState, email: String, location: String) -> Result<bool, String> {
    let subscription = Subscription::new(&email, &location).map_err(|e| e.to_string())?;
    state
        .subscriptions()
        .save(&subscription)
        .map_err(|e| e.to_string())?;
    Ok(true)
}
