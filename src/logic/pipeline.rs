//! Flood Pipeline - Loaded artifacts plus the end-to-end prediction path
//!
//! Scaler and model are loaded once and shared read-only afterwards.
//! Interactive predictions and batch scoring both go through the same
//! assembler, so training-time and serving-time preprocessing stay identical.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::Result;
use crate::logic::batch::{score_all, DatasetRow, ScoredRow};
use crate::logic::features::{assemble, FeatureScaler, FeatureVector, ModelInputTensor, WeatherObservation};
use crate::logic::geo::find_district;
use crate::logic::model::{EngineStatus, InferenceEngine, OnnxEngine, PredictionResult};

#[derive(Clone)]
pub struct FloodPipeline {
    scaler: Arc<FeatureScaler>,
    engine: Arc<dyn InferenceEngine>,
}

impl FloodPipeline {
    pub fn new(scaler: FeatureScaler, engine: Arc<dyn InferenceEngine>) -> Self {
        Self {
            scaler: Arc::new(scaler),
            engine,
        }
    }

    /// Load scaler and model from the configured paths.
    ///
    /// Either failure is fatal for the application.
    pub fn load(config: &AppConfig) -> Result<Self> {
        let scaler = FeatureScaler::load(&config.scaler_path)?;
        let engine = OnnxEngine::load(&config.model_path, config.model_sha256.as_deref())?;

        log::info!("Pipeline ready (scaler={}, engine={})", scaler.kind(), engine.describe());
        Ok(Self::new(scaler, Arc::new(engine)))
    }

    pub fn scaler(&self) -> &FeatureScaler {
        &self.scaler
    }

    pub fn engine(&self) -> &dyn InferenceEngine {
        self.engine.as_ref()
    }

    pub fn engine_status(&self) -> Option<EngineStatus> {
        self.engine.status()
    }

    pub fn assemble(&self, raw: &FeatureVector, month: u32) -> Result<ModelInputTensor> {
        assemble(&self.scaler, raw, month)
    }

    /// Assemble, infer and classify one observation
    pub fn predict_features(&self, raw: &FeatureVector, month: u32) -> Result<PredictionResult> {
        let tensor = self.assemble(raw, month)?;
        let probability = self.engine.predict(&tensor)?;
        let result = PredictionResult::from_probability(probability);

        log::info!("Prediction: {}", result.summary());
        Ok(result)
    }

    /// Predict for a named district using its table coordinates
    pub fn predict_district(
        &self,
        district: &str,
        weather: &WeatherObservation,
        month: u32,
    ) -> Result<PredictionResult> {
        let district = find_district(district)?;
        log::debug!("Predicting for {} ({}, {})", district.name, district.x, district.y);

        let raw = FeatureVector::for_district(district, weather);
        self.predict_features(&raw, month)
    }

    pub fn score_dataset(&self, rows: &[DatasetRow]) -> Result<Vec<ScoredRow>> {
        score_all(&self.scaler, self.engine.as_ref(), rows)
    }
}
