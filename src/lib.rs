//! FloodGuard Core - Flood Risk Feature Pipeline
//!
//! Turns district weather observations into the exact tensor the trained
//! flood model expects, runs inference and classifies the result.
//!
//! ## Layout
//! - `logic/features/` - Feature layout, scaler, month encoder, assembler
//! - `logic/geo/` - District coordinate table, coordinate validation
//! - `logic/model/` - Inference engine (ONNX) and risk classifier
//! - `logic/batch/` - Historical dataset scoring for the risk map
//! - `logic/subscription/` - Alert subscriptions (append-only store)
//! - `api/` - In-process commands consumed by the presentation layer

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod logic;

pub use error::{FloodError, Result};
pub use logic::features::{assemble, FeatureScaler, FeatureVector, ModelInputTensor};
pub use logic::model::{classify, InferenceEngine, OnnxEngine, PredictionResult, RiskLabel};
pub use logic::pipeline::FloodPipeline;
