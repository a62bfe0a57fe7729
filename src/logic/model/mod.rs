//! Model Module - Inference & Classification
//!
//! Keeps the model runtime behind a trait so the pipeline does not care
//! which backend produced the probability.

pub mod inference;
pub mod threshold;

#[cfg(test)]
pub(crate) mod testing;

// Re-export common types
pub use inference::{EngineStatus, InferenceEngine, ModelMetadata, OnnxEngine};
pub use threshold::{classify, PredictionResult, RiskClassifier, RiskLabel, RISK_THRESHOLD};
