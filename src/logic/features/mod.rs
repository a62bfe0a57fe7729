//! Features Module - Feature Preparation
//!
//! Raw observation → fixed-order vector → scaled → + cyclical month →
//! `(1, 12, 1)` model input.

pub mod assembler;
pub mod layout;
pub mod month;
pub mod scaler;
pub mod vector;

#[cfg(test)]
mod tests;

// Re-export common types
pub use assembler::{assemble, assemble_within, ModelInputTensor};
pub use layout::{FEATURE_COUNT, FEATURE_LAYOUT, MODEL_INPUT_LEN, MODEL_INPUT_SHAPE};
pub use month::CyclicalMonth;
pub use scaler::{FeatureScaler, ScaledFeatureVector, ScalerArtifact, ScalerParams};
pub use vector::{FeatureBounds, FeatureVector, WeatherObservation};
