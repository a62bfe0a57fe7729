//! Feature Assembler
//!
//! Single code path from raw features to model input, shared by the
//! interactive prediction and the batch scorer:
//!
//! 1. raw vector in layout order
//! 2. scaler transform
//! 3. cyclical month
//! 4. scaled (10) ++ sin ++ cos
//! 5. reshape to `(1, 12, 1)`

use ndarray::Array3;

use super::layout::{FEATURE_COUNT, MODEL_INPUT_LEN, MODEL_INPUT_SHAPE};
use super::month::CyclicalMonth;
use super::scaler::FeatureScaler;
use super::vector::{FeatureBounds, FeatureVector};
use crate::error::{FloodError, Result};

/// Model input: one sample, 12 sequence steps, 1 channel
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInputTensor {
    data: Array3<f64>,
}

impl ModelInputTensor {
    /// Wrap a flat 12-value sequence
    pub fn from_sequence(values: Vec<f64>) -> Result<Self> {
        let [batch, steps, channels] = MODEL_INPUT_SHAPE;
        let data = Array3::from_shape_vec((batch, steps, channels), values)
            .map_err(|e| FloodError::Inference(format!("Array error: {}", e)))?;
        Ok(Self { data })
    }

    /// Wrap an arbitrary array (shape is checked by the engine)
    pub fn from_array(data: Array3<f64>) -> Self {
        Self { data }
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn has_model_shape(&self) -> bool {
        self.shape() == MODEL_INPUT_SHAPE
    }

    /// Flat values in sequence order
    pub fn values(&self) -> Vec<f64> {
        self.data.iter().copied().collect()
    }

    pub fn as_array(&self) -> &Array3<f64> {
        &self.data
    }

    /// Narrow to the model's float32 input
    pub fn to_f32(&self) -> Array3<f32> {
        self.data.mapv(|v| v as f32)
    }
}

/// Assemble with the interactive input domain
pub fn assemble(scaler: &FeatureScaler, raw: &FeatureVector, month: u32) -> Result<ModelInputTensor> {
    assemble_within(scaler, raw, month, &FeatureBounds::interactive())
}

/// Assemble after validating against an explicit domain
pub fn assemble_within(
    scaler: &FeatureScaler,
    raw: &FeatureVector,
    month: u32,
    bounds: &FeatureBounds,
) -> Result<ModelInputTensor> {
    // Validate everything before touching the scaler
    let cyclical = CyclicalMonth::encode(month)?;
    raw.validate(bounds)?;

    let scaled = scaler.transform(raw);

    let mut sequence = Vec::with_capacity(MODEL_INPUT_LEN);
    sequence.extend_from_slice(scaled.as_slice());
    sequence.extend_from_slice(&cyclical.as_pair());
    debug_assert_eq!(sequence.len(), FEATURE_COUNT + 2);

    log::debug!(
        "Assembled input: month={} features={}",
        month,
        raw.to_log_entry()
    );

    ModelInputTensor::from_sequence(sequence)
}
