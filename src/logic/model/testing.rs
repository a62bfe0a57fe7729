//! Deterministic engines standing in for the ONNX artifact in tests

use std::sync::atomic::{AtomicUsize, Ordering};

use super::inference::{check_input_shape, InferenceEngine};
use crate::error::{FloodError, Result};
use crate::logic::features::{FeatureScaler, ModelInputTensor, FEATURE_COUNT, MODEL_INPUT_LEN};

/// Logistic model over the flattened tensor
pub struct LogisticStub {
    pub weights: [f64; MODEL_INPUT_LEN],
    pub bias: f64,
    calls: AtomicUsize,
}

impl LogisticStub {
    pub fn new(weights: [f64; MODEL_INPUT_LEN], bias: f64) -> Self {
        Self {
            weights,
            bias,
            calls: AtomicUsize::new(0),
        }
    }

    /// Rainfall-driven: more scaled rain, higher probability
    pub fn rain_sensitive() -> Self {
        let mut weights = [0.0; MODEL_INPUT_LEN];
        weights[2] = 8.0;
        weights[3] = 1.0;
        Self::new(weights, -2.0)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl InferenceEngine for LogisticStub {
    fn predict(&self, tensor: &ModelInputTensor) -> Result<f64> {
        check_input_shape(tensor)?;
        self.calls.fetch_add(1, Ordering::SeqCst);

        let z: f64 = tensor
            .values()
            .iter()
            .zip(self.weights.iter())
            .map(|(x, w)| x * w)
            .sum::<f64>()
            + self.bias;
        Ok(1.0 / (1.0 + (-z).exp()))
    }

    fn describe(&self) -> String {
        "logistic-stub".to_string()
    }
}

/// Engine whose runtime always fails
pub struct BrokenEngine;

impl InferenceEngine for BrokenEngine {
    fn predict(&self, _tensor: &ModelInputTensor) -> Result<f64> {
        Err(FloodError::Inference("runtime unavailable".to_string()))
    }

    fn describe(&self) -> String {
        "broken".to_string()
    }
}

/// Min/max scaler fitted on the prediction form ranges
pub fn form_range_scaler() -> FeatureScaler {
    let data_min = [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 20.0, 88.0, 0.0];
    let data_max = [50.0, 50.0, 500.0, 100.0, 100.0, 100.0, 24.0, 27.0, 93.0, 5000.0];
    let mut scale = [0.0; FEATURE_COUNT];
    let mut min = [0.0; FEATURE_COUNT];
    for i in 0..FEATURE_COUNT {
        scale[i] = 1.0 / (data_max[i] - data_min[i]);
        min[i] = -data_min[i] * scale[i];
    }
    FeatureScaler::min_max(scale, min).unwrap()
}
