//! Inference Engine - ONNX Runtime Integration
//!
//! Loads the trained flood network (exported to ONNX) once at startup and
//! runs one forward pass per assembled tensor.

use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{FloodError, Result};
use crate::logic::features::{ModelInputTensor, MODEL_INPUT_SHAPE};

// ============================================================================
// INFERENCE ENGINE TRAIT
// ============================================================================

/// A loaded model that maps a `(1, 12, 1)` tensor to a probability.
///
/// Implementations must be deterministic for a fixed artifact and input.
pub trait InferenceEngine: Send + Sync {
    fn predict(&self, tensor: &ModelInputTensor) -> Result<f64>;

    /// Short description for logs and status output
    fn describe(&self) -> String;

    /// Runtime statistics, if the backend tracks them
    fn status(&self) -> Option<EngineStatus> {
        None
    }
}

/// Reject tensors that do not match the model input signature
pub fn check_input_shape(tensor: &ModelInputTensor) -> Result<()> {
    if !tensor.has_model_shape() {
        return Err(FloodError::Inference(format!(
            "input shape {:?} does not match model input {:?}",
            tensor.shape(),
            MODEL_INPUT_SHAPE
        )));
    }
    Ok(())
}

/// Reject model outputs that are not a probability
pub fn check_probability(value: f64) -> Result<f64> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(FloodError::Inference(format!(
            "model returned {} which is not a probability",
            value
        )));
    }
    Ok(value)
}

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Model metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_path: String,
    pub sha256: String,
    pub input_name: String,
    pub output_name: String,
    pub input_shape: [usize; 3],
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

/// Engine status for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineStatus {
    pub model_name: String,
    pub inference_device: String,
    pub avg_latency_ms: f32,
    pub inference_count: u64,
}

// ============================================================================
// ONNX IMPLEMENTATION
// ============================================================================

/// ONNX Runtime backed engine.
///
/// A session run needs exclusive access, so calls are serialized behind a
/// mutex; the handle itself can be shared freely.
pub struct OnnxEngine {
    session: Mutex<Session>,
    metadata: ModelMetadata,
    latency_sum_us: AtomicU64,
    inference_count: AtomicU64,
}

impl OnnxEngine {
    /// Load the model artifact, optionally pinning its SHA-256
    pub fn load(model_path: &Path, expected_sha256: Option<&str>) -> Result<Self> {
        log::info!("Loading ONNX model from: {}", model_path.display());

        if !model_path.exists() {
            return Err(FloodError::ModelLoad(format!(
                "Model not found: {}",
                model_path.display()
            )));
        }

        let sha256 = calculate_file_hash(model_path)?;
        if let Some(expected) = expected_sha256 {
            if !expected.eq_ignore_ascii_case(&sha256) {
                return Err(FloodError::ModelLoad(format!(
                    "checksum mismatch for {}: expected {}, got {}",
                    model_path.display(),
                    expected,
                    sha256
                )));
            }
            log::info!("Model checksum verified");
        }

        let session = Session::builder()
            .map_err(|e| FloodError::ModelLoad(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| FloodError::ModelLoad(format!("Failed to set optimization: {}", e)))?
            .commit_from_file(model_path)
            .map_err(|e| FloodError::ModelLoad(format!("Failed to load model: {}", e)))?;

        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .ok_or_else(|| FloodError::ModelLoad("No input defined".to_string()))?;
        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| FloodError::ModelLoad("No output defined".to_string()))?;

        let metadata = ModelMetadata {
            model_path: model_path.display().to_string(),
            sha256,
            input_name,
            output_name,
            input_shape: MODEL_INPUT_SHAPE,
            loaded_at: chrono::Utc::now(),
        };

        log::info!(
            "ONNX model loaded successfully (input={}, output={}, sha256={})",
            metadata.input_name,
            metadata.output_name,
            metadata.sha256
        );

        Ok(Self {
            session: Mutex::new(session),
            metadata,
            latency_sum_us: AtomicU64::new(0),
            inference_count: AtomicU64::new(0),
        })
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    pub fn stats(&self) -> EngineStatus {
        let sum = self.latency_sum_us.load(Ordering::Relaxed);
        let count = self.inference_count.load(Ordering::Relaxed);
        let avg = if count > 0 { (sum as f32 / count as f32) / 1000.0 } else { 0.0 };

        EngineStatus {
            model_name: self.metadata.model_path.clone(),
            inference_device: "ONNX Runtime (CPU)".to_string(),
            avg_latency_ms: avg,
            inference_count: count,
        }
    }
}

impl InferenceEngine for OnnxEngine {
    fn predict(&self, tensor: &ModelInputTensor) -> Result<f64> {
        check_input_shape(tensor)?;
        let start_time = std::time::Instant::now();

        let input_tensor = Value::from_array(tensor.to_f32())
            .map_err(|e| FloodError::Inference(format!("Tensor error: {}", e)))?;

        let probability = {
            let mut session = self.session.lock();
            let outputs = session
                .run(ort::inputs![input_tensor])
                .map_err(|e| FloodError::Inference(format!("Inference failed: {}", e)))?;

            let output = outputs
                .get(&self.metadata.output_name)
                .ok_or_else(|| FloodError::Inference("No output".to_string()))?;

            let (_, data) = output
                .try_extract_tensor::<f32>()
                .map_err(|e| FloodError::Inference(format!("Extract error: {}", e)))?;

            // Sigmoid head: output shape (1, 1)
            let first = data
                .first()
                .copied()
                .ok_or_else(|| FloodError::Inference("Empty output tensor".to_string()))?;
            f64::from(first)
        };

        let elapsed = start_time.elapsed().as_micros() as u64;
        self.latency_sum_us.fetch_add(elapsed, Ordering::Relaxed);
        self.inference_count.fetch_add(1, Ordering::Relaxed);

        check_probability(probability)
    }

    fn describe(&self) -> String {
        format!("onnx:{}", self.metadata.model_path)
    }

    fn status(&self) -> Option<EngineStatus> {
        Some(self.stats())
    }
}

/// SHA-256 of a file, lowercase hex
pub fn calculate_file_hash(path: &Path) -> Result<String> {
    let mut file = fs::File::open(path)
        .map_err(|e| FloodError::ModelLoad(format!("cannot open {}: {}", path.display(), e)))?;

    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = file
            .read(&mut buffer)
            .map_err(|e| FloodError::ModelLoad(format!("cannot read {}: {}", path.display(), e)))?;

        if bytes_read == 0 {
            break;
        }

        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}
