//! Feature Scaler - Fitted per-column normalization
//!
//! The scaler is fitted offline together with the model and shipped as a JSON
//! artifact. Two fitted kinds are supported, with the same arithmetic as the
//! training side so scaled values match bit-for-bit:
//!
//! - `min_max`:  `x * scale + min`
//! - `standard`: `(x - mean) / scale`
//!
//! ```json
//! {
//!   "kind": "min_max",
//!   "feature_names": ["Max Temp", "Min Temp", "...", "ALT"],
//!   "scale": [0.05, ...],
//!   "min": [-0.4, ...]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::layout::{self, FEATURE_COUNT};
use super::vector::FeatureVector;
use crate::error::{FloodError, Result};

// ============================================================================
// ARTIFACT FORMAT
// ============================================================================

/// Fitted parameters, tagged by scaler kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScalerParams {
    MinMax { scale: Vec<f64>, min: Vec<f64> },
    Standard { mean: Vec<f64>, scale: Vec<f64> },
}

/// On-disk scaler artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerArtifact {
    /// Columns the scaler was fitted on, in fit order
    pub feature_names: Vec<String>,
    /// Optional layout hash stamped at export time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_hash: Option<u32>,
    #[serde(flatten)]
    pub params: ScalerParams,
}

// ============================================================================
// SCALER HANDLE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
enum Transform {
    MinMax {
        scale: [f64; FEATURE_COUNT],
        min: [f64; FEATURE_COUNT],
    },
    Standard {
        mean: [f64; FEATURE_COUNT],
        scale: [f64; FEATURE_COUNT],
    },
}

/// Validated, immutable scaler. Loaded once and shared.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureScaler {
    transform: Transform,
}

/// Scaled features in layout order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledFeatureVector(pub [f64; FEATURE_COUNT]);

impl ScaledFeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl FeatureScaler {
    /// Build a min/max scaler from fitted `scale_` and `min_`
    pub fn min_max(scale: [f64; FEATURE_COUNT], min: [f64; FEATURE_COUNT]) -> Result<Self> {
        check_finite("scale", &scale)?;
        check_finite("min", &min)?;
        Ok(Self {
            transform: Transform::MinMax { scale, min },
        })
    }

    /// Build a standard scaler from fitted `mean_` and `scale_`
    pub fn standard(mean: [f64; FEATURE_COUNT], scale: [f64; FEATURE_COUNT]) -> Result<Self> {
        check_finite("mean", &mean)?;
        check_finite("scale", &scale)?;
        if let Some(i) = scale.iter().position(|s| *s == 0.0) {
            return Err(FloodError::ScalerLoad(format!(
                "zero scale for column {}",
                layout::FEATURE_LAYOUT[i]
            )));
        }
        Ok(Self {
            transform: Transform::Standard { mean, scale },
        })
    }

    /// Validate an artifact against the feature layout
    pub fn from_artifact(artifact: ScalerArtifact) -> Result<Self> {
        layout::validate_columns(&artifact.feature_names)
            .map_err(|e| FloodError::ScalerLoad(e.to_string()))?;

        if let Some(hash) = artifact.layout_hash {
            layout::validate_hash(hash).map_err(|e| FloodError::ScalerLoad(e.to_string()))?;
        }

        match artifact.params {
            ScalerParams::MinMax { scale, min } => {
                Self::min_max(to_columns("scale", scale)?, to_columns("min", min)?)
            }
            ScalerParams::Standard { mean, scale } => {
                Self::standard(to_columns("mean", mean)?, to_columns("scale", scale)?)
            }
        }
    }

    /// Parse and validate a JSON artifact
    pub fn from_json(json: &str) -> Result<Self> {
        let artifact: ScalerArtifact = serde_json::from_str(json)
            .map_err(|e| FloodError::ScalerLoad(format!("corrupt scaler artifact: {}", e)))?;
        Self::from_artifact(artifact)
    }

    /// Load the scaler artifact from disk
    pub fn load(path: &Path) -> Result<Self> {
        log::info!("Loading scaler from: {}", path.display());

        let json = std::fs::read_to_string(path).map_err(|e| {
            FloodError::ScalerLoad(format!("cannot read {}: {}", path.display(), e))
        })?;
        let scaler = Self::from_json(&json)?;

        log::info!("Scaler loaded ({})", scaler.kind());
        Ok(scaler)
    }

    /// Export back into the artifact format
    pub fn to_artifact(&self) -> ScalerArtifact {
        let params = match self.transform {
            Transform::MinMax { scale, min } => ScalerParams::MinMax {
                scale: scale.to_vec(),
                min: min.to_vec(),
            },
            Transform::Standard { mean, scale } => ScalerParams::Standard {
                mean: mean.to_vec(),
                scale: scale.to_vec(),
            },
        };
        ScalerArtifact {
            feature_names: layout::FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
            layout_hash: Some(layout::layout_hash()),
            params,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self.transform {
            Transform::MinMax { .. } => "min_max",
            Transform::Standard { .. } => "standard",
        }
    }

    /// Scale raw values given in layout order
    pub fn transform_values(&self, raw: &[f64; FEATURE_COUNT]) -> ScaledFeatureVector {
        let mut out = [0.0; FEATURE_COUNT];
        match &self.transform {
            Transform::MinMax { scale, min } => {
                for i in 0..FEATURE_COUNT {
                    out[i] = raw[i] * scale[i] + min[i];
                }
            }
            Transform::Standard { mean, scale } => {
                for i in 0..FEATURE_COUNT {
                    out[i] = (raw[i] - mean[i]) / scale[i];
                }
            }
        }
        ScaledFeatureVector(out)
    }

    /// Scale a feature vector
    pub fn transform(&self, raw: &FeatureVector) -> ScaledFeatureVector {
        self.transform_values(&raw.to_array())
    }
}

fn to_columns(name: &str, values: Vec<f64>) -> Result<[f64; FEATURE_COUNT]> {
    let len = values.len();
    <[f64; FEATURE_COUNT]>::try_from(values).map_err(|_| {
        FloodError::ScalerLoad(format!(
            "{} has {} values, expected {}",
            name, len, FEATURE_COUNT
        ))
    })
}

fn check_finite(name: &str, values: &[f64]) -> Result<()> {
    if let Some(i) = values.iter().position(|v| !v.is_finite()) {
        return Err(FloodError::ScalerLoad(format!(
            "{} for column {} is not finite",
            name,
            layout::FEATURE_LAYOUT[i]
        )));
    }
    Ok(())
}
