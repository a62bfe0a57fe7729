//! Batch Scorer
//!
//! Scores every row of the historical dataset for the risk map. Goes through
//! the same assembler as interactive predictions.
//!
//! Fail-fast: one bad row aborts the whole batch, so the map never renders
//! from a partial result.

use serde::{Deserialize, Serialize};

use super::dataset::{is_excluded, DatasetRow};
use crate::error::{FloodError, Result};
use crate::logic::features::{assemble_within, FeatureBounds, FeatureScaler, ModelInputTensor};
use crate::logic::model::{classify, InferenceEngine, RiskLabel};

/// One scored dataset row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRow {
    /// Index of the row in the input dataset (before exclusion)
    pub index: usize,
    pub district: String,
    pub month: u32,
    pub x_cor: f64,
    pub y_cor: f64,
    pub probability: f64,
}

impl ScoredRow {
    pub fn label(&self) -> RiskLabel {
        classify(self.probability)
    }
}

/// Assemble one dataset row into model input
pub fn assemble_row(scaler: &FeatureScaler, row: &DatasetRow) -> Result<ModelInputTensor> {
    let month = row.month_number()?;
    assemble_within(scaler, &row.features(), month, &FeatureBounds::historical())
}

fn row_error(index: usize, row: &DatasetRow, err: FloodError) -> FloodError {
    FloodError::Inference(format!("row {} ({}): {}", index, row.district, err))
}

/// Score all rows, excluding the known-bad stations.
///
/// Output order matches input order.
pub fn score_all(
    scaler: &FeatureScaler,
    engine: &dyn InferenceEngine,
    rows: &[DatasetRow],
) -> Result<Vec<ScoredRow>> {
    let kept: Vec<(usize, &DatasetRow)> = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| !is_excluded(&row.district))
        .collect();

    let excluded = rows.len() - kept.len();
    if excluded > 0 {
        log::info!("Excluded {} rows from excluded stations", excluded);
    }

    let tensors = assemble_rows(scaler, &kept)?;

    let mut scored = Vec::with_capacity(kept.len());
    for ((index, row), tensor) in kept.iter().zip(&tensors) {
        let probability = engine
            .predict(tensor)
            .map_err(|e| row_error(*index, row, e))?;

        scored.push(ScoredRow {
            index: *index,
            district: row.district.clone(),
            month: row.month_number().map_err(|e| row_error(*index, row, e))?,
            x_cor: row.x_cor,
            y_cor: row.y_cor,
            probability,
        });
    }

    log::info!(
        "Batch scoring complete: {} rows via {}",
        scored.len(),
        engine.describe()
    );
    Ok(scored)
}

#[cfg(not(feature = "threading"))]
fn assemble_rows(scaler: &FeatureScaler, kept: &[(usize, &DatasetRow)]) -> Result<Vec<ModelInputTensor>> {
    kept.iter()
        .map(|(index, row)| assemble_row(scaler, row).map_err(|e| row_error(*index, row, e)))
        .collect()
}

#[cfg(feature = "threading")]
fn assemble_rows(scaler: &FeatureScaler, kept: &[(usize, &DatasetRow)]) -> Result<Vec<ModelInputTensor>> {
    use rayon::prelude::*;

    // Indexed collect keeps input order
    kept.par_iter()
        .map(|(index, row)| assemble_row(scaler, row).map_err(|e| row_error(*index, row, e)))
        .collect()
}
