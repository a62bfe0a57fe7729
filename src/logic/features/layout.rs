//! Feature Layout - Centralized Feature Definition
//!
//! **CRITICAL: This file controls the feature schema**
//!
//! The scaler was fitted on exactly this column order and the model was
//! trained on exactly this tensor layout. Any reordering silently corrupts
//! predictions.
//!
//! ## Rules (NEVER break these):
//! 1. Add feature → increment FEATURE_VERSION
//! 2. Change order → increment FEATURE_VERSION
//! 3. Remove feature → increment FEATURE_VERSION

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
/// MUST be incremented when layout changes
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Feature names in exact order they appear in the vector.
/// Names match the column headers the scaler was fitted on.
pub const FEATURE_LAYOUT: &[&str] = &[
    // === Weather (0-6) ===
    "Max Temp",          // 0: Maximum temperature (°C)
    "Min Temp",          // 1: Minimum temperature (°C)
    "Rainfall",          // 2: Rainfall (mm)
    "Relative Humidity", // 3: Relative humidity (%)
    "Wind Speed",        // 4: Wind speed (km/h)
    "Cloud Coverage",    // 5: Cloud coverage (%)
    "Bright Sunshine",   // 6: Bright sunshine (hours)

    // === Location (7-9) ===
    "X_COR",             // 7: District X coordinate
    "Y_COR",             // 8: District Y coordinate
    "ALT",               // 9: Altitude (m)
];

/// Total number of raw features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 10;

/// Cyclical month columns appended after the scaled features
pub const MONTH_FEATURES: &[&str] = &["month_sin", "month_cos"];

/// Sequence length of the model input (scaled features + sin + cos)
pub const MODEL_INPUT_LEN: usize = FEATURE_COUNT + 2;

/// Model input signature: one sample, 12 sequence steps, 1 channel
pub const MODEL_INPUT_SHAPE: [usize; 3] = [1, MODEL_INPUT_LEN, 1];

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// Compute CRC32 hash of the feature layout
/// Used to detect layout mismatches between artifacts and this build
pub fn compute_layout_hash() -> u32 {
    let mut hasher = Hasher::new();

    hasher.update(&[FEATURE_VERSION]);

    for name in FEATURE_LAYOUT.iter().chain(MONTH_FEATURES) {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

/// Get layout hash
pub fn layout_hash() -> u32 {
    compute_layout_hash()
}

// ============================================================================
// LAYOUT INFO
// ============================================================================

/// Complete layout information for serialization/logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub version: u8,
    pub hash: u32,
    pub feature_count: usize,
    pub feature_names: Vec<String>,
    pub input_shape: [usize; 3],
}

impl LayoutInfo {
    pub fn current() -> Self {
        Self {
            version: FEATURE_VERSION,
            hash: layout_hash(),
            feature_count: FEATURE_COUNT,
            feature_names: FEATURE_LAYOUT
                .iter()
                .chain(MONTH_FEATURES)
                .map(|s| s.to_string())
                .collect(),
            input_shape: MODEL_INPUT_SHAPE,
        }
    }
}

impl Default for LayoutInfo {
    fn default() -> Self {
        Self::current()
    }
}

// ============================================================================
// LAYOUT VALIDATION
// ============================================================================

/// Error when an artifact's feature columns don't match the layout
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutMismatchError {
    /// Column names differ (count or order)
    Columns { expected: Vec<String>, actual: Vec<String> },
    /// Artifact carries a layout hash from a different layout
    Hash { expected: u32, actual: u32 },
}

impl std::fmt::Display for LayoutMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutMismatchError::Columns { expected, actual } => write!(
                f,
                "Feature layout mismatch: expected columns {:?}, got {:?}",
                expected, actual
            ),
            LayoutMismatchError::Hash { expected, actual } => write!(
                f,
                "Feature layout mismatch: expected hash {:08x}, got {:08x}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for LayoutMismatchError {}

/// Validate that an artifact's column names equal the layout, in order
pub fn validate_columns<S: AsRef<str>>(columns: &[S]) -> Result<(), LayoutMismatchError> {
    let matches = columns.len() == FEATURE_COUNT
        && columns
            .iter()
            .zip(FEATURE_LAYOUT)
            .all(|(actual, expected)| actual.as_ref() == *expected);

    if matches {
        Ok(())
    } else {
        Err(LayoutMismatchError::Columns {
            expected: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
            actual: columns.iter().map(|s| s.as_ref().to_string()).collect(),
        })
    }
}

/// Validate an artifact-supplied layout hash
pub fn validate_hash(incoming_hash: u32) -> Result<(), LayoutMismatchError> {
    let current = layout_hash();
    if incoming_hash != current {
        return Err(LayoutMismatchError::Hash {
            expected: current,
            actual: incoming_hash,
        });
    }
    Ok(())
}

// ============================================================================
// FEATURE INDEX LOOKUP
// ============================================================================

/// Get feature index by name
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

/// Get feature name by index
pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}
