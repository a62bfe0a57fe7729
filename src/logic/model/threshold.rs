//! Risk Classification
//!
//! Binary label from the model probability. The boundary is inclusive:
//! a probability of exactly 0.5 is High Risk.

use serde::{Deserialize, Serialize};

/// Fixed decision threshold of the trained model
pub const RISK_THRESHOLD: f64 = 0.5;

/// Flood risk label shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLabel {
    #[serde(rename = "High Risk")]
    High,
    #[serde(rename = "Low Risk")]
    Low,
}

impl RiskLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High Risk",
            Self::Low => "Low Risk",
        }
    }

    /// Result card color (RGB)
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Self::High => (192, 57, 43), // #c0392b
            Self::Low => (39, 174, 96),  // #27ae60
        }
    }
}

impl std::fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Threshold classifier.
///
/// The application always uses [`RiskClassifier::default`]; other thresholds
/// exist for experiments only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskClassifier {
    pub threshold: f64,
}

impl Default for RiskClassifier {
    fn default() -> Self {
        Self {
            threshold: RISK_THRESHOLD,
        }
    }
}

impl RiskClassifier {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn classify(&self, probability: f64) -> RiskLabel {
        if probability >= self.threshold {
            RiskLabel::High
        } else {
            RiskLabel::Low
        }
    }
}

/// Classify with the fixed threshold
pub fn classify(probability: f64) -> RiskLabel {
    RiskClassifier::default().classify(probability)
}

/// Single prediction output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub probability: f64,
    pub label: RiskLabel,
}

impl PredictionResult {
    pub fn from_probability(probability: f64) -> Self {
        Self {
            probability,
            label: classify(probability),
        }
    }

    /// e.g. `High Risk (73.20% probability)`
    pub fn summary(&self) -> String {
        format!("{} ({:.2}% probability)", self.label, self.probability * 100.0)
    }
}
