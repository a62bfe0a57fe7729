//! Error handling

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FloodError>;

/// Errors produced by the flood risk pipeline.
///
/// `InvalidInput` is recoverable and raised before any inference attempt.
/// `ScalerLoad` / `ModelLoad` are fatal at startup.
#[derive(Debug, Error)]
pub enum FloodError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to load scaler: {0}")]
    ScalerLoad(String),

    #[error("Failed to load model: {0}")]
    ModelLoad(String),

    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("Failed to persist subscription: {0}")]
    Persistence(String),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FloodError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        FloodError::InvalidInput(msg.into())
    }

    /// True for errors that must abort startup.
    pub fn is_fatal(&self) -> bool {
        matches!(self, FloodError::ScalerLoad(_) | FloodError::ModelLoad(_))
    }
}

impl From<csv::Error> for FloodError {
    fn from(err: csv::Error) -> Self {
        FloodError::Dataset(err.to_string())
    }
}
