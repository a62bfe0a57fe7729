//! Configuration module

use std::path::PathBuf;

use crate::constants;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Trained model artifact (ONNX)
    pub model_path: PathBuf,

    /// Fitted scaler artifact (JSON)
    pub scaler_path: PathBuf,

    /// Historical dataset for the risk map (CSV)
    pub dataset_path: PathBuf,

    /// Directory for subscription records
    pub data_dir: PathBuf,

    /// Expected SHA-256 of the model artifact, lowercase hex
    pub model_sha256: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("No .env file loaded: {}", e);
        }

        Self {
            model_path: PathBuf::from(constants::get_model_path()),
            scaler_path: PathBuf::from(constants::get_scaler_path()),
            dataset_path: PathBuf::from(constants::get_dataset_path()),
            data_dir: constants::get_data_dir(),
            model_sha256: constants::get_model_sha256(),
        }
    }

    /// Path of the append-only subscription log
    pub fn subscriptions_path(&self) -> PathBuf {
        self.data_dir.join(constants::SUBSCRIPTIONS_FILE)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(constants::DEFAULT_MODEL_PATH),
            scaler_path: PathBuf::from(constants::DEFAULT_SCALER_PATH),
            dataset_path: PathBuf::from(constants::DEFAULT_DATASET_PATH),
            data_dir: PathBuf::from(".").join(constants::DATA_DIR_NAME),
            model_sha256: None,
        }
    }
}
