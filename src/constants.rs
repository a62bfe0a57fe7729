//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! Artifact locations can be overridden through environment variables.

/// Default trained model artifact (ONNX export of the flood network)
pub const DEFAULT_MODEL_PATH: &str = "assets/flood_model.onnx";

/// Default fitted scaler artifact
pub const DEFAULT_SCALER_PATH: &str = "assets/scaler.json";

/// Default historical dataset used to seed the risk map
pub const DEFAULT_DATASET_PATH: &str = "assets/flood_dataset.csv";

/// Application data directory name (under the platform data dir)
pub const DATA_DIR_NAME: &str = "floodguard";

/// Subscription log file name inside the data directory
pub const SUBSCRIPTIONS_FILE: &str = "subscriptions.jsonl";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "FloodGuard";

// Environment variable names
pub const ENV_MODEL_PATH: &str = "FLOODGUARD_MODEL_PATH";
pub const ENV_SCALER_PATH: &str = "FLOODGUARD_SCALER_PATH";
pub const ENV_DATASET_PATH: &str = "FLOODGUARD_DATASET_PATH";
pub const ENV_DATA_DIR: &str = "FLOODGUARD_DATA_DIR";
pub const ENV_MODEL_SHA256: &str = "FLOODGUARD_MODEL_SHA256";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get model path from environment or use default
pub fn get_model_path() -> String {
    std::env::var(ENV_MODEL_PATH).unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string())
}

/// Get scaler path from environment or use default
pub fn get_scaler_path() -> String {
    std::env::var(ENV_SCALER_PATH).unwrap_or_else(|_| DEFAULT_SCALER_PATH.to_string())
}

/// Get dataset path from environment or use default
pub fn get_dataset_path() -> String {
    std::env::var(ENV_DATASET_PATH).unwrap_or_else(|_| DEFAULT_DATASET_PATH.to_string())
}

/// Get the expected model checksum, if one is pinned
pub fn get_model_sha256() -> Option<String> {
    std::env::var(ENV_MODEL_SHA256)
        .ok()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
}

/// Get data directory from environment or use the platform default
pub fn get_data_dir() -> std::path::PathBuf {
    std::env::var(ENV_DATA_DIR)
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| {
            dirs::data_local_dir()
                .unwrap_or_else(|| std::path::PathBuf::from("."))
                .join(DATA_DIR_NAME)
        })
}
