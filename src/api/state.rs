//! Shared application state handed to every command

use once_cell::sync::OnceCell;

use crate::config::AppConfig;
use crate::error::{FloodError, Result};
use crate::logic::pipeline::FloodPipeline;
use crate::logic::subscription::JsonlSubscriptionStore;

pub struct AppState {
    pub config: AppConfig,
    /// Set once; never replaced after a successful load
    pipeline: OnceCell<FloodPipeline>,
    subscriptions: JsonlSubscriptionStore,
}

impl AppState {
    /// State with nothing loaded yet
    pub fn new(config: AppConfig) -> Self {
        let subscriptions = JsonlSubscriptionStore::new(config.subscriptions_path());
        Self {
            config,
            pipeline: OnceCell::new(),
            subscriptions,
        }
    }

    /// State around an already built pipeline
    pub fn with_pipeline(config: AppConfig, pipeline: FloodPipeline) -> Self {
        let state = Self::new(config);
        // Fresh cell, cannot already be set
        let _ = state.pipeline.set(pipeline);
        state
    }

    /// Install the loaded pipeline. Fails if one is already installed.
    pub fn install(&self, pipeline: FloodPipeline) -> Result<()> {
        self.pipeline
            .set(pipeline)
            .map_err(|_| FloodError::invalid("scaler and model are already loaded"))
    }

    pub fn is_loaded(&self) -> bool {
        self.pipeline.get().is_some()
    }

    /// Cheap clone of the loaded pipeline.
    ///
    /// Calling before a successful load is an input error, not a load error.
    pub fn pipeline(&self) -> Result<FloodPipeline> {
        self.pipeline
            .get()
            .cloned()
            .ok_or_else(|| FloodError::invalid("scaler and model have not been loaded"))
    }

    pub fn subscriptions(&self) -> &JsonlSubscriptionStore {
        &self.subscriptions
    }
}
