//! Logic Module - Pipeline Engines
//!
//! - `features/` - Feature layout, scaling, month encoding, assembly
//! - `geo/` - District coordinates
//! - `model/` - Inference and classification
//! - `batch/` - Dataset scoring for the risk map
//! - `subscription/` - Alert subscriptions

pub mod batch;
pub mod features;
pub mod geo;
pub mod model;
pub mod pipeline;
pub mod subscription;
