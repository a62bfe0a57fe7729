//! Cyclical Month Encoding
//!
//! December and January sit next to each other on the unit circle, so the
//! model sees month as a continuous periodic quantity.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{FloodError, Result};

/// `(sin, cos)` of `2π·month/12`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CyclicalMonth {
    pub sin: f64,
    pub cos: f64,
}

impl CyclicalMonth {
    /// Encode a calendar month in `[1, 12]`
    pub fn encode(month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(FloodError::invalid(format!(
                "month must be in [1, 12], got {}",
                month
            )));
        }

        let angle = 2.0 * PI * f64::from(month) / 12.0;
        Ok(Self {
            sin: angle.sin(),
            cos: angle.cos(),
        })
    }

    pub fn as_pair(&self) -> [f64; 2] {
        [self.sin, self.cos]
    }
}
