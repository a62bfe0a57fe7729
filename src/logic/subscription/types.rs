//! Subscription record and its validation

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{FloodError, Result};

static EMAIL_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Alert subscription, persisted as exactly `{email, location}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub email: String,
    pub location: String,
}

impl Subscription {
    /// Build a validated subscription from form input
    pub fn new(email: &str, location: &str) -> Result<Self> {
        let subscription = Self {
            email: email.trim().to_string(),
            location: location.trim().to_string(),
        };
        subscription.validate()?;
        Ok(subscription)
    }

    pub fn validate(&self) -> Result<()> {
        if self.email.is_empty() || self.location.is_empty() {
            return Err(FloodError::invalid("email and location are both required"));
        }
        if !is_valid_email(&self.email) {
            return Err(FloodError::invalid(format!("invalid email address: {}", self.email)));
        }
        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .map(|re| re.is_match(email))
        .unwrap_or(false)
}
