//! Subscription Module - Flood alert sign-ups
//!
//! Validated `{email, location}` records appended to a JSONL log.

pub mod store;
pub mod types;

pub use store::{JsonlSubscriptionStore, SubscriptionStore};
pub use types::{is_valid_email, Subscription};
