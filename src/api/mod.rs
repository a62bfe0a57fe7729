//! API Module
//!
//! In-process commands for the presentation layer (forms, result card,
//! risk map, subscription form). Pages and styling live outside this crate.
//!
//! Structure:
//! - state.rs: Loaded pipeline and subscription store shared by commands
//! - commands.rs: Command implementations

pub mod commands;
pub mod state;

#[cfg(test)]
mod tests;

pub use commands::*;
pub use state::AppState;
