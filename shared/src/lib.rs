//! Shared types and models for the grocery nutrition scoring engine
//!
//! This crate contains the nutrition data model, the additive taxonomy,
//! and the score types consumed by the scoring services.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::*;
