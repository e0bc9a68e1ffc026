//! Error handling for the nutrition scoring engine
//!
//! Missing nutrient data is never an error: the calculators degrade
//! gracefully. Errors are reserved for genuinely malformed input and for
//! batch tasks that fail to settle.

use thiserror::Error;

/// Scoring error types
#[derive(Error, Debug)]
pub enum ScoringError {
    /// Input failed the sanity checks that normalization relies on
    #[error("Invalid nutrition facts: {0}")]
    InvalidFacts(String),

    /// A batch scoring task aborted before producing a result
    #[error("Scoring task failed: {0}")]
    TaskFailed(String),
}

/// Result type alias for the engine
pub type EngineResult<T> = Result<T, ScoringError>;
