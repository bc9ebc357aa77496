//! Error types for handsign

use thiserror::Error;

/// Core handsign errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandsignError {
    // Input errors
    #[error("Invalid frame: expected {expected} landmarks, got {actual}")]
    InvalidFrame { expected: usize, actual: usize },

    // Label errors
    #[error("Unknown gesture: {0}")]
    UnknownGesture(String),
}

/// Result type for handsign operations
pub type HandsignResult<T> = Result<T, HandsignError>;
