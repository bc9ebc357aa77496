//! Sample store errors

use std::path::PathBuf;

use handsign_core::{Gesture, HandsignError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SampleError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed sample JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Frame(#[from] HandsignError),

    #[error("Gesture {0} cannot be stored as a sample")]
    NotStorable(Gesture),
}

impl SampleError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SampleError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for sample store operations
pub type SampleResult<T> = Result<T, SampleError>;
