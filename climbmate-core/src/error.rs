//! Error types for the climbmate-core library.
//!
//! Module-specific errors (such as [`InvalidGradeError`]) convert into
//! [`CoreError`] so callers can use `?` across the whole crate.

use std::path::PathBuf;

use thiserror::Error;

use crate::grade::InvalidGradeError;

/// Errors produced by the catalog core and its persistence layer.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    InvalidGrade(#[from] InvalidGradeError),

    #[error("Invalid record '{id}': {reason}")]
    InvalidRecord { id: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed store file {}: {source}", path.display())]
    MalformedStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode records: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Unknown {kind} '{value}'. Valid options: {expected}")]
    UnknownValue {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Invalid date: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    #[error("Video not found: {0}")]
    VideoNotFound(String),

    #[error("Video '{video_id}' already has a marker '{marker_id}'")]
    DuplicateMarker { video_id: String, marker_id: String },

    #[error("{0}")]
    OperationFailed(String),
}

/// Result type for climbmate-core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;
