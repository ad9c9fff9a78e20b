//! Error types for the entry content pipeline
//!
//! The transforms themselves are total: they degrade to an unchanged echo of
//! their input instead of failing. Errors only arise around them, when
//! options are built or loaded and when the CLI does I/O.

use thiserror::Error;

/// Result type alias for fallible configuration and I/O operations
pub type ContentResult<T> = Result<T, ContentError>;

#[derive(Debug, Error)]
pub enum ContentError {
    /// An option value is out of its accepted range
    #[error("Invalid content options: {0}")]
    InvalidOptions(String),

    /// TOC heading levels must satisfy 1 <= min <= max <= 6
    #[error("Invalid TOC heading range h{min}..=h{max} (expected 1 <= min <= max <= 6)")]
    InvalidHeadingRange { min: u8, max: u8 },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Options file or output could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
