//! Error types for binmatch-recog

use binmatch_color::ColorError;
use thiserror::Error;

/// Errors that can occur while loading recognition configuration
#[derive(Debug, Error)]
pub enum RecogError {
    /// Label file could not be read
    #[error("label file error: {0}")]
    Io(#[from] std::io::Error),

    /// Label file is not a JSON object of strings
    #[error("invalid label table: {0}")]
    InvalidLabels(#[from] serde_json::Error),
}

/// Result type for recognition operations
pub type RecogResult<T> = Result<T, RecogError>;

/// Outcomes of a classification request that the caller must handle
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// The reference database holds no images
    #[error("image database is empty")]
    EmptyDatabase,

    /// Query or reference image could not be binarized
    #[error("binarization failed: {0}")]
    Color(#[from] ColorError),
}

/// Result type for classification
pub type ClassifyResult<T> = Result<T, ClassifyError>;
