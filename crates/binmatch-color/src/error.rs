//! Error types for binmatch-color

use thiserror::Error;

/// Errors from gray conversion and thresholding
#[derive(Debug, Error)]
pub enum ColorError {
    /// Allocating or reading an image failed
    #[error("core error: {0}")]
    Core(#[from] binmatch_core::Error),

    /// Thresholding works on 8 bpp gray only
    #[error("unsupported depth: expected {expected}, got {actual}")]
    UnsupportedDepth { expected: &'static str, actual: u32 },
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
