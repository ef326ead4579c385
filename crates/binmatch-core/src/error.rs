//! Error type for binmatch-core

use thiserror::Error;

/// Failures of image construction and pixel access
#[derive(Error, Debug)]
pub enum Error {
    /// Zero-sized image, or a row too wide to address
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Coordinate outside the image
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Operation needs a different pixel depth
    #[error("unsupported pixel depth: {0} bpp")]
    UnsupportedDepth(u32),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, Error>;
