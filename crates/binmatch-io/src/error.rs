//! Errors raised while decoding, encoding, or scanning for images

use thiserror::Error;

/// Image I/O error
///
/// Decoder and encoder failures from the `png` and `jpeg-decoder`
/// crates are flattened into message strings.
#[derive(Error, Debug)]
pub enum IoError {
    /// Reading or writing a file or directory failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Recognized format that is not accepted, or a compiled-out decoder
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Too few bytes, or pixel data shorter than the header promises
    #[error("invalid image data: {0}")]
    InvalidData(String),

    #[error("decode error: {0}")]
    DecodeError(String),

    #[error("encode error: {0}")]
    EncodeError(String),

    /// Decoded header described an image `Pix` cannot hold
    #[error("core error: {0}")]
    Core(#[from] binmatch_core::Error),
}

/// Result alias for this crate.
pub type IoResult<T> = Result<T, IoError>;
