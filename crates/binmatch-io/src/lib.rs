//! binmatch-io - Image decoding and database loading
//!
//! Turns raw bytes into [`Pix`] images and scans a directory into an
//! [`ImageDatabase`](binmatch_core::ImageDatabase).
//!
//! | Format | Read | Write | Feature |
//! |--------|------|-------|---------|
//! | PNG    | yes  | yes   | `png-format` |
//! | JPEG   | yes  | no    | `jpeg` |
//!
//! Two entry points exist for decoding:
//!
//! - [`read_image`] returns an error describing why decoding failed
//! - [`decode_image`] logs the failure and yields `None`, which the
//!   classification pipeline treats as an absent image

pub mod database;
mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;

pub use binmatch_core::ImageFormat;
pub use database::{is_supported_image_name, load_database};
pub use error::{IoError, IoResult};
pub use format::detect_format_from_bytes;
#[cfg(feature = "png-format")]
pub use crate::png::write_png;

use binmatch_core::Pix;

/// Decode an image from an in-memory byte buffer.
///
/// The format is detected from the magic bytes, not from any filename.
pub fn read_image(data: &[u8]) -> IoResult<Pix> {
    let format = detect_format_from_bytes(data)?;
    log::trace!("decoding {} bytes as {:?}", data.len(), format);

    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => crate::png::read_png(std::io::Cursor::new(data)),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => crate::jpeg::read_jpeg(data),
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support is not enabled",
            other
        ))),
    }
}

/// Decode an image, mapping any failure to `None`.
///
/// The failure is logged at `warn` level.
pub fn decode_image(data: &[u8]) -> Option<Pix> {
    match read_image(data) {
        Ok(pix) => Some(pix),
        Err(e) => {
            log::warn!("could not decode image ({} bytes): {}", data.len(), e);
            None
        }
    }
}
