//! Image format sniffing
//!
//! Only PNG and JPEG are decoded. A handful of other common signatures
//! are recognized so that the rejection names what was actually given.

use crate::{IoError, IoResult};
use binmatch_core::ImageFormat;

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";
const JPEG_SOI: &[u8] = &[0xFF, 0xD8, 0xFF];

/// Prefixes of formats that are recognized but not accepted
const REJECTED: &[(&[u8], &str)] = &[
    (b"BM" as &[u8], "bmp"),
    (b"GIF8" as &[u8], "gif"),
    (b"II*\0" as &[u8], "tiff"),
    (b"MM\0*" as &[u8], "tiff"),
];

fn is_webp(data: &[u8]) -> bool {
    data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP"
}

fn is_pnm(data: &[u8]) -> bool {
    data[0] == b'P' && (b'1'..=b'7').contains(&data[1])
}

/// Identify the format of an encoded image from its first bytes.
///
/// # Errors
///
/// - [`IoError::InvalidData`] for fewer than 2 bytes
/// - [`IoError::UnsupportedFormat`] naming a recognized non-PNG/JPEG
///   format, or `"unknown image format"`
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 2 {
        return Err(IoError::InvalidData(format!(
            "{} byte(s) is not enough to detect a format",
            data.len()
        )));
    }
    if data.starts_with(PNG_SIGNATURE) {
        return Ok(ImageFormat::Png);
    }
    if data.starts_with(JPEG_SOI) {
        return Ok(ImageFormat::Jpeg);
    }

    let name = REJECTED
        .iter()
        .find(|(prefix, _)| data.starts_with(prefix))
        .map(|&(_, name)| name)
        .or_else(|| is_webp(data).then_some("webp"))
        .or_else(|| is_pnm(data).then_some("pnm"))
        .unwrap_or("unknown image format");
    Err(IoError::UnsupportedFormat(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_png() {
        let data = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00];
        assert_eq!(detect_format_from_bytes(&data).unwrap(), ImageFormat::Png);
        // Truncated signature is not PNG
        assert!(detect_format_from_bytes(&data[..4]).is_err());
    }

    #[test]
    fn test_detect_jpeg() {
        let data = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];
        assert_eq!(detect_format_from_bytes(&data).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn test_detect_recognized_but_unsupported() {
        for (data, name) in [
            (&b"BM\x00\x00\x00\x00"[..], "bmp"),
            (&b"GIF89a\x00\x00"[..], "gif"),
            (&[0x49, 0x49, 0x2A, 0x00, 0x08][..], "tiff"),
            (&[0x4D, 0x4D, 0x00, 0x2A, 0x00][..], "tiff"),
            (&b"RIFF\x00\x00\x00\x00WEBPVP8 "[..], "webp"),
            (&b"P6\n4 4\n255\n"[..], "pnm"),
        ] {
            match detect_format_from_bytes(data) {
                Err(IoError::UnsupportedFormat(msg)) => assert_eq!(msg, name),
                other => panic!("expected unsupported {name}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_detect_unknown() {
        match detect_format_from_bytes(b"hello, world") {
            Err(IoError::UnsupportedFormat(msg)) => assert_eq!(msg, "unknown image format"),
            other => panic!("expected unknown format, got {other:?}"),
        }
    }

    #[test]
    fn test_detect_too_short() {
        assert!(matches!(
            detect_format_from_bytes(&[0x89]),
            Err(IoError::InvalidData(_))
        ));
    }
}
