//! JPEG decoding
//!
//! Grayscale and RGB baseline/progressive JPEGs are accepted; CMYK and
//! 16-bit gray are not. Nothing is ever written as JPEG.

use crate::{IoError, IoResult};
use binmatch_core::{ImageFormat, Pix, PixelDepth, color};
use jpeg_decoder::{Decoder, PixelFormat};
use std::io::Read;

/// Decode a JPEG stream into an 8 bpp (L8) or 32 bpp (RGB24) image.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    let samples = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG: no frame header".into()))?;

    let (width, height) = (u32::from(info.width), u32::from(info.height));
    let (depth, stride) = match info.pixel_format {
        PixelFormat::L8 => (PixelDepth::Bit8, 1),
        PixelFormat::RGB24 => (PixelDepth::Bit32, 3),
        other => {
            return Err(IoError::UnsupportedFormat(format!("JPEG {:?}", other)));
        }
    };

    let needed = width as usize * height as usize * stride;
    if samples.len() < needed {
        return Err(IoError::InvalidData(format!(
            "JPEG: {} samples for a {}x{} frame",
            samples.len(),
            width,
            height
        )));
    }

    let mut pm = Pix::new(width, height, depth)?.to_mut();
    pm.set_informat(ImageFormat::Jpeg);

    let row_len = width as usize * stride;
    for (y, row) in (0..height).zip(samples.chunks_exact(row_len)) {
        for (x, px) in (0..width).zip(row.chunks_exact(stride)) {
            let val = match *px {
                [r, g, b] => color::compose_rgb(r, g, b),
                _ => u32::from(px[0]),
            };
            pm.set_pixel_unchecked(x, y, val);
        }
    }

    Ok(pm.into())
}
