//! Gray conversion
//!
//! Reduces 32 bpp RGB(A) images to 8 bpp luminance using the ITU-R
//! BT.601 weights `0.299 R + 0.587 G + 0.114 B`. The weights are applied
//! in 14-bit fixed point so the result never depends on float rounding.

use crate::ColorResult;
use binmatch_core::pix::set_data_byte;
use binmatch_core::{Pix, PixelDepth, color};

/// Fixed-point BT.601 weights, scaled by `1 << GRAY_SHIFT`
const GRAY_R: u32 = 4899;
const GRAY_G: u32 = 9617;
const GRAY_B: u32 = 1868;
const GRAY_SHIFT: u32 = 14;

/// Convert RGB values to a gray level
#[inline]
pub fn rgb_to_gray(r: u8, g: u8, b: u8) -> u8 {
    let sum = GRAY_R * r as u32 + GRAY_G * g as u32 + GRAY_B * b as u32;
    ((sum + (1 << (GRAY_SHIFT - 1))) >> GRAY_SHIFT) as u8
}

/// Convert an image to 8 bpp gray
///
/// 8 bpp input is returned as a shared clone. 32 bpp input is converted
/// pixel by pixel; alpha is ignored.
pub fn pix_convert_to_gray(pix: &Pix) -> ColorResult<Pix> {
    match pix.depth() {
        PixelDepth::Bit8 => Ok(pix.clone()),
        PixelDepth::Bit32 => {
            let w = pix.width();
            let h = pix.height();
            let mut out = Pix::new(w, h, PixelDepth::Bit8)?.to_mut();
            out.set_informat(pix.informat());

            for y in 0..h {
                let src = pix.row_data(y);
                let dst = out.row_data_mut(y);
                for (x, &pixel) in src.iter().take(w as usize).enumerate() {
                    let (r, g, b) = color::extract_rgb(pixel);
                    set_data_byte(dst, x as u32, rgb_to_gray(r, g, b) as u32);
                }
            }

            Ok(out.into())
        }
    }
}
