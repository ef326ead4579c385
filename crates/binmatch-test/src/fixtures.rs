//! Synthetic test images
//!
//! Regression tests build their inputs in memory so that expected
//! thresholds and pixel counts can be stated exactly.

use crate::TestResult;
use binmatch_core::{Pix, PixelDepth, color};

/// Build a `w` x `h` image, asking `value(x, i)` for each pixel where
/// `i` is its row-major index.
fn paint(w: u32, h: u32, depth: PixelDepth, value: impl Fn(u32, u64) -> u32) -> TestResult<Pix> {
    let mut pm = Pix::new(w, h, depth)?.to_mut();
    let mut i = 0u64;
    for y in 0..h {
        for x in 0..w {
            pm.set_pixel_unchecked(x, y, value(x, i));
            i += 1;
        }
    }
    Ok(pm.into())
}

pub fn make_uniform_gray(val: u8, w: u32, h: u32) -> TestResult<Pix> {
    paint(w, h, PixelDepth::Bit8, |_, _| u32::from(val))
}

pub fn make_uniform_rgb(r: u8, g: u8, b: u8, w: u32, h: u32) -> TestResult<Pix> {
    let pixel = color::compose_rgb(r, g, b);
    paint(w, h, PixelDepth::Bit32, |_, _| pixel)
}

/// 8-bit image whose first `n_bright` pixels (row-major) are `bright`,
/// the rest `dark`
pub fn make_two_level_gray(dark: u8, bright: u8, n_bright: u64, w: u32, h: u32) -> TestResult<Pix> {
    paint(w, h, PixelDepth::Bit8, |_, i| {
        u32::from(if i < n_bright { bright } else { dark })
    })
}

/// 32-bit image with `n_bright` white pixels (row-major) on black
///
/// After Otsu binarization the foreground count is exactly `n_bright`
/// as long as `0 < n_bright < w * h`.
pub fn make_white_on_black_rgb(n_bright: u64, w: u32, h: u32) -> TestResult<Pix> {
    let white = color::compose_rgb(255, 255, 255);
    let black = color::compose_rgb(0, 0, 0);
    paint(w, h, PixelDepth::Bit32, |_, i| if i < n_bright { white } else { black })
}

/// 8-bit horizontal ramp, 0 at the left edge
pub fn make_gradient_gray(w: u32, h: u32) -> TestResult<Pix> {
    paint(w, h, PixelDepth::Bit8, |x, _| (x * 255 / w).min(255))
}
