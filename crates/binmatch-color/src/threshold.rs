//! Binary thresholding
//!
//! Provides the conversion of an image to a two-level mask:
//! - Fixed threshold binarization ([`threshold_to_binary`])
//! - Otsu's method for automatic threshold selection
//!   ([`compute_otsu_threshold`], [`threshold_otsu`], [`binarize_otsu`])
//!
//! Masks are 8 bpp images holding only [`BACKGROUND`] and [`FOREGROUND`].

use crate::colorspace::pix_convert_to_gray;
use crate::{ColorError, ColorResult};
use binmatch_core::pix::{get_data_byte, set_data_byte};
use binmatch_core::{Pix, PixelDepth};

/// Mask value for pixels below the threshold
pub const BACKGROUND: u8 = 0;
/// Mask value for pixels at or above the threshold
pub const FOREGROUND: u8 = 255;

/// An 8 bpp image whose pixels are all [`BACKGROUND`] or [`FOREGROUND`]
///
/// Only the functions in this module construct masks, so holders can rely
/// on the two-level invariant.
#[derive(Debug, Clone)]
pub struct BinaryMask {
    pix: Pix,
    threshold: u8,
}

impl BinaryMask {
    /// The underlying 8 bpp image.
    pub fn as_pix(&self) -> &Pix {
        &self.pix
    }

    /// Consume the mask, returning the underlying image.
    pub fn into_pix(self) -> Pix {
        self.pix
    }

    /// Threshold that produced this mask (first foreground intensity).
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn width(&self) -> u32 {
        self.pix.width()
    }

    pub fn height(&self) -> u32 {
        self.pix.height()
    }

    /// Number of [`FOREGROUND`] pixels, within `[0, width * height]`.
    pub fn foreground_count(&self) -> u64 {
        // Masks are always 8 bpp, so the depth check cannot fail
        self.pix
            .count_pixels_with_value(FOREGROUND)
            .unwrap_or_default()
    }
}

impl AsRef<Pix> for BinaryMask {
    fn as_ref(&self) -> &Pix {
        &self.pix
    }
}

fn require_gray(pix: &Pix) -> ColorResult<()> {
    if pix.depth() != PixelDepth::Bit8 {
        return Err(ColorError::UnsupportedDepth {
            expected: "8 bpp",
            actual: pix.depth().bits(),
        });
    }
    Ok(())
}

/// Convert a grayscale image to a binary mask using a fixed threshold
///
/// Pixels `>= threshold` become [`FOREGROUND`], pixels `< threshold`
/// become [`BACKGROUND`]. A threshold of 0 therefore marks every pixel
/// as foreground.
pub fn threshold_to_binary(pix: &Pix, threshold: u8) -> ColorResult<BinaryMask> {
    require_gray(pix)?;

    let w = pix.width();
    let h = pix.height();
    let mut out = Pix::new(w, h, PixelDepth::Bit8)?.to_mut();
    out.set_informat(pix.informat());

    let t = u32::from(threshold);
    for y in 0..h {
        let src = pix.row_data(y);
        let dst = out.row_data_mut(y);
        for x in 0..w {
            let val = if get_data_byte(src, x) >= t {
                FOREGROUND
            } else {
                BACKGROUND
            };
            set_data_byte(dst, x, u32::from(val));
        }
    }

    Ok(BinaryMask {
        pix: out.into(),
        threshold,
    })
}

/// Select the Otsu level from a 256-bin histogram
///
/// Returns the level `k` maximizing the between-class variance
/// `w0 * w1 * (mu0 - mu1)^2`, with class 0 = `{v <= k}`. Levels leaving a
/// class empty are skipped and only a strictly larger variance replaces
/// the best, so the lowest maximizing level wins. Returns 0 when no level
/// splits the histogram into two non-empty classes.
///
/// Exact variance ties go to the lowest level; float-rounded
/// implementations such as OpenCV's may settle such ties on a higher one.
fn otsu_level(hist: &[u32]) -> u8 {
    let total: u64 = hist.iter().map(|&n| u64::from(n)).sum();
    if total == 0 {
        return 0;
    }
    let total_f = total as f64;
    let sum_all: f64 = hist
        .iter()
        .enumerate()
        .map(|(v, &n)| v as f64 * f64::from(n))
        .sum();

    let mut count0 = 0u64;
    let mut sum0 = 0f64;
    let mut best_var = 0f64;
    let mut best_k = 0u8;

    for (k, &n) in hist.iter().enumerate().take(255) {
        count0 += u64::from(n);
        sum0 += k as f64 * f64::from(n);

        let count1 = total - count0;
        if count0 == 0 || count1 == 0 {
            continue;
        }

        let w0 = count0 as f64 / total_f;
        let w1 = count1 as f64 / total_f;
        let mu0 = sum0 / count0 as f64;
        let mu1 = (sum_all - sum0) / count1 as f64;
        let diff = mu0 - mu1;
        let var = w0 * w1 * diff * diff;

        if var > best_var {
            best_var = var;
            best_k = k as u8;
        }
    }

    best_k
}

/// Compute Otsu's threshold for an 8 bpp grayscale image
///
/// The returned value is the first intensity assigned to the foreground,
/// in `[1, 255]`. A single-intensity image yields 1, so an all-zero image
/// maps entirely to background and any other constant image entirely to
/// foreground.
pub fn compute_otsu_threshold(pix: &Pix) -> ColorResult<u8> {
    require_gray(pix)?;
    let hist = pix.gray_histogram(1)?;
    let level = otsu_level(&hist);
    Ok(level + 1)
}

/// Convert an image to a binary mask using Otsu's method
///
/// 32 bpp input is first reduced to gray.
pub fn threshold_otsu(pix: &Pix) -> ColorResult<BinaryMask> {
    let gray = pix_convert_to_gray(pix)?;
    let threshold = compute_otsu_threshold(&gray)?;
    log::debug!(
        "otsu threshold {} for {}x{} image",
        threshold,
        gray.width(),
        gray.height()
    );
    threshold_to_binary(&gray, threshold)
}

/// Binarize an optional image with Otsu's method
///
/// An absent image yields `Ok(None)`.
pub fn binarize_otsu(pix: Option<&Pix>) -> ColorResult<Option<BinaryMask>> {
    pix.map(threshold_otsu).transpose()
}
