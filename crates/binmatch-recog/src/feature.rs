//! Foreground-area feature
//!
//! An image is summarized by a single number: the count of foreground
//! pixels in its Otsu mask.

use binmatch_color::{BinaryMask, ColorResult, binarize_otsu};
use binmatch_core::Pix;
use std::fmt;

/// Number of foreground pixels in a binary mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Feature(pub u64);

impl Feature {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Feature {
    fn from(v: u64) -> Self {
        Feature(v)
    }
}

/// Extract the feature of a mask; an absent mask counts as empty.
pub fn extract_feature(mask: Option<&BinaryMask>) -> Feature {
    mask.map_or(Feature(0), |m| Feature(m.foreground_count()))
}

/// Binarize an image with Otsu's method and extract its feature.
pub fn image_feature(pix: Option<&Pix>) -> ColorResult<Feature> {
    let mask = binarize_otsu(pix)?;
    Ok(extract_feature(mask.as_ref()))
}
