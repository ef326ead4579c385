//! binmatch Color - Gray conversion and binarization
//!
//! This crate turns decoded images into two-level masks:
//!
//! - **Gray conversion** ([`colorspace`]): fixed-point BT.601 luminance
//! - **Thresholding** ([`threshold`]): fixed threshold and Otsu's method,
//!   producing a [`BinaryMask`]

pub mod colorspace;
pub mod error;
pub mod threshold;

// Re-export core types
pub use binmatch_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

pub use colorspace::{pix_convert_to_gray, rgb_to_gray};

pub use threshold::{
    BACKGROUND, BinaryMask, FOREGROUND, binarize_otsu, compute_otsu_threshold,
    threshold_otsu, threshold_to_binary,
};
