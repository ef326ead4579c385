//! binmatch - Image classification by foreground area
//!
//! Images are binarized with Otsu's method and summarized by the number
//! of foreground pixels; a query is assigned to the reference image whose
//! count is closest.
//!
//! # Overview
//!
//! - Image decoding and reference directory loading ([`io`])
//! - Gray conversion and Otsu binarization ([`color`])
//! - Feature extraction, matching and labels ([`recog`])
//!
//! # Example
//!
//! ```
//! use binmatch::{ImageDatabase, Pix, PixelDepth};
//! use binmatch::recog::classify;
//!
//! let mut db = ImageDatabase::new();
//! db.insert("empty.png", Pix::new(8, 8, PixelDepth::Bit8).unwrap());
//!
//! let report = classify(&db, None).unwrap();
//! assert_eq!(report.best().and_then(|b| b.name.as_deref()), Some("empty.png"));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use binmatch_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use binmatch_color as color;
pub use binmatch_io as io;
pub use binmatch_recog as recog;
