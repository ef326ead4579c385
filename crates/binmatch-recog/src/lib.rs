//! binmatch-recog - Foreground-area classification
//!
//! Each image is binarized with Otsu's method and summarized by its
//! foreground pixel count. A query is assigned to the reference image
//! with the closest count.
//!
//! # Quick Start
//!
//! ```no_run
//! use binmatch_core::ImageDatabase;
//! use binmatch_recog::classify;
//!
//! # fn demo(db: &ImageDatabase, query: &binmatch_core::Pix) {
//! let report = classify(db, Some(query)).unwrap();
//! if let Some(best) = report.best() {
//!     println!("{:?} at {:.2}", best.name, best.distance);
//! }
//! # }
//! ```
//!
//! # Modules
//!
//! - [`feature`]: Foreground-area feature extraction
//! - [`distance`]: Feature distance
//! - [`matcher`]: Nearest-feature scan with first-wins tie breaking
//! - [`classify`]: End-to-end query classification
//! - [`labels`]: Display labels for reference names

pub mod classify;
pub mod distance;
mod error;
pub mod feature;
pub mod labels;
pub mod matcher;

pub use error::{ClassifyError, ClassifyResult, RecogError, RecogResult};

pub use classify::{ClassifyReport, classify};
pub use distance::feature_distance;
pub use feature::{Feature, extract_feature, image_feature};
pub use labels::LabelTable;
pub use matcher::{Comparison, MatchOutcome, MatchResult, find_best_match};

// Re-export core for convenience
pub use binmatch_core;
