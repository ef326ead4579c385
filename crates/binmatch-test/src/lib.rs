//! binmatch-test - Regression test support
//!
//! Integration tests named `*_reg.rs` drive a [`RegParams`], which
//! numbers every check and reports all failures at the end instead of
//! stopping at the first one. Inputs come from [`fixtures`], so expected
//! thresholds and areas are known exactly.
//!
//! ```ignore
//! use binmatch_test::RegParams;
//!
//! let mut rp = RegParams::new("otsu");
//! rp.compare_values(333.0, mask.foreground_count() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! Set `REGTEST_MODE=display` to also write intermediate masks as PNG
//! files under `tests/regout` at the workspace root.

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Directory for display-mode output
pub fn regout_dir() -> String {
    // This crate lives at crates/binmatch-test
    format!("{}/../../tests/regout", env!("CARGO_MANIFEST_DIR"))
}
