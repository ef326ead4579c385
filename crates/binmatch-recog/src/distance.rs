//! Feature distance

use crate::Feature;

/// Absolute difference of two features.
///
/// Computed exactly in integers, then widened; symmetric, non-negative,
/// and zero only for equal features.
pub fn feature_distance(a: Feature, b: Feature) -> f64 {
    a.0.abs_diff(b.0) as f64
}
