//! Nearest-feature matching
//!
//! A linear scan over candidates in their given order. The first
//! candidate at the smallest distance wins; later ties never replace it.

use crate::{Feature, feature_distance};
use binmatch_core::Pix;

/// Distance from the query to one candidate
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub name: String,
    pub feature: Feature,
    pub distance: f64,
}

/// Best candidate found by a scan
///
/// Starts as the sentinel (no name, infinite distance, no image).
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub name: Option<String>,
    pub distance: f64,
    pub image: Option<Pix>,
}

impl MatchResult {
    /// The "nothing found yet" value.
    pub fn sentinel() -> Self {
        Self {
            name: None,
            distance: f64::INFINITY,
            image: None,
        }
    }

    /// Whether the scan selected a candidate.
    pub fn is_found(&self) -> bool {
        self.name.is_some()
    }
}

impl Default for MatchResult {
    fn default() -> Self {
        Self::sentinel()
    }
}

/// Per-candidate comparisons plus the selected match
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    /// One entry per candidate, in scan order
    pub comparisons: Vec<Comparison>,
    pub result: MatchResult,
}

/// Find the candidate whose feature is closest to `query`.
///
/// `candidates` yields `(name, feature, image)` in enumeration order.
/// An empty sequence leaves the result at the sentinel.
pub fn find_best_match<'a, I>(query: Feature, candidates: I) -> MatchOutcome
where
    I: IntoIterator<Item = (&'a str, Feature, &'a Pix)>,
{
    let mut comparisons = Vec::new();
    let mut best = MatchResult::sentinel();

    for (name, feature, image) in candidates {
        let distance = feature_distance(query, feature);
        log::debug!("{}: feature {} distance {:.2}", name, feature, distance);

        if distance < best.distance {
            best = MatchResult {
                name: Some(name.to_string()),
                distance,
                image: Some(image.clone()),
            };
        }
        comparisons.push(Comparison {
            name: name.to_string(),
            feature,
            distance,
        });
    }

    MatchOutcome {
        comparisons,
        result: best,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use binmatch_core::PixelDepth;

    fn pix(w: u32) -> Pix {
        Pix::new(w, 1, PixelDepth::Bit8).unwrap()
    }

    #[test]
    fn test_empty_is_sentinel() {
        let outcome = find_best_match(Feature(5), Vec::<(&str, Feature, &Pix)>::new());
        assert!(outcome.comparisons.is_empty());
        assert!(!outcome.result.is_found());
        assert!(outcome.result.distance.is_infinite());
        assert!(outcome.result.image.is_none());
    }

    #[test]
    fn test_nearest_wins() {
        let (a, b, c) = (pix(1), pix(2), pix(3));
        let outcome = find_best_match(
            Feature(260),
            vec![
                ("A", Feature(100), &a),
                ("B", Feature(250), &b),
                ("C", Feature(300), &c),
            ],
        );
        assert_eq!(outcome.result.name.as_deref(), Some("B"));
        assert_eq!(outcome.result.distance, 10.0);
        assert_eq!(outcome.result.image.as_ref().map(|p| p.width()), Some(2));
        let distances: Vec<f64> = outcome.comparisons.iter().map(|c| c.distance).collect();
        assert_eq!(distances, [160.0, 10.0, 40.0]);
    }

    #[test]
    fn test_tie_keeps_first() {
        let (a, b) = (pix(1), pix(2));
        let outcome = find_best_match(
            Feature(100),
            vec![("first", Feature(90), &a), ("second", Feature(110), &b)],
        );
        assert_eq!(outcome.result.name.as_deref(), Some("first"));
        assert_eq!(outcome.comparisons.len(), 2);
    }

    #[test]
    fn test_exact_match_distance_zero() {
        let (a, b, c) = (pix(1), pix(2), pix(3));
        let outcome = find_best_match(
            Feature(7),
            vec![
                ("x", Feature(3), &a),
                ("y", Feature(7), &b),
                ("z", Feature(7), &c),
            ],
        );
        assert_eq!(outcome.result.name.as_deref(), Some("y"));
        assert_eq!(outcome.result.distance, 0.0);
    }
}
