//! Query classification against a reference database
//!
//! Binarizes the query and every reference image, reduces each to its
//! foreground-area [`Feature`], and picks the nearest reference.

use crate::error::{ClassifyError, ClassifyResult};
use crate::{Comparison, Feature, MatchResult, extract_feature, find_best_match, image_feature};
use binmatch_color::{BinaryMask, binarize_otsu};
use binmatch_core::{ImageDatabase, Pix};

/// Everything computed for one query
#[derive(Debug, Clone)]
pub struct ClassifyReport {
    /// Otsu mask of the query, `None` if the query was absent
    pub mask: Option<BinaryMask>,
    pub feature: Feature,
    /// Distance to every reference, in database order
    pub comparisons: Vec<Comparison>,
    pub result: MatchResult,
}

impl ClassifyReport {
    /// The selected reference, or `None` when no valid match exists.
    pub fn best(&self) -> Option<&MatchResult> {
        self.result.is_found().then_some(&self.result)
    }
}

/// Classify `query` against `database`.
///
/// An absent query is not an error: it has feature 0 and is matched like
/// any other. Reference features are recomputed on every call.
///
/// # Errors
///
/// [`ClassifyError::EmptyDatabase`] if there is nothing to compare
/// against; binarization errors otherwise.
pub fn classify(database: &ImageDatabase, query: Option<&Pix>) -> ClassifyResult<ClassifyReport> {
    if database.is_empty() {
        return Err(ClassifyError::EmptyDatabase);
    }

    let mask = binarize_otsu(query)?;
    let feature = extract_feature(mask.as_ref());
    match &mask {
        Some(m) => log::info!(
            "query {}x{}: threshold {}, feature {}",
            m.width(),
            m.height(),
            m.threshold(),
            feature
        ),
        None => log::info!("query absent, feature {}", feature),
    }

    let mut candidates = Vec::with_capacity(database.len());
    for entry in database {
        let f = image_feature(Some(&entry.image))?;
        candidates.push((entry.name.as_str(), f, &entry.image));
    }

    let outcome = find_best_match(feature, candidates);
    match &outcome.result.name {
        Some(name) => log::info!(
            "best match {} at distance {:.2}",
            name,
            outcome.result.distance
        ),
        None => log::info!("no match among {} references", database.len()),
    }

    Ok(ClassifyReport {
        mask,
        feature,
        comparisons: outcome.comparisons,
        result: outcome.result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use binmatch_core::PixelDepth;

    fn blob(n: u32) -> Pix {
        let pix = Pix::new(20, 20, PixelDepth::Bit8).unwrap();
        let mut pm = pix.try_into_mut().unwrap();
        for i in 0..n {
            pm.set_pixel(i % 20, i / 20, 255).unwrap();
        }
        pm.into()
    }

    #[test]
    fn test_empty_database() {
        let db = ImageDatabase::new();
        let query = blob(10);
        assert!(matches!(
            classify(&db, Some(&query)),
            Err(ClassifyError::EmptyDatabase)
        ));
    }

    #[test]
    fn test_picks_nearest() {
        let db: ImageDatabase = vec![("a", blob(100)), ("b", blob(250)), ("c", blob(300))]
            .into_iter()
            .collect();
        let query = blob(260);
        let report = classify(&db, Some(&query)).unwrap();
        assert_eq!(report.feature, Feature(260));
        assert_eq!(report.comparisons.len(), 3);
        let best = report.best().unwrap();
        assert_eq!(best.name.as_deref(), Some("b"));
        assert_eq!(best.distance, 10.0);
    }

    #[test]
    fn test_absent_query() {
        let db: ImageDatabase = vec![("a", blob(5)), ("b", blob(1))].into_iter().collect();
        let report = classify(&db, None).unwrap();
        assert!(report.mask.is_none());
        assert_eq!(report.feature, Feature(0));
        assert_eq!(report.best().and_then(|r| r.name.as_deref()), Some("b"));
    }
}
