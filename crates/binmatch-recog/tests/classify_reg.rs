//! Classification regression test
//!
//! Runs the whole pipeline (directory load, Otsu binarization, feature
//! extraction, nearest-feature scan) on synthesized references whose
//! foreground areas are known exactly.

use binmatch_core::{ImageDatabase, Pix};
use binmatch_io::{load_database, write_png};
use binmatch_recog::{
    ClassifyError, Feature, LabelTable, classify, extract_feature, feature_distance,
    find_best_match,
};
use binmatch_test::RegParams;
use binmatch_test::fixtures::{make_two_level_gray, make_white_on_black_rgb};
use std::fs::File;
use std::io::BufWriter;

#[test]
fn classify_reg() {
    let mut rp = RegParams::new("classify");

    // --- Test 1: nearest area wins ---
    eprintln!("=== Nearest area ===");
    let db: ImageDatabase = vec![
        ("A", make_white_on_black_rgb(100, 30, 30).expect("A")),
        ("B", make_white_on_black_rgb(250, 30, 30).expect("B")),
        ("C", make_white_on_black_rgb(300, 30, 30).expect("C")),
    ]
    .into_iter()
    .collect();
    let query = make_white_on_black_rgb(260, 40, 40).expect("query");
    let report = classify(&db, Some(&query)).expect("classify");
    rp.compare_values(260.0, report.feature.value() as f64, 0.0);
    rp.compare_values(3.0, report.comparisons.len() as f64, 0.0);
    match report.best() {
        Some(best) => {
            rp.compare_strings("B", best.name.as_deref().unwrap_or(""));
            rp.compare_values(10.0, best.distance, 0.0);
        }
        None => {
            rp.check(false, "match expected");
        }
    }
    let names: Vec<&str> = report.comparisons.iter().map(|c| c.name.as_str()).collect();
    rp.compare_strings("A,B,C", &names.join(","));

    // --- Test 2: determinism ---
    let again = classify(&db, Some(&query)).expect("classify again");
    rp.compare_values(report.result.distance, again.result.distance, 0.0);
    rp.check(report.result.name == again.result.name, "same winner twice");

    // --- Test 3: exact match and ties ---
    eprintln!("=== Ties ===");
    let db: ImageDatabase = vec![
        ("first", make_two_level_gray(10, 200, 50, 20, 10).expect("first")),
        ("second", make_two_level_gray(30, 180, 150, 20, 10).expect("second")),
        ("exact", make_two_level_gray(0, 255, 100, 20, 10).expect("exact")),
        ("exact_later", make_two_level_gray(0, 99, 100, 10, 20).expect("later")),
    ]
    .into_iter()
    .collect();
    let query = make_two_level_gray(5, 250, 100, 25, 25).expect("query");
    let report = classify(&db, Some(&query)).expect("classify");
    rp.compare_strings(
        "exact",
        report.best().and_then(|b| b.name.as_deref()).unwrap_or(""),
    );
    rp.compare_values(0.0, report.result.distance, 0.0);

    let query = make_two_level_gray(5, 250, 100, 25, 25).expect("query");
    let tie_db: ImageDatabase = vec![
        ("first", make_two_level_gray(10, 200, 50, 20, 10).expect("first")),
        ("second", make_two_level_gray(30, 180, 150, 20, 10).expect("second")),
    ]
    .into_iter()
    .collect();
    let report = classify(&tie_db, Some(&query)).expect("classify ties");
    rp.compare_strings(
        "first",
        report.best().and_then(|b| b.name.as_deref()).unwrap_or(""),
    );
    rp.compare_values(50.0, report.result.distance, 0.0);

    // --- Test 4: absent query and empty database ---
    eprintln!("=== Degenerate inputs ===");
    let report = classify(&tie_db, None).expect("absent query");
    rp.check(report.mask.is_none(), "absent query has no mask");
    rp.compare_values(0.0, report.feature.value() as f64, 0.0);
    rp.compare_strings(
        "first",
        report.best().and_then(|b| b.name.as_deref()).unwrap_or(""),
    );
    rp.check(
        matches!(
            classify(&ImageDatabase::new(), Some(&query)),
            Err(ClassifyError::EmptyDatabase)
        ),
        "empty database reported",
    );

    // --- Test 5: matcher and distance primitives ---
    let outcome = find_best_match(Feature(3), Vec::<(&str, Feature, &Pix)>::new());
    rp.check(!outcome.result.is_found(), "empty scan is sentinel");
    rp.compare_values(0.0, extract_feature(None).value() as f64, 0.0);
    rp.compare_values(
        feature_distance(Feature(9), Feature(4)),
        feature_distance(Feature(4), Feature(9)),
        0.0,
    );

    // --- Test 6: references loaded from disk, labels applied ---
    eprintln!("=== Loaded database ===");
    let tmp = tempfile::tempdir().expect("tempdir");
    for (name, n) in [("pulpen.png", 40u64), ("mouse.png", 400), ("tipex.png", 120)] {
        let pix = make_white_on_black_rgb(n, 32, 32).expect("reference");
        let file = File::create(tmp.path().join(name)).expect("create");
        write_png(&pix, BufWriter::new(file)).expect("write png");
    }
    let db = load_database(tmp.path()).expect("load");
    rp.compare_values(3.0, db.len() as f64, 0.0);
    let query = make_white_on_black_rgb(130, 16, 16).expect("query");
    let report = classify(&db, Some(&query)).expect("classify loaded");
    let best = report.best().and_then(|b| b.name.as_deref()).unwrap_or("");
    rp.compare_strings("tipex.png", best);
    let names: Vec<&str> = report.comparisons.iter().map(|c| c.name.as_str()).collect();
    rp.compare_strings("mouse.png,pulpen.png,tipex.png", &names.join(","));

    let labels = LabelTable::from_json_str(r#"{"tipex.png": "Tipe-x", "mouse.png": "Mouse"}"#)
        .expect("labels");
    rp.compare_strings("Tipe-x", labels.label(best).unwrap_or(""));
    rp.check(labels.label("pulpen.png").is_none(), "missing label is None");

    if let Some(mask) = &report.mask {
        rp.write_pix(mask.as_pix(), "query_mask").expect("write mask");
    }

    assert!(rp.cleanup(), "classify regression test failed");
}
