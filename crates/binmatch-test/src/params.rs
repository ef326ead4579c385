//! Numbered regression checks

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use binmatch_core::Pix;
use std::fs::{self, File};
use std::io::BufWriter;

/// What a regression run does besides checking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Checks only
    #[default]
    Compare,
    /// Checks, plus intermediate images written to `tests/regout`
    Display,
}

impl RegTestMode {
    /// Read `REGTEST_MODE` ("display" selects [`RegTestMode::Display`]).
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE") {
            Ok(v) if v.eq_ignore_ascii_case("display") => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// State of one regression test
///
/// Each check bumps the index, so a failure message pinpoints which
/// check in the test body went wrong. Failures are collected rather than
/// panicking; call [`RegParams::cleanup`] at the end and assert on it.
pub struct RegParams {
    /// Short name, used in messages and output filenames
    pub test_name: String,
    pub mode: RegTestMode,
    index: usize,
    failures: Vec<String>,
}

impl RegParams {
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();
        if mode == RegTestMode::Display {
            let _ = fs::create_dir_all(regout_dir());
        }
        eprintln!();
        eprintln!("======== {}_reg ({:?}) ========", test_name, mode);

        Self {
            test_name: test_name.to_string(),
            mode,
            index: 0,
            failures: Vec::new(),
        }
    }

    /// Index of the most recent check.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    /// Record the outcome of the next check; `detail` is only built on failure.
    fn record(&mut self, ok: bool, detail: impl FnOnce() -> String) -> bool {
        self.index += 1;
        if !ok {
            let msg = format!(
                "{}_reg check {} failed: {}",
                self.test_name,
                self.index,
                detail()
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
        }
        ok
    }

    /// Pass if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        let diff = (expected - actual).abs();
        self.record(diff <= delta, || {
            format!(
                "expected {}, got {} (difference {} > {})",
                expected, actual, diff, delta
            )
        })
    }

    /// Pass if `condition` holds.
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        self.record(condition, || what.to_string())
    }

    /// Pass if both images have the same size, depth and pixels.
    pub fn compare_pix(&mut self, expected: &Pix, actual: &Pix) -> bool {
        let mismatch = if !expected.sizes_equal(actual) {
            Some(format!(
                "image size {}x{}x{} vs {}x{}x{}",
                expected.width(),
                expected.height(),
                expected.depth().bits(),
                actual.width(),
                actual.height(),
                actual.depth().bits()
            ))
        } else {
            (0..expected.height())
                .flat_map(|y| (0..expected.width()).map(move |x| (x, y)))
                .find(|&(x, y)| expected.get_pixel(x, y) != actual.get_pixel(x, y))
                .map(|(x, y)| format!("pixel mismatch at ({}, {})", x, y))
        };
        match mismatch {
            None => self.record(true, String::new),
            Some(msg) => self.record(false, || msg),
        }
    }

    /// Pass if the strings are equal.
    pub fn compare_strings(&mut self, expected: &str, actual: &str) -> bool {
        self.record(expected == actual, || {
            format!("expected {:?}, got {:?}", expected, actual)
        })
    }

    /// In display mode, save `pix` as `<test>.<index>.<label>.png` under
    /// the regout directory and return the path.
    pub fn write_pix(&mut self, pix: &Pix, label: &str) -> TestResult<Option<String>> {
        if !self.display() {
            return Ok(None);
        }
        let path = format!(
            "{}/{}.{:02}.{}.png",
            regout_dir(),
            self.test_name,
            self.index,
            label
        );
        let file = File::create(&path)?;
        binmatch_io::write_png(pix, BufWriter::new(file)).map_err(|e| TestError::ImageWrite {
            path: path.clone(),
            message: e.to_string(),
        })?;
        eprintln!("wrote {}", path);
        Ok(Some(path))
    }

    /// Print the summary; `true` if every check passed.
    pub fn cleanup(self) -> bool {
        if self.failures.is_empty() {
            eprintln!("SUCCESS: {}_reg ({} checks)", self.test_name, self.index);
            true
        } else {
            eprintln!(
                "FAILURE: {}_reg ({} of {} checks)",
                self.test_name,
                self.failures.len(),
                self.index
            );
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
            false
        }
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
