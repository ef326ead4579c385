//! Regression harness errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TestError {
    /// A display-mode image could not be encoded
    #[error("cannot write {path}: {message}")]
    ImageWrite { path: String, message: String },

    #[error("fixture construction: {0}")]
    Fixture(#[from] binmatch_core::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type TestResult<T> = Result<T, TestError>;
