//! Error types for the regression test framework

use thiserror::Error;

/// Errors raised while preparing test fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Core library error while building a synthetic image
    #[error("core error: {0}")]
    Core(#[from] quadrect_core::Error),
}

/// Result type for test framework operations
pub type TestResult<T> = Result<T, TestError>;
