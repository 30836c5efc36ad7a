//! Error types for quadrect-transform

use thiserror::Error;

/// Errors that can occur during perspective rectification
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] quadrect_core::Error),

    /// The linear system for the homography has no unique solution
    #[error("singular or near-singular linear system")]
    SingularSystem,

    /// The corner points do not form a usable quadrilateral
    #[error("degenerate quadrilateral: {0}")]
    DegenerateQuad(String),

    /// Invalid transformation parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
