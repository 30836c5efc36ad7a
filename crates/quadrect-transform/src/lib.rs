//! quadrect-transform - Perspective rectification for quadrect
//!
//! This crate provides the geometric and numeric pipeline that maps a
//! quadrilateral image region onto an axis-aligned rectangle:
//!
//! - Clockwise ordering of four arbitrary corner points
//! - Homography estimation from 4-point correspondences
//! - Dense linear solving (Gauss-Jordan elimination with partial pivoting)
//! - Inverse-mapped, edge-clamped bilinear resampling
//!
//! The one-call entry point is [`rectify`]; the pieces are public for
//! callers that need to reuse an estimated [`Homography`].

mod error;
pub mod homography;
pub mod quad;
pub mod rectify;
pub mod solve;

pub use error::{TransformError, TransformResult};
pub use homography::Homography;
pub use quad::{OrderedQuad, Point};
pub use rectify::{rectify, resample, sample_bilinear};
pub use solve::{PIVOT_TOLERANCE, solve};
