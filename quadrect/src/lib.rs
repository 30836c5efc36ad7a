//! Quadrect - Perspective rectification of quadrilateral image regions
//!
//! Given four corner points picked on a source image and a target output
//! size, quadrect orders the corners, estimates the projective transform
//! mapping the target rectangle onto the quadrilateral, and fills the
//! output by inverse-mapped bilinear resampling.
//!
//! # Example
//!
//! ```
//! use quadrect::{Raster, transform::{rectify, Point}};
//!
//! let src = Raster::new(100, 100).unwrap();
//! let corners = [
//!     Point::new(10.0, 10.0),
//!     Point::new(90.0, 10.0),
//!     Point::new(90.0, 90.0),
//!     Point::new(10.0, 90.0),
//! ];
//! let out = rectify(&src, corners, 50, 150).unwrap();
//! assert_eq!((out.width(), out.height()), (50, 150));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use quadrect_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use quadrect_io as io;
pub use quadrect_transform as transform;
