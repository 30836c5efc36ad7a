//! quadrect-test - Regression test framework for quadrect
//!
//! Provides a small regression harness in two parts:
//!
//! - [`RegParams`] - indexed value/raster comparisons with a summary
//!   report, in **Compare** (default) or **Display** mode selected by the
//!   `REGTEST_MODE` environment variable
//! - Synthetic test images ([`gradient_raster`]), so integration tests
//!   need no image files on disk
//!
//! # Usage
//!
//! ```ignore
//! use quadrect_test::{RegParams, gradient_raster};
//!
//! let mut rp = RegParams::new("rectify");
//! let src = gradient_raster(100, 100).expect("gradient");
//! rp.compare_values(100.0, src.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use quadrect_core::{Raster, RasterMut};

/// Build a deterministic RGBA gradient test image.
///
/// Channel values are linear in the pixel position (modulo 256):
/// `r = x`, `g = y`, `b = x + y`, `a = 255`. Linear channels make
/// bilinear-sampled values easy to predict in tests.
///
/// # Errors
///
/// Returns an error for zero dimensions.
pub fn gradient_raster(width: u32, height: u32) -> TestResult<Raster> {
    let raster = Raster::new(width, height)?;
    let mut m: RasterMut = raster.try_into_mut().unwrap();

    for y in 0..height {
        for x in 0..width {
            let r = (x % 256) as u8;
            let g = (y % 256) as u8;
            let b = ((x + y) % 256) as u8;
            m.set_pixel_unchecked(x, y, quadrect_core::color::compose_rgba(r, g, b, 255));
        }
    }

    Ok(m.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_raster_values() {
        let raster = gradient_raster(300, 4).unwrap();
        assert_eq!(raster.get_rgba(0, 0), Some((0, 0, 0, 255)));
        assert_eq!(raster.get_rgba(10, 3), Some((10, 3, 13, 255)));
        // x wraps at 256
        assert_eq!(raster.get_rgba(256, 1), Some((0, 1, 1, 255)));
    }

    #[test]
    fn test_gradient_raster_zero_dimension() {
        assert!(gradient_raster(0, 4).is_err());
    }
}
