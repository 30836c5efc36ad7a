//! Rectification by inverse-mapped bilinear resampling
//!
//! The destination image is scanned once; every destination pixel is
//! projected back into source space through the homography and
//! reconstructed from the four nearest source samples. Projected
//! coordinates are clamped to the source bounds first, which both keeps
//! every lookup in bounds and extends edge pixels over any part of the
//! destination that falls outside the source.

use crate::homography::Homography;
use crate::quad::{OrderedQuad, Point};
use crate::{TransformError, TransformResult};
use quadrect_core::{Raster, color};

/// Correct the perspective distortion of a quadrilateral region.
///
/// Orders `corners` clockwise, estimates the homography carrying the
/// `width` x `height` destination rectangle onto the ordered
/// quadrilateral, and resamples `src` through it.
///
/// # Arguments
///
/// * `src` - Source image
/// * `corners` - The four corner points, in any order, in source-pixel
///   space (they may lie outside the image)
/// * `width` - Output width in pixels
/// * `height` - Output height in pixels
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] for a zero output
/// dimension, and propagates estimation failures
/// ([`TransformError::DegenerateQuad`],
/// [`TransformError::SingularSystem`]) without producing any output.
pub fn rectify(
    src: &Raster,
    corners: [Point; 4],
    width: u32,
    height: u32,
) -> TransformResult<Raster> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidParameters(format!(
            "output dimensions must be positive, got {width}x{height}"
        )));
    }

    let quad = OrderedQuad::from_points(corners);
    let target = OrderedQuad::axis_aligned(width as f64, height as f64);
    let h = Homography::mapping(&target, &quad)?;
    resample(src, &h, width, height)
}

/// Resample `src` through `h` into a new `width` x `height` raster.
///
/// `h` must map destination coordinates to source coordinates. Every
/// destination pixel is written exactly once.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] for a zero output
/// dimension.
pub fn resample(
    src: &Raster,
    h: &Homography,
    width: u32,
    height: u32,
) -> TransformResult<Raster> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidParameters(format!(
            "output dimensions must be positive, got {width}x{height}"
        )));
    }

    let out = Raster::new(width, height)?;
    let mut out_mut = out.try_into_mut().unwrap();

    for dy in 0..height {
        for dx in 0..width {
            let (sx, sy) = h.apply(dx as f64, dy as f64);
            let val = sample_bilinear(src, sx, sy);
            out_mut.set_pixel_unchecked(dx, dy, val);
        }
    }

    Ok(out_mut.into())
}

/// Reconstruct an RGBA value at a fractional source coordinate.
///
/// The coordinate is clamped to `[0, width-1] x [0, height-1]`, then the
/// four surrounding samples are blended per channel with bilinear
/// weights. Sampling exactly on an integer coordinate returns that pixel
/// unchanged.
pub fn sample_bilinear(src: &Raster, x: f64, y: f64) -> u32 {
    let wm1 = src.width() - 1;
    let hm1 = src.height() - 1;

    let x = x.clamp(0.0, wm1 as f64);
    let y = y.clamp(0.0, hm1 as f64);

    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;

    let x0 = x0 as u32;
    let y0 = y0 as u32;
    let x1 = (x0 + 1).min(wm1);
    let y1 = (y0 + 1).min(hm1);

    let p00 = src.get_pixel_unchecked(x0, y0);
    let p10 = src.get_pixel_unchecked(x1, y0);
    let p01 = src.get_pixel_unchecked(x0, y1);
    let p11 = src.get_pixel_unchecked(x1, y1);

    let r = blend_channel(
        color::red(p00),
        color::red(p10),
        color::red(p01),
        color::red(p11),
        fx,
        fy,
    );
    let g = blend_channel(
        color::green(p00),
        color::green(p10),
        color::green(p01),
        color::green(p11),
        fx,
        fy,
    );
    let b = blend_channel(
        color::blue(p00),
        color::blue(p10),
        color::blue(p01),
        color::blue(p11),
        fx,
        fy,
    );
    let a = blend_channel(
        color::alpha(p00),
        color::alpha(p10),
        color::alpha(p01),
        color::alpha(p11),
        fx,
        fy,
    );

    color::compose_rgba(r, g, b, a)
}

/// Blend a single channel from its four neighbors.
#[inline]
fn blend_channel(p00: u8, p10: u8, p01: u8, p11: u8, fx: f64, fy: f64) -> u8 {
    let top = p00 as f64 * (1.0 - fx) + p10 as f64 * fx;
    let bottom = p01 as f64 * (1.0 - fx) + p11 as f64 * fx;
    (top * (1.0 - fy) + bottom * fy).round() as u8
}
