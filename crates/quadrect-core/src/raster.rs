//! Raster - The RGBA image container
//!
//! The `Raster` structure is the image type used throughout quadrect.
//!
//! # Pixel layout
//!
//! - One 32-bit word per pixel, stored row-major with top-left origin
//! - Color order within a word is RGBA (red in MSB): `0xRRGGBBAA`
//! - Each channel is an 8-bit sample in `[0, 255]`
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for efficient cloning (shared ownership).
//! To modify pixel data, convert to `RasterMut` via [`Raster::try_into_mut`]
//! or [`Raster::to_mut`], then convert back with `Into<Raster>`.

use crate::color;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal raster data
#[derive(Debug)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// The image data (one packed RGBA word per pixel)
    data: Vec<u32>,
}

impl RasterData {
    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

/// Raster - RGBA image container
///
/// `Raster` is the fundamental image type in quadrect. It uses reference
/// counting via `Arc` for efficient cloning.
///
/// # Examples
///
/// ```
/// use quadrect_core::Raster;
///
/// // Create a new RGBA image, initialized to transparent black
/// let raster = Raster::new(640, 480).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new raster with the specified dimensions.
    ///
    /// The image data is initialized to zero (transparent black).
    ///
    /// # Arguments
    ///
    /// * `width` - Width in pixels (must be > 0)
    /// * `height` - Height in pixels (must be > 0)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let data = vec![0u32; (width as usize) * (height as usize)];
        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                data,
            }),
        })
    }

    /// Create a raster from existing packed RGBA words.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::InvalidParameter`] if `data.len() != width * height`.
    pub fn from_data(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "data length {} does not match {}x{} raster",
                data.len(),
                width,
                height
            )));
        }
        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                data,
            }),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the number of strong references to this raster.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.data[self.inner.index(x, y)])
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        debug_assert!(x < self.inner.width && y < self.inner.height);
        self.inner.data[self.inner.index(x, y)]
    }

    /// Get RGBA values at (x, y).
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        self.get_pixel(x, y).map(color::extract_rgba)
    }

    /// Check if two rasters have the same width and height.
    pub fn sizes_equal(&self, other: &Raster) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Create an independent copy of this raster.
    ///
    /// Unlike `clone()`, which shares the underlying data, this copies
    /// the pixel buffer.
    pub fn deep_clone(&self) -> Self {
        Raster {
            inner: Arc::new(RasterData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Convert into a mutable raster, if this is the only reference.
    ///
    /// Returns the raster unchanged as the error value when the data is
    /// shared with other `Raster` handles.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Get a mutable raster, copying the pixel data if it is shared.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: RasterData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// RasterMut - Mutable RGBA image container
///
/// Holds uniquely-owned pixel data. Obtained from [`Raster::try_into_mut`]
/// or [`Raster::to_mut`]; convert back with `Into<Raster>`.
#[derive(Debug)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.data[self.inner.index(x, y)])
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        debug_assert!(x < self.inner.width && y < self.inner.height);
        self.inner.data[self.inner.index(x, y)]
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.inner.width as usize) + (x as usize),
                len: self.inner.data.len(),
            });
        }
        let idx = self.inner.index(x, y);
        self.inner.data[idx] = val;
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        debug_assert!(x < self.inner.width && y < self.inner.height);
        let idx = self.inner.index(x, y);
        self.inner.data[idx] = val;
    }

    /// Set an RGBA pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_rgba(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) -> Result<()> {
        self.set_pixel(x, y, color::compose_rgba(r, g, b, a))
    }

    /// Fill the entire raster with a constant pixel value.
    pub fn fill(&mut self, val: u32) {
        self.inner.data.fill(val);
    }
}

impl From<RasterMut> for Raster {
    fn from(raster_mut: RasterMut) -> Self {
        Raster {
            inner: Arc::new(raster_mut.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;

    #[test]
    fn test_new_zero_dimension_fails() {
        assert!(matches!(
            Raster::new(0, 10),
            Err(Error::InvalidDimension { .. })
        ));
        assert!(matches!(
            Raster::new(10, 0),
            Err(Error::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_pixel_roundtrip() {
        let raster = Raster::new(4, 3).unwrap();
        let mut m = raster.try_into_mut().unwrap();
        m.set_pixel(2, 1, 0xDEADBEEF).unwrap();
        assert_eq!(m.get_pixel(2, 1), Some(0xDEADBEEF));

        let raster: Raster = m.into();
        assert_eq!(raster.get_pixel(2, 1), Some(0xDEADBEEF));
        assert_eq!(raster.get_pixel(0, 0), Some(0));
    }

    #[test]
    fn test_out_of_bounds() {
        let raster = Raster::new(4, 3).unwrap();
        assert_eq!(raster.get_pixel(4, 0), None);
        assert_eq!(raster.get_pixel(0, 3), None);

        let mut m = raster.try_into_mut().unwrap();
        assert!(matches!(
            m.set_pixel(4, 0, 1),
            Err(Error::IndexOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_rgba_accessors() {
        let raster = Raster::new(2, 2).unwrap();
        let mut m = raster.try_into_mut().unwrap();
        m.set_rgba(1, 0, 10, 20, 30, 40).unwrap();
        let raster: Raster = m.into();
        assert_eq!(raster.get_rgba(1, 0), Some((10, 20, 30, 40)));
        assert_eq!(
            raster.get_pixel(1, 0),
            Some(color::compose_rgba(10, 20, 30, 40))
        );
    }

    #[test]
    fn test_try_into_mut_shared_fails() {
        let raster = Raster::new(2, 2).unwrap();
        let shared = raster.clone();
        assert!(raster.try_into_mut().is_err());
        drop(shared);
    }

    #[test]
    fn test_to_mut_copies_shared_data() {
        let raster = Raster::new(2, 2).unwrap();
        let mut m = raster.to_mut();
        m.set_pixel(0, 0, 7).unwrap();
        // Original handle is untouched
        assert_eq!(raster.get_pixel(0, 0), Some(0));
        let copy: Raster = m.into();
        assert_eq!(copy.get_pixel(0, 0), Some(7));
    }

    #[test]
    fn test_deep_clone_is_independent() {
        let raster = Raster::new(2, 2).unwrap();
        let copy = raster.deep_clone();
        assert_eq!(copy.ref_count(), 1);
        assert!(raster.sizes_equal(&copy));
    }

    #[test]
    fn test_from_data_length_mismatch() {
        assert!(matches!(
            Raster::from_data(2, 2, vec![0; 3]),
            Err(Error::InvalidParameter(_))
        ));
        assert!(Raster::from_data(2, 2, vec![0; 4]).is_ok());
    }

    #[test]
    fn test_fill() {
        let raster = Raster::new(3, 3).unwrap();
        let mut m = raster.try_into_mut().unwrap();
        m.fill(0xFFFFFFFF);
        let raster: Raster = m.into();
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(raster.get_pixel(x, y), Some(0xFFFFFFFF));
            }
        }
    }
}
