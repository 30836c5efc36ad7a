//! quadrect-io - Image I/O for quadrect
//!
//! Reads and writes the RGBA raster container as PNG, the persisted
//! boundary of the rectification pipeline. Other container formats are
//! out of scope for this crate.

mod error;
pub mod png;

pub use error::{IoError, IoResult};
pub use png::{read_png, write_png};

use quadrect_core::Raster;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Read a PNG image from a file path.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be opened and the decoder
/// errors of [`read_png`] otherwise.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let file = File::open(path)?;
    read_png(BufReader::new(file))
}

/// Write an image to a file path as 8-bit RGBA PNG.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be created and the encoder
/// errors of [`write_png`] otherwise.
pub fn write_image<P: AsRef<Path>>(raster: &Raster, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    write_png(raster, BufWriter::new(file))
}
