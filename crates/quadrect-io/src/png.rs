//! PNG image format support
//!
//! Reads 8-bit grayscale, grayscale+alpha, RGB, and RGBA PNGs into the
//! RGBA raster container (narrower layouts are widened: gray replicated
//! across R/G/B, missing alpha set to 255). Writes always emit 8-bit RGBA.

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder};
use quadrect_core::{Raster, color};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Raster> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG bit depth: {:?}",
            bit_depth
        )));
    }
    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG color type: {:?}",
                color_type
            )));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let raster = Raster::new(width, height)?;
    let mut raster_mut = raster.try_into_mut().unwrap();

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    for y in 0..height {
        let row_start = y as usize * bytes_per_row;
        for x in 0..width {
            let idx = row_start + (x as usize) * samples;
            let pixel = match color_type {
                ColorType::Grayscale => {
                    let g = data[idx];
                    color::compose_rgba(g, g, g, 255)
                }
                ColorType::GrayscaleAlpha => {
                    let g = data[idx];
                    color::compose_rgba(g, g, g, data[idx + 1])
                }
                ColorType::Rgb => color::compose_rgba(data[idx], data[idx + 1], data[idx + 2], 255),
                ColorType::Rgba => {
                    color::compose_rgba(data[idx], data[idx + 1], data[idx + 2], data[idx + 3])
                }
                _ => unreachable!(),
            };
            raster_mut.set_pixel_unchecked(x, y, pixel);
        }
    }

    Ok(raster_mut.into())
}

/// Write a raster as an 8-bit RGBA PNG
pub fn write_png<W: Write>(raster: &Raster, writer: W) -> IoResult<()> {
    let width = raster.width();
    let height = raster.height();

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let mut data = vec![0u8; (width as usize) * (height as usize) * 4];
    for y in 0..height {
        let row_start = y as usize * (width as usize) * 4;
        for x in 0..width {
            let (r, g, b, a) = color::extract_rgba(raster.get_pixel_unchecked(x, y));
            let idx = row_start + (x as usize) * 4;
            data[idx] = r;
            data[idx + 1] = g;
            data[idx + 2] = b;
            data[idx + 3] = a;
        }
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}
