//! PNG image format support

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder};
use seedgrow_core::{PixelFormat, Raster};
use std::io::{BufRead, Seek, Write};

/// Extract a sub-byte or byte sample from a packed row.
fn packed_sample(data: &[u8], row_start: usize, x: u32, bit_depth: BitDepth) -> u8 {
    match bit_depth {
        BitDepth::One => {
            let byte = data[row_start + (x / 8) as usize];
            (byte >> (7 - (x % 8))) & 1
        }
        BitDepth::Two => {
            let byte = data[row_start + (x / 4) as usize];
            (byte >> (6 - (x % 4) * 2)) & 3
        }
        BitDepth::Four => {
            let byte = data[row_start + (x / 2) as usize];
            if x % 2 == 0 { (byte >> 4) & 0xF } else { byte & 0xF }
        }
        _ => data[row_start + x as usize],
    }
}

/// Scale a sub-byte grayscale sample up to the 0-255 range.
fn scale_to_byte(val: u8, bit_depth: BitDepth) -> u8 {
    match bit_depth {
        BitDepth::One => val * 255,
        BitDepth::Two => val * 85,
        BitDepth::Four => val * 17,
        _ => val,
    }
}

/// Read a PNG image
///
/// Grayscale images decode to [`PixelFormat::Gray8`] (16-bit samples
/// keep their most significant byte; 1/2/4-bit samples are scaled up).
/// Color, gray+alpha, and indexed images decode to
/// [`PixelFormat::Rgba8`], expanding any palette.
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

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    match color_type {
        ColorType::Grayscale => {
            let mut gray = Vec::with_capacity(width as usize * height as usize);
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let val = if bit_depth == BitDepth::Sixteen {
                        data[row_start + x as usize * 2]
                    } else {
                        scale_to_byte(packed_sample(data, row_start, x, bit_depth), bit_depth)
                    };
                    gray.push(val);
                }
            }
            Raster::from_gray(width, height, gray).map_err(IoError::Core)
        }
        ColorType::GrayscaleAlpha => {
            let samples = if bit_depth == BitDepth::Sixteen { 4 } else { 2 };
            let mut rgba = Vec::with_capacity(width as usize * height as usize * 4);
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let idx = row_start + x as usize * samples;
                    let (g, a) = if bit_depth == BitDepth::Sixteen {
                        (data[idx], data[idx + 2])
                    } else {
                        (data[idx], data[idx + 1])
                    };
                    rgba.extend_from_slice(&[g, g, g, a]);
                }
            }
            Raster::from_rgba(width, height, rgba).map_err(IoError::Core)
        }
        ColorType::Rgb => {
            let samples = if bit_depth == BitDepth::Sixteen { 6 } else { 3 };
            let step = if bit_depth == BitDepth::Sixteen { 2 } else { 1 };
            let mut rgba = Vec::with_capacity(width as usize * height as usize * 4);
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let idx = row_start + x as usize * samples;
                    rgba.extend_from_slice(&[
                        data[idx],
                        data[idx + step],
                        data[idx + 2 * step],
                        255,
                    ]);
                }
            }
            Raster::from_rgba(width, height, rgba).map_err(IoError::Core)
        }
        ColorType::Rgba => {
            let samples = if bit_depth == BitDepth::Sixteen { 8 } else { 4 };
            let step = if bit_depth == BitDepth::Sixteen { 2 } else { 1 };
            let mut rgba = Vec::with_capacity(width as usize * height as usize * 4);
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let idx = row_start + x as usize * samples;
                    rgba.extend_from_slice(&[
                        data[idx],
                        data[idx + step],
                        data[idx + 2 * step],
                        data[idx + 3 * step],
                    ]);
                }
            }
            Raster::from_rgba(width, height, rgba).map_err(IoError::Core)
        }
        ColorType::Indexed => {
            let palette = reader
                .info()
                .palette
                .as_ref()
                .ok_or_else(|| IoError::InvalidData("indexed PNG without palette".to_string()))?;
            let palette: &[u8] = palette;
            let mut rgba = Vec::with_capacity(width as usize * height as usize * 4);
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let idx = packed_sample(data, row_start, x, bit_depth) as usize * 3;
                    if idx + 2 >= palette.len() {
                        return Err(IoError::InvalidData(format!(
                            "palette index {} out of range",
                            idx / 3
                        )));
                    }
                    rgba.extend_from_slice(&[palette[idx], palette[idx + 1], palette[idx + 2], 255]);
                }
            }
            Raster::from_rgba(width, height, rgba).map_err(IoError::Core)
        }
    }
}

/// Write a PNG image
///
/// Gray8 rasters are written as 8-bit grayscale, Rgba8 rasters as
/// 8-bit RGBA.
pub fn write_png<W: Write>(pix: &Raster, writer: W) -> IoResult<()> {
    let (color_type, bit_depth) = match pix.format() {
        PixelFormat::Gray8 => (ColorType::Grayscale, BitDepth::Eight),
        PixelFormat::Rgba8 => (ColorType::Rgba, BitDepth::Eight),
    };

    let mut encoder = Encoder::new(writer, pix.width(), pix.height());
    encoder.set_color(color_type);
    encoder.set_depth(bit_depth);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    // The raster layout already matches the PNG scanline layout
    writer
        .write_image_data(pix.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}
