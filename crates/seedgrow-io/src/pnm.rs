//! PNM image format support (PGM and PPM)
//!
//! Reads P2/P5 grayscale and P3/P6 color maps; writes binary P5 for
//! grayscale rasters and binary P6 for RGBA rasters (alpha is dropped).
//! PNM needs no external codec, so it is always available as a
//! dependency-free debug format.

use crate::{IoError, IoResult};
use seedgrow_core::{PixelFormat, Raster};
use std::io::{Read, Write};

/// Token cursor over raw PNM bytes.
struct PnmCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> PnmCursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Skip whitespace and `#` comment lines.
    fn skip_filler(&mut self) {
        while self.pos < self.data.len() {
            let b = self.data[self.pos];
            if b.is_ascii_whitespace() {
                self.pos += 1;
            } else if b == b'#' {
                while self.pos < self.data.len() && self.data[self.pos] != b'\n' {
                    self.pos += 1;
                }
            } else {
                break;
            }
        }
    }

    /// Parse the next ASCII decimal token.
    fn number(&mut self) -> IoResult<u32> {
        self.skip_filler();
        let start = self.pos;
        while self.pos < self.data.len() && self.data[self.pos].is_ascii_digit() {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(IoError::InvalidData("expected PNM number".to_string()));
        }
        let token = std::str::from_utf8(&self.data[start..self.pos])
            .map_err(|_| IoError::InvalidData("bad PNM token".to_string()))?;
        token
            .parse::<u32>()
            .map_err(|_| IoError::InvalidData(format!("bad PNM number: {}", token)))
    }

    /// Skip the single whitespace byte that separates the header from
    /// binary sample data.
    fn skip_single_ws(&mut self) -> IoResult<()> {
        if self.pos < self.data.len() && self.data[self.pos].is_ascii_whitespace() {
            self.pos += 1;
            Ok(())
        } else {
            Err(IoError::InvalidData(
                "missing separator before PNM samples".to_string(),
            ))
        }
    }

    fn rest(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }
}

fn scale(val: u32, maxval: u32) -> u8 {
    ((val * 255 + maxval / 2) / maxval) as u8
}

/// Read a PNM image
///
/// P2/P5 decode to [`PixelFormat::Gray8`], P3/P6 to
/// [`PixelFormat::Rgba8`] with alpha 255. Samples are rescaled when the
/// header's maxval is below 255; maxval above 255 is not supported.
pub fn read_pnm<R: Read>(mut reader: R) -> IoResult<Raster> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    if data.len() < 2 || data[0] != b'P' {
        return Err(IoError::InvalidData("not a PNM file".to_string()));
    }
    let kind = data[1];
    if !matches!(kind, b'2' | b'3' | b'5' | b'6') {
        return Err(IoError::UnsupportedFormat(format!(
            "PNM type P{} not supported",
            kind as char
        )));
    }
    let mut cur = PnmCursor::new(&data);
    cur.pos = 2;

    let width = cur.number()?;
    let height = cur.number()?;
    let maxval = cur.number()?;
    if maxval == 0 || maxval > 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "PNM maxval {} not supported",
            maxval
        )));
    }
    let npixels = width as usize * height as usize;

    match kind {
        b'2' => {
            let mut gray = Vec::with_capacity(npixels);
            for _ in 0..npixels {
                gray.push(scale(cur.number()?, maxval));
            }
            Raster::from_gray(width, height, gray).map_err(IoError::Core)
        }
        b'3' => {
            let mut rgba = Vec::with_capacity(npixels * 4);
            for _ in 0..npixels {
                let r = scale(cur.number()?, maxval);
                let g = scale(cur.number()?, maxval);
                let b = scale(cur.number()?, maxval);
                rgba.extend_from_slice(&[r, g, b, 255]);
            }
            Raster::from_rgba(width, height, rgba).map_err(IoError::Core)
        }
        b'5' => {
            cur.skip_single_ws()?;
            let samples = cur.rest();
            if samples.len() < npixels {
                return Err(IoError::InvalidData("truncated PGM data".to_string()));
            }
            let gray = samples[..npixels]
                .iter()
                .map(|&v| scale(v as u32, maxval))
                .collect();
            Raster::from_gray(width, height, gray).map_err(IoError::Core)
        }
        b'6' => {
            cur.skip_single_ws()?;
            let samples = cur.rest();
            if samples.len() < npixels * 3 {
                return Err(IoError::InvalidData("truncated PPM data".to_string()));
            }
            let mut rgba = Vec::with_capacity(npixels * 4);
            for chunk in samples[..npixels * 3].chunks_exact(3) {
                rgba.extend_from_slice(&[
                    scale(chunk[0] as u32, maxval),
                    scale(chunk[1] as u32, maxval),
                    scale(chunk[2] as u32, maxval),
                    255,
                ]);
            }
            Raster::from_rgba(width, height, rgba).map_err(IoError::Core)
        }
        _ => unreachable!(),
    }
}

/// Write a PNM image
///
/// Gray8 rasters are written as binary PGM (P5), Rgba8 rasters as
/// binary PPM (P6) with the alpha channel dropped.
pub fn write_pnm<W: Write>(pix: &Raster, mut writer: W) -> IoResult<()> {
    match pix.format() {
        PixelFormat::Gray8 => {
            write!(writer, "P5\n{} {}\n255\n", pix.width(), pix.height())?;
            writer.write_all(pix.data())?;
        }
        PixelFormat::Rgba8 => {
            write!(writer, "P6\n{} {}\n255\n", pix.width(), pix.height())?;
            let mut row = Vec::with_capacity(pix.width() as usize * 3);
            for y in 0..pix.height() {
                row.clear();
                for x in 0..pix.width() {
                    let (r, g, b, _) = pix.rgba_unchecked(x, y);
                    row.extend_from_slice(&[r, g, b]);
                }
                writer.write_all(&row)?;
            }
        }
    }
    Ok(())
}
