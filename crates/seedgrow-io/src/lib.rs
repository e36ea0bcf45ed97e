//! seedgrow-io - Image file I/O for seedgrow
//!
//! Reads source images into [`Raster`]s and writes results back out.
//! PNG support is feature-gated (`png-format`, on by default); PNM
//! (PGM/PPM) is always available.
//!
//! # Examples
//!
//! ```no_run
//! use seedgrow_io::{read_image, write_image, ImageFormat};
//!
//! let pix = read_image("brain.png").unwrap();
//! write_image(&pix, "copy.png", ImageFormat::Png).unwrap();
//! ```

pub mod error;
pub mod format;
#[cfg(feature = "pnm")]
pub mod pnm;

#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use seedgrow_core::Raster;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Read an image from a file path, detecting its format from the file
/// header.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let path = path.as_ref();
    let fmt = detect_format(path)?;
    match fmt {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => {
            let file = File::open(path)?;
            png::read_png(BufReader::new(file))
        }
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => {
            let file = File::open(path)?;
            pnm::read_pnm(BufReader::new(file))
        }
        other => Err(IoError::UnsupportedFormat(format!(
            "no reader available for {:?}",
            other
        ))),
    }
}

/// Write an image to a file path in the requested format.
pub fn write_image<P: AsRef<Path>>(pix: &Raster, path: P, format: ImageFormat) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(pix, writer),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(pix, writer),
        other => Err(IoError::UnsupportedFormat(format!(
            "no writer available for {:?}",
            other
        ))),
    }
}
