//! Raster - the image container
//!
//! `Raster` is the image type shared by every crate in the workspace.
//! It stores either 8-bit grayscale or 8-bit RGBA samples in row-major
//! byte order with no row padding.
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for cheap cloning (shared ownership). To modify
//! pixel data, convert to [`RasterMut`] via [`Raster::try_into_mut`] or
//! [`Raster::to_mut`], then convert back with `Into<Raster>`. The split
//! makes exclusive access a compile-time property: an algorithm that
//! takes `&Raster` cannot mutate its input.

use crate::error::{Error, Result};
use crate::geometry::{Bounds, Point};
use std::sync::Arc;

/// Sample layout of a raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 8-bit grayscale, one byte per pixel
    Gray8,
    /// 8-bit RGBA, four bytes per pixel
    Rgba8,
}

impl PixelFormat {
    /// Bytes occupied by one pixel.
    #[inline]
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Gray8 => 1,
            PixelFormat::Rgba8 => 4,
        }
    }
}

/// Internal raster data
#[derive(Debug)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Sample layout
    format: PixelFormat,
    /// Row-major samples, `width * height * bytes_per_pixel` bytes
    data: Vec<u8>,
}

impl RasterData {
    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        let bpp = self.format.bytes_per_pixel();
        (y as usize * self.width as usize + x as usize) * bpp
    }

    #[inline]
    fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    fn gray(&self, x: u32, y: u32) -> Option<u8> {
        if self.format != PixelFormat::Gray8 || !self.in_bounds(x, y) {
            return None;
        }
        Some(self.data[self.offset(x, y)])
    }

    fn rgba(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        if self.format != PixelFormat::Rgba8 || !self.in_bounds(x, y) {
            return None;
        }
        let i = self.offset(x, y);
        Some((self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]))
    }
}

/// Raster - main image container
///
/// Uses reference counting via `Arc` for efficient cloning.
///
/// # Examples
///
/// ```
/// use seedgrow_core::{PixelFormat, Raster};
///
/// // Create a new 8-bit grayscale image
/// let pix = Raster::new(640, 480, PixelFormat::Gray8).unwrap();
/// assert_eq!(pix.width(), 640);
/// assert_eq!(pix.height(), 480);
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new raster with the specified dimensions and format.
    ///
    /// The image data is initialized to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let size = width as usize * height as usize * format.bytes_per_pixel();
        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                format,
                data: vec![0u8; size],
            }),
        })
    }

    /// Create a grayscale raster from existing samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0 or if
    /// `data.len() != width * height`.
    pub fn from_gray(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 || data.len() != width as usize * height as usize {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                format: PixelFormat::Gray8,
                data,
            }),
        })
    }

    /// Create an RGBA raster from existing samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0 or if
    /// `data.len() != width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 || data.len() != width as usize * height as usize * 4 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                format: PixelFormat::Rgba8,
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

    /// Get the sample layout.
    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.inner.format
    }

    /// Get the image extents.
    ///
    /// Never fails: a `Raster` cannot be constructed with a zero extent.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.inner.width, self.inner.height).unwrap()
    }

    /// Get raw access to the sample data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get a grayscale sample at (x, y).
    ///
    /// Returns `None` for out-of-bounds coordinates or a non-Gray8 raster.
    #[inline]
    pub fn gray(&self, x: u32, y: u32) -> Option<u8> {
        self.inner.gray(x, y)
    }

    /// Get a grayscale sample without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds or the raster is not Gray8.
    #[inline]
    pub fn gray_unchecked(&self, x: u32, y: u32) -> u8 {
        self.inner.gray(x, y).expect("gray_unchecked out of bounds")
    }

    /// Get RGBA samples at (x, y).
    ///
    /// Returns `None` for out-of-bounds coordinates or a non-Rgba8 raster.
    #[inline]
    pub fn rgba(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        self.inner.rgba(x, y)
    }

    /// Get RGBA samples without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds or the raster is not Rgba8.
    #[inline]
    pub fn rgba_unchecked(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        self.inner.rgba(x, y).expect("rgba_unchecked out of bounds")
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Create a mutable copy of this raster.
    ///
    /// Always allocates a new copy that can be modified.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: RasterData {
                width: self.inner.width,
                height: self.inner.height,
                format: self.inner.format,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable raster
///
/// Allows modification of image data. Convert back to an immutable
/// [`Raster`] using `Into<Raster>`.
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

    /// Get the sample layout.
    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.inner.format
    }

    /// Get the image extents.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.inner.width, self.inner.height).unwrap()
    }

    /// Get a grayscale sample at (x, y).
    #[inline]
    pub fn gray(&self, x: u32, y: u32) -> Option<u8> {
        self.inner.gray(x, y)
    }

    /// Get RGBA samples at (x, y).
    #[inline]
    pub fn rgba(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        self.inner.rgba(x, y)
    }

    /// Set a grayscale sample at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::FormatMismatch`] for a non-Gray8 raster and
    /// [`Error::OutOfBounds`] for a bad coordinate.
    pub fn set_gray(&mut self, x: u32, y: u32, val: u8) -> Result<()> {
        if self.inner.format != PixelFormat::Gray8 {
            return Err(Error::FormatMismatch {
                expected: PixelFormat::Gray8,
                actual: self.inner.format,
            });
        }
        if !self.inner.in_bounds(x, y) {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        let i = self.inner.offset(x, y);
        self.inner.data[i] = val;
        Ok(())
    }

    /// Set a grayscale sample without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds or the raster is not Gray8.
    #[inline]
    pub fn set_gray_unchecked(&mut self, x: u32, y: u32, val: u8) {
        assert_eq!(self.inner.format, PixelFormat::Gray8);
        let i = self.inner.offset(x, y);
        self.inner.data[i] = val;
    }

    /// Set an RGBA sample at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::FormatMismatch`] for a non-Rgba8 raster and
    /// [`Error::OutOfBounds`] for a bad coordinate.
    pub fn set_rgba(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) -> Result<()> {
        if self.inner.format != PixelFormat::Rgba8 {
            return Err(Error::FormatMismatch {
                expected: PixelFormat::Rgba8,
                actual: self.inner.format,
            });
        }
        if !self.inner.in_bounds(x, y) {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        let i = self.inner.offset(x, y);
        self.inner.data[i..i + 4].copy_from_slice(&[r, g, b, a]);
        Ok(())
    }

    /// Set an RGBA sample without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds or the raster is not Rgba8.
    #[inline]
    pub fn set_rgba_unchecked(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) {
        assert_eq!(self.inner.format, PixelFormat::Rgba8);
        let i = self.inner.offset(x, y);
        self.inner.data[i..i + 4].copy_from_slice(&[r, g, b, a]);
    }
}

impl From<RasterMut> for Raster {
    fn from(pix: RasterMut) -> Self {
        Raster {
            inner: Arc::new(pix.inner),
        }
    }
}
