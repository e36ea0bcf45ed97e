//! Format conversions
//!
//! Conversions between the grayscale and RGBA sample layouts, plus
//! single-channel extraction for callers that want one component of a
//! color image as their gray source.

use crate::error::Result;
use crate::raster::{PixelFormat, Raster};

/// Perceptual weights for RGB-to-gray conversion.
const RED_WEIGHT: f32 = 0.3;
const GREEN_WEIGHT: f32 = 0.5;
const BLUE_WEIGHT: f32 = 0.2;

/// Color component selector for channel extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RgbComponent {
    /// Red channel
    Red,
    /// Green channel
    Green,
    /// Blue channel
    Blue,
    /// Alpha channel
    Alpha,
}

impl Raster {
    /// Convert to 8-bit grayscale using perceptual luminance weights
    /// (0.3 R + 0.5 G + 0.2 B).
    ///
    /// A Gray8 input is returned as a cheap clone.
    pub fn to_gray(&self) -> Result<Raster> {
        if self.format() == PixelFormat::Gray8 {
            return Ok(self.clone());
        }

        let w = self.width();
        let h = self.height();
        let mut data = Vec::with_capacity(w as usize * h as usize);
        for y in 0..h {
            for x in 0..w {
                let (r, g, b, _) = self.rgba_unchecked(x, y);
                let gray = (RED_WEIGHT * r as f32
                    + GREEN_WEIGHT * g as f32
                    + BLUE_WEIGHT * b as f32
                    + 0.5) as u8;
                data.push(gray);
            }
        }
        Raster::from_gray(w, h, data)
    }

    /// Convert to 8-bit RGBA, replicating gray samples into the color
    /// channels with full opacity.
    ///
    /// An Rgba8 input is returned as a cheap clone. This is the rendering
    /// copy that mask visualization draws on.
    pub fn to_rgba(&self) -> Result<Raster> {
        if self.format() == PixelFormat::Rgba8 {
            return Ok(self.clone());
        }

        let w = self.width();
        let h = self.height();
        let mut data = Vec::with_capacity(w as usize * h as usize * 4);
        for y in 0..h {
            for x in 0..w {
                let g = self.gray_unchecked(x, y);
                data.extend_from_slice(&[g, g, g, 255]);
            }
        }
        Raster::from_rgba(w, h, data)
    }

    /// Extract a single color component as an 8-bit grayscale raster.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::FormatMismatch`] for a non-Rgba8 raster.
    pub fn extract_component(&self, comp: RgbComponent) -> Result<Raster> {
        if self.format() != PixelFormat::Rgba8 {
            return Err(crate::Error::FormatMismatch {
                expected: PixelFormat::Rgba8,
                actual: self.format(),
            });
        }

        let w = self.width();
        let h = self.height();
        let mut data = Vec::with_capacity(w as usize * h as usize);
        for y in 0..h {
            for x in 0..w {
                let (r, g, b, a) = self.rgba_unchecked(x, y);
                data.push(match comp {
                    RgbComponent::Red => r,
                    RgbComponent::Green => g,
                    RgbComponent::Blue => b,
                    RgbComponent::Alpha => a,
                });
            }
        }
        Raster::from_gray(w, h, data)
    }
}
