//! Mask visualization
//!
//! Renders grown regions onto a fresh RGBA copy of the source image.
//! Every function here returns a new raster; the input image is never
//! mutated, so rendering one region cannot disturb another.

use crate::error::RegionResult;
use seedgrow_core::{Error, Point, Raster, RegionMask};

/// RGBA fill color for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new opaque color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Red color
    pub const RED: Color = Color::new(255, 0, 0);
    /// Green color
    pub const GREEN: Color = Color::new(0, 255, 0);
    /// Blue color
    pub const BLUE: Color = Color::new(0, 0, 255);
    /// Black color
    pub const BLACK: Color = Color::new(0, 0, 0);
    /// White color
    pub const WHITE: Color = Color::new(255, 255, 255);
}

impl Default for Color {
    fn default() -> Self {
        Self::RED
    }
}

/// Options for mask rendering
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Fill color for member pixels
    pub color: Color,
}

impl RenderOptions {
    /// Create options with the specified fill color.
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

fn check_extents(pix: &Raster, mask: &RegionMask) -> RegionResult<()> {
    if pix.bounds() != mask.bounds() {
        return Err(Error::DimensionMismatch {
            expected: (pix.width(), pix.height()),
            actual: (mask.bounds().width(), mask.bounds().height()),
        }
        .into());
    }
    Ok(())
}

/// Paint every member pixel of `mask` onto an RGBA copy of `pix`.
///
/// Non-member pixels are left unchanged.
///
/// # Errors
///
/// Returns an error if mask and image extents differ.
pub fn render_mask(
    pix: &Raster,
    mask: &RegionMask,
    options: &RenderOptions,
) -> RegionResult<Raster> {
    check_extents(pix, mask)?;

    let c = options.color;
    let mut out = pix
        .to_rgba()?
        .try_into_mut()
        .unwrap_or_else(|p| p.to_mut());
    for p in mask.points() {
        out.set_rgba_unchecked(p.x, p.y, c.r, c.g, c.b, c.a);
    }

    Ok(out.into())
}

/// Paint several masks onto one RGBA copy of `pix`, each with its own
/// color.
///
/// Masks are applied in slice order; where masks overlap, the
/// last-applied color wins.
///
/// # Errors
///
/// Returns an error if any mask's extents differ from the image's.
pub fn render_masks(pix: &Raster, masks: &[(&RegionMask, Color)]) -> RegionResult<Raster> {
    for (mask, _) in masks {
        check_extents(pix, mask)?;
    }

    let mut out = pix
        .to_rgba()?
        .try_into_mut()
        .unwrap_or_else(|p| p.to_mut());
    for (mask, c) in masks {
        for p in mask.points() {
            out.set_rgba_unchecked(p.x, p.y, c.r, c.g, c.b, c.a);
        }
    }

    Ok(out.into())
}

/// Squared radius of the point marker disc.
const MARK_RADIUS_SQ: i64 = 20;

/// Paint a small disc around `center` onto an RGBA copy of `pix`.
///
/// Useful for scouting seed positions before growing. The disc is
/// clipped to the image; `center` itself may lie outside.
pub fn mark_point(pix: &Raster, center: Point, options: &RenderOptions) -> RegionResult<Raster> {
    let c = options.color;
    let mut out = pix
        .to_rgba()?
        .try_into_mut()
        .unwrap_or_else(|p| p.to_mut());

    let bounds = out.bounds();
    for dy in -4i64..=4 {
        for dx in -4i64..=4 {
            if dx * dx + dy * dy >= MARK_RADIUS_SQ {
                continue;
            }
            let nx = i64::from(center.x) + dx;
            let ny = i64::from(center.y) + dy;
            if nx < 0 || ny < 0 {
                continue;
            }
            let p = Point::new(nx as u32, ny as u32);
            if bounds.contains(p) {
                out.set_rgba_unchecked(p.x, p.y, c.r, c.g, c.b, c.a);
            }
        }
    }

    Ok(out.into())
}
