//! Seeded region growing
//!
//! Starting from a seed pixel, the region expands to 8-connected
//! neighbors whose intensity stays within a threshold of the region's
//! running mean. The mean is updated incrementally on every admission,
//! so the acceptance criterion evolves with the region; admission order
//! is deterministic and the result converges to a fixed point when a
//! full pass admits no new pixel.

use crate::error::{RegionError, RegionResult};
use crate::neighbors::neighbors;
use seedgrow_core::{PixelFormat, Point, Raster, RegionMask};

/// Options for region growing
#[derive(Debug, Clone)]
pub struct GrowOptions {
    /// Maximum allowed |intensity - region mean| for admission
    pub threshold: f64,
}

impl Default for GrowOptions {
    fn default() -> Self {
        Self { threshold: 70.0 }
    }
}

impl GrowOptions {
    /// Create options with the specified threshold.
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Set the admission threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}

/// Grow a region from `seed` over a grayscale image.
///
/// A pixel is admitted when the absolute difference between its
/// intensity and the current region mean does not exceed the threshold.
/// The mean is the incremental average of all admitted intensities:
/// `(mean * count + value) / (count + 1)`, applied before the count is
/// incremented. Growth proceeds in passes over a frontier of candidate
/// pixels; each pass tests the candidates, admits the passing ones, and
/// queues the neighbors of every admission for the next pass. The loop
/// stops at the first pass that admits nothing.
///
/// All state (mask, mean, count) is created fresh per call, so
/// independent invocations never interfere.
///
/// # Arguments
///
/// * `pix` - Gray8 input image
/// * `seed` - Starting pixel, must lie inside the image
/// * `options` - Growing options
///
/// # Returns
///
/// The converged membership mask. The seed is always a member.
///
/// # Errors
///
/// Returns an error for a non-Gray8 input, a negative or non-finite
/// threshold, or an out-of-bounds seed. No partial mask is returned.
pub fn grow(pix: &Raster, seed: Point, options: &GrowOptions) -> RegionResult<RegionMask> {
    if pix.format() != PixelFormat::Gray8 {
        return Err(RegionError::UnsupportedFormat {
            expected: PixelFormat::Gray8,
            actual: pix.format(),
        });
    }

    if !options.threshold.is_finite() || options.threshold < 0.0 {
        return Err(RegionError::InvalidThreshold(options.threshold));
    }

    let bounds = pix.bounds();
    if !bounds.contains(seed) {
        return Err(RegionError::InvalidSeed {
            x: seed.x,
            y: seed.y,
        });
    }

    let mut mask = RegionMask::new(bounds);
    mask.set(seed);
    let mut mean = f64::from(pix.gray_unchecked(seed.x, seed.y));
    let mut count: u64 = 1;

    let mut frontier = neighbors(seed, bounds);
    let mut queued = vec![false; bounds.area()];

    loop {
        let mut next = Vec::new();
        let mut grown = 0u64;
        queued.fill(false);

        for &p in &frontier {
            if mask.get(p) {
                continue;
            }
            let val = f64::from(pix.gray_unchecked(p.x, p.y));
            if (val - mean).abs() <= options.threshold {
                mask.set(p);
                mean = (mean * count as f64 + val) / (count as f64 + 1.0);
                count += 1;
                grown += 1;
                for n in neighbors(p, bounds) {
                    // Skip members and already-queued candidates; a pixel
                    // rejected this pass stays eligible for later passes.
                    let i = bounds.index_of(n);
                    if !queued[i] && !mask.get(n) {
                        queued[i] = true;
                        next.push(n);
                    }
                }
            }
        }

        if grown == 0 {
            break;
        }
        frontier = next;
    }

    Ok(mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_image(width: u32, height: u32, rows: &[&[u8]]) -> Raster {
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for row in rows {
            data.extend_from_slice(row);
        }
        Raster::from_gray(width, height, data).unwrap()
    }

    #[test]
    fn test_uniform_image_fills() {
        let pix = Raster::from_gray(5, 5, vec![128; 25]).unwrap();
        let mask = grow(&pix, Point::new(2, 2), &GrowOptions::new(0.0)).unwrap();
        assert_eq!(mask.count(), 25);
    }

    #[test]
    fn test_seed_always_member() {
        // Seed surrounded by far-off intensities
        let pix = gray_image(
            3,
            3,
            &[&[255, 255, 255], &[255, 0, 255], &[255, 255, 255]],
        );
        let mask = grow(&pix, Point::new(1, 1), &GrowOptions::new(10.0)).unwrap();
        assert!(mask.get(Point::new(1, 1)));
        assert_eq!(mask.count(), 1);
    }

    #[test]
    fn test_invalid_seed() {
        let pix = Raster::from_gray(4, 4, vec![0; 16]).unwrap();
        let result = grow(&pix, Point::new(4, 0), &GrowOptions::default());
        assert!(matches!(result, Err(RegionError::InvalidSeed { x: 4, y: 0 })));
    }

    #[test]
    fn test_negative_threshold() {
        let pix = Raster::from_gray(4, 4, vec![0; 16]).unwrap();
        let result = grow(&pix, Point::new(0, 0), &GrowOptions::new(-1.0));
        assert!(matches!(result, Err(RegionError::InvalidThreshold(_))));
    }

    #[test]
    fn test_nan_threshold() {
        let pix = Raster::from_gray(4, 4, vec![0; 16]).unwrap();
        let result = grow(&pix, Point::new(0, 0), &GrowOptions::new(f64::NAN));
        assert!(matches!(result, Err(RegionError::InvalidThreshold(_))));
    }

    #[test]
    fn test_rgba_input_rejected() {
        let pix = Raster::new(4, 4, PixelFormat::Rgba8).unwrap();
        let result = grow(&pix, Point::new(0, 0), &GrowOptions::default());
        assert!(matches!(result, Err(RegionError::UnsupportedFormat { .. })));
    }

    #[test]
    fn test_threshold_zero_exact_matches_only() {
        // Seed value 100, one neighbor at 100, rest at 101
        let pix = gray_image(
            3,
            3,
            &[&[101, 101, 101], &[100, 100, 101], &[101, 101, 101]],
        );
        let mask = grow(&pix, Point::new(0, 1), &GrowOptions::new(0.0)).unwrap();
        assert!(mask.get(Point::new(0, 1)));
        assert!(mask.get(Point::new(1, 1)));
        assert_eq!(mask.count(), 2);
    }

    #[test]
    fn test_drifting_mean_extends_reach() {
        // A gentle ramp: each step differs by 2, while the far end is
        // more than the threshold away from the seed value. The running
        // mean follows the ramp, so the whole row is admitted anyway.
        let pix = gray_image(5, 1, &[&[100, 102, 104, 106, 108]]);
        let mask = grow(&pix, Point::new(0, 0), &GrowOptions::new(5.0)).unwrap();
        assert_eq!(mask.count(), 5);
    }
}
