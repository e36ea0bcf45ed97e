//! Region membership mask
//!
//! A `RegionMask` records which pixels belong to a grown region. Cells
//! start false and can only be set, never cleared, so region growth is
//! monotone by construction.

use crate::geometry::{Bounds, Point};

/// Boolean membership grid with the same extents as the source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionMask {
    bounds: Bounds,
    cells: Vec<bool>,
}

impl RegionMask {
    /// Create an all-false mask covering `bounds`.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            cells: vec![false; bounds.area()],
        }
    }

    /// Get the mask extents.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Check membership of a point.
    ///
    /// Out-of-bounds points are not members.
    #[inline]
    pub fn get(&self, p: Point) -> bool {
        self.bounds.contains(p) && self.cells[self.bounds.index_of(p)]
    }

    /// Admit a point into the region.
    ///
    /// # Panics
    ///
    /// Panics if the point is outside the mask extents.
    #[inline]
    pub fn set(&mut self, p: Point) {
        let i = self.bounds.index_of(p);
        self.cells[i] = true;
    }

    /// Number of admitted pixels.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Admitted points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let width = self.bounds.width() as usize;
        self.cells.iter().enumerate().filter_map(move |(i, &set)| {
            set.then(|| Point::new((i % width) as u32, (i / width) as u32))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let mask = RegionMask::new(Bounds::new(3, 3).unwrap());
        assert_eq!(mask.count(), 0);
        assert!(!mask.get(Point::new(1, 1)));
    }

    #[test]
    fn test_set_and_get() {
        let mut mask = RegionMask::new(Bounds::new(3, 3).unwrap());
        mask.set(Point::new(2, 1));
        assert!(mask.get(Point::new(2, 1)));
        assert_eq!(mask.count(), 1);
        // setting twice stays a single membership
        mask.set(Point::new(2, 1));
        assert_eq!(mask.count(), 1);
    }

    #[test]
    fn test_out_of_bounds_not_member() {
        let mask = RegionMask::new(Bounds::new(3, 3).unwrap());
        assert!(!mask.get(Point::new(3, 0)));
        assert!(!mask.get(Point::new(0, 7)));
    }

    #[test]
    fn test_points_row_major() {
        let mut mask = RegionMask::new(Bounds::new(3, 2).unwrap());
        mask.set(Point::new(2, 0));
        mask.set(Point::new(0, 1));
        let pts: Vec<Point> = mask.points().collect();
        assert_eq!(pts, vec![Point::new(2, 0), Point::new(0, 1)]);
    }
}
