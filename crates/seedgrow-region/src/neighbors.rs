//! 8-connected neighbor enumeration
//!
//! The region grower explores the 8-neighborhood of each admitted pixel.
//! Enumeration order is fixed (row-major over the offset grid) so that
//! growth traversal, and therefore the evolving region mean, is
//! deterministic across runs.

use seedgrow_core::{Bounds, Point};

/// The 8 neighbor offsets in row-major order, (0, 0) excluded.
const OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Enumerate the valid 8-connected neighbors of `p`, clipped to `bounds`.
///
/// Returns between 3 (corner) and 8 (interior) points. Pure function of
/// its inputs; `p` is assumed to lie inside `bounds`.
pub fn neighbors(p: Point, bounds: Bounds) -> Vec<Point> {
    let mut out = Vec::with_capacity(8);
    for (dx, dy) in OFFSETS {
        let nx = i64::from(p.x) + i64::from(dx);
        let ny = i64::from(p.y) + i64::from(dy);
        if nx < 0 || ny < 0 {
            continue;
        }
        let n = Point::new(nx as u32, ny as u32);
        if bounds.contains(n) {
            out.push(n);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_clips_to_three() {
        let bounds = Bounds::new(10, 10).unwrap();
        let n = neighbors(Point::new(0, 0), bounds);
        assert_eq!(n, vec![Point::new(1, 0), Point::new(0, 1), Point::new(1, 1)]);
    }

    #[test]
    fn test_interior_has_eight() {
        let bounds = Bounds::new(10, 10).unwrap();
        let n = neighbors(Point::new(5, 5), bounds);
        assert_eq!(n.len(), 8);
        assert!(!n.contains(&Point::new(5, 5)));
    }

    #[test]
    fn test_edge_has_five() {
        let bounds = Bounds::new(10, 10).unwrap();
        let n = neighbors(Point::new(0, 5), bounds);
        assert_eq!(n.len(), 5);
        assert!(n.iter().all(|q| bounds.contains(*q)));
    }

    #[test]
    fn test_far_corner() {
        let bounds = Bounds::new(10, 10).unwrap();
        let n = neighbors(Point::new(9, 9), bounds);
        assert_eq!(n, vec![Point::new(8, 8), Point::new(9, 8), Point::new(8, 9)]);
    }

    #[test]
    fn test_single_pixel_image() {
        let bounds = Bounds::new(1, 1).unwrap();
        assert!(neighbors(Point::new(0, 0), bounds).is_empty());
    }

    #[test]
    fn test_deterministic_order() {
        let bounds = Bounds::new(10, 10).unwrap();
        assert_eq!(
            neighbors(Point::new(5, 5), bounds),
            neighbors(Point::new(5, 5), bounds)
        );
    }
}
