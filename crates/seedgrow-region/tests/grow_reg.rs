//! Regression tests for the region grower
//!
//! Covers the contract properties: seed inclusion, termination on
//! bounded images, determinism, isolation between calls, threshold
//! boundary behavior, and the reference 4x4 segmentation scenario.

use seedgrow_core::{Point, Raster};
use seedgrow_region::{GrowOptions, grow, neighbors};

/// Build a Gray8 raster from explicit rows.
fn gray_image(width: u32, height: u32, rows: &[&[u8]]) -> Raster {
    let mut data = Vec::with_capacity(width as usize * height as usize);
    for row in rows {
        assert_eq!(row.len(), width as usize);
        data.extend_from_slice(row);
    }
    assert_eq!(data.len(), width as usize * height as usize);
    Raster::from_gray(width, height, data).unwrap()
}

// ============================================================================
// neighbors
// ============================================================================

#[test]
fn test_neighbors_corner_exact() {
    let pix = Raster::from_gray(10, 10, vec![0; 100]).unwrap();
    let n = neighbors(Point::new(0, 0), pix.bounds());
    assert_eq!(n.len(), 3);
    assert!(n.contains(&Point::new(0, 1)));
    assert!(n.contains(&Point::new(1, 0)));
    assert!(n.contains(&Point::new(1, 1)));
}

// ============================================================================
// grow: reference scenarios
// ============================================================================

#[test]
fn test_block_segmentation_4x4() {
    // Uniform block of 100 in the top-left 2x2, 200 elsewhere.
    // Seed (0,0), threshold 10 -> exactly the 2x2 block is admitted.
    let pix = gray_image(
        4,
        4,
        &[
            &[100, 100, 200, 200],
            &[100, 100, 200, 200],
            &[200, 200, 200, 200],
            &[200, 200, 200, 200],
        ],
    );

    let mask = grow(&pix, Point::new(0, 0), &GrowOptions::new(10.0)).unwrap();

    let expected = [
        Point::new(0, 0),
        Point::new(1, 0),
        Point::new(0, 1),
        Point::new(1, 1),
    ];
    for p in expected {
        assert!(mask.get(p), "expected member at ({}, {})", p.x, p.y);
    }
    assert_eq!(mask.count(), 4);
}

#[test]
fn test_zero_growth() {
    // Seed pixel surrounded entirely by intensities beyond the threshold
    let pix = gray_image(
        3,
        3,
        &[&[200, 200, 200], &[200, 50, 200], &[200, 200, 200]],
    );

    let mask = grow(&pix, Point::new(1, 1), &GrowOptions::new(30.0)).unwrap();
    assert!(mask.get(Point::new(1, 1)));
    assert_eq!(mask.count(), 1);
}

#[test]
fn test_seed_inclusion() {
    let pix = gray_image(2, 2, &[&[10, 250], &[250, 250]]);
    for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        let mask = grow(&pix, Point::new(x, y), &GrowOptions::new(0.0)).unwrap();
        assert!(mask.get(Point::new(x, y)));
    }
}

#[test]
fn test_determinism() {
    let pix = gray_image(
        4,
        4,
        &[
            &[90, 100, 110, 180],
            &[95, 105, 115, 180],
            &[100, 110, 120, 180],
            &[180, 180, 180, 180],
        ],
    );

    let a = grow(&pix, Point::new(1, 1), &GrowOptions::new(25.0)).unwrap();
    let b = grow(&pix, Point::new(1, 1), &GrowOptions::new(25.0)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_isolation_between_calls() {
    // Two plateaus: 100 on the left column pair, 200 on the right, with
    // a gulf wide enough that neither grows into the other at threshold 30.
    let pix = gray_image(
        4,
        2,
        &[&[100, 100, 200, 200], &[100, 100, 200, 200]],
    );

    let left = grow(&pix, Point::new(0, 0), &GrowOptions::new(30.0)).unwrap();
    let right = grow(&pix, Point::new(3, 0), &GrowOptions::new(30.0)).unwrap();

    // Each region admits only its own plateau; B's mean never saw A's pixels
    assert_eq!(left.count(), 4);
    assert_eq!(right.count(), 4);
    assert!(left.get(Point::new(1, 1)));
    assert!(!left.get(Point::new(2, 0)));
    assert!(right.get(Point::new(2, 0)));
    assert!(!right.get(Point::new(1, 0)));

    // Re-growing A after B matches the original result exactly
    let left_again = grow(&pix, Point::new(0, 0), &GrowOptions::new(30.0)).unwrap();
    assert_eq!(left, left_again);
}

#[test]
fn test_threshold_zero_boundary() {
    // With threshold 0 only exact matches to the evolving mean admit
    let pix = gray_image(3, 1, &[&[100, 100, 101]]);
    let mask = grow(&pix, Point::new(0, 0), &GrowOptions::new(0.0)).unwrap();
    assert_eq!(mask.count(), 2);
    assert!(!mask.get(Point::new(2, 0)));
}

#[test]
fn test_terminates_on_gradient() {
    // Strictly increasing intensities; growth must converge, not cycle
    let mut data = Vec::with_capacity(64);
    for i in 0..64u32 {
        data.push((i * 4).min(255) as u8);
    }
    let pix = Raster::from_gray(8, 8, data).unwrap();
    let mask = grow(&pix, Point::new(0, 0), &GrowOptions::new(20.0)).unwrap();
    assert!(mask.count() >= 1);
    assert!(mask.count() <= 64);
}

#[test]
fn test_full_coverage_on_uniform_image() {
    let pix = Raster::from_gray(16, 16, vec![77; 256]).unwrap();
    let mask = grow(&pix, Point::new(15, 15), &GrowOptions::default()).unwrap();
    assert_eq!(mask.count(), 256);
}

#[test]
fn test_diagonal_connectivity() {
    // Members connected only diagonally are still reached (8-connectivity)
    let pix = gray_image(
        3,
        3,
        &[&[100, 255, 255], &[255, 100, 255], &[255, 255, 100]],
    );
    let mask = grow(&pix, Point::new(0, 0), &GrowOptions::new(5.0)).unwrap();
    assert_eq!(mask.count(), 3);
    assert!(mask.get(Point::new(1, 1)));
    assert!(mask.get(Point::new(2, 2)));
}
