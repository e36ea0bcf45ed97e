//! seedgrow-region - Seeded region growing
//!
//! This crate implements the region-growing algorithm and the
//! visualization of its results:
//!
//! - **Neighbor enumeration** - valid 8-connected neighbors of a pixel
//! - **Region growing** - frontier expansion under a running-mean
//!   intensity predicate
//! - **Mask rendering** - colorize grown regions on a copy of the image
//!
//! # Examples
//!
//! ## Growing a region
//!
//! ```
//! use seedgrow_region::{grow, GrowOptions};
//! use seedgrow_core::{Point, Raster};
//!
//! // A uniform image grows to full coverage from any seed
//! let pix = Raster::from_gray(8, 8, vec![128; 64]).unwrap();
//! let mask = grow(&pix, Point::new(3, 3), &GrowOptions::new(10.0)).unwrap();
//! assert_eq!(mask.count(), 64);
//! ```
//!
//! ## Rendering the result
//!
//! ```
//! use seedgrow_region::{grow, render_mask, GrowOptions, RenderOptions};
//! use seedgrow_core::{Point, Raster};
//!
//! let pix = Raster::from_gray(8, 8, vec![128; 64]).unwrap();
//! let mask = grow(&pix, Point::new(3, 3), &GrowOptions::default()).unwrap();
//! let overlay = render_mask(&pix, &mask, &RenderOptions::default()).unwrap();
//! assert_eq!(overlay.rgba(3, 3), Some((255, 0, 0, 255)));
//! ```

pub mod error;
pub mod grow;
pub mod neighbors;
pub mod render;

// Re-export core types
pub use seedgrow_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export grow types and functions
pub use grow::{GrowOptions, grow};

// Re-export neighbor enumeration
pub use neighbors::neighbors;

// Re-export render types and functions
pub use render::{Color, RenderOptions, mark_point, render_mask, render_masks};
