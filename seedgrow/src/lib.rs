//! seedgrow - Seeded region growing for grayscale images
//!
//! Starting from a seed pixel, a region expands across 8-connected
//! neighbors whose intensity stays within a threshold of the region's
//! running mean, converging to a boolean membership mask. The mask can
//! then be rendered onto a copy of the source image for inspection.
//!
//! # Example
//!
//! ```no_run
//! use seedgrow::{Point, io, region};
//!
//! let pix = io::read_image("brain.png").unwrap().to_gray().unwrap();
//! let mask = region::grow(
//!     &pix,
//!     Point::new(120, 130),
//!     &region::GrowOptions::new(70.0),
//! )
//! .unwrap();
//! println!("region size: {} pixels", mask.count());
//! ```

// Re-export core types (primary data structures used everywhere)
pub use seedgrow_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use seedgrow_io as io;
pub use seedgrow_region as region;
