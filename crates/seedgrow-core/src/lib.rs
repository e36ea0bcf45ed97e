//! seedgrow-core - Basic data structures for seeded region growing
//!
//! This crate provides the data types used throughout the seedgrow
//! workspace:
//!
//! - [`Raster`] / [`RasterMut`] - the image container (immutable / mutable)
//! - [`RegionMask`] - boolean region membership grid
//! - [`Point`] / [`Bounds`] - pixel coordinates and validated extents
//!
//! # Examples
//!
//! ```
//! use seedgrow_core::{PixelFormat, Point, Raster, RegionMask};
//!
//! let pix = Raster::new(16, 16, PixelFormat::Gray8).unwrap();
//! let mut mask = RegionMask::new(pix.bounds());
//! mask.set(Point::new(3, 4));
//! assert_eq!(mask.count(), 1);
//! ```

pub mod convert;
pub mod error;
pub mod geometry;
pub mod mask;
pub mod raster;

pub use convert::RgbComponent;
pub use error::{Error, Result};
pub use geometry::{Bounds, Point};
pub use mask::RegionMask;
pub use raster::{PixelFormat, Raster, RasterMut};
