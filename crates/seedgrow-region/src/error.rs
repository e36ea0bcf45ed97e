//! Error types for seedgrow-region

use seedgrow_core::PixelFormat;
use thiserror::Error;

/// Errors that can occur during region growing and rendering
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] seedgrow_core::Error),

    /// Unsupported pixel format for this operation
    #[error("unsupported pixel format: expected {expected:?}, got {actual:?}")]
    UnsupportedFormat {
        expected: PixelFormat,
        actual: PixelFormat,
    },

    /// Seed position outside the image
    #[error("invalid seed position: ({x}, {y})")]
    InvalidSeed { x: u32, y: u32 },

    /// Negative or non-finite threshold
    #[error("invalid threshold: {0}")]
    InvalidThreshold(f64),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
