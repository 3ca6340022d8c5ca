//! Error types for viewport construction

use thiserror::Error;

/// Errors that can occur while fitting a bounding box to the output canvas
#[derive(Debug, Error, PartialEq)]
pub enum ViewportError {
    /// The projected box has zero or non-finite width or height
    #[error("degenerate bounds: projected extent is {width} x {height}")]
    DegenerateBounds { width: f64, height: f64 },

    /// South is above north, or west is east of east
    #[error("inverted bounds: projected extent is {width} x {height}")]
    InvertedBounds { width: f64, height: f64 },

    /// Target canvas size must be a positive finite number
    #[error("invalid target size {0}")]
    InvalidTargetSize(f64),
}

impl ViewportError {
    /// Classify a projected extent, returning an error if it cannot be normalized
    pub fn check_extent(width: f64, height: f64) -> Result<(), Self> {
        if !width.is_finite() || !height.is_finite() || width == 0.0 || height == 0.0 {
            return Err(Self::DegenerateBounds { width, height });
        }
        if width < 0.0 || height < 0.0 {
            return Err(Self::InvertedBounds { width, height });
        }
        Ok(())
    }
}
