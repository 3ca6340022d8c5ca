//! Viewport fitting: maps the projected plane onto the output canvas

use std::str::FromStr;

use thiserror::Error;

use super::error::ViewportError;
use super::projection::{project, ProjectedPoint};
use super::types::Point;

/// A geographic rectangle in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl BoundingBox {
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }
}

/// Error returned when a bounding box string cannot be read
#[derive(Debug, Error, PartialEq)]
pub enum BoundingBoxParseError {
    #[error("expected 4 comma-separated values (south,west,north,east), got {0}")]
    WrongArity(usize),
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
}

/// Reads `south,west,north,east`
impl FromStr for BoundingBox {
    type Err = BoundingBoxParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(BoundingBoxParseError::WrongArity(parts.len()));
        }

        let mut values = [0.0; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| BoundingBoxParseError::InvalidNumber(part.to_string()))?;
        }

        Ok(Self::new(values[0], values[1], values[2], values[3]))
    }
}

/// The output canvas and its mapping from the projected plane.
///
/// The longer geographic side spans the full target size; the other side is
/// scaled down to keep the aspect ratio. Y is flipped so north is at the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Canvas width in output units
    pub width: f64,
    /// Canvas height in output units
    pub height: f64,
    /// Projected south-west corner
    pub min: ProjectedPoint,
    /// Projected north-east corner
    pub max: ProjectedPoint,
}

impl Viewport {
    /// Fit a bounding box into a square of `target_size` output units
    pub fn fit(bbox: &BoundingBox, target_size: f64) -> Result<Self, ViewportError> {
        if !target_size.is_finite() || target_size <= 0.0 {
            return Err(ViewportError::InvalidTargetSize(target_size));
        }

        let min = project(bbox.south, bbox.west);
        let max = project(bbox.north, bbox.east);

        let extent_w = max.x - min.x;
        let extent_h = max.y - min.y;
        ViewportError::check_extent(extent_w, extent_h)?;

        let aspect_ratio = extent_w / extent_h;
        let (width, height) = if aspect_ratio >= 1.0 {
            (target_size, target_size / aspect_ratio)
        } else {
            (target_size * aspect_ratio, target_size)
        };

        Ok(Self {
            width,
            height,
            min,
            max,
        })
    }

    /// Width over height of the projected extent
    pub fn aspect_ratio(&self) -> f64 {
        (self.max.x - self.min.x) / (self.max.y - self.min.y)
    }

    /// Map a projected point to output pixel coordinates
    pub fn map(&self, p: ProjectedPoint) -> Point {
        let x = (p.x - self.min.x) / (self.max.x - self.min.x) * self.width;
        let y = self.height - (p.y - self.min.y) / (self.max.y - self.min.y) * self.height;
        Point::new(x, y)
    }

    /// Project and map a geographic coordinate in one step
    pub fn map_lat_lon(&self, lat: f64, lon: f64) -> Point {
        self.map(project(lat, lon))
    }
}
