//! Geographic model and projection math
//!
//! This module holds the geometry types fed into the renderer, the
//! spherical Mercator projection, and the viewport that maps projected
//! coordinates into output pixel space.

pub mod error;
pub mod projection;
pub mod types;
pub mod viewport;

pub use error::ViewportError;
pub use projection::{project, unproject, ProjectedPoint, EARTH_RADIUS, MAX_LATITUDE};
pub use types::*;
pub use viewport::{BoundingBox, Viewport};
