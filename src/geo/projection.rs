//! Spherical Web Mercator projection

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// Earth radius in metres (spherical approximation)
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Latitude limit where the Mercator square ends
pub const MAX_LATITUDE: f64 = 85.0511287798;

/// A point on the projection plane, in metres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
}

impl ProjectedPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Project a geographic coordinate onto the Mercator plane.
///
/// Latitude is clamped to ±[`MAX_LATITUDE`] so the poles stay finite.
/// Longitude is passed through unclamped.
pub fn project(lat: f64, lon: f64) -> ProjectedPoint {
    let x = EARTH_RADIUS * lon.to_radians();
    let lat_rad = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let y = EARTH_RADIUS * (FRAC_PI_4 + lat_rad / 2.0).tan().ln();
    ProjectedPoint { x, y }
}

/// Inverse of [`project`], returning `(lat, lon)` in degrees
pub fn unproject(point: ProjectedPoint) -> (f64, f64) {
    let lon = (point.x / EARTH_RADIUS).to_degrees();
    let lat = (2.0 * (point.y / EARTH_RADIUS).exp().atan() - FRAC_PI_2).to_degrees();
    (lat, lon)
}
