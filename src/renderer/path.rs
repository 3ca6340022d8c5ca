//! Geometry flattening into SVG path commands
//!
//! Every line and every polygon ring becomes its own open, unfilled path.
//! Polygon holes are stroked exactly like exterior rings.

use log::debug;

use crate::geo::{Feature, FeatureCollection, Geometry, LonLat, Point, Viewport};

/// A segment of a path in output pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Move to starting point
    MoveTo(Point),
    /// Straight line to point
    LineTo(Point),
}

/// One drawable polyline: a `MoveTo` followed by `LineTo`s
#[derive(Debug, Clone, PartialEq)]
pub struct PathCommand {
    pub segments: Vec<PathSegment>,
}

impl PathCommand {
    /// Build a path from a coordinate sequence.
    ///
    /// Returns `None` for fewer than 2 points, which cannot be drawn.
    pub fn from_coords(coords: &[LonLat], viewport: &Viewport) -> Option<Self> {
        if coords.len() < 2 {
            return None;
        }

        let segments = coords
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let p = viewport.map_lat_lon(c.lat, c.lon);
                if i == 0 {
                    PathSegment::MoveTo(p)
                } else {
                    PathSegment::LineTo(p)
                }
            })
            .collect();

        Some(Self { segments })
    }

    /// Number of points in the path
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Convert to SVG path `d` attribute string, one decimal per coordinate
    pub fn to_svg_d(&self) -> String {
        let mut d = String::new();

        for seg in &self.segments {
            match seg {
                PathSegment::MoveTo(p) => {
                    if !d.is_empty() {
                        d.push(' ');
                    }
                    d.push_str(&format!("M{} {}", fixed1(p.x), fixed1(p.y)));
                }
                PathSegment::LineTo(p) => {
                    d.push_str(&format!(" L{} {}", fixed1(p.x), fixed1(p.y)));
                }
            }
        }

        d
    }
}

/// One decimal place, exact `.x5` ties rounded away from zero.
///
/// `{:.1}` alone rounds ties to even (`31.25` -> `31.2`). A double sits exactly
/// on such a tie only when four times its value is an odd integer.
fn fixed1(v: f64) -> String {
    let quarters = v * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        format!("{:.1}", (v * 10.0).round() / 10.0)
    } else {
        format!("{:.1}", v)
    }
}

/// Flatten every feature of a collection into path commands, in input order
pub fn flatten(collection: &FeatureCollection, viewport: &Viewport) -> Vec<PathCommand> {
    let mut flattener = Flattener {
        viewport,
        paths: Vec::new(),
        skipped_features: 0,
        skipped_rings: 0,
    };

    for feature in &collection.features {
        flattener.feature(feature);
    }

    if flattener.skipped_features > 0 || flattener.skipped_rings > 0 {
        debug!(
            "flattened {} path(s); skipped {} feature(s) without geometry and {} degenerate ring(s)",
            flattener.paths.len(),
            flattener.skipped_features,
            flattener.skipped_rings
        );
    }

    flattener.paths
}

struct Flattener<'a> {
    viewport: &'a Viewport,
    paths: Vec<PathCommand>,
    skipped_features: usize,
    skipped_rings: usize,
}

impl Flattener<'_> {
    fn feature(&mut self, feature: &Feature) {
        let Some(geometry) = &feature.geometry else {
            self.skipped_features += 1;
            return;
        };

        match geometry {
            Geometry::LineString(coords) => self.ring(coords),
            Geometry::Polygon(rings) => {
                for ring in rings {
                    self.ring(ring);
                }
            }
            Geometry::MultiPolygon(polygons) => {
                for ring in polygons.iter().flatten() {
                    self.ring(ring);
                }
            }
            Geometry::MultiLineString(lines) => {
                for line in lines {
                    self.ring(line);
                }
            }
        }
    }

    fn ring(&mut self, coords: &[LonLat]) {
        match PathCommand::from_coords(coords, self.viewport) {
            Some(path) => self.paths.push(path),
            None => self.skipped_rings += 1,
        }
    }
}
