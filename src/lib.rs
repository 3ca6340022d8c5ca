//! mapsvg - geographic vector data to SVG
//!
//! This library projects map geometries into Web Mercator space, fits them to
//! a bounding box, and composes a base layer and an optional overlay layer
//! into an SVG document ready for export.
//!
//! # Example
//!
//! ```rust
//! use mapsvg::{render, BoundingBox};
//! use mapsvg::input::parse_csv;
//!
//! let bbox = BoundingBox::new(35.0, 139.0, 35.2, 139.2);
//! let track = parse_csv("35.05,139.05\n35.15,139.15\n").unwrap();
//!
//! let doc = render(&bbox, None, Some(&track), 1000.0).unwrap();
//! let svg = doc.to_svg();
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains("overlay-layer"));
//! ```

pub mod error;
pub mod geo;
pub mod input;
pub mod renderer;
pub mod stylesheet;

pub use error::{InputError, ParseError};
pub use geo::{
    BoundingBox, Feature, FeatureCollection, GeoInput, Geometry, LonLat, Viewport, ViewportError,
};
pub use renderer::{compose, render_svg, Document, Layer, LayerKind, PathCommand, SvgConfig};
pub use stylesheet::{LayerStyle, Stylesheet};

use log::debug;
use thiserror::Error;

/// Default length of the longer canvas side
pub const DEFAULT_TARGET_SIZE: f64 = 1000.0;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    /// The bounding box cannot be fitted to the canvas
    #[error("viewport error: {0}")]
    Viewport(#[from] ViewportError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Length of the longer canvas side in output units
    pub target_size: f64,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Layer and background styles
    pub stylesheet: Stylesheet,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            target_size: DEFAULT_TARGET_SIZE,
            svg: SvgConfig::default(),
            stylesheet: Stylesheet::default(),
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas target size
    pub fn with_target_size(mut self, size: f64) -> Self {
        self.target_size = size;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the stylesheet
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }
}

/// Render base and overlay data inside `bbox` with the default styles.
///
/// Either collection may be absent. The document is rebuilt from scratch on
/// every call.
pub fn render(
    bbox: &BoundingBox,
    base: Option<&FeatureCollection>,
    overlay: Option<&FeatureCollection>,
    target_size: f64,
) -> Result<Document, RenderError> {
    let config = RenderConfig::new().with_target_size(target_size);
    render_with_config(bbox, base, overlay, &config)
}

/// Render with custom configuration
///
/// # Example
///
/// ```rust
/// use mapsvg::{render_with_config, BoundingBox, RenderConfig, Stylesheet};
///
/// let mut stylesheet = Stylesheet::default();
/// stylesheet.background = "#f4f1e8".to_string();
/// let config = RenderConfig::new().with_target_size(800.0).with_stylesheet(stylesheet);
///
/// let doc = render_with_config(&BoundingBox::new(0.0, 0.0, 1.0, 2.0), None, None, &config).unwrap();
/// assert_eq!(doc.width, 800.0);
/// assert_eq!(doc.background, "#f4f1e8");
/// ```
pub fn render_with_config(
    bbox: &BoundingBox,
    base: Option<&FeatureCollection>,
    overlay: Option<&FeatureCollection>,
    config: &RenderConfig,
) -> Result<Document, RenderError> {
    let viewport = Viewport::fit(bbox, config.target_size)?;
    debug!(
        "viewport {:.1}x{:.1} for bbox {},{},{},{}",
        viewport.width, viewport.height, bbox.south, bbox.west, bbox.north, bbox.east
    );

    let stylesheet = &config.stylesheet;
    let doc = compose(
        &viewport,
        base.map(|fc| Layer::new(fc, &stylesheet.base)),
        overlay.map(|fc| Layer::new(fc, &stylesheet.overlay)),
    )
    .with_background(stylesheet.background.clone());

    debug!("composed {} drawable element(s)", doc.drawable_count());
    Ok(doc)
}

/// Render straight to SVG text using the configured output options
pub fn render_to_svg(
    bbox: &BoundingBox,
    base: Option<&FeatureCollection>,
    overlay: Option<&FeatureCollection>,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    let doc = render_with_config(bbox, base, overlay, config)?;
    Ok(render_svg(&doc, &config.svg))
}
