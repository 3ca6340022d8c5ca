//! Layered document composition
//!
//! A [`Document`] is the structural form of one render: the canvas size, the
//! background fill, and the flattened paths of each layer in z-order.

use crate::geo::{FeatureCollection, Viewport};
use crate::stylesheet::LayerStyle;

use super::path::{flatten, PathCommand};
use super::svg::render_svg;
use super::SvgConfig;

/// Default background fill
pub const DEFAULT_BACKGROUND: &str = "white";

/// Which of the two layer slots a rendered layer came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// Map data, drawn first
    Base,
    /// User-supplied data, drawn on top
    Overlay,
}

impl LayerKind {
    /// Element id used for the layer group
    pub fn id(&self) -> &'static str {
        match self {
            LayerKind::Base => "osm-layer",
            LayerKind::Overlay => "overlay-layer",
        }
    }
}

/// Input to the composer: features plus the style to stroke them with
#[derive(Debug, Clone, Copy)]
pub struct Layer<'a> {
    pub features: &'a FeatureCollection,
    pub style: &'a LayerStyle,
}

impl<'a> Layer<'a> {
    pub fn new(features: &'a FeatureCollection, style: &'a LayerStyle) -> Self {
        Self { features, style }
    }
}

/// A layer after flattening
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedLayer {
    pub kind: LayerKind,
    pub style: LayerStyle,
    pub paths: Vec<PathCommand>,
}

impl RenderedLayer {
    /// SVG `d` strings of every path, in draw order
    pub fn path_data(&self) -> Vec<String> {
        self.paths.iter().map(PathCommand::to_svg_d).collect()
    }
}

/// A fully composed drawing
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Canvas width in output units
    pub width: f64,
    /// Canvas height in output units
    pub height: f64,
    /// Fill of the background rectangle
    pub background: String,
    /// Layers bottom to top
    pub layers: Vec<RenderedLayer>,
}

impl Document {
    /// An empty document covering the viewport
    pub fn new(viewport: &Viewport) -> Self {
        Self {
            width: viewport.width,
            height: viewport.height,
            background: DEFAULT_BACKGROUND.to_string(),
            layers: Vec::new(),
        }
    }

    /// Set the background fill
    pub fn with_background(mut self, fill: impl Into<String>) -> Self {
        self.background = fill.into();
        self
    }

    /// Look up a layer by slot
    pub fn layer(&self, kind: LayerKind) -> Option<&RenderedLayer> {
        self.layers.iter().find(|l| l.kind == kind)
    }

    /// Number of drawable elements: the background plus every path
    pub fn drawable_count(&self) -> usize {
        1 + self.layers.iter().map(|l| l.paths.len()).sum::<usize>()
    }

    /// Structural form: one list of `d` strings per layer, bottom to top
    pub fn path_data(&self) -> Vec<Vec<String>> {
        self.layers.iter().map(RenderedLayer::path_data).collect()
    }

    /// Serialize with the default SVG configuration
    pub fn to_svg(&self) -> String {
        render_svg(self, &SvgConfig::default())
    }

    /// Serialize with a custom SVG configuration
    pub fn to_svg_with(&self, config: &SvgConfig) -> String {
        render_svg(self, config)
    }
}

/// Compose the base and overlay layers over a background sized to the viewport.
///
/// Either layer may be absent. The base layer is always below the overlay.
pub fn compose(viewport: &Viewport, base: Option<Layer<'_>>, overlay: Option<Layer<'_>>) -> Document {
    let mut doc = Document::new(viewport);

    for (kind, layer) in [(LayerKind::Base, base), (LayerKind::Overlay, overlay)] {
        if let Some(layer) = layer {
            doc.layers.push(RenderedLayer {
                kind,
                style: layer.style.clone(),
                paths: flatten(layer.features, viewport),
            });
        }
    }

    doc
}
