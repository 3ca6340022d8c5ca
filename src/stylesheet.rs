//! Layer styling loaded from TOML
//!
//! A stylesheet sets the background fill and the stroke style of the base
//! and overlay layers. Any section or key left out falls back to the
//! built-in defaults.

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Shape drawn at the open ends of a stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl fmt::Display for LineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        })
    }
}

/// Shape drawn where two stroke segments meet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

impl fmt::Display for LineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
        })
    }
}

/// Stroke style shared by every path of a layer. Layers are never filled.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayerStyle {
    pub stroke: String,
    pub stroke_width: f64,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
}

impl LayerStyle {
    /// Thin neutral stroke for map data
    pub fn base() -> Self {
        Self {
            stroke: "#333".to_string(),
            stroke_width: 1.0,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
        }
    }

    /// Bold black stroke for uploaded data
    pub fn overlay() -> Self {
        Self {
            stroke: "black".to_string(),
            stroke_width: 2.0,
            ..Self::base()
        }
    }

    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = stroke.into();
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }
}

impl Default for LayerStyle {
    fn default() -> Self {
        Self::base()
    }
}

/// Styles for one rendered document
#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Background rectangle fill
    pub background: String,
    pub base: LayerStyle,
    pub overlay: LayerStyle,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    background: Option<TomlBackground>,
    base: Option<LayerStyle>,
    overlay: Option<TomlOverlay>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlBackground {
    fill: String,
}

/// Overlay keys default to the overlay style, not the base one
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlOverlay {
    stroke: Option<String>,
    stroke_width: Option<f64>,
    line_cap: Option<LineCap>,
    line_join: Option<LineJoin>,
}

impl TomlOverlay {
    fn into_style(self) -> LayerStyle {
        let default = LayerStyle::overlay();
        LayerStyle {
            stroke: self.stroke.unwrap_or(default.stroke),
            stroke_width: self.stroke_width.unwrap_or(default.stroke_width),
            line_cap: self.line_cap.unwrap_or(default.line_cap),
            line_join: self.line_join.unwrap_or(default.line_join),
        }
    }
}

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;
        let default = Self::default();

        Ok(Stylesheet {
            name: parsed.metadata.and_then(|m| m.name),
            background: parsed.background.map(|b| b.fill).unwrap_or(default.background),
            base: parsed.base.unwrap_or(default.base),
            overlay: parsed
                .overlay
                .map(TomlOverlay::into_style)
                .unwrap_or(default.overlay),
        })
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self {
            name: None,
            background: "white".to_string(),
            base: LayerStyle::base(),
            overlay: LayerStyle::overlay(),
        }
    }
}
