//! Document composition and SVG output
//!
//! Geometry is flattened into path commands, grouped into styled layers,
//! and serialized to a standalone SVG string.

pub mod config;
pub mod document;
pub mod path;
pub mod svg;

pub use config::SvgConfig;
pub use document::{compose, Document, Layer, LayerKind, RenderedLayer};
pub use path::{flatten, PathCommand, PathSegment};
pub use svg::render_svg;
