//! SVG generation from composed documents

use crate::stylesheet::LayerStyle;

use super::document::{Document, RenderedLayer};
use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
            indent: 1,
        }
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add the unstroked background rectangle
    pub fn add_background(&mut self, width: f64, height: f64, fill: &str) {
        self.elements.push(format!(
            r#"{}<rect width="{}" height="{}" fill="{}" stroke="none"/>"#,
            self.indent_str(),
            width,
            height,
            escape_xml(fill)
        ));
    }

    /// Open a layer group carrying the stroke style for all its paths
    pub fn start_group(&mut self, id: &str, style: &LayerStyle) {
        self.elements.push(format!(
            r#"{}<g id="{}" stroke="{}" fill="none" stroke-width="{}" stroke-linecap="{}" stroke-linejoin="{}">"#,
            self.indent_str(),
            escape_xml(id),
            escape_xml(&style.stroke),
            style.stroke_width,
            style.line_cap,
            style.line_join
        ));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// Add a path element
    pub fn add_path(&mut self, d: &str) {
        self.elements
            .push(format!(r#"{}<path d="{}"/>"#, self.indent_str(), d));
    }

    /// Build the final SVG string
    pub fn build(self, width: f64, height: f64) -> String {
        let nl = self.newline();

        let mut svg = String::new();

        // XML declaration for standalone
        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        // SVG root element
        let (attr_w, attr_h) = if self.config.responsive {
            ("100%".to_string(), "100%".to_string())
        } else {
            (width.to_string(), height.to_string())
        };
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            attr_w, attr_h, width, height
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render a document to an SVG string
pub fn render_svg(doc: &Document, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());

    builder.add_background(doc.width, doc.height, &doc.background);

    for layer in &doc.layers {
        render_layer(layer, &mut builder);
    }

    builder.build(doc.width, doc.height)
}

/// Render one layer as a styled group of paths
fn render_layer(layer: &RenderedLayer, builder: &mut SvgBuilder) {
    builder.start_group(layer.kind.id(), &layer.style);
    for path in &layer.paths {
        builder.add_path(&path.to_svg_d());
    }
    builder.end_group();
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
