//! Error types for reading coordinate input

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Errors from the CSV coordinate parser.
///
/// Both variants mean fewer than two coordinate pairs could be read; they
/// differ in whether the file had data rows that failed to parse.
#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    /// Only blank lines and headers
    #[error("insufficient coordinates: no numeric data found")]
    NoNumericData,

    /// Data rows were present but too few of them parsed
    #[error(
        "insufficient coordinates: found {found} valid pair(s), {} malformed row(s)",
        rejected.len()
    )]
    Malformed { found: usize, rejected: Vec<Span> },
}

impl ParseError {
    /// Spans of the rows that could not be read
    pub fn rejected(&self) -> &[Span] {
        match self {
            ParseError::NoNumericData => &[],
            ParseError::Malformed { rejected, .. } => rejected,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        let spans: Vec<Span> = self.rejected().iter().map(|span| char_span(source, span)).collect();
        let offset = spans.first().map(|s| s.start).unwrap_or(0);
        let message = self.to_string();

        let labels = spans.into_iter().map(|span| {
            Label::new((filename, span))
                .with_message("expected `latitude,longitude`")
                .with_color(Color::Red)
        });

        let written = Report::build(ReportKind::Error, filename, offset)
            .with_message(&message)
            .with_labels(labels)
            .with_note("each row must be `latitude,longitude` in decimal degrees")
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => message,
        }
    }
}

/// Convert a byte span to the char offsets ariadne indexes by
fn char_span(source: &str, span: &Span) -> Span {
    let to_chars = |byte: usize| source.get(..byte).map_or(byte, |s| s.chars().count());
    to_chars(span.start)..to_chars(span.end)
}

/// Errors from reading GeoJSON text
#[derive(Error, Debug)]
pub enum InputError {
    /// Not valid JSON at all
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Valid JSON that is not a GeoJSON object
    #[error("invalid GeoJSON: {0}")]
    GeoJson(#[from] geojson::Error),
}
