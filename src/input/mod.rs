//! Readers that turn text payloads into renderer input

pub mod csv;
pub mod json;

pub use csv::{parse_csv, CSV_SOURCE, SOURCE_PROPERTY};
pub use json::parse_geojson;
