//! Plain-text coordinate lists
//!
//! Each data row is `latitude,longitude`; any further columns are ignored.
//! Lines starting with a letter are treated as headers. Each field is read
//! up to the end of its leading number, so `139.0 tokyo` reads as `139.0`.
//! Rows that fail to parse are dropped as long as at least two coordinates
//! remain.

use log::debug;

use crate::error::{ParseError, Span};
use crate::geo::{Feature, FeatureCollection, Geometry, LonLat};

/// Property key marking where a feature came from
pub const SOURCE_PROPERTY: &str = "source";

/// Value of [`SOURCE_PROPERTY`] on features built from CSV
pub const CSV_SOURCE: &str = "csv-upload";

/// Byte-order mark left at the start of spreadsheet exports
const BOM: char = '\u{feff}';

/// Parse a CSV coordinate list into a single-line feature collection.
///
/// # Example
///
/// ```rust
/// use mapsvg::input::parse_csv;
///
/// let fc = parse_csv("lat,lon\n35.0,139.0\n35.1,139.1\n").unwrap();
/// assert_eq!(fc.features.len(), 1);
/// ```
pub fn parse_csv(text: &str) -> Result<FeatureCollection, ParseError> {
    let mut coords = Vec::new();
    let mut rejected: Vec<Span> = Vec::new();
    let mut offset = 0;

    for raw in text.split('\n') {
        let start = offset;
        offset += raw.len() + 1;

        let line = raw.trim_matches(|c: char| c.is_whitespace() || c == BOM);
        if line.is_empty() || line.starts_with(|c: char| c.is_ascii_alphabetic()) {
            continue;
        }

        match parse_row(line) {
            Some(coord) => coords.push(coord),
            None => rejected.push(start..start + raw.trim_end().len()),
        }
    }

    if coords.len() < 2 {
        return Err(if rejected.is_empty() && coords.is_empty() {
            ParseError::NoNumericData
        } else {
            ParseError::Malformed {
                found: coords.len(),
                rejected,
            }
        });
    }

    if !rejected.is_empty() {
        debug!("csv: kept {} coordinate(s), dropped {} row(s)", coords.len(), rejected.len());
    }

    let feature = Feature::new(Geometry::LineString(coords)).with_property(SOURCE_PROPERTY, CSV_SOURCE);
    Ok(feature.into())
}

/// Read `lat,lon[,...]`, returning the coordinate in storage order
fn parse_row(line: &str) -> Option<LonLat> {
    let mut fields = line.split(',');
    let lat = parse_number(fields.next()?)?;
    let lon = parse_number(fields.next()?)?;
    Some(LonLat::new(lon, lat))
}

/// Read the longest decimal number at the start of `field`
fn parse_number(field: &str) -> Option<f64> {
    let s = field.trim();
    let bytes = s.as_bytes();
    let digits_from = |at: usize| {
        bytes[at.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    if bytes.get(end) == Some(&b'.') {
        let frac_digits = digits_from(end + 1);
        if int_digits + frac_digits == 0 {
            return None;
        }
        end += 1 + frac_digits;
    } else if int_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_digits = digits_from(end + 1 + sign);
        if exp_digits > 0 {
            end += 1 + sign + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}
