//! GeoJSON text input
//!
//! Accepts a feature collection, a bare list of features, a single feature,
//! or a bare geometry. Elements of a `features` list are read one by one so
//! a single unreadable feature does not discard the rest.

use geojson::{GeoJson, Value};
use log::debug;
use serde_json::Value as JsonValue;

use crate::error::InputError;
use crate::geo::{Feature, FeatureCollection, GeoInput, Geometry, LonLat, Properties};

/// Parse GeoJSON text into renderer input.
///
/// Geometry kinds the renderer does not draw (points, multi-points and
/// geometry collections) are kept as features without geometry.
pub fn parse_geojson(text: &str) -> Result<GeoInput, InputError> {
    let value: JsonValue = serde_json::from_str(text)?;

    match value {
        JsonValue::Array(items) => Ok(GeoInput::Features(read_features(items))),
        JsonValue::Object(mut object) if object.get("features").is_some_and(JsonValue::is_array) => {
            let items = match object.remove("features") {
                Some(JsonValue::Array(items)) => items,
                _ => Vec::new(),
            };
            Ok(GeoInput::Collection(FeatureCollection::new(read_features(items))))
        }
        other => Ok(match GeoJson::from_json_value(other)? {
            GeoJson::FeatureCollection(fc) => {
                GeoInput::Collection(FeatureCollection::new(fc.features.iter().map(convert_feature).collect()))
            }
            GeoJson::Feature(f) => GeoInput::Feature(convert_feature(&f)),
            GeoJson::Geometry(g) => match convert_geometry(&g) {
                Some(geometry) => GeoInput::Geometry(geometry),
                None => GeoInput::Feature(Feature::default()),
            },
        }),
    }
}

/// Read each list element independently, skipping the unreadable ones
fn read_features(items: Vec<JsonValue>) -> Vec<Feature> {
    let mut features = Vec::with_capacity(items.len());

    for (index, item) in items.into_iter().enumerate() {
        match GeoJson::from_json_value(item) {
            Ok(GeoJson::Feature(f)) => features.push(convert_feature(&f)),
            Ok(GeoJson::Geometry(g)) => features.push(Feature {
                geometry: convert_geometry(&g),
                properties: Properties::new(),
            }),
            Ok(GeoJson::FeatureCollection(fc)) => {
                features.extend(fc.features.iter().map(convert_feature));
            }
            Err(e) => debug!("skipping unreadable feature #{}: {}", index, e),
        }
    }

    features
}

fn convert_feature(feature: &geojson::Feature) -> Feature {
    Feature {
        geometry: feature.geometry.as_ref().and_then(convert_geometry),
        properties: feature.properties.clone().unwrap_or_default(),
    }
}

fn convert_geometry(geometry: &geojson::Geometry) -> Option<Geometry> {
    match &geometry.value {
        Value::LineString(line) => Some(Geometry::LineString(positions(line))),
        Value::MultiLineString(lines) => Some(Geometry::MultiLineString(
            lines.iter().map(|line| positions(line)).collect(),
        )),
        Value::Polygon(rings) => Some(Geometry::Polygon(
            rings.iter().map(|ring| positions(ring)).collect(),
        )),
        Value::MultiPolygon(polygons) => Some(Geometry::MultiPolygon(
            polygons
                .iter()
                .map(|rings| rings.iter().map(|ring| positions(ring)).collect())
                .collect(),
        )),
        _ => {
            debug!("skipping geometry that cannot be drawn as a path");
            None
        }
    }
}

/// Positions with fewer than two ordinates are dropped; altitude is ignored
fn positions(coords: &[Vec<f64>]) -> Vec<LonLat> {
    coords
        .iter()
        .filter(|c| c.len() >= 2)
        .map(|c| LonLat::new(c[0], c[1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(text: &str) -> FeatureCollection {
        parse_geojson(text).expect("Should parse").into()
    }

    #[test]
    fn test_feature_collection() {
        let fc = collection(
            r#"{
                "type": "FeatureCollection",
                "features": [
                    {"type": "Feature", "properties": {"highway": "residential"},
                     "geometry": {"type": "LineString", "coordinates": [[139.0, 35.0], [139.1, 35.1, 12.0]]}},
                    {"type": "Feature", "properties": null,
                     "geometry": {"type": "Point", "coordinates": [139.0, 35.0]}}
                ]
            }"#,
        );

        assert_eq!(fc.len(), 2);
        assert_eq!(
            fc.features[0].geometry,
            Some(Geometry::LineString(vec![
                LonLat::new(139.0, 35.0),
                LonLat::new(139.1, 35.1)
            ]))
        );
        assert_eq!(
            fc.features[0].properties.get("highway"),
            Some(&JsonValue::from("residential"))
        );
        assert_eq!(fc.features[1].geometry, None);
    }

    #[test]
    fn test_unreadable_feature_skipped() {
        let fc = collection(
            r#"{"type": "FeatureCollection", "features": [
                {"type": "Feature", "properties": {}, "geometry": {"type": "Spline", "coordinates": []}},
                {"type": "Feature", "properties": {},
                 "geometry": {"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]]}}
            ]}"#,
        );
        assert_eq!(fc.len(), 1);
        assert!(matches!(fc.features[0].geometry, Some(Geometry::Polygon(ref rings)) if rings[0].len() == 4));
    }

    #[test]
    fn test_bare_array() {
        let input = parse_geojson(
            r#"[
                {"type": "Feature", "properties": {},
                 "geometry": {"type": "MultiLineString", "coordinates": [[[0, 0], [1, 1]], [[2, 2], [3, 3]]]}},
                {"type": "MultiPolygon", "coordinates": [[[[0, 0], [1, 0], [0, 1], [0, 0]]]]}
            ]"#,
        )
        .unwrap();

        let GeoInput::Features(features) = input else {
            panic!("expected a feature list");
        };
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].geometry.as_ref().map(Geometry::type_name), Some("MultiLineString"));
        assert_eq!(features[1].geometry.as_ref().map(Geometry::type_name), Some("MultiPolygon"));
    }

    #[test]
    fn test_single_feature() {
        let input = parse_geojson(
            r#"{"type": "Feature", "properties": {"name": "route"},
                "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]}}"#,
        )
        .unwrap();
        assert!(matches!(input, GeoInput::Feature(_)));
        assert_eq!(FeatureCollection::from(input).len(), 1);
    }

    #[test]
    fn test_bare_geometry() {
        let input = parse_geojson(r#"{"type": "LineString", "coordinates": [[0, 0], [1, 1]]}"#).unwrap();
        assert!(matches!(input, GeoInput::Geometry(Geometry::LineString(_))));
    }

    #[test]
    fn test_bare_point_has_no_geometry() {
        let fc = collection(r#"{"type": "Point", "coordinates": [0, 0]}"#);
        assert_eq!(fc.features, vec![Feature::default()]);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(parse_geojson("{not json"), Err(InputError::Json(_))));
    }

    #[test]
    fn test_json_that_is_not_geojson() {
        assert!(matches!(parse_geojson(r#"{"hello": "world"}"#), Err(InputError::GeoJson(_))));
        assert!(matches!(parse_geojson("42"), Err(InputError::GeoJson(_))));
    }
}
