//! Integration tests for the mapsvg render pipeline

use mapsvg::input::{parse_csv, parse_geojson, CSV_SOURCE, SOURCE_PROPERTY};
use mapsvg::{
    render, render_to_svg, BoundingBox, Feature, FeatureCollection, Geometry, LayerKind, LonLat,
    ParseError, RenderConfig, SvgConfig, Viewport, ViewportError,
};
use pretty_assertions::assert_eq;

/// Square-ish box around the origin, 994.9 x 1000 at the default size
fn origin_box() -> BoundingBox {
    BoundingBox::new(-10.0, -10.0, 10.0, 10.0)
}

fn line(points: &[(f64, f64)]) -> Geometry {
    Geometry::LineString(points.iter().map(|&(lon, lat)| LonLat::new(lon, lat)).collect())
}

fn ring(n: usize) -> Vec<LonLat> {
    (0..n).map(|i| LonLat::new(i as f64, (i % 2) as f64)).collect()
}

#[test]
fn test_empty_document_has_only_background() {
    let doc = render(&origin_box(), None, None, 1000.0).expect("Should render");
    assert_eq!(doc.drawable_count(), 1);
    assert!(doc.layers.is_empty());

    let svg = doc.to_svg();
    assert_eq!(svg.matches("<rect").count(), 1);
    assert_eq!(svg.matches("<path").count(), 0);
}

#[test]
fn test_aspect_ratio_preserved() {
    for (bbox, target) in [
        (BoundingBox::new(35.60, 139.30, 35.70, 139.80), 1000.0),
        (BoundingBox::new(-40.0, 170.0, -30.0, 172.0), 640.0),
        (origin_box(), 1.0),
    ] {
        let vp = Viewport::fit(&bbox, target).expect("Should fit");
        let ar = vp.aspect_ratio();
        assert_eq!(vp.width.max(vp.height), target);
        assert!((vp.width.min(vp.height) - target / ar.max(1.0 / ar)).abs() < 1e-9 * target);
        assert!((vp.width / vp.height - ar).abs() < 1e-9);
    }
}

#[test]
fn test_bbox_corners_map_to_canvas_corners() {
    let base: FeatureCollection = line(&[(-10.0, 10.0), (10.0, -10.0)]).into();
    let doc = render(&origin_box(), Some(&base), None, 1000.0).unwrap();
    assert_eq!(doc.path_data(), vec![vec!["M0.0 0.0 L994.9 1000.0".to_string()]]);
}

#[test]
fn test_every_multi_part_is_drawn() {
    let base = FeatureCollection::new(vec![
        Feature::new(Geometry::MultiPolygon(vec![
            vec![ring(4), ring(5)],
            vec![ring(6), ring(3)],
        ])),
        Feature::new(Geometry::MultiLineString(vec![ring(2), ring(3), ring(7)])),
        Feature::new(Geometry::Polygon(vec![ring(4)])),
    ]);

    let doc = render(&origin_box(), Some(&base), None, 1000.0).unwrap();
    let paths = &doc.layer(LayerKind::Base).expect("base layer").paths;
    assert_eq!(paths.len(), 8);
    assert_eq!(doc.drawable_count(), 9);

    let point_counts: Vec<usize> = paths.iter().map(|p| p.len()).collect();
    assert_eq!(point_counts, vec![4, 5, 6, 3, 2, 3, 7, 4]);
}

#[test]
fn test_degenerate_rings_and_missing_geometry_skipped() {
    let base = FeatureCollection::new(vec![
        Feature::new(Geometry::Polygon(vec![ring(1), ring(4), Vec::new()])),
        Feature::default(),
        Feature::new(line(&[(1.0, 1.0)])),
    ]);

    let doc = render(&origin_box(), Some(&base), None, 1000.0).unwrap();
    assert_eq!(doc.drawable_count(), 2);
}

#[test]
fn test_csv_overlay_uses_latitude_first() {
    let overlay = parse_csv("latitude,longitude\n10,-10\n-10,10\n").expect("Should parse");
    let feature = &overlay.features[0];
    assert_eq!(
        feature.geometry,
        Some(line(&[(-10.0, 10.0), (10.0, -10.0)]))
    );
    assert_eq!(
        feature.properties.get(SOURCE_PROPERTY).and_then(|v| v.as_str()),
        Some(CSV_SOURCE)
    );

    let doc = render(&origin_box(), None, Some(&overlay), 1000.0).unwrap();
    let overlay_layer = doc.layer(LayerKind::Overlay).expect("overlay layer");
    assert_eq!(overlay_layer.path_data(), vec!["M0.0 0.0 L994.9 1000.0".to_string()]);
}

#[test]
fn test_csv_with_fewer_than_two_rows_is_rejected() {
    assert_eq!(parse_csv("lat,lon\n"), Err(ParseError::NoNumericData));
    assert!(matches!(
        parse_csv("lat,lon\n35.0,139.0\nnope\n"),
        Err(ParseError::Malformed { found: 1, .. })
    ));
}

#[test]
fn test_overlay_drawn_after_base() {
    let base: FeatureCollection = line(&[(-5.0, -5.0), (5.0, 5.0)]).into();
    let overlay = parse_csv("0,0\n5,5\n").unwrap();
    let svg = render_to_svg(&origin_box(), Some(&base), Some(&overlay), &RenderConfig::new()).unwrap();

    let background = svg.find("<rect").expect("background");
    let base_at = svg.find("id=\"osm-layer\"").expect("base group");
    let overlay_at = svg.find("id=\"overlay-layer\"").expect("overlay group");
    assert!(background < base_at);
    assert!(base_at < overlay_at);
    assert!(svg.contains("M497.5 500.0 L746.2 251.0"));
}

#[test]
fn test_geojson_inputs_render_alike() {
    let geometry = r#"{"type": "LineString", "coordinates": [[-10, 10], [10, -10]]}"#;
    let feature = format!(r#"{{"type": "Feature", "properties": {{}}, "geometry": {}}}"#, geometry);
    let collection = format!(r#"{{"type": "FeatureCollection", "features": [{}]}}"#, feature);
    let list = format!("[{}]", feature);

    let expected = vec![vec!["M0.0 0.0 L994.9 1000.0".to_string()]];
    for text in [geometry.to_string(), feature, collection, list] {
        let base: FeatureCollection = parse_geojson(&text).expect("Should parse").into();
        let doc = render(&origin_box(), Some(&base), None, 1000.0).unwrap();
        assert_eq!(doc.path_data(), expected, "input: {}", text);
    }
}

#[test]
fn test_unsupported_geometries_do_not_render() {
    let text = r#"{"type": "FeatureCollection", "features": [
        {"type": "Feature", "properties": {}, "geometry": {"type": "Point", "coordinates": [0, 0]}},
        {"type": "Feature", "properties": {}, "geometry": {"type": "MultiPoint", "coordinates": [[0, 0], [1, 1]]}},
        {"type": "Feature", "properties": {}, "geometry": null}
    ]}"#;
    let base: FeatureCollection = parse_geojson(text).unwrap().into();
    assert_eq!(base.len(), 3);

    let doc = render(&origin_box(), Some(&base), None, 1000.0).unwrap();
    assert_eq!(doc.drawable_count(), 1);
}

#[test]
fn test_invalid_bounds_are_errors() {
    let collapsed = BoundingBox::new(35.0, 139.0, 35.0, 139.5);
    assert!(matches!(
        render(&collapsed, None, None, 1000.0),
        Err(mapsvg::RenderError::Viewport(ViewportError::DegenerateBounds { .. }))
    ));

    let inverted = BoundingBox::new(36.0, 139.0, 35.0, 139.5);
    assert!(matches!(
        render(&inverted, None, None, 1000.0),
        Err(mapsvg::RenderError::Viewport(ViewportError::InvertedBounds { .. }))
    ));
}

#[test]
fn test_fixed_size_output() {
    let config = RenderConfig::new()
        .with_target_size(500.0)
        .with_svg(SvgConfig::new().with_responsive(false).with_pretty_print(false));
    let svg = render_to_svg(&BoundingBox::new(0.0, 0.0, 10.0, 40.0), None, None, &config).unwrap();
    assert!(svg.contains(r#"width="500""#));
    assert!(!svg.contains("100%"));
    assert!(!svg.contains('\n'));
}
