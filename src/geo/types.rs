//! Core geometry types consumed by the renderer

use serde_json::{Map, Value as JsonValue};

/// Opaque feature properties, carried through but never interpreted
pub type Properties = Map<String, JsonValue>;

/// A point in output pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A stored geographic coordinate, in GeoJSON axis order (longitude first)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

impl From<[f64; 2]> for LonLat {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self { lon, lat }
    }
}

/// Closed ring of a polygon (exterior or hole)
pub type Ring = Vec<LonLat>;

/// Supported geometry kinds.
///
/// Adding a kind means extending this enum and every `match` over it;
/// anything else is dropped when input is read.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    LineString(Vec<LonLat>),
    Polygon(Vec<Ring>),
    MultiPolygon(Vec<Vec<Ring>>),
    MultiLineString(Vec<Vec<LonLat>>),
}

impl Geometry {
    /// GeoJSON type name
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::LineString(_) => "LineString",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPolygon(_) => "MultiPolygon",
            Geometry::MultiLineString(_) => "MultiLineString",
        }
    }
}

/// A geometry with its properties
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Feature {
    pub geometry: Option<Geometry>,
    pub properties: Properties,
}

impl Feature {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry: Some(geometry),
            properties: Properties::new(),
        }
    }

    /// Attach a property, replacing any previous value for `key`
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// Ordered list of features, the unit every layer is rendered from
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl From<Vec<Feature>> for FeatureCollection {
    fn from(features: Vec<Feature>) -> Self {
        Self { features }
    }
}

impl From<Feature> for FeatureCollection {
    fn from(feature: Feature) -> Self {
        Self {
            features: vec![feature],
        }
    }
}

impl From<Geometry> for FeatureCollection {
    fn from(geometry: Geometry) -> Self {
        Feature::new(geometry).into()
    }
}

/// Any shape of geographic input a layer can be built from
#[derive(Debug, Clone, PartialEq)]
pub enum GeoInput {
    /// A collection with a `features` list
    Collection(FeatureCollection),
    /// A bare list of features
    Features(Vec<Feature>),
    /// A single feature
    Feature(Feature),
    /// A bare geometry without properties
    Geometry(Geometry),
}

impl From<GeoInput> for FeatureCollection {
    fn from(input: GeoInput) -> Self {
        match input {
            GeoInput::Collection(collection) => collection,
            GeoInput::Features(features) => features.into(),
            GeoInput::Feature(feature) => feature.into(),
            GeoInput::Geometry(geometry) => geometry.into(),
        }
    }
}

impl GeoInput {
    pub fn into_collection(self) -> FeatureCollection {
        self.into()
    }
}
