//! GeoJSON documents carrying polygons
//!
//! Only the parts the engine needs: geometries, features and feature
//! collections. Positions are `[longitude, latitude]`; an altitude element
//! is accepted and dropped.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Coordinate, Polygon};
use crate::error::{GeometryError, Result};

/// A GeoJSON geometry object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Point(Coordinate),
    MultiPoint(Vec<Coordinate>),
    LineString(Vec<Coordinate>),
    MultiLineString(Vec<Vec<Coordinate>>),
    Polygon(Polygon),
    MultiPolygon(Vec<Polygon>),
}

impl Geometry {
    /// GeoJSON type name
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::MultiPoint(_) => "MultiPoint",
            Geometry::LineString(_) => "LineString",
            Geometry::MultiLineString(_) => "MultiLineString",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPolygon(_) => "MultiPolygon",
        }
    }

    pub fn polygon(&self) -> Option<&Polygon> {
        match self {
            Geometry::Polygon(polygon) => Some(polygon),
            _ => None,
        }
    }

    /// Every polygon in this geometry, multi-polygon members included
    pub fn polygons(&self) -> Vec<&Polygon> {
        match self {
            Geometry::Polygon(polygon) => vec![polygon],
            Geometry::MultiPolygon(polygons) => polygons.iter().collect(),
            _ => Vec::new(),
        }
    }

    /// Replace every polygon with `f(polygon)`; other geometries are cloned
    pub fn map_polygons(&self, f: &impl Fn(&Polygon) -> Polygon) -> Geometry {
        match self {
            Geometry::Polygon(polygon) => Geometry::Polygon(f(polygon)),
            Geometry::MultiPolygon(polygons) => {
                Geometry::MultiPolygon(polygons.iter().map(f).collect())
            }
            other => other.clone(),
        }
    }
}

impl From<Polygon> for Geometry {
    fn from(polygon: Polygon) -> Self {
        Geometry::Polygon(polygon)
    }
}

impl TryFrom<Geometry> for Polygon {
    type Error = GeometryError;

    fn try_from(geometry: Geometry) -> Result<Self> {
        match geometry {
            Geometry::Polygon(polygon) => Ok(polygon),
            other => Err(GeometryError::NotAPolygon { kind: other.kind() }),
        }
    }
}

/// Feature identifier, passed through untouched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureId {
    Number(f64),
    String(String),
}

impl std::fmt::Display for FeatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeatureId::Number(n) => write!(f, "{}", n),
            FeatureId::String(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
enum FeatureTag {
    #[default]
    Feature,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
enum FeatureCollectionTag {
    #[default]
    FeatureCollection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    tag: FeatureTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<FeatureId>,
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: Option<Value>,
}

impl Feature {
    pub fn new(geometry: impl Into<Geometry>) -> Self {
        Self {
            tag: FeatureTag::Feature,
            id: None,
            geometry: geometry.into(),
            properties: None,
        }
    }

    pub fn with_properties(mut self, properties: Value) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Same feature with its polygons replaced by `f(polygon)`
    pub fn map_polygons(&self, f: &impl Fn(&Polygon) -> Polygon) -> Feature {
        Feature {
            geometry: self.geometry.map_polygons(f),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    tag: FeatureCollectionTag,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            tag: FeatureCollectionTag::FeatureCollection,
            features,
        }
    }
}

impl FromIterator<Feature> for FeatureCollection {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Any top-level GeoJSON document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeoJson {
    Feature(Feature),
    FeatureCollection(FeatureCollection),
    Geometry(Geometry),
}

impl GeoJson {
    pub fn parse(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn to_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Every polygon in the document, in document order
    pub fn polygons(&self) -> Vec<&Polygon> {
        match self {
            GeoJson::Feature(feature) => feature.geometry.polygons(),
            GeoJson::FeatureCollection(collection) => collection
                .features
                .iter()
                .flat_map(|f| f.geometry.polygons())
                .collect(),
            GeoJson::Geometry(geometry) => geometry.polygons(),
        }
    }

    /// The document as a list of features; a bare geometry becomes one
    /// feature without id
    pub fn into_features(self) -> Vec<Feature> {
        match self {
            GeoJson::Feature(feature) => vec![feature],
            GeoJson::FeatureCollection(collection) => collection.features,
            GeoJson::Geometry(geometry) => vec![Feature::new(geometry)],
        }
    }
}

impl From<Feature> for GeoJson {
    fn from(feature: Feature) -> Self {
        GeoJson::Feature(feature)
    }
}

impl From<FeatureCollection> for GeoJson {
    fn from(collection: FeatureCollection) -> Self {
        GeoJson::FeatureCollection(collection)
    }
}

impl From<Geometry> for GeoJson {
    fn from(geometry: Geometry) -> Self {
        GeoJson::Geometry(geometry)
    }
}
