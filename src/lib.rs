//! geopoly - Polygon geometry on geographic coordinates
//!
//! Containment, centroids, geodesic circles, simplification and smoothing
//! for polygons made of latitude/longitude rings, plus a small GeoJSON codec.

pub mod config;
pub mod domain;
pub mod error;
pub mod geojson;
pub mod geometry;

pub use domain::{Coordinate, Polygon, Ring, Validation};
pub use error::{GeometryError, Result};
pub use geojson::{Feature, FeatureCollection, FeatureId, GeoJson, Geometry};
pub use geometry::{Geodesy, Haversine, RingPosition};
