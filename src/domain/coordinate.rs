use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GeometryError;

/// A (latitude, longitude) pair in degrees
///
/// Equality is exact value equality. On the wire a coordinate is a GeoJSON
/// position, which puts longitude first: `[lon, lat]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "[f64; 2]")]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Component-wise `self * a + other * b`, used for edge interpolation
    pub(crate) fn blend(self, a: f64, other: Coordinate, b: f64) -> Coordinate {
        Coordinate::new(
            a * self.latitude + b * other.latitude,
            a * self.longitude + b * other.longitude,
        )
    }

    /// Squared planar distance in degree space
    pub(crate) fn squared_distance(self, other: Coordinate) -> f64 {
        let d_lat = self.latitude - other.latitude;
        let d_lon = self.longitude - other.longitude;
        d_lat * d_lat + d_lon * d_lon
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl From<(f64, f64)> for Coordinate {
    /// Build from a `(lat, lon)` tuple
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(c: Coordinate) -> Self {
        (c.latitude, c.longitude)
    }
}

impl From<[f64; 2]> for Coordinate {
    /// Build from a GeoJSON `[lon, lat]` position
    fn from([longitude, latitude]: [f64; 2]) -> Self {
        Self::new(latitude, longitude)
    }
}

impl TryFrom<Vec<f64>> for Coordinate {
    type Error = GeometryError;

    /// Build from a GeoJSON position; elements past latitude (altitude)
    /// are dropped
    fn try_from(position: Vec<f64>) -> Result<Self, Self::Error> {
        match position[..] {
            [longitude, latitude, ..] => Ok(Self::new(latitude, longitude)),
            _ => Err(GeometryError::InvalidPosition {
                len: position.len(),
            }),
        }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> Self {
        [c.longitude, c.latitude]
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}
