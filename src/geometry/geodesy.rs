//! Great-circle distance and forward geodesic on a spherical Earth
//!
//! The engine only needs two things from a coordinate model: how far apart
//! two coordinates are, and where you end up after travelling a distance
//! along a bearing. Both live behind the `Geodesy` trait so callers can plug
//! in their own Earth model.

use crate::domain::Coordinate;

/// Earth radius used by the default model, in meters
pub const EARTH_RADIUS_M: f64 = 6_373_000.0;

pub trait Geodesy {
    /// Great-circle distance between two coordinates, in meters
    fn distance(&self, from: Coordinate, to: Coordinate) -> f64;

    /// Coordinate reached from `origin` after `distance` meters on the
    /// initial `bearing` (degrees clockwise from north)
    fn destination(&self, origin: Coordinate, distance: f64, bearing: f64) -> Coordinate;
}

/// Spherical model using the haversine formula
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Haversine {
    pub radius: f64,
}

impl Haversine {
    pub const fn with_radius(radius: f64) -> Self {
        Self { radius }
    }
}

impl Default for Haversine {
    fn default() -> Self {
        Self::with_radius(EARTH_RADIUS_M)
    }
}

impl Geodesy for Haversine {
    fn distance(&self, from: Coordinate, to: Coordinate) -> f64 {
        let d_lat = (to.latitude - from.latitude).to_radians();
        let d_lon = (to.longitude - from.longitude).to_radians();

        let lat1 = from.latitude.to_radians();
        let lat2 = to.latitude.to_radians();

        let a = (d_lat * 0.5).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        self.radius * c
    }

    fn destination(&self, origin: Coordinate, distance: f64, bearing: f64) -> Coordinate {
        let angular = distance / self.radius;
        let bearing = bearing.to_radians();

        let lat1 = origin.latitude.to_radians();
        let lon1 = origin.longitude.to_radians();

        let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();
        let lon2 = lon1
            + (bearing.sin() * angular.sin() * lat1.cos())
                .atan2(angular.cos() - lat1.sin() * lat2.sin());

        Coordinate::new(lat2.to_degrees(), normalize_longitude(lon2.to_degrees()))
    }
}

/// Wrap a longitude into [-180, 180)
fn normalize_longitude(lon: f64) -> f64 {
    (lon + 540.0).rem_euclid(360.0) - 180.0
}
