use thiserror::Error;

/// Failures of the fallible surfaces around the engine: strict construction
/// and GeoJSON decoding. The geometry algorithms themselves never fail.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("polygon has no rings")]
    NoRings,

    #[error("ring {ring} has {len} coordinates, at least 4 are required")]
    RingTooShort { ring: usize, len: usize },

    #[error("ring {ring} is not closed (first coordinate differs from last)")]
    RingNotClosed { ring: usize },

    #[error("ring {ring} coordinate {index} is not finite")]
    NonFiniteCoordinate { ring: usize, index: usize },

    #[error("position has {len} elements, expected at least longitude and latitude")]
    InvalidPosition { len: usize },

    #[error("hole ring {ring} is not contained in the outer ring")]
    HoleOutsideOuter { ring: usize },

    #[error("expected a Polygon geometry, found {kind}")]
    NotAPolygon { kind: &'static str },

    #[error("invalid GeoJSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GeometryError>;
