pub mod bounds;
pub mod centroid;
pub mod circle;
pub mod containment;
pub mod geodesy;
pub mod simplify;
pub mod smooth;

pub use bounds::Bounds;
pub use containment::{RingPosition, ring_position};
pub use geodesy::{EARTH_RADIUS_M, Geodesy, Haversine};
pub use simplify::{simplify_coordinates, simplify_ring};
pub use smooth::{DEFAULT_SMOOTH_ITERATIONS, smooth_ring};
