pub mod coordinate;
pub mod interop;
pub mod polygon;
pub mod ring;
pub mod validation;

pub use coordinate::Coordinate;
pub use polygon::Polygon;
pub use ring::Ring;
pub use validation::Validation;
