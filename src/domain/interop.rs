use super::{Coordinate, Polygon, Ring};

// geo uses x = longitude, y = latitude

impl From<Coordinate> for geo::Coord<f64> {
    fn from(c: Coordinate) -> Self {
        geo::coord! { x: c.longitude, y: c.latitude }
    }
}

impl From<geo::Coord<f64>> for Coordinate {
    fn from(c: geo::Coord<f64>) -> Self {
        Coordinate::new(c.y, c.x)
    }
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Point::new(c.longitude, c.latitude)
    }
}

impl From<&Ring> for geo::LineString<f64> {
    fn from(ring: &Ring) -> Self {
        ring.coordinates()
            .iter()
            .map(|&c| geo::Coord::from(c))
            .collect()
    }
}

impl From<geo::LineString<f64>> for Ring {
    fn from(line: geo::LineString<f64>) -> Self {
        Ring::new(line.0.into_iter().map(Coordinate::from).collect())
    }
}

impl From<&Polygon> for geo::Polygon<f64> {
    fn from(polygon: &Polygon) -> Self {
        geo::Polygon::new(
            polygon.outer_ring().into(),
            polygon.inner_rings().iter().map(Into::into).collect(),
        )
    }
}

impl From<geo::Polygon<f64>> for Polygon {
    fn from(polygon: geo::Polygon<f64>) -> Self {
        let (exterior, interiors) = polygon.into_inner();
        let mut rings = Vec::with_capacity(1 + interiors.len());
        rings.push(Ring::from(exterior));
        rings.extend(interiors.into_iter().map(Ring::from));
        Polygon::from_rings(rings)
    }
}
