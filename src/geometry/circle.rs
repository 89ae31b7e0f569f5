use super::geodesy::{Geodesy, Haversine};
use crate::domain::{Coordinate, Polygon, Ring};

/// Fewer vertices than this cannot enclose an area
const MIN_CIRCLE_VERTICES: usize = 3;

impl Polygon {
    /// Polygon approximating a geodesic circle of `radius` meters
    ///
    /// The single ring holds `vertices + 1` coordinates; vertex `i` sits at
    /// bearing `i * 360 / vertices` from `center` and the last coordinate
    /// repeats the first.
    pub fn circle(center: Coordinate, radius: f64, vertices: usize) -> Polygon {
        Self::circle_with(center, radius, vertices, &Haversine::default())
    }

    /// `circle` using a caller-supplied Earth model
    pub fn circle_with(
        center: Coordinate,
        radius: f64,
        vertices: usize,
        geodesy: &impl Geodesy,
    ) -> Polygon {
        let vertices = vertices.max(MIN_CIRCLE_VERTICES);
        let step = 360.0 / vertices as f64;

        let mut coordinates: Vec<Coordinate> = (0..vertices)
            .map(|i| geodesy.destination(center, radius, i as f64 * step))
            .collect();
        coordinates.push(coordinates[0]);

        Polygon::from_rings(vec![Ring::new(coordinates)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_circle_polygon() {
        let center = Coordinate::new(10.0, 5.0);
        let radius = 500.0;
        let circle = Polygon::circle(center, radius, 64);

        let ring = circle.outer_ring().coordinates();
        assert_eq!(ring.len() - 1, 64);
        assert_eq!(ring.first(), ring.last());

        let start = ring[0];
        let opposite = ring[ring.len() / 2];
        let diameter = Haversine::default().distance(start, opposite);
        assert!((diameter - radius * 2.0).abs() < 0.25);
    }

    #[test]
    fn test_circle_vertices_on_radius() {
        let center = Coordinate::new(-33.86, 151.2);
        let model = Haversine::default();
        let circle = Polygon::circle_with(center, 2_000.0, 12, &model);

        for &v in circle.outer_ring().vertices() {
            assert_relative_eq!(model.distance(center, v), 2_000.0, epsilon = 1e-5);
        }
        assert!(circle.contains_point(center));
    }

    #[test]
    fn test_first_vertex_is_due_north() {
        let center = Coordinate::new(0.0, 0.0);
        let circle = Polygon::circle(center, 1_000.0, 8);
        let first = circle.outer_ring().coordinates()[0];
        assert!(first.latitude > 0.0);
        assert_relative_eq!(first.longitude, 0.0, epsilon = 1e-12);

        // Second vertex is clockwise: north-east
        let second = circle.outer_ring().coordinates()[1];
        assert!(second.longitude > 0.0);
    }

    #[test]
    fn test_too_few_vertices_clamped() {
        let circle = Polygon::circle(Coordinate::new(0.0, 0.0), 100.0, 1);
        assert_eq!(circle.outer_ring().len(), 4);
        assert!(circle.validate().is_ok());
    }
}
