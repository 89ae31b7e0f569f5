//! Representative points of a polygon
//!
//! Three independent definitions, cheapest first:
//! - `center`: midpoint of the bounding box of every coordinate
//! - `centroid`: mean of every vertex of every ring
//! - `center_of_mass`: area-weighted centroid of the outer ring
//!
//! Each returns `None` for degenerate input instead of failing: fewer than 3
//! distinct vertices, or for `center_of_mass` a vanishing area.

use super::bounds::Bounds;
use crate::domain::{Coordinate, Polygon, Ring};

/// Shoelace areas at or below this fraction of the bounding-box area are
/// treated as zero
const MIN_AREA_RATIO: f64 = f64::EPSILON;

impl Polygon {
    /// Midpoint of the axis-aligned bounding box over all rings
    pub fn center(&self) -> Option<Coordinate> {
        if self.distinct_vertex_count() < 3 {
            return None;
        }
        Bounds::from_slices(self.rings().map(Ring::coordinates)).map(|b| b.center())
    }

    /// Arithmetic mean of the vertices of all rings
    ///
    /// The closing duplicate of each ring is not a vertex and is skipped.
    pub fn centroid(&self) -> Option<Coordinate> {
        if self.distinct_vertex_count() < 3 {
            return None;
        }
        vertex_mean(self.rings().flat_map(|r| r.vertices().iter().copied()))
    }

    /// Area-weighted centroid of the outer ring; holes are not subtracted
    ///
    /// Vertices are translated by their mean before the shoelace sums are
    /// taken, which keeps precision for coordinates far from the origin.
    pub fn center_of_mass(&self) -> Option<Coordinate> {
        let ring = self.outer_ring();
        if ring.distinct_vertex_count() < 3 {
            return None;
        }
        let reference = vertex_mean(ring.vertices().iter().copied())?;
        let bounds = Bounds::from_coordinates(ring.coordinates())?;

        // x = longitude, y = latitude, relative to the reference
        let shifted: Vec<(f64, f64)> = ring
            .coordinates()
            .iter()
            .map(|c| (c.longitude - reference.longitude, c.latitude - reference.latitude))
            .collect();

        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        let mut double_area = 0.0;
        for pair in shifted.windows(2) {
            let (xi, yi) = pair[0];
            let (xj, yj) = pair[1];
            let cross = xi * yj - xj * yi;
            double_area += cross;
            sum_x += (xi + xj) * cross;
            sum_y += (yi + yj) * cross;
        }

        let area = double_area * 0.5;
        if area.abs() <= MIN_AREA_RATIO * bounds.width() * bounds.height() {
            return None;
        }

        let factor = 1.0 / (6.0 * area);
        Some(Coordinate::new(
            reference.latitude + factor * sum_y,
            reference.longitude + factor * sum_x,
        ))
    }
}

fn vertex_mean(vertices: impl Iterator<Item = Coordinate>) -> Option<Coordinate> {
    let mut count = 0usize;
    let mut lat = 0.0;
    let mut lon = 0.0;
    for v in vertices {
        count += 1;
        lat += v.latitude;
        lon += v.longitude;
    }
    if count == 0 {
        return None;
    }
    Some(Coordinate::new(lat / count as f64, lon / count as f64))
}
