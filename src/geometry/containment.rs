//! Point-in-polygon evaluation
//!
//! # Algorithm
//! Each ring is classified independently with a crossing-number test: a ray
//! is cast from the point toward increasing longitude and the ring edges it
//! crosses are counted. Before an edge is counted the point is tested for
//! lying exactly on it, so boundary points never depend on how the ray
//! happens to meet a vertex.
//!
//! The per-ring answers are then combined:
//! - the outer ring must report `Inside` or `OnBoundary`
//! - a hole reporting `Inside` excludes the point
//! - a hole reporting `OnBoundary` does not (the boundary belongs to the
//!   filled region)
//! - with `ignore_boundary`, `OnBoundary` on any ring rejects the point

use super::bounds::Bounds;
use crate::domain::ring::MIN_RING_LEN;
use crate::domain::{Coordinate, Polygon, Ring};

/// Where a point lies relative to a single ring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingPosition {
    Inside,
    Outside,
    OnBoundary,
}

/// Classify `point` against one ring (x = longitude, y = latitude)
pub fn ring_position(ring: &Ring, point: Coordinate) -> RingPosition {
    if ring.len() < MIN_RING_LEN {
        return RingPosition::Outside;
    }

    let vertices = ring.vertices();
    let n = vertices.len();
    let (px, py) = (point.longitude, point.latitude);

    let mut inside = false;
    let mut j = n - 1;

    for i in 0..n {
        let (xi, yi) = (vertices[i].longitude, vertices[i].latitude);
        let (xj, yj) = (vertices[j].longitude, vertices[j].latitude);

        let collinear = py * (xi - xj) + yi * (xj - px) + yj * (px - xi) == 0.0;
        let within = (xi - px) * (xj - px) <= 0.0 && (yi - py) * (yj - py) <= 0.0;
        if collinear && within {
            return RingPosition::OnBoundary;
        }

        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }

    if inside {
        RingPosition::Inside
    } else {
        RingPosition::Outside
    }
}

impl Polygon {
    /// Whether the polygon contains `point`
    ///
    /// Points on any ring boundary count as contained unless
    /// `ignore_boundary` is set.
    pub fn contains(&self, point: Coordinate, ignore_boundary: bool) -> bool {
        let Some(bounds) = Bounds::from_coordinates(self.outer_ring().coordinates()) else {
            return false;
        };
        if !bounds.contains(point) {
            return false;
        }

        match ring_position(self.outer_ring(), point) {
            RingPosition::Outside => return false,
            RingPosition::OnBoundary if ignore_boundary => return false,
            _ => {}
        }

        for hole in self.inner_rings() {
            match ring_position(hole, point) {
                RingPosition::Inside => return false,
                RingPosition::OnBoundary if ignore_boundary => return false,
                _ => {}
            }
        }

        true
    }

    /// `contains` with boundary points included
    pub fn contains_point(&self, point: Coordinate) -> bool {
        self.contains(point, false)
    }
}
