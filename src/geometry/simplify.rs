//! Ring simplification
//!
//! # Algorithm
//! 1. Unless `highest_quality` is set, a radial pass drops every point that
//!    is not farther than the tolerance from the last point kept. This is
//!    O(n) and shrinks the input for the next step.
//! 2. Douglas-Peucker: between the endpoints of a run, find the point
//!    farthest from the chord segment. If it is farther than the tolerance,
//!    keep it and recurse on both halves; otherwise drop the whole run.
//!
//! All distances are squared planar distances in degree space, compared
//! against `tolerance * tolerance`.
//!
//! Applied to a polygon, each ring is simplified on its own. A ring is never
//! reduced below 4 coordinates: when the result would be shorter, the
//! tolerance is relaxed by 1% and the ring simplified again. A NaN tolerance
//! leaves every ring unchanged.

use crate::domain::ring::MIN_RING_LEN;
use crate::domain::{Coordinate, Polygon, Ring};

/// Tolerance relaxation factor applied per retry
const RELAX_FACTOR: f64 = 0.99;

/// Below this the ring cannot be simplified further and is returned as-is
const MIN_TOLERANCE: f64 = 1e-12;

impl Polygon {
    /// Reduce the vertex count of every ring under `tolerance`
    pub fn simplify(&self, tolerance: f64, highest_quality: bool) -> Polygon {
        self.map_rings(|ring| simplify_ring(ring, tolerance, highest_quality))
    }
}

/// Simplify a single closed ring, keeping it closed and at least 4 long
pub fn simplify_ring(ring: &Ring, tolerance: f64, highest_quality: bool) -> Ring {
    let points = ring.coordinates();
    if points.len() < MIN_RING_LEN {
        return ring.clone();
    }

    if tolerance.is_nan() {
        return ring.clone();
    }
    // Relaxing an infinite tolerance never reaches MIN_TOLERANCE
    let mut tolerance = tolerance.abs().min(f64::MAX);
    let mut simplified = simplify_coordinates(points, tolerance, highest_quality);

    while Ring::close(simplified.clone()).len() < MIN_RING_LEN {
        tolerance *= RELAX_FACTOR;
        if tolerance < MIN_TOLERANCE {
            tracing::debug!(len = points.len(), "ring cannot be simplified, keeping input");
            return ring.clone();
        }
        simplified = simplify_coordinates(points, tolerance, highest_quality);
    }

    tracing::debug!(
        input = points.len(),
        output = simplified.len(),
        tolerance,
        "simplified ring"
    );

    Ring::close(simplified)
}

/// Simplify an open or closed coordinate sequence
///
/// Sequences of two points or fewer are returned unchanged.
pub fn simplify_coordinates(
    points: &[Coordinate],
    tolerance: f64,
    highest_quality: bool,
) -> Vec<Coordinate> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let sq_tolerance = tolerance * tolerance;

    if highest_quality {
        douglas_peucker(points, sq_tolerance)
    } else {
        let reduced = radial_distance(points, sq_tolerance);
        douglas_peucker(&reduced, sq_tolerance)
    }
}

/// Keep points farther than the tolerance from the previously kept point
///
/// The first and last points are always kept.
fn radial_distance(points: &[Coordinate], sq_tolerance: f64) -> Vec<Coordinate> {
    let Some((&first, rest)) = points.split_first() else {
        return Vec::new();
    };

    let mut kept = Vec::with_capacity(points.len());
    kept.push(first);
    let mut previous = first;
    let mut previous_index = 0;

    for (offset, &point) in rest.iter().enumerate() {
        if point.squared_distance(previous) > sq_tolerance {
            kept.push(point);
            previous = point;
            previous_index = offset + 1;
        }
    }

    if previous_index != points.len() - 1 {
        kept.push(points[points.len() - 1]);
    }

    kept
}

fn douglas_peucker(points: &[Coordinate], sq_tolerance: f64) -> Vec<Coordinate> {
    let n = points.len();
    if n < 2 {
        return points.to_vec();
    }

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    douglas_peucker_step(points, 0, n - 1, sq_tolerance, &mut keep);

    points
        .iter()
        .zip(keep)
        .filter_map(|(&p, k)| k.then_some(p))
        .collect()
}

/// Processes the run from `first` to `last` (inclusive)
fn douglas_peucker_step(
    points: &[Coordinate],
    first: usize,
    last: usize,
    sq_tolerance: f64,
    keep: &mut [bool],
) {
    if last <= first + 1 {
        return;
    }

    let mut max_sq_dist = sq_tolerance;
    let mut index = None;

    for i in (first + 1)..last {
        let sq_dist = squared_segment_distance(points[i], points[first], points[last]);
        if sq_dist > max_sq_dist {
            index = Some(i);
            max_sq_dist = sq_dist;
        }
    }

    if let Some(index) = index {
        keep[index] = true;
        douglas_peucker_step(points, first, index, sq_tolerance, keep);
        douglas_peucker_step(points, index, last, sq_tolerance, keep);
    }
}

/// Squared distance from `p` to the segment `start..end`
///
/// A degenerate segment (as for a closed ring's first and last point)
/// measures the distance to `start`.
fn squared_segment_distance(p: Coordinate, start: Coordinate, end: Coordinate) -> f64 {
    let mut x = start.latitude;
    let mut y = start.longitude;
    let dx = end.latitude - x;
    let dy = end.longitude - y;

    if dx != 0.0 || dy != 0.0 {
        let t = ((p.latitude - x) * dx + (p.longitude - y) * dy) / (dx * dx + dy * dy);
        if t > 1.0 {
            x = end.latitude;
            y = end.longitude;
        } else if t > 0.0 {
            x += dx * t;
            y += dy * t;
        }
    }

    let dx = p.latitude - x;
    let dy = p.longitude - y;
    dx * dx + dy * dy
}
