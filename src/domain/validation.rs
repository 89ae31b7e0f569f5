//! Ring validation for polygons built in strict mode
//!
//! Checks performed, in order:
//! - the polygon has at least one ring
//! - every ring has at least 4 coordinates
//! - every coordinate is finite
//! - every ring is closed
//! - every hole vertex lies inside or on the outer ring

use super::ring::MIN_RING_LEN;
use super::{Polygon, Ring};
use crate::error::{GeometryError, Result};
use crate::geometry::containment::{RingPosition, ring_position};
use serde::Deserialize;

/// Whether ring invariants are enforced when a polygon is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Validation {
    /// Accept any ring data, degenerate input gives degenerate results
    #[default]
    Lenient,
    /// Reject polygons that violate the ring invariants
    Strict,
}

impl Validation {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Validation::Strict
        } else {
            Validation::Lenient
        }
    }
}

pub fn validate_polygon(polygon: &Polygon) -> Result<()> {
    if polygon.outer_ring().is_empty() && polygon.inner_rings().is_empty() {
        return Err(GeometryError::NoRings);
    }

    for (index, ring) in polygon.rings().enumerate() {
        validate_ring(index, ring)?;
    }

    let outer = polygon.outer_ring();
    for (offset, hole) in polygon.inner_rings().iter().enumerate() {
        let escapes = hole
            .vertices()
            .iter()
            .any(|&v| ring_position(outer, v) == RingPosition::Outside);
        if escapes {
            return Err(GeometryError::HoleOutsideOuter { ring: offset + 1 });
        }
    }

    Ok(())
}

fn validate_ring(index: usize, ring: &Ring) -> Result<()> {
    if ring.len() < MIN_RING_LEN {
        return Err(GeometryError::RingTooShort {
            ring: index,
            len: ring.len(),
        });
    }
    if let Some(position) = ring.coordinates().iter().position(|c| !c.is_finite()) {
        return Err(GeometryError::NonFiniteCoordinate {
            ring: index,
            index: position,
        });
    }
    if !ring.is_closed() {
        return Err(GeometryError::RingNotClosed { ring: index });
    }
    Ok(())
}
