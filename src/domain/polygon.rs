use super::validation::{Validation, validate_polygon};
use super::{Coordinate, Ring};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// One outer ring plus zero or more hole rings
///
/// A polygon is an immutable value. Every algorithm borrows it and returns a
/// fresh polygon or coordinate. On the wire it is the GeoJSON coordinate
/// array: a list of rings, outer ring first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Ring>", into = "Vec<Ring>")]
pub struct Polygon {
    outer: Ring,
    inner: Vec<Ring>,
}

impl Polygon {
    /// Build a polygon from raw ring data without validation
    ///
    /// The first ring is the outer boundary, the rest are holes. An empty
    /// list gives a polygon with an empty outer ring.
    pub fn new(rings: Vec<Vec<Coordinate>>) -> Self {
        Self::from_rings(rings.into_iter().map(Ring::new).collect())
    }

    /// Build a polygon, enforcing the ring invariants in strict mode
    pub fn try_new(rings: Vec<Vec<Coordinate>>, validation: Validation) -> Result<Self> {
        let polygon = Self::new(rings);
        if validation == Validation::Strict {
            polygon.validate()?;
        }
        Ok(polygon)
    }

    pub fn from_rings(rings: Vec<Ring>) -> Self {
        let mut rings = rings.into_iter();
        let outer = rings.next().unwrap_or_default();
        Self {
            outer,
            inner: rings.collect(),
        }
    }

    pub fn outer_ring(&self) -> &Ring {
        &self.outer
    }

    pub fn inner_rings(&self) -> &[Ring] {
        &self.inner
    }

    /// All rings, outer ring first
    pub fn rings(&self) -> impl Iterator<Item = &Ring> + '_ {
        std::iter::once(&self.outer).chain(self.inner.iter())
    }

    /// Number of rings; a polygon built from no ring data has zero
    pub fn ring_count(&self) -> usize {
        if self.outer.is_empty() && self.inner.is_empty() {
            0
        } else {
            1 + self.inner.len()
        }
    }

    /// Raw ring data, outer ring first
    pub fn coordinates(&self) -> Vec<Vec<Coordinate>> {
        self.rings().map(|r| r.coordinates().to_vec()).collect()
    }

    /// Total number of coordinates across all rings
    pub fn coordinate_count(&self) -> usize {
        self.rings().map(Ring::len).sum()
    }

    /// Number of pairwise distinct vertices across all rings together
    pub fn distinct_vertex_count(&self) -> usize {
        let mut distinct: Vec<Coordinate> = Vec::new();
        for &v in self.rings().flat_map(Ring::vertices) {
            if !distinct.contains(&v) {
                distinct.push(v);
            }
        }
        distinct.len()
    }

    pub fn validate(&self) -> Result<()> {
        validate_polygon(self)
    }

    /// Apply `f` to every ring, keeping ring order
    pub(crate) fn map_rings(&self, f: impl Fn(&Ring) -> Ring) -> Polygon {
        if self.ring_count() == 0 {
            return Polygon::default();
        }
        Polygon {
            outer: f(&self.outer),
            inner: self.inner.iter().map(f).collect(),
        }
    }
}

impl From<Vec<Vec<Coordinate>>> for Polygon {
    fn from(rings: Vec<Vec<Coordinate>>) -> Self {
        Polygon::new(rings)
    }
}

impl From<Vec<Ring>> for Polygon {
    fn from(rings: Vec<Ring>) -> Self {
        Polygon::from_rings(rings)
    }
}

impl From<Polygon> for Vec<Ring> {
    fn from(polygon: Polygon) -> Self {
        if polygon.ring_count() == 0 {
            return Vec::new();
        }
        let mut rings = Vec::with_capacity(1 + polygon.inner.len());
        rings.push(polygon.outer);
        rings.extend(polygon.inner);
        rings
    }
}
