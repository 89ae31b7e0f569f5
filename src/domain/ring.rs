use super::Coordinate;
use serde::{Deserialize, Serialize};

/// Minimum length of a well-formed ring: three distinct vertices plus the
/// closing duplicate
pub const MIN_RING_LEN: usize = 4;

/// Closed, ordered sequence of coordinates forming one boundary loop
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ring {
    coordinates: Vec<Coordinate>,
}

impl Ring {
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        Self { coordinates }
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    pub fn into_coordinates(self) -> Vec<Coordinate> {
        self.coordinates
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    pub fn first(&self) -> Option<Coordinate> {
        self.coordinates.first().copied()
    }

    pub fn last(&self) -> Option<Coordinate> {
        self.coordinates.last().copied()
    }

    /// True when the ring has at least two coordinates and `first == last`
    pub fn is_closed(&self) -> bool {
        self.coordinates.len() >= 2 && self.coordinates.first() == self.coordinates.last()
    }

    /// The distinct vertices of the ring: every coordinate except the
    /// closing duplicate
    pub fn vertices(&self) -> &[Coordinate] {
        if self.is_closed() {
            &self.coordinates[..self.coordinates.len() - 1]
        } else {
            &self.coordinates
        }
    }

    /// Number of pairwise distinct vertices
    pub fn distinct_vertex_count(&self) -> usize {
        let vertices = self.vertices();
        let mut distinct: Vec<Coordinate> = Vec::with_capacity(vertices.len());
        for &v in vertices {
            if !distinct.contains(&v) {
                distinct.push(v);
            }
        }
        distinct.len()
    }

    /// Consecutive coordinate pairs, in ring order
    pub fn edges(&self) -> impl Iterator<Item = (Coordinate, Coordinate)> + '_ {
        self.coordinates.windows(2).map(|w| (w[0], w[1]))
    }

    /// Append the first coordinate if the ring is not already closed
    pub(crate) fn close(mut coordinates: Vec<Coordinate>) -> Self {
        if let (Some(&first), Some(&last)) = (coordinates.first(), coordinates.last())
            && first != last
        {
            coordinates.push(first);
        }
        Self { coordinates }
    }
}

impl From<Vec<Coordinate>> for Ring {
    fn from(coordinates: Vec<Coordinate>) -> Self {
        Self::new(coordinates)
    }
}

impl From<Ring> for Vec<Coordinate> {
    fn from(ring: Ring) -> Self {
        ring.coordinates
    }
}
