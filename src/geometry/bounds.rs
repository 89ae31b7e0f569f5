use crate::domain::Coordinate;

/// Axis-aligned bounding box in degree space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Bounds {
    /// Create bounds from a set of coordinates
    pub fn from_coordinates(coordinates: &[Coordinate]) -> Option<Self> {
        let (first, rest) = coordinates.split_first()?;

        let mut bounds = Self {
            min_lat: first.latitude,
            max_lat: first.latitude,
            min_lon: first.longitude,
            max_lon: first.longitude,
        };
        bounds.expand(rest);

        Some(bounds)
    }

    /// Expand bounds to include another set of coordinates
    pub fn expand(&mut self, coordinates: &[Coordinate]) {
        for c in coordinates {
            self.min_lat = self.min_lat.min(c.latitude);
            self.max_lat = self.max_lat.max(c.latitude);
            self.min_lon = self.min_lon.min(c.longitude);
            self.max_lon = self.max_lon.max(c.longitude);
        }
    }

    /// Bounds over several coordinate slices, `None` if all are empty
    pub fn from_slices<'a>(slices: impl IntoIterator<Item = &'a [Coordinate]>) -> Option<Self> {
        let mut bounds: Option<Bounds> = None;
        for slice in slices {
            match bounds.as_mut() {
                Some(b) => b.expand(slice),
                None => bounds = Bounds::from_coordinates(slice),
            }
        }
        bounds
    }

    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    /// Inclusive containment test
    pub fn contains(&self, c: Coordinate) -> bool {
        c.latitude >= self.min_lat
            && c.latitude <= self.max_lat
            && c.longitude >= self.min_lon
            && c.longitude <= self.max_lon
    }
}
