/// A geographic position: latitude and longitude in degrees, depth in
/// kilometers (positive down).
///
/// Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    lat: f64,
    lon: f64,
    depth: f64,
}

impl Location {
    /// Creates a new location.
    #[must_use]
    pub fn new(lat: f64, lon: f64, depth: f64) -> Self {
        Self { lat, lon, depth }
    }

    /// Latitude in degrees.
    #[must_use]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    #[must_use]
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Depth in kilometers, positive down.
    #[must_use]
    pub fn depth(&self) -> f64 {
        self.depth
    }
}
