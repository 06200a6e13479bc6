use geo::Point;
use serde::Deserialize;

/// A named physical location, the unit being routed between.
///
/// Landmarks are supplied by the caller in a fixed order; the graph builder
/// assigns node ids by position. Immutable after creation.
#[derive(Debug, Clone, Deserialize)]
pub struct Landmark {
    pub lat: f64,
    pub lon: f64,
    pub name: String,
}

impl Landmark {
    pub fn new(lat: f64, lon: f64, name: impl Into<String>) -> Self {
        Self {
            lat,
            lon,
            name: name.into(),
        }
    }

    /// Coordinates as an (x = lon, y = lat) point.
    pub fn geometry(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}
