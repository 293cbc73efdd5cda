use serde::{Deserialize, Serialize};

/// Geographic point in WGS84 coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl GeoPoint {
    /// Creates a new point from latitude and longitude.
    pub const fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Position of the map viewport: the point displayed in the center and the zoom level.
///
/// Missing fields of a serialized view take the values of the default view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapView {
    center: GeoPoint,
    zoom: f64,
}

impl Default for MapView {
    /// Andalucía as a whole.
    fn default() -> Self {
        Self::new(GeoPoint::latlon(37.3891, -5.9845), 8.0)
    }
}

impl MapView {
    /// Creates a new view.
    pub const fn new(center: GeoPoint, zoom: f64) -> Self {
        Self { center, zoom }
    }

    /// Point in the center of the viewport.
    pub fn center(&self) -> GeoPoint {
        self.center
    }

    /// Zoom level of the viewport.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }
}
