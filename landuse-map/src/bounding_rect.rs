use geojson::{Feature, Geometry, Value};
use serde::{Deserialize, Serialize};

use crate::view::GeoPoint;

/// Axis-aligned geographic rectangle. `x` is longitude, `y` is latitude.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingRect {
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
}

impl BoundingRect {
    /// Creates a new rectangle.
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Minimum longitude.
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    /// Maximum longitude.
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Minimum latitude.
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    /// Maximum latitude.
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// South-west corner.
    pub fn south_west(&self) -> GeoPoint {
        GeoPoint::latlon(self.y_min, self.x_min)
    }

    /// North-east corner.
    pub fn north_east(&self) -> GeoPoint {
        GeoPoint::latlon(self.y_max, self.x_max)
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            y_min: self.y_min.min(other.y_min),
            x_max: self.x_max.max(other.x_max),
            y_max: self.y_max.max(other.y_max),
        }
    }

    /// Bounding rect of a set of GeoJSON positions (`[lon, lat, ..]`). Positions with less than two
    /// coordinates are skipped. Returns `None` if no valid position is given.
    pub fn from_positions<'a>(positions: impl IntoIterator<Item = &'a Vec<f64>>) -> Option<Self> {
        let mut points = positions.into_iter().filter_map(|position| {
            let x = *position.first()?;
            let y = *position.get(1)?;
            Some((x, y))
        });

        let (x, y) = points.next()?;
        let mut rect = Self::new(x, y, x, y);
        for (x, y) in points {
            rect.x_min = rect.x_min.min(x);
            rect.y_min = rect.y_min.min(y);
            rect.x_max = rect.x_max.max(x);
            rect.y_max = rect.y_max.max(y);
        }

        Some(rect)
    }

    /// Bounding rect of a GeoJSON geometry.
    pub fn from_geometry(geometry: &Geometry) -> Option<Self> {
        match &geometry.value {
            Value::Point(position) => Self::from_positions([position]),
            Value::MultiPoint(positions) | Value::LineString(positions) => {
                Self::from_positions(positions)
            }
            Value::MultiLineString(lines) | Value::Polygon(lines) => {
                Self::from_positions(lines.iter().flatten())
            }
            Value::MultiPolygon(polygons) => {
                Self::from_positions(polygons.iter().flatten().flatten())
            }
            Value::GeometryCollection(geometries) => Self::merge_all(
                geometries.iter().filter_map(Self::from_geometry),
            ),
        }
    }

    /// Bounding rect of all features that have a geometry.
    pub fn from_features<'a>(features: impl IntoIterator<Item = &'a Feature>) -> Option<Self> {
        Self::merge_all(
            features
                .into_iter()
                .filter_map(|feature| feature.geometry.as_ref())
                .filter_map(Self::from_geometry),
        )
    }

    fn merge_all(rects: impl Iterator<Item = Self>) -> Option<Self> {
        rects.reduce(|acc, rect| acc.merge(rect))
    }
}
