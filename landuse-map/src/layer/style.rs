//! Styling of land use polygons by their `fclass` property.

use serde::Serialize;

use crate::Color;

/// Land use class of forests.
pub const FCLASS_FOREST: &str = "forest";
/// Land use class of nature reserves.
pub const FCLASS_NATURE_RESERVE: &str = "nature_reserve";

/// Path style of a polygon feature.
///
/// Serializes into the path options object understood by the map library (`color`, `fillOpacity`,
/// `weight`). Options set to `None` are omitted so the library defaults apply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureStyle {
    /// Color of the outline. The map library derives the fill color from it.
    #[serde(rename = "color")]
    pub stroke_color: Color,
    /// Opacity of the inner area of the polygon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
    /// Width of the outline in pixels.
    #[serde(rename = "weight", skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<f64>,
}

impl FeatureStyle {
    /// Creates a new instance with library default fill and weight.
    pub fn new(stroke_color: Color) -> Self {
        Self {
            stroke_color,
            fill_opacity: None,
            stroke_weight: None,
        }
    }

    /// Creates a new instance from a copy of the current, but with the given fill opacity.
    pub fn with_fill_opacity(&self, fill_opacity: f64) -> Self {
        Self {
            fill_opacity: Some(fill_opacity),
            ..*self
        }
    }

    /// Creates a new instance from a copy of the current, but with the given stroke weight.
    pub fn with_stroke_weight(&self, stroke_weight: f64) -> Self {
        Self {
            stroke_weight: Some(stroke_weight),
            ..*self
        }
    }

    /// Style for a feature of the given land use class.
    pub fn for_class(fclass: Option<&str>) -> Self {
        match fclass {
            Some(FCLASS_FOREST) => Self::new(Color::FOREST_GREEN)
                .with_fill_opacity(0.6)
                .with_stroke_weight(1.0),
            Some(FCLASS_NATURE_RESERVE) => Self::new(Color::LIME_GREEN)
                .with_fill_opacity(0.6)
                .with_stroke_weight(1.0),
            _ => Self::new(Color::BLUE),
        }
    }

    /// Style for a GeoJSON feature, chosen by its `fclass` property.
    pub fn for_feature(feature: &geojson::Feature) -> Self {
        Self::for_class(
            feature
                .property("fclass")
                .and_then(serde_json::Value::as_str),
        )
    }
}
