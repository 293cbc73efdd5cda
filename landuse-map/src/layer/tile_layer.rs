use serde::{Deserialize, Serialize};

use crate::layer::attribution::Attribution;

/// Base map made of raster tiles loaded by the map library from a URL template.
///
/// The template uses the usual slippy map placeholders: `{s}` for the server subdomain, `{z}` for
/// the zoom level and `{x}`/`{y}` for the tile column and row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileLayerConfig {
    url_template: String,
    max_zoom: u8,
    attribution: Attribution,
}

impl Default for TileLayerConfig {
    fn default() -> Self {
        Self::new(
            "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            19,
            Attribution::default(),
        )
    }
}

impl TileLayerConfig {
    /// Creates a new tile layer description.
    pub fn new(url_template: impl Into<String>, max_zoom: u8, attribution: Attribution) -> Self {
        Self {
            url_template: url_template.into(),
            max_zoom,
            attribution,
        }
    }

    /// URL template of the tiles.
    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    /// Maximum zoom level the tile server provides.
    pub fn max_zoom(&self) -> u8 {
        self.max_zoom
    }

    /// Credits of the tile source.
    pub fn attribution(&self) -> &Attribution {
        &self.attribution
    }
}
