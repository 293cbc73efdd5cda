//! Viewer configuration.

use serde::{Deserialize, Serialize};

use crate::error::ViewerError;
use crate::layer::TileLayerConfig;
use crate::platform::ApiClientImpl;
use crate::view::MapView;

/// Identifiers of the page elements the viewer is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomConfig {
    /// Container of the map canvas.
    pub map_container: String,
    /// Button triggering the data import.
    pub load_button: String,
    /// Button triggering the visualization of the selection.
    pub visualize_button: String,
    /// `name` attribute shared by the filter radio inputs.
    pub filter_input_name: String,
    /// Element showing the total area of the selection.
    pub area_display: String,
}

impl Default for DomConfig {
    fn default() -> Self {
        Self {
            map_container: "map".into(),
            load_button: "btn-load".into(),
            visualize_button: "btn-visualize".into(),
            filter_input_name: "filter".into(),
            area_display: "area-display".into(),
        }
    }
}

/// Complete configuration of the viewer. Every field has a default, so any subset of the fields
/// can be given in JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Base URL of the backend. Empty means the origin of the page.
    pub api_base_url: String,
    /// Viewport shown on startup.
    pub initial_view: MapView,
    /// Base map.
    pub tile_layer: TileLayerConfig,
    /// Page elements.
    pub dom: DomConfig,
}

impl ViewerConfig {
    /// Parses the configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ViewerError> {
        serde_json::from_str(json).map_err(|err| ViewerError::InvalidConfig(err.to_string()))
    }

    /// Creates the backend client of the current platform.
    pub fn api_client(&self) -> Result<ApiClientImpl, ViewerError> {
        ApiClientImpl::new(self.api_base_url.clone())
    }
}
