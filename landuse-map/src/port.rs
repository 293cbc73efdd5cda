//! Rendering port: everything the controller needs from the page and the map library.

use maybe_sync::{MaybeSend, MaybeSync};

use crate::bounding_rect::BoundingRect;
use crate::layer::{DataLayer, LayerId, TileLayerConfig};
use crate::view::MapView;

/// Severity of a [`Notification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Outcome of a successful action or an empty result.
    Info,
    /// Failure reported by the backend or the network.
    Error,
}

/// Message presented to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Severity.
    pub level: NotificationLevel,
    /// Exact text shown to the user.
    pub text: String,
}

impl Notification {
    /// Informational notification.
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            text: text.into(),
        }
    }

    /// Error notification.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            text: text.into(),
        }
    }
}

/// Map canvas and page surface driven by the [`MapViewController`](crate::MapViewController).
///
/// All methods take `&self` because completion handlers of concurrent requests share the port.
/// Implementations keep their mutable state behind interior mutability.
pub trait MapPort: MaybeSend + MaybeSync {
    /// Moves the viewport.
    fn set_view(&self, view: MapView);
    /// Adds the base map.
    fn add_tile_layer(&self, layer: &TileLayerConfig);
    /// Adds a styled GeoJSON layer to the map and returns its handle.
    fn add_geojson_layer(&self, layer: &DataLayer) -> LayerId;
    /// Removes a layer previously returned by [`MapPort::add_geojson_layer`].
    fn remove_layer(&self, layer: LayerId);
    /// Moves and zooms the viewport so that the rectangle is fully visible.
    fn fit_bounds(&self, bounds: BoundingRect);
    /// Binds a popup opened by clicking the feature with the given index in the layer.
    fn bind_popup(&self, layer: LayerId, feature_index: usize, content: &str);
    /// Binds a tooltip shown while hovering the feature with the given index in the layer.
    fn bind_tooltip(&self, layer: LayerId, feature_index: usize, content: &str);
    /// Presents a message to the user.
    fn show_notification(&self, notification: &Notification);
    /// Replaces the text of the total area display.
    fn set_area_text(&self, text: &str);
}
