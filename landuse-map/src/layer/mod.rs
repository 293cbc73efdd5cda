//! Layers shown on the map: the tile base map and the land use data layer.

pub mod attribution;
mod data_layer;
pub mod popup;
pub mod style;
mod tile_layer;

pub use data_layer::{DataLayer, StyledFeature};
pub use style::FeatureStyle;
pub use tile_layer::TileLayerConfig;

/// Handle of a layer added to the map through a [`MapPort`](crate::port::MapPort).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(u64);

impl LayerId {
    /// Wraps a raw layer identifier issued by a port implementation.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw identifier.
    pub fn get(&self) -> u64 {
        self.0
    }
}
