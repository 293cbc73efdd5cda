//! Landuse map is the client side of a small web GIS showing land use polygons (forests and nature
//! reserves) over an OpenStreetMap base map.
//!
//! The backend exposes three endpoints: one importing the dataset into its database, one returning
//! the total area of a selection and one returning the polygons of the selection as a GeoJSON
//! feature collection. This crate talks to them through the [`ApiClient`](api::ApiClient) trait
//! and draws the results through the [`MapPort`](port::MapPort) trait.
//!
//! # Main components
//!
//! * [`MapViewController`] reacts to the page actions. It spawns the requests and, once they
//!   complete, replaces the displayed data layer, updates the area display or notifies the user.
//! * [`layer`] turns the GeoJSON features into a [`DataLayer`](layer::DataLayer): each feature
//!   gets a style based on its land use class and a popup with its name and area.
//! * [`platform`] holds the implementations for the current target. Natively the backend is reached
//!   with `reqwest`. In the browser the `fetch` API is used and the map is drawn with Leaflet, which
//!   must be loaded by the page before the viewer is mounted.
//!
//! In the browser the whole application is started with `Viewer::mount_from_page`:
//!
//! ```ignore
//! let viewer = landuse_map::platform::web::Viewer::mount_from_page()?;
//! ```

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod api;
pub(crate) mod async_runtime;
mod bounding_rect;
mod color;
pub mod config;
mod controller;
pub mod error;
mod filter;
pub mod layer;
pub mod platform;
pub mod port;
mod view;

#[cfg(test)]
mod tests;

pub use bounding_rect::BoundingRect;
pub use color::Color;
pub use config::ViewerConfig;
pub use controller::{MapViewController, NO_DATA_MESSAGE};
pub use error::ViewerError;
pub use filter::Filter;
pub use view::{GeoPoint, MapView};

// Reexport geojson
pub use geojson;
