//! [`MapPort`] backed by the Leaflet library loaded on the page.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::bounding_rect::BoundingRect;
use crate::error::ViewerError;
use crate::layer::{DataLayer, FeatureStyle, LayerId, StyledFeature, TileLayerConfig};
use crate::port::{MapPort, Notification, NotificationLevel};
use crate::view::{GeoPoint, MapView};

#[wasm_bindgen]
extern "C" {
    /// Leaflet `L.Map`.
    pub type LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn create_map(container_id: &str) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64);

    #[wasm_bindgen(method, js_name = fitBounds)]
    fn fit_bounds(this: &LeafletMap, bounds: &JsValue);

    #[wasm_bindgen(method, js_name = removeLayer)]
    fn remove_layer(this: &LeafletMap, layer: &Layer);

    /// Leaflet `L.Layer`.
    pub type Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Layer, map: &LeafletMap);

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Layer, content: &str);

    #[wasm_bindgen(method, js_name = bindTooltip)]
    fn bind_tooltip(this: &Layer, content: &str);

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(catch, js_namespace = L, js_name = geoJSON)]
    fn geo_json(data: &JsValue, options: &JsValue) -> Result<Layer, JsValue>;

    /// Leaflet `L.FeatureGroup`.
    #[wasm_bindgen(extends = Layer)]
    pub type FeatureGroup;

    #[wasm_bindgen(js_namespace = L, js_name = featureGroup)]
    fn feature_group() -> FeatureGroup;

    #[wasm_bindgen(method, js_name = addLayer)]
    fn add_layer(this: &FeatureGroup, layer: &Layer);
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileLayerOptions {
    max_zoom: u8,
    attribution: String,
}

#[derive(Serialize)]
struct GeoJsonOptions {
    style: FeatureStyle,
}

/// Data layer on the map: the group added to the map and one sublayer per feature, in feature
/// order. Features that failed to convert have no sublayer.
struct LayerEntry {
    group: FeatureGroup,
    features: Vec<Option<Layer>>,
}

/// Rendering port drawing on a Leaflet map and notifying the user with `window.alert`.
pub struct LeafletPort {
    map: LeafletMap,
    area_display_id: String,
    layers: RefCell<HashMap<LayerId, LayerEntry>>,
    next_layer_id: Cell<u64>,
}

impl LeafletPort {
    /// Creates the Leaflet map in the container with the given id. The text of the
    /// `area_display_id` element is replaced by [`MapPort::set_area_text`].
    pub fn new(container_id: &str, area_display_id: &str) -> Result<Self, ViewerError> {
        let map = create_map(container_id)?;
        Ok(Self {
            map,
            area_display_id: area_display_id.to_string(),
            layers: RefCell::default(),
            next_layer_id: Cell::new(0),
        })
    }

    fn feature_layer(feature: &StyledFeature) -> Result<Layer, ViewerError> {
        let serializer = Serializer::json_compatible();
        let data = feature
            .feature
            .serialize(&serializer)
            .map_err(|err| ViewerError::Wasm(Some(err.to_string())))?;
        let options = to_js(&GeoJsonOptions {
            style: feature.style,
        })?;

        Ok(geo_json(&data, &options)?)
    }

    fn with_feature(&self, layer: LayerId, feature_index: usize, f: impl FnOnce(&Layer)) {
        let layers = self.layers.borrow();
        match layers
            .get(&layer)
            .and_then(|entry| entry.features.get(feature_index))
        {
            Some(Some(feature_layer)) => f(feature_layer),
            _ => log::warn!(
                "Feature {feature_index} of layer {} is not on the map",
                layer.get()
            ),
        }
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, ViewerError> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|err| ViewerError::Wasm(Some(err.to_string())))
}

fn latlng(point: GeoPoint) -> [f64; 2] {
    [point.lat, point.lon]
}

impl MapPort for LeafletPort {
    fn set_view(&self, view: MapView) {
        match to_js(&latlng(view.center())) {
            Ok(center) => self.map.set_view(&center, view.zoom()),
            Err(err) => log::error!("Failed to set map view: {err}"),
        }
    }

    fn add_tile_layer(&self, layer: &TileLayerConfig) {
        let options = TileLayerOptions {
            max_zoom: layer.max_zoom(),
            attribution: layer.attribution().to_html(),
        };

        match to_js(&options) {
            Ok(options) => tile_layer(layer.url_template(), &options).add_to(&self.map),
            Err(err) => log::error!("Failed to add tile layer: {err}"),
        }
    }

    fn add_geojson_layer(&self, layer: &DataLayer) -> LayerId {
        let group = feature_group();
        let features = layer
            .features()
            .iter()
            .enumerate()
            .map(|(index, feature)| match Self::feature_layer(feature) {
                Ok(feature_layer) => {
                    group.add_layer(&feature_layer);
                    Some(feature_layer)
                }
                Err(err) => {
                    log::warn!("Skipping feature {index}: {err}");
                    None
                }
            })
            .collect();

        group.add_to(&self.map);

        let id = LayerId::new(self.next_layer_id.get());
        self.next_layer_id.set(id.get() + 1);
        self.layers
            .borrow_mut()
            .insert(id, LayerEntry { group, features });

        id
    }

    fn remove_layer(&self, layer: LayerId) {
        match self.layers.borrow_mut().remove(&layer) {
            Some(entry) => self.map.remove_layer(&entry.group),
            None => log::warn!("Layer {} is not on the map", layer.get()),
        }
    }

    fn fit_bounds(&self, bounds: BoundingRect) {
        match to_js(&[latlng(bounds.south_west()), latlng(bounds.north_east())]) {
            Ok(bounds) => self.map.fit_bounds(&bounds),
            Err(err) => log::error!("Failed to fit map bounds: {err}"),
        }
    }

    fn bind_popup(&self, layer: LayerId, feature_index: usize, content: &str) {
        self.with_feature(layer, feature_index, |feature| feature.bind_popup(content));
    }

    fn bind_tooltip(&self, layer: LayerId, feature_index: usize, content: &str) {
        self.with_feature(layer, feature_index, |feature| feature.bind_tooltip(content));
    }

    fn show_notification(&self, notification: &Notification) {
        if notification.level == NotificationLevel::Error {
            log::warn!("{}", notification.text);
        }

        let Some(window) = web_sys::window() else {
            log::error!("Cannot show notification without a window: {}", notification.text);
            return;
        };

        if let Err(err) = window.alert_with_message(&notification.text) {
            log::error!("Failed to show notification: {err:?}");
        }
    }

    fn set_area_text(&self, text: &str) {
        let element = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(&self.area_display_id))
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());

        match element {
            Some(element) => element.set_inner_text(text),
            None => log::error!("Element `{}` not found", self.area_display_id),
        }
    }
}
