//! Fixtures shared by the unit tests of the crate.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue};
use parking_lot::Mutex;

use crate::api::{ApiClient, LoadDataResponse, StatsResponse};
use crate::bounding_rect::BoundingRect;
use crate::error::ViewerError;
use crate::filter::Filter;
use crate::layer::{DataLayer, LayerId, TileLayerConfig};
use crate::port::{MapPort, Notification};
use crate::view::MapView;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn feature(geometry: Option<Geometry>, properties: Option<JsonObject>) -> Feature {
    Feature {
        bbox: None,
        geometry,
        id: None,
        properties,
        foreign_members: None,
    }
}

pub fn properties(value: JsonValue) -> JsonObject {
    match value {
        JsonValue::Object(object) => object,
        other => panic!("properties must be an object, got {other}"),
    }
}

pub fn feature_collection(value: JsonValue) -> FeatureCollection {
    serde_json::from_value(value).expect("invalid feature collection")
}

/// Every call made to [`RecordingPort`].
#[derive(Debug, Clone, PartialEq)]
pub enum PortCall {
    SetView(MapView),
    AddTileLayer(TileLayerConfig),
    AddGeoJsonLayer { id: LayerId, features: usize },
    RemoveLayer(LayerId),
    FitBounds(BoundingRect),
    BindPopup(LayerId, usize, String),
    BindTooltip(LayerId, usize, String),
    Notification(Notification),
    AreaText(String),
}

/// Port that records the calls and tracks which layers are on the map.
#[derive(Debug, Default)]
pub struct RecordingPort {
    calls: Mutex<Vec<PortCall>>,
    layers: Mutex<Vec<LayerId>>,
    next_id: AtomicU64,
}

impl RecordingPort {
    pub fn calls(&self) -> Vec<PortCall> {
        self.calls.lock().clone()
    }

    pub fn layers_on_map(&self) -> Vec<LayerId> {
        self.layers.lock().clone()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                PortCall::Notification(notification) => Some(notification.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: PortCall) {
        self.calls.lock().push(call);
    }
}

impl MapPort for RecordingPort {
    fn set_view(&self, view: MapView) {
        self.record(PortCall::SetView(view));
    }

    fn add_tile_layer(&self, layer: &TileLayerConfig) {
        self.record(PortCall::AddTileLayer(layer.clone()));
    }

    fn add_geojson_layer(&self, layer: &DataLayer) -> LayerId {
        let id = LayerId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.layers.lock().push(id);
        self.record(PortCall::AddGeoJsonLayer {
            id,
            features: layer.features().len(),
        });
        id
    }

    fn remove_layer(&self, layer: LayerId) {
        self.layers.lock().retain(|id| *id != layer);
        self.record(PortCall::RemoveLayer(layer));
    }

    fn fit_bounds(&self, bounds: BoundingRect) {
        self.record(PortCall::FitBounds(bounds));
    }

    fn bind_popup(&self, layer: LayerId, feature_index: usize, content: &str) {
        self.record(PortCall::BindPopup(layer, feature_index, content.to_string()));
    }

    fn bind_tooltip(&self, layer: LayerId, feature_index: usize, content: &str) {
        self.record(PortCall::BindTooltip(layer, feature_index, content.to_string()));
    }

    fn show_notification(&self, notification: &Notification) {
        self.record(PortCall::Notification(notification.clone()));
    }

    fn set_area_text(&self, text: &str) {
        self.record(PortCall::AreaText(text.to_string()));
    }
}

/// Api client answering with queued responses. An empty queue is a transport error.
#[derive(Debug, Default)]
pub struct ScriptedApi {
    load_data: Mutex<VecDeque<Result<LoadDataResponse, ViewerError>>>,
    stats: Mutex<VecDeque<Result<StatsResponse, ViewerError>>>,
    data: Mutex<VecDeque<Result<FeatureCollection, ViewerError>>>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedApi {
    pub fn push_load_data(&self, response: Result<LoadDataResponse, ViewerError>) {
        self.load_data.lock().push_back(response);
    }

    pub fn push_stats(&self, response: Result<StatsResponse, ViewerError>) {
        self.stats.lock().push_back(response);
    }

    pub fn push_data(&self, response: Result<FeatureCollection, ViewerError>) {
        self.data.lock().push_back(response);
    }

    /// Requests made so far as `endpoint:filter`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    fn next<T>(&self, queue: &Mutex<VecDeque<Result<T, ViewerError>>>, request: String) -> Result<T, ViewerError> {
        self.requests.lock().push(request);
        queue
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(ViewerError::Http("no scripted response".into())))
    }
}

#[async_trait]
impl ApiClient for ScriptedApi {
    async fn load_data(&self) -> Result<LoadDataResponse, ViewerError> {
        self.next(&self.load_data, "load_data".to_string())
    }

    async fn stats(&self, filter: &Filter) -> Result<StatsResponse, ViewerError> {
        self.next(&self.stats, format!("stats:{filter}"))
    }

    async fn data(&self, filter: &Filter) -> Result<FeatureCollection, ViewerError> {
        self.next(&self.data, format!("data:{filter}"))
    }
}
