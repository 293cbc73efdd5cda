use std::sync::Arc;

use log::{debug, error, info, warn};
use parking_lot::Mutex;

use crate::api::ApiClient;
use crate::async_runtime::spawn;
use crate::error::ViewerError;
use crate::filter::Filter;
use crate::layer::popup::format_f64;
use crate::layer::{DataLayer, LayerId, TileLayerConfig};
use crate::port::{MapPort, Notification};
use crate::view::MapView;

/// Text of the notification shown when the selection has no polygons.
pub const NO_DATA_MESSAGE: &str = "No data found for this selection.";

/// Wires the page actions to the backend and keeps track of the displayed data layer.
///
/// Actions are fire-and-forget: [`load_data`](Self::load_data) and [`visualize`](Self::visualize)
/// spawn the requests and return immediately. Nothing is cancelled when an action is triggered
/// again before the previous one completes, and responses are applied in the order they arrive.
pub struct MapViewController<P, A> {
    port: Arc<P>,
    api: Arc<A>,
    active_layer: Arc<Mutex<Option<LayerId>>>,
}

impl<P, A> Clone for MapViewController<P, A> {
    fn clone(&self) -> Self {
        Self {
            port: self.port.clone(),
            api: self.api.clone(),
            active_layer: self.active_layer.clone(),
        }
    }
}

impl<P, A> MapViewController<P, A>
where
    P: MapPort + 'static,
    A: ApiClient + 'static,
{
    /// Creates a controller with no data layer.
    pub fn new(port: Arc<P>, api: Arc<A>) -> Self {
        Self {
            port,
            api,
            active_layer: Arc::new(Mutex::new(None)),
        }
    }

    /// Sets the initial viewport and adds the base map.
    pub fn init(&self, view: MapView, tile_layer: &TileLayerConfig) {
        debug!(
            "Initializing map at {:?} with tiles from {}",
            view,
            tile_layer.url_template()
        );
        self.port.set_view(view);
        self.port.add_tile_layer(tile_layer);
    }

    /// Currently displayed data layer.
    pub fn active_layer(&self) -> Option<LayerId> {
        *self.active_layer.lock()
    }

    /// Port the controller renders to.
    pub fn port(&self) -> &Arc<P> {
        &self.port
    }

    /// Asks the backend to import the dataset and notifies the user about the outcome.
    pub fn load_data(&self) {
        info!("Requesting data import");
        let controller = self.clone();
        spawn(async move {
            controller.complete_load_data().await;
        });
    }

    /// Requests the total area and the polygons of the selection.
    ///
    /// The two requests are independent: the area display and the map are updated by whichever
    /// response arrives, and a failure of one does not affect the other.
    pub fn visualize(&self, filter: Filter) {
        info!("Visualizing selection `{filter}`");

        let controller = self.clone();
        let stats_filter = filter.clone();
        spawn(async move {
            if let Err(err) = controller.refresh_stats(&stats_filter).await {
                warn!("Failed to load stats for `{stats_filter}`: {err}");
            }
        });

        let controller = self.clone();
        spawn(async move {
            if let Err(err) = controller.refresh_data(&filter).await {
                error!("Failed to load data for `{filter}`: {err}");
            }
        });
    }

    /// Performs the import request and shows the resulting notification, which is also returned.
    pub async fn complete_load_data(&self) -> Notification {
        let notification = match self.api.load_data().await {
            Ok(response) if response.is_success() => Notification::info(response.message),
            Ok(response) => Notification::error(format!("Error: {}", response.message)),
            Err(err) => Notification::error(format!("Network error: {err}")),
        };

        info!("Data import finished: {}", notification.text);
        self.port.show_notification(&notification);
        notification
    }

    /// Loads the total area of the selection into the area display.
    pub async fn refresh_stats(&self, filter: &Filter) -> Result<(), ViewerError> {
        let stats = self.api.stats(filter).await?;
        self.port.set_area_text(&format!("{} ha", format_f64(stats.area_ha)));
        Ok(())
    }

    /// Loads the polygons of the selection and replaces the displayed data layer with them.
    ///
    /// On failure the previous layer stays on the map.
    pub async fn refresh_data(&self, filter: &Filter) -> Result<(), ViewerError> {
        let collection = self.api.data(filter).await?;
        let layer = DataLayer::from_collection(collection);
        let layer_id = self.replace_active_layer(&layer);
        info!(
            "Showing {} features for `{filter}` as layer {}",
            layer.features().len(),
            layer_id.get()
        );

        if layer.is_empty() {
            self.port.show_notification(&Notification::info(NO_DATA_MESSAGE));
            return Ok(());
        }

        match layer.bounds() {
            Some(bounds) => self.port.fit_bounds(bounds),
            None => debug!("Features of `{filter}` have no geometry, keeping the viewport"),
        }

        Ok(())
    }

    fn replace_active_layer(&self, layer: &DataLayer) -> LayerId {
        let mut active_layer = self.active_layer.lock();
        if let Some(previous) = active_layer.take() {
            self.port.remove_layer(previous);
        }

        let layer_id = self.port.add_geojson_layer(layer);
        for (index, feature) in layer.features().iter().enumerate() {
            if let Some(content) = &feature.popup {
                self.port.bind_popup(layer_id, index, content);
                self.port.bind_tooltip(layer_id, index, content);
            }
        }

        *active_layer = Some(layer_id);
        layer_id
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::api::{LoadDataResponse, StatsResponse};
    use crate::bounding_rect::BoundingRect;
    use crate::tests::{
        feature_collection, init_logger, PortCall, RecordingPort, ScriptedApi,
    };
    use assert_matches::assert_matches;
    use serde_json::json;

    fn controller() -> MapViewController<RecordingPort, ScriptedApi> {
        init_logger();
        MapViewController::new(
            Arc::new(RecordingPort::default()),
            Arc::new(ScriptedApi::default()),
        )
    }

    fn forest_collection() -> geojson::FeatureCollection {
        feature_collection(json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "geometry": {"type": "Polygon", "coordinates": [[[-6.5, 36.9], [-6.4, 37.0], [-6.5, 36.9]]]},
                    "properties": {"fclass": "forest", "name": "Doñana", "area_ha": 540}
                },
                {
                    "type": "Feature",
                    "geometry": {"type": "Polygon", "coordinates": [[[-5.0, 37.5], [-4.8, 37.7], [-5.0, 37.5]]]}
                }
            ]
        }))
    }

    fn reserve_collection() -> geojson::FeatureCollection {
        feature_collection(json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "geometry": {"type": "Polygon", "coordinates": [[[-3.1, 37.0], [-3.0, 37.1], [-3.1, 37.0]]]},
                    "properties": {"fclass": "nature_reserve"}
                }
            ]
        }))
    }

    fn empty_collection() -> geojson::FeatureCollection {
        feature_collection(json!({"type": "FeatureCollection", "features": []}))
    }

    #[test]
    fn init_sets_view_and_base_map() {
        let controller = controller();
        controller.init(MapView::default(), &TileLayerConfig::default());

        assert_eq!(
            controller.port().calls(),
            vec![
                PortCall::SetView(MapView::default()),
                PortCall::AddTileLayer(TileLayerConfig::default()),
            ]
        );
        assert_eq!(controller.active_layer(), None);
    }

    #[tokio::test]
    async fn load_success_shows_message() {
        let controller = controller();
        controller.api.push_load_data(Ok(LoadDataResponse {
            status: "success".into(),
            message: "Loaded 120 records".into(),
        }));

        let notification = controller.complete_load_data().await;
        assert_eq!(notification, Notification::info("Loaded 120 records"));
        assert_eq!(controller.port().notifications(), vec![notification]);
    }

    #[tokio::test]
    async fn load_failure_status_is_prefixed() {
        let controller = controller();
        controller.api.push_load_data(Ok(LoadDataResponse {
            status: "error".into(),
            message: "bad file".into(),
        }));

        let notification = controller.complete_load_data().await;
        assert_eq!(notification, Notification::error("Error: bad file"));
    }

    #[tokio::test]
    async fn load_transport_failure() {
        let controller = controller();
        controller
            .api
            .push_load_data(Err(ViewerError::Http("connection refused".into())));

        let notification = controller.complete_load_data().await;
        assert_eq!(
            notification,
            Notification::error("Network error: connection refused")
        );
    }

    #[tokio::test]
    async fn stats_update_area_text() {
        let controller = controller();
        controller.api.push_stats(Ok(StatsResponse { area_ha: 540.0 }));
        controller.api.push_stats(Ok(StatsResponse { area_ha: 1520.4 }));
        controller.api.push_stats(Ok(StatsResponse { area_ha: 0.0000001 }));

        controller.refresh_stats(&Filter::Forest).await.unwrap();
        controller.refresh_stats(&Filter::All).await.unwrap();
        controller.refresh_stats(&Filter::NatureReserve).await.unwrap();

        assert_eq!(
            controller.port().calls(),
            vec![
                PortCall::AreaText("540 ha".into()),
                PortCall::AreaText("1520.4 ha".into()),
                PortCall::AreaText("1e-7 ha".into()),
            ]
        );
        assert_eq!(
            controller.api.requests(),
            vec![
                "stats:forest".to_string(),
                "stats:All".to_string(),
                "stats:nature_reserve".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn data_adds_layer_binds_popups_and_fits_bounds() {
        let controller = controller();
        controller.api.push_data(Ok(forest_collection()));

        controller.refresh_data(&Filter::Forest).await.unwrap();

        let layer_id = controller.active_layer().expect("no active layer");
        let content = "<b>Doñana</b><br>Area: 540 ha".to_string();
        assert_eq!(
            controller.port().calls(),
            vec![
                PortCall::AddGeoJsonLayer {
                    id: layer_id,
                    features: 2
                },
                PortCall::BindPopup(layer_id, 0, content.clone()),
                PortCall::BindTooltip(layer_id, 0, content),
                PortCall::FitBounds(BoundingRect::new(-6.5, 36.9, -4.8, 37.7)),
            ]
        );
        assert!(controller.port().notifications().is_empty());
    }

    #[tokio::test]
    async fn second_selection_replaces_the_layer() {
        let controller = controller();
        controller.api.push_data(Ok(forest_collection()));
        controller.api.push_data(Ok(reserve_collection()));

        controller.refresh_data(&Filter::Forest).await.unwrap();
        let first = controller.active_layer().expect("no first layer");
        controller
            .refresh_data(&Filter::NatureReserve)
            .await
            .unwrap();
        let second = controller.active_layer().expect("no second layer");

        assert_ne!(first, second);
        assert_eq!(controller.port().layers_on_map(), vec![second]);
        assert!(controller
            .port()
            .calls()
            .contains(&PortCall::RemoveLayer(first)));
    }

    #[tokio::test]
    async fn empty_result_notifies_and_keeps_viewport() {
        let controller = controller();
        controller.api.push_data(Ok(forest_collection()));
        controller.api.push_data(Ok(empty_collection()));

        controller.refresh_data(&Filter::Forest).await.unwrap();
        controller
            .refresh_data(&Filter::Other("farmland".into()))
            .await
            .unwrap();

        let fits = controller
            .port()
            .calls()
            .into_iter()
            .filter(|call| matches!(call, PortCall::FitBounds(_)))
            .count();
        assert_eq!(fits, 1);
        assert_eq!(
            controller.port().notifications(),
            vec![Notification::info(NO_DATA_MESSAGE)]
        );
        assert_eq!(controller.port().layers_on_map().len(), 1);
    }

    #[tokio::test]
    async fn failed_data_request_keeps_previous_layer() {
        let controller = controller();
        controller.api.push_data(Ok(forest_collection()));
        controller
            .api
            .push_data(Err(ViewerError::Http("connection reset".into())));

        controller.refresh_data(&Filter::Forest).await.unwrap();
        let layer_id = controller.active_layer();

        let result = controller.refresh_data(&Filter::NatureReserve).await;
        assert_matches!(result, Err(ViewerError::Http(_)));
        assert_eq!(controller.active_layer(), layer_id);
        assert_eq!(controller.port().layers_on_map().len(), 1);
        assert!(controller.port().notifications().is_empty());
    }

    #[tokio::test]
    async fn visualize_requests_are_independent() {
        let controller = controller();
        controller
            .api
            .push_stats(Err(ViewerError::Http("timeout".into())));
        controller.api.push_data(Ok(reserve_collection()));

        controller.visualize(Filter::NatureReserve);

        let port = controller.port().clone();
        wait_for(|| port.layers_on_map().len() == 1).await;
        wait_for(|| controller.api.requests().len() == 2).await;

        assert!(!port
            .calls()
            .iter()
            .any(|call| matches!(call, PortCall::AreaText(_))));
        assert!(port.notifications().is_empty());

        let mut requests = controller.api.requests();
        requests.sort();
        assert_eq!(requests, vec!["data:nature_reserve", "stats:nature_reserve"]);
    }

    #[tokio::test]
    async fn load_data_is_fire_and_forget() {
        let controller = controller();
        controller.api.push_load_data(Ok(LoadDataResponse {
            status: "success".into(),
            message: "Loaded 120 records".into(),
        }));

        controller.load_data();

        let port = controller.port().clone();
        wait_for(|| !port.notifications().is_empty()).await;
        assert_eq!(
            port.notifications(),
            vec![Notification::info("Loaded 120 records")]
        );
    }

    async fn wait_for(condition: impl Fn() -> bool) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while !condition() {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("condition was not met in time");
    }
}
