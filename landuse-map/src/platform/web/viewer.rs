//! Attaches the controller to the page: the Leaflet map, the action buttons and the filter radios.

use std::sync::Arc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

use crate::config::{DomConfig, ViewerConfig};
use crate::controller::MapViewController;
use crate::error::ViewerError;
use crate::filter::Filter;
use crate::platform::web::{FetchApiClient, LeafletPort};

/// Name of the attribute of the map container that may hold the JSON configuration.
pub const CONFIG_ATTRIBUTE: &str = "data-config";

/// Controller running on a Leaflet map with the `fetch` backend client.
pub type WebController = MapViewController<LeafletPort, FetchApiClient>;

/// Viewer mounted on the page.
pub struct Viewer {
    controller: WebController,
}

impl Viewer {
    /// Reads the configuration from the `data-config` attribute of the default map container and
    /// mounts the viewer. Without the attribute the default configuration is used.
    pub fn mount_from_page() -> Result<Self, ViewerError> {
        let config = read_page_config(&document()?, &DomConfig::default().map_container)?;
        Self::mount(&config)
    }

    /// Creates the map, shows the initial view and the base map, and subscribes to the clicks on
    /// the action buttons. The listeners live as long as the page.
    #[allow(clippy::arc_with_non_send_sync)]
    pub fn mount(config: &ViewerConfig) -> Result<Self, ViewerError> {
        let document = document()?;
        let dom = &config.dom;

        let port = LeafletPort::new(&dom.map_container, &dom.area_display)?;
        let api = config.api_client()?;
        let controller = MapViewController::new(Arc::new(port), Arc::new(api));
        controller.init(config.initial_view, &config.tile_layer);

        let load_controller = controller.clone();
        on_click(&document, &dom.load_button, move || {
            load_controller.load_data()
        })?;

        let visualize_controller = controller.clone();
        let filter_document = document.clone();
        let filter_input_name = dom.filter_input_name.clone();
        on_click(&document, &dom.visualize_button, move || {
            match selected_filter(&filter_document, &filter_input_name) {
                Ok(filter) => visualize_controller.visualize(filter),
                Err(err) => log::error!("Cannot visualize the selection: {err}"),
            }
        })?;

        log::info!("Viewer mounted on `#{}`", dom.map_container);
        Ok(Self { controller })
    }

    /// Controller of the viewer.
    pub fn controller(&self) -> &WebController {
        &self.controller
    }
}

fn document() -> Result<Document, ViewerError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ViewerError::Wasm(Some("Document is not available".into())))
}

/// Parses the configuration stored in the `data-config` attribute of the map container.
pub fn read_page_config(document: &Document, container_id: &str) -> Result<ViewerConfig, ViewerError> {
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| ViewerError::ElementNotFound(container_id.to_string()))?;

    match container.get_attribute(CONFIG_ATTRIBUTE) {
        Some(json) => ViewerConfig::from_json(&json),
        None => Ok(ViewerConfig::default()),
    }
}

/// Value of the checked radio input with the given name.
pub fn selected_filter(document: &Document, input_name: &str) -> Result<Filter, ViewerError> {
    let checked = document
        .query_selector(&format!("input[name=\"{input_name}\"]:checked"))?
        .ok_or(ViewerError::NoFilterSelected)?;
    let input: HtmlInputElement = checked.dyn_into()?;

    Ok(Filter::from(input.value().as_str()))
}

fn on_click(
    document: &Document,
    element_id: &str,
    handler: impl FnMut() + 'static,
) -> Result<(), ViewerError> {
    let element = document
        .get_element_by_id(element_id)
        .ok_or_else(|| ViewerError::ElementNotFound(element_id.to_string()))?;

    let callback: Closure<dyn FnMut()> = Closure::new(handler);
    element.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
    callback.forget();

    Ok(())
}
