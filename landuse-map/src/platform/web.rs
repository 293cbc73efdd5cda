//! Platform specific stuff for WASM32 (web) targets.

use async_trait::async_trait;
use geojson::FeatureCollection;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::api::{
    decode_body, endpoint_url, ApiClient, LoadDataResponse, StatsResponse, DATA_PATH,
    FILTER_PARAM, LOAD_DATA_PATH, STATS_PATH,
};
use crate::error::{describe_js_value, ViewerError};
use crate::filter::Filter;

pub mod leaflet;
pub mod viewer;

pub use leaflet::LeafletPort;
pub use viewer::Viewer;

/// Backend client using the `fetch` API of the browser.
#[derive(Debug, Clone)]
pub struct FetchApiClient {
    base_url: String,
}

impl FetchApiClient {
    /// Creates a client for the backend at the given base URL. An empty URL targets the origin of
    /// the page.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ViewerError> {
        Ok(Self {
            base_url: base_url.into(),
        })
    }

    fn filtered_url(&self, path: &str, filter: &Filter) -> String {
        let value = String::from(js_sys::encode_uri_component(filter.as_str()));
        format!("{}?{FILTER_PARAM}={value}", endpoint_url(&self.base_url, path))
    }

    async fn fetch<T: DeserializeOwned>(&self, method: &str, url: &str) -> Result<T, ViewerError> {
        log::debug!("{method} {url}");

        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(url, &opts)?;
        request.headers().set("Accept", "application/json")?;

        let window = web_sys::window()
            .ok_or_else(|| ViewerError::Wasm(Some("Global window is not available".into())))?;

        // A rejected fetch promise means the request never completed.
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|err| ViewerError::Http(describe_js_value(&err)))?;
        let resp: Response = resp_value.dyn_into()?;
        if !resp.ok() {
            log::info!("Backend answered {url} with {}", resp.status());
        }

        let body = JsFuture::from(resp.text()?).await?;
        let body = body
            .as_string()
            .ok_or_else(|| ViewerError::Wasm(Some("Response body is not a string".into())))?;

        decode_body(body.as_bytes())
    }
}

#[async_trait(?Send)]
impl ApiClient for FetchApiClient {
    async fn load_data(&self) -> Result<LoadDataResponse, ViewerError> {
        self.fetch("POST", &endpoint_url(&self.base_url, LOAD_DATA_PATH))
            .await
    }

    async fn stats(&self, filter: &Filter) -> Result<StatsResponse, ViewerError> {
        self.fetch("GET", &self.filtered_url(STATS_PATH, filter))
            .await
    }

    async fn data(&self, filter: &Filter) -> Result<FeatureCollection, ViewerError> {
        self.fetch("GET", &self.filtered_url(DATA_PATH, filter))
            .await
    }
}
