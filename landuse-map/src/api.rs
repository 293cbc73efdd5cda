//! Client side of the land use backend REST API.

use async_trait::async_trait;
use geojson::FeatureCollection;
use maybe_sync::{MaybeSend, MaybeSync};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ViewerError;
use crate::filter::Filter;

/// Triggers the import of the land use dataset into the backend database. `POST`, no body.
pub const LOAD_DATA_PATH: &str = "/api/load_data";
/// Total area of the selected land use polygons.
pub const STATS_PATH: &str = "/api/stats";
/// Selected land use polygons as a GeoJSON feature collection.
pub const DATA_PATH: &str = "/api/data";
/// Name of the query parameter carrying the [`Filter`].
pub const FILTER_PARAM: &str = "filter";

const STATUS_SUCCESS: &str = "success";

/// Result of the data import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadDataResponse {
    /// `"success"` or an error status.
    #[serde(default)]
    pub status: String,
    /// Human readable outcome.
    #[serde(default)]
    pub message: String,
}

impl LoadDataResponse {
    /// Returns true if the backend reported a successful import.
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

/// Aggregated statistics of a selection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatsResponse {
    /// Total area in hectares.
    pub area_ha: f64,
}

/// Backend endpoints used by the viewer.
///
/// Bodies are decoded regardless of the HTTP status code, since the backend reports failures as
/// a regular JSON body with a 500 status. Only transport failures and undecodable bodies are
/// errors.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ApiClient: MaybeSend + MaybeSync {
    /// `POST /api/load_data`.
    async fn load_data(&self) -> Result<LoadDataResponse, ViewerError>;
    /// `GET /api/stats?filter=..`.
    async fn stats(&self, filter: &Filter) -> Result<StatsResponse, ViewerError>;
    /// `GET /api/data?filter=..`.
    async fn data(&self, filter: &Filter) -> Result<FeatureCollection, ViewerError>;
}

/// Joins the configured base URL and an endpoint path. An empty base means the page origin.
pub(crate) fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

pub(crate) fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ViewerError> {
    Ok(serde_json::from_slice(body)?)
}
