//! Platform specific stuff for native targets.

use async_trait::async_trait;
use geojson::FeatureCollection;
use log::{debug, info};
use serde::de::DeserializeOwned;

use crate::api::{
    decode_body, endpoint_url, ApiClient, LoadDataResponse, StatsResponse, DATA_PATH,
    FILTER_PARAM, LOAD_DATA_PATH, STATS_PATH,
};
use crate::error::ViewerError;
use crate::filter::Filter;

/// Backend client for native targets, based on `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestApiClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ReqwestApiClient {
    /// Creates a client for the backend at the given base URL, e.g. `http://localhost:5000`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ViewerError> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("landuse-map/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http_client,
            base_url: base_url.into(),
        })
    }

    fn load_data_request(&self) -> Result<reqwest::Request, ViewerError> {
        Ok(self
            .http_client
            .post(endpoint_url(&self.base_url, LOAD_DATA_PATH))
            .build()?)
    }

    fn filtered_request(&self, path: &str, filter: &Filter) -> Result<reqwest::Request, ViewerError> {
        Ok(self
            .http_client
            .get(endpoint_url(&self.base_url, path))
            .query(&[(FILTER_PARAM, filter.as_str())])
            .build()?)
    }

    async fn execute<T: DeserializeOwned>(&self, request: reqwest::Request) -> Result<T, ViewerError> {
        let url = request.url().clone();
        debug!("{} {url}", request.method());

        let response = self.http_client.execute(request).await?;
        if !response.status().is_success() {
            info!("Backend answered {url} with {}", response.status());
        }

        let body = response.bytes().await?;
        decode_body(&body)
    }
}

#[async_trait]
impl ApiClient for ReqwestApiClient {
    async fn load_data(&self) -> Result<LoadDataResponse, ViewerError> {
        self.execute(self.load_data_request()?).await
    }

    async fn stats(&self, filter: &Filter) -> Result<StatsResponse, ViewerError> {
        self.execute(self.filtered_request(STATS_PATH, filter)?)
            .await
    }

    async fn data(&self, filter: &Filter) -> Result<FeatureCollection, ViewerError> {
        self.execute(self.filtered_request(DATA_PATH, filter)?)
            .await
    }
}
