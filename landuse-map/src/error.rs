//! Error types used by the crate.

use thiserror::Error;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Landuse map error type.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// The request never completed (connection refused, DNS failure, aborted fetch etc).
    #[error("{0}")]
    Http(String),
    /// Response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decoding(#[from] serde_json::Error),
    /// Error interacting with WASM runtime.
    #[error("wasm error: {0:?}")]
    Wasm(Option<String>),
    /// Visualize action was triggered while no filter radio input was checked.
    #[error("no filter is selected")]
    NoFilterSelected,
    /// Required DOM element is missing from the page.
    #[error("element `{0}` not found")]
    ElementNotFound(String),
    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(not(target_arch = "wasm32"))]
impl From<reqwest::Error> for ViewerError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            return Self::Http(format!("failed to read response body: {value}"));
        }

        Self::Http(value.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for ViewerError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        ViewerError::Wasm(Some(describe_js_value(&value)))
    }
}

/// Message of a JS exception, or the debug representation of any other thrown value.
#[cfg(target_arch = "wasm32")]
pub(crate) fn describe_js_value(value: &wasm_bindgen::JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.to_string()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(target_arch = "wasm32")]
impl From<web_sys::Element> for ViewerError {
    fn from(value: web_sys::Element) -> Self {
        ViewerError::Wasm(Some(format!("Failed to cast {value:?} into target type")))
    }
}
