//! Platform specific implementations of the backend client and of the rendering port.

#[cfg(not(target_arch = "wasm32"))]
pub mod native;

/// Backend client implementation for the current platform.
#[cfg(not(target_arch = "wasm32"))]
pub type ApiClientImpl = native::ReqwestApiClient;

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Backend client implementation for the current platform.
#[cfg(target_arch = "wasm32")]
pub type ApiClientImpl = web::FetchApiClient;
