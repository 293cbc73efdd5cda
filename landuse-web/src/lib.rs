//! Browser entry point of the land use map viewer.
//!
//! The page must load Leaflet and contain the map container, the `btn-load` and `btn-visualize`
//! buttons, the `filter` radio inputs and the `area-display` element. Their ids can be changed
//! with a JSON configuration in the `data-config` attribute of the map container.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Sets up logging and mounts the viewer on the page.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);

    match landuse_map::platform::web::Viewer::mount_from_page() {
        Ok(_viewer) => Ok(()),
        Err(err) => {
            log::error!("Failed to mount the viewer: {err}");
            Err(JsValue::from_str(&err.to_string()))
        }
    }
}
