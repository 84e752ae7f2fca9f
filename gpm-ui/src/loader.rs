//! Browser-side dataset fetch.

use gpm_core::location::Location;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

async fn fetch_text(path: &str) -> Result<String, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response: Response = JsFuture::from(window.fetch_with_str(path))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!("HTTP {}", response.status())));
    }
    JsFuture::from(response.text()?)
        .await?
        .as_string()
        .ok_or_else(|| JsValue::from_str("response body is not text"))
}

/// Fetch `locations.json` once.
///
/// Any failure, network or parse, is logged and turns into an empty
/// dataset so the UI simply shows no locations.
pub async fn fetch_locations(path: &str) -> Vec<Location> {
    match fetch_text(path).await {
        Ok(body) => {
            let locations = Location::parse_or_empty(&body);
            log::info!("[GPM] Loaded {} locations from {}", locations.len(), path);
            locations
        }
        Err(e) => {
            log::error!("[GPM] Error loading locations: {:?}", e);
            Vec::new()
        }
    }
}
