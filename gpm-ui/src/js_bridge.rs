//! Typed wrappers around Leaflet interop via `js_sys::eval()`.
//!
//! The map glue lives in `assets/js/leaflet-map.js`. It is evaluated at
//! global scope once Leaflet has loaded and exposed via `window.*`.
//! Events flow back into Rust through closures stored on `window`.

use gpm_core::bounds::GeoBounds;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

// Embed the Leaflet glue at compile time
static LEAFLET_MAP_JS: &str = include_str!("../assets/js/leaflet-map.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('GPM JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a Rust string as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Run `body` once the map glue is ready and the map exists.
fn when_map_ready(body: &str) {
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__gpmMapReady && window.gpmMap) {{
                    clearInterval(poll);
                    try {{ {body} }} catch(e) {{ console.error('[GPM] map call error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Load the map glue with a wait-for-Leaflet polling loop, then create the
/// map in `container_id` once that element exists.
///
/// The glue declares globals with `var`/`function`, so it is evaluated via
/// indirect eval at global scope and then promoted to `window.*` explicitly.
pub fn init_map(container_id: &str, lat: f64, lng: f64, zoom: u8) {
    let store_js = format!("window.__gpmMapScripts = {};", js_string(LEAFLET_MAP_JS));
    let _ = js_sys::eval(&store_js);

    let container = js_string(container_id);
    call_js(&format!(
        r#"
        (function() {{
            var waitForLeaflet = setInterval(function() {{
                if (typeof L !== 'undefined' && document.getElementById({container})) {{
                    clearInterval(waitForLeaflet);
                    if (window.__gpmMapScripts) {{
                        (0, eval)(window.__gpmMapScripts);
                        delete window.__gpmMapScripts;
                    }}
                    gpmInitMap({container}, {lat}, {lng}, {zoom});
                    window.gpmMap = gpmMap;
                    window.gpmSetTileLayer = gpmSetTileLayer;
                    window.gpmSetThemeClass = gpmSetThemeClass;
                    window.gpmSetMarkers = gpmSetMarkers;
                    window.gpmInvalidateSize = gpmInvalidateSize;
                    window.__gpmMapReady = true;
                    console.log('GPM map initialized');
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Swap the base tile layer.
pub fn set_tile_layer(url: &str, attribution: &str) {
    when_map_ready(&format!(
        "window.gpmSetTileLayer({}, {});",
        js_string(url),
        js_string(attribution)
    ));
}

/// Switch the light/dark background class of the map container.
pub fn set_theme_class(class_name: &str) {
    when_map_ready(&format!("window.gpmSetThemeClass({});", js_string(class_name)));
}

/// Replace all markers. `markers_json` is a serialized `Vec<MarkerSpec>`.
pub fn set_markers(markers_json: &str) {
    when_map_ready(&format!("window.gpmSetMarkers({});", js_string(markers_json)));
}

/// Tell Leaflet its container changed size (panel opened or closed).
pub fn invalidate_size() {
    when_map_ready("window.gpmInvalidateSize();");
}

/// Open `url` in a new tab.
pub fn open_url(url: &str) {
    call_js(&format!("window.open({}, '_blank');", js_string(url)));
}

/// Write `text` to the clipboard; failures are only logged by the browser.
pub fn copy_to_clipboard(text: &str) {
    call_js(&format!(
        "navigator.clipboard.writeText({}).catch(function(e) {{ console.error('Failed to copy coordinates:', e); }});",
        js_string(text)
    ));
}

fn set_window_callback(name: &str, callback: &JsValue) {
    let Some(window) = web_sys::window() else {
        log::warn!("[GPM] No window; cannot register {}", name);
        return;
    };
    if let Err(e) = js_sys::Reflect::set(&window, &JsValue::from_str(name), callback) {
        log::warn!("[GPM] Failed to register {}: {:?}", name, e);
    }
}

/// Receive viewport bounds after every move, zoom and resize.
///
/// The closure lives for the rest of the page.
pub fn on_bounds_change(mut callback: impl FnMut(GeoBounds) + 'static) {
    let closure = Closure::<dyn FnMut(f64, f64, f64, f64)>::new(
        move |south: f64, west: f64, north: f64, east: f64| {
            callback(GeoBounds::new(south, west, north, east));
        },
    );
    set_window_callback("__gpmOnBounds", closure.as_ref());
    closure.forget();
}

/// Receive the filename of a clicked marker.
pub fn on_marker_click(mut callback: impl FnMut(String) + 'static) {
    let closure = Closure::<dyn FnMut(String)>::new(move |filename: String| {
        callback(filename);
    });
    set_window_callback("__gpmOnMarkerClick", closure.as_ref());
    closure.forget();
}
