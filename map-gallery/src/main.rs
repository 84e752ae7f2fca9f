//! Graubünden Photo Map
//!
//! Interactive Leaflet map of photo locations with a gallery of what is
//! currently in view. Dioxus 0.7 drives the UI; Leaflet is loaded by the
//! host page (see `Dioxus.toml`) and controlled through `gpm_ui::js_bridge`.
//!
//! Data flow:
//! 1. On mount, `locations.json` is fetched once. A failed fetch leaves the
//!    dataset empty.
//! 2. The filter criteria select the locations that get map markers.
//! 3. Leaflet reports the viewport after every move or zoom; the gallery
//!    shows the filtered locations inside it, editor's choice first.

use dioxus::prelude::*;
use gpm_core::location::DATASET_PATH;
use gpm_core::map_style::Theme;
use gpm_data::filter::filter_locations;
use gpm_data::gallery_locations;
use gpm_data::viewport::VisibleSet;
use gpm_ui::components::{
    DetailPanel, FilterPanel, FullscreenModal, GalleryGrid, LanguageSelector, LoadingSpinner, MapContainer,
    MapStyleSelector, ThemeToggle,
};
use gpm_ui::js_bridge;
use gpm_ui::loader;
use gpm_ui::markers::marker_specs;
use gpm_ui::state::AppState;

/// Map container DOM element ID used by Leaflet to render into.
const MAP_ID: &str = "map-gallery-map";

/// Initial view, centered on Graubünden.
const INITIAL_LAT: f64 = 46.6;
const INITIAL_LNG: f64 = 9.8;
const INITIAL_ZOOM: u8 = 9;

/// Marker and map background styling not covered by Leaflet's own CSS.
const MAP_CSS: &str = r#"
.custom-marker-icon { background: transparent; border: none; }
.marker-wrapper { position: relative; width: 100%; height: 100%; }
.marker-image { width: 100%; height: 100%; border-radius: 50%; overflow: hidden; border: 3px solid white; box-shadow: 0 2px 6px rgba(0,0,0,0.35); transition: transform 150ms ease-in-out; }
.marker-image img { width: 100%; height: 100%; object-fit: cover; }
.marker-large { border-color: #FFC107; }
.marker-badge { position: absolute; top: -4px; right: -4px; color: #FFC107; font-size: 16px; text-shadow: 0 0 2px black; }
.map-bg-light { background: #F2EFE9; }
.map-bg-dark { background: #1B1B1B; }
"#;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("map-gallery-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load the dataset once
    use_future(move || async move {
        let locations = loader::fetch_locations(DATASET_PATH).await;
        state.locations.set(locations);
        state.loading.set(false);
    });

    let filtered =
        use_memo(move || filter_locations(&state.locations.read(), &state.criteria.read()));

    // Nothing is visible until Leaflet has reported a viewport
    let visible = use_memo(move || match (state.bounds)() {
        Some(bounds) => VisibleSet::compute(&filtered.read(), &bounds),
        None => VisibleSet::default(),
    });

    // Pans that keep the same ids on screen leave `visible` unchanged
    let gallery = use_memo(move || {
        let visible = visible.read();
        log::debug!("[GPM] {} locations in view", visible.len());
        gallery_locations(&filtered.read(), &visible)
    });

    // Create the map and wire its events back into the state
    use_hook(move || {
        js_bridge::on_bounds_change(move |bounds| state.bounds.set(Some(bounds)));
        js_bridge::on_marker_click(move |filename| state.select_by_filename(&filename));
        js_bridge::init_map(MAP_ID, INITIAL_LAT, INITIAL_LNG, INITIAL_ZOOM);
    });

    // Base layer follows the style and theme without rebuilding the map
    use_effect(move || {
        let style = (state.map_style)();
        let theme = (state.theme)();
        js_bridge::set_tile_layer(style.tile_url(theme), style.attribution());
        js_bridge::set_theme_class(theme.map_background_class());
    });

    use_effect(move || {
        let selected = (state.selected)();
        let hovered = (state.hovered)();
        let specs = marker_specs(
            &filtered.read(),
            selected.as_ref().map(|l| l.filename.as_str()),
            hovered.as_ref().map(|l| l.filename.as_str()),
            (state.panel_open)(),
            (state.language)(),
        );
        match serde_json::to_string(&specs) {
            Ok(json) => js_bridge::set_markers(&json),
            Err(e) => log::error!("[GPM] Failed to serialize markers: {}", e),
        }
    });

    // Leaflet has to re-measure when the detail panel slides in or out
    use_effect(move || {
        let _open = (state.panel_open)();
        js_bridge::invalidate_size();
    });

    let theme = (state.theme)();
    let locale = (state.language)().date_locale();
    let page_style = if theme == Theme::Dark {
        "height: 100vh; display: flex; flex-direction: column; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #121212; color: #EEE;"
    } else {
        "height: 100vh; display: flex; flex-direction: column; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: white; color: #222;"
    };

    rsx! {
        style { {MAP_CSS} }
        div {
            lang: "{locale}",
            style: "{page_style}",

            header {
                style: "height: 48px; display: flex; align-items: center; justify-content: space-between; padding: 0 16px; border-bottom: 1px solid #E0E0E0;",
                h1 { style: "margin: 0; font-size: 18px;", "Graubünden Photo Map" }
                div {
                    style: "display: flex; gap: 12px; align-items: center;",
                    LanguageSelector {}
                    MapStyleSelector {}
                    ThemeToggle {}
                }
            }

            div {
                style: "flex: 1; display: flex; min-height: 0;",
                aside {
                    style: "width: 320px; padding: 12px; overflow-y: auto; display: flex; flex-direction: column; gap: 16px; border-right: 1px solid #E0E0E0;",
                    if (state.loading)() {
                        LoadingSpinner {}
                    } else {
                        GalleryGrid { locations: gallery() }
                    }
                    FilterPanel {}
                }
                MapContainer {
                    id: MAP_ID.to_string(),
                    style: (state.map_style)(),
                    theme,
                }
            }

            DetailPanel {}
            FullscreenModal {}
        }
    }
}
