//! Map container component.

use dioxus::prelude::*;
use gpm_core::map_style::{MapStyle, Theme};

/// Props for MapContainer
#[derive(Props, Clone, PartialEq)]
pub struct MapContainerProps {
    /// The DOM id for the map container (Leaflet will render into this)
    pub id: String,
    pub style: MapStyle,
    pub theme: Theme,
}

/// A full-size div for the Leaflet map, plus the swisstopo notice strip.
#[component]
pub fn MapContainer(props: MapContainerProps) -> Element {
    let class = props.theme.map_background_class();

    rsx! {
        div {
            style: "position: relative; flex: 1; height: 100%;",
            div {
                id: "{props.id}",
                class: "{class}",
                style: "height: 100%; width: 100%; z-index: 0;",
            }
            if props.style.needs_swisstopo_notice() {
                div {
                    style: "position: absolute; bottom: 8px; left: 8px; z-index: 1000; background: white; color: black; font-size: 12px; padding: 4px 8px; border-radius: 4px; box-shadow: 0 1px 2px rgba(0,0,0,0.2);",
                    "© Federal Office of Topography swisstopo"
                }
            }
        }
    }
}
