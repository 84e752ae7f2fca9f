//! Thumbnail grid of the locations currently visible on the map.

use crate::state::AppState;
use dioxus::prelude::*;
use gpm_core::detail::display_label;
use gpm_core::i18n::NO_LOCATIONS;
use gpm_core::location::Location;
use gpm_data::viewport::visible_count_label;

#[derive(Props, Clone, PartialEq)]
pub struct GalleryGridProps {
    /// Visible locations, already in display order
    pub locations: Vec<Location>,
}

#[component]
pub fn GalleryGrid(props: GalleryGridProps) -> Element {
    let mut state = use_context::<AppState>();
    let language = (state.language)();
    let heading = visible_count_label(props.locations.len(), language);

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 10px;",
            h3 {
                style: "margin: 0; font-size: 14px; font-weight: bold;",
                "🌄 {heading}"
            }
            if props.locations.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    {NO_LOCATIONS.get(language)}
                }
            }
            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px;",
                for (index, location) in props.locations.iter().enumerate() {
                    GalleryTile {
                        key: "{location.filename}-{index}",
                        location: location.clone(),
                        onselect: move |l: Location| state.select(l),
                        onhover: move |l: Option<Location>| state.hovered.set(l),
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct GalleryTileProps {
    location: Location,
    onselect: EventHandler<Location>,
    onhover: EventHandler<Option<Location>>,
}

#[component]
fn GalleryTile(props: GalleryTileProps) -> Element {
    let label = display_label(&props.location).to_string();
    let recommended = props.location.is_recommended();
    let for_click = props.location.clone();
    let for_hover = props.location.clone();

    rsx! {
        button {
            style: "position: relative; aspect-ratio: 4 / 3; border-radius: 8px; overflow: hidden; border: 1px solid #E0E0E0; padding: 0; cursor: pointer; background: #F5F5F5;",
            onclick: move |_| props.onselect.call(for_click.clone()),
            onmouseenter: move |_| props.onhover.call(Some(for_hover.clone())),
            onmouseleave: move |_| props.onhover.call(None),
            img {
                src: "{props.location.filename}",
                alt: "{label}",
                loading: "lazy",
                style: "width: 100%; height: 100%; object-fit: cover;",
            }
            if recommended {
                span {
                    style: "position: absolute; top: 4px; right: 6px; color: #FFC107; font-size: 14px;",
                    "★"
                }
            }
            span {
                style: "position: absolute; bottom: 0; left: 0; right: 0; padding: 2px 6px; font-size: 11px; color: white; background: rgba(0,0,0,0.45); text-align: left;",
                "{label}"
            }
        }
    }
}
