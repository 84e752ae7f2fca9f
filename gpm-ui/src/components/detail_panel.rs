//! Slide-in panel describing the selected location.

use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use gpm_core::detail::{display_label, hike_summary, rounded_height};
use gpm_core::i18n::{
    country_label, difficulty_label, ABOVE_SEA_LEVEL, COPIED, COPY_COORDINATES, EDITORS_CHOICE, NAVIGATE,
    OPEN_SWISSTOPO, VIEW_FULLSCREEN,
};
use gpm_core::links::{coordinates_text, directions_url, swisstopo_url};
use gpm_utils::dates::capture_caption;

#[component]
pub fn DetailPanel() -> Element {
    let mut state = use_context::<AppState>();
    // Filename whose coordinates were last copied
    let mut copied_for: Signal<Option<String>> = use_signal(|| None);

    let open = (state.panel_open)();
    let language = (state.language)();
    let transform = if open { "translateX(0)" } else { "translateX(-100%)" };
    let panel_style = format!(
        "position: fixed; top: 49px; left: 0; height: calc(100vh - 49px); width: 400px; background: white; border-right: 1px solid #E0E0E0; z-index: 1100; transition: transform 300ms ease-in-out; transform: {}; overflow-y: auto;",
        transform
    );

    let Some(location) = (state.selected)() else {
        return rsx! {
            div { style: "{panel_style}",
                div {
                    style: "width: 100%; aspect-ratio: 4 / 3; display: flex; align-items: center; justify-content: center; font-size: 36px; background: #F5F5F5;",
                    "📷"
                }
            }
        };
    };

    let label = display_label(&location).to_string();
    let caption = capture_caption(&location.date, &location.time, language);
    let height = rounded_height(&location);
    let difficulty = location
        .difficulty_level()
        .map(|d| difficulty_label(d, language));
    let summary = hike_summary(&location, language);
    let recommended = location.is_recommended();
    let coords = coordinates_text(location.lat(), location.lng());
    let swisstopo = swisstopo_url(location.lat(), location.lng(), language);
    let directions = directions_url(location.lat(), location.lng());
    let is_copied = copied_for.read().as_deref() == Some(location.filename.as_str());
    let filename = location.filename.clone();
    let copy_label = if is_copied {
        COPIED.get(language)
    } else {
        COPY_COORDINATES.get(language)
    };
    let above_sea_level = ABOVE_SEA_LEVEL.get(language);
    let editors_choice = EDITORS_CHOICE.get(language);
    let country = country_label(&location.country, language)
        .unwrap_or(location.country.as_str())
        .to_string();

    rsx! {
        div { style: "{panel_style}",
            div {
                style: "position: relative; width: 100%; aspect-ratio: 4 / 3; background: #F5F5F5;",
                img {
                    src: "{location.filename}",
                    alt: "{location.location}",
                    style: "width: 100%; height: 100%; object-fit: cover;",
                }
                button {
                    style: "position: absolute; top: 12px; left: 12px; padding: 3px 13px 3px 8px; border-radius: 16px; border: 1px solid rgba(255,255,255,0.06); background: rgba(255,255,255,0.39); backdrop-filter: blur(3.7px); cursor: pointer; font-size: 15px; font-weight: 500;",
                    onclick: move |_| state.close_panel(),
                    "← {label}"
                }
                button {
                    style: "position: absolute; bottom: 8px; left: 8px; padding: 8px; border-radius: 50%; border: none; background: rgba(0,0,0,0.35); color: white; cursor: pointer; font-size: 14px;",
                    title: VIEW_FULLSCREEN.get(language),
                    onclick: move |_| state.open_fullscreen(),
                    "⛶"
                }
            }

            div {
                style: "padding: 16px; display: flex; flex-direction: column; gap: 10px;",
                h2 { style: "margin: 0; font-size: 20px;", "{location.location}" }
                p {
                    style: "margin: 0; font-size: 13px; color: #666;",
                    "{location.province}, {country}"
                }
                p { style: "margin: 0; font-size: 13px;", "{caption}" }

                if let Some(h) = height {
                    p { style: "margin: 0; font-size: 13px;", "⛰ {h} {above_sea_level}" }
                }
                if let Some(d) = difficulty {
                    p { style: "margin: 0; font-size: 13px;", "🥾 {d}" }
                }
                if recommended {
                    p {
                        style: "margin: 0; font-size: 13px; color: #B8860B; font-weight: bold;",
                        "★ {editors_choice}"
                    }
                }
                if let Some(text) = summary {
                    p { style: "margin: 0; font-size: 13px; line-height: 1.4;", "{text}" }
                }

                div {
                    style: "display: flex; flex-wrap: wrap; gap: 8px; margin-top: 8px;",
                    button {
                        onclick: move |_| {
                            js_bridge::copy_to_clipboard(&coords);
                            copied_for.set(Some(filename.clone()));
                        },
                        "{copy_label}"
                    }
                    button {
                        onclick: move |_| js_bridge::open_url(&swisstopo),
                        {OPEN_SWISSTOPO.get(language)}
                    }
                    button {
                        onclick: move |_| js_bridge::open_url(&directions),
                        {NAVIGATE.get(language)}
                    }
                }
            }
        }
    }
}
