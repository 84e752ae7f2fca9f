//! Fullscreen viewer for the selected photo.

use crate::state::AppState;
use dioxus::prelude::*;
use gpm_core::detail::display_label;
use gpm_core::i18n::CLOSE;

/// Dark overlay with the selected image; clicking the backdrop closes it.
#[component]
pub fn FullscreenModal() -> Element {
    let mut state = use_context::<AppState>();
    let language = (state.language)();

    if !(state.fullscreen_open)() {
        return rsx! {};
    }
    let Some(location) = (state.selected)() else {
        return rsx! {};
    };
    let alt = display_label(&location).to_string();

    rsx! {
        div {
            style: "position: fixed; inset: 0; background: rgba(0,0,0,0.8); z-index: 9999; display: flex; align-items: center; justify-content: center;",
            onclick: move |_| state.close_fullscreen(),
            div {
                style: "position: relative; display: inline-block;",
                // Clicks on the image must not reach the backdrop
                onclick: move |evt| evt.stop_propagation(),
                img {
                    src: "{location.filename}",
                    alt: "{alt}",
                    style: "max-width: 90vw; max-height: 90vh; object-fit: contain;",
                }
                button {
                    style: "position: absolute; top: -48px; right: 8px; display: flex; align-items: center; gap: 8px; padding: 8px 12px; color: white; font-weight: 600; background: transparent; border: none; border-radius: 8px; cursor: pointer;",
                    onclick: move |_| state.close_fullscreen(),
                    span { style: "font-size: 14px;", {CLOSE.get(language)} }
                    "✕"
                }
            }
        }
    }
}
