//! Loading spinner component.

use crate::state::AppState;
use dioxus::prelude::*;
use gpm_core::i18n::LOADING_MAP;

/// Simple localized loading indicator.
#[component]
pub fn LoadingSpinner() -> Element {
    let state = use_context::<AppState>();
    let text = LOADING_MAP.get((state.language)());

    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "{text}"
        }
    }
}
