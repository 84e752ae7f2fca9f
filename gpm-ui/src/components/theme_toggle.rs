//! Light/dark theme toggle.

use crate::state::AppState;
use dioxus::prelude::*;
use gpm_core::i18n::DARK_MODE;
use gpm_core::map_style::Theme;

#[component]
pub fn ThemeToggle() -> Element {
    let mut state = use_context::<AppState>();
    let theme = (state.theme)();
    let label = DARK_MODE.get((state.language)());

    rsx! {
        label {
            style: "display: flex; gap: 6px; align-items: center; cursor: pointer;",
            input {
                r#type: "checkbox",
                checked: theme == Theme::Dark,
                onchange: move |_| {
                    let next = (state.theme)().toggled();
                    state.theme.set(next);
                },
            }
            "{label}"
        }
    }
}
