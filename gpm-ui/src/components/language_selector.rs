//! Dropdown selector for the UI language.

use crate::state::AppState;
use dioxus::prelude::*;
use gpm_core::i18n::Language;

#[component]
pub fn LanguageSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.language)();

    let on_change = move |evt: Event<FormData>| {
        if let Some(language) = Language::from_code(&evt.value()) {
            state.language.set(language);
        }
    };

    rsx! {
        select {
            id: "language-select",
            onchange: on_change,
            for language in Language::ALL {
                option {
                    value: language.code(),
                    selected: language == current,
                    {language.native_name()}
                }
            }
        }
    }
}
