//! Dropdown selector for the base map style.

use crate::state::AppState;
use dioxus::prelude::*;
use gpm_core::i18n::MAP_STYLE;
use gpm_core::map_style::{MapStyle, Theme};

/// Map style selector.
///
/// The simple style is offered as separate light and dark entries, which
/// also switch the theme.
#[component]
pub fn MapStyleSelector() -> Element {
    let mut state = use_context::<AppState>();
    let style = (state.map_style)();
    let theme = (state.theme)();
    let label = MAP_STYLE.get((state.language)());

    let selected_tag = match (style, theme) {
        (MapStyle::Simple, Theme::Light) => "light-simple",
        (MapStyle::Simple, Theme::Dark) => "dark-simple",
        (other, _) => other.tag(),
    };

    let on_change = move |evt: Event<FormData>| {
        state.apply_style_tag(&evt.value());
    };

    rsx! {
        label {
            style: "display: flex; gap: 6px; align-items: center;",
            "{label}"
            select {
                id: "map-style-select",
                onchange: on_change,
                option { value: "light-simple", selected: selected_tag == "light-simple", "Simple (light)" }
                option { value: "dark-simple", selected: selected_tag == "dark-simple", "Simple (dark)" }
                for other in MapStyle::ALL.into_iter().filter(|s| *s != MapStyle::Simple) {
                    option {
                        value: other.tag(),
                        selected: selected_tag == other.tag(),
                        {other.display_name()}
                    }
                }
            }
        }
    }
}
