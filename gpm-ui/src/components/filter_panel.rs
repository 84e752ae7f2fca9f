//! Collapsible filter panel: flags, height range and difficulty range.

use crate::state::AppState;
use dioxus::prelude::*;
use gpm_core::difficulty::Difficulty;
use gpm_core::i18n::{
    DIFFICULTY, EDITORS_CHOICE, HEIGHT, LOCATION_FILTERS, ONLY_GRAUBUNDEN, ONLY_SWITZERLAND,
    RESET_FILTERS,
};
use gpm_data::filter::{HEIGHT_MAX, HEIGHT_MIN, HEIGHT_STEP};

#[component]
pub fn FilterPanel() -> Element {
    let mut state = use_context::<AppState>();
    let language = (state.language)();
    let criteria = (state.criteria)();
    let expanded = (state.filters_expanded)();
    let (difficulty_low, difficulty_high) = criteria.difficulty_range.labels(language);
    let max_index = Difficulty::MAX_INDEX;

    let on_height_min = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<f64>() {
            state.criteria.write().height_range.set_min(value);
        }
    };
    let on_height_max = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<f64>() {
            state.criteria.write().height_range.set_max(value);
        }
    };
    let on_difficulty_min = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<usize>() {
            let mut criteria = state.criteria.write();
            let max = criteria.difficulty_range.max;
            criteria.difficulty_range.set(value.min(max), max);
        }
    };
    let on_difficulty_max = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<usize>() {
            let mut criteria = state.criteria.write();
            let min = criteria.difficulty_range.min;
            criteria.difficulty_range.set(min, value.max(min));
        }
    };

    rsx! {
        div {
            style: "border-top: 1px solid #E0E0E0; padding-top: 12px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                button {
                    style: "font-weight: bold; font-size: 14px; background: none; border: none; cursor: pointer; padding: 0;",
                    onclick: move |_| {
                        let next = !(state.filters_expanded)();
                        state.filters_expanded.set(next);
                    },
                    if expanded { "▾ " } else { "▸ " }
                    {LOCATION_FILTERS.get(language)}
                }
                if expanded && !criteria.is_default() {
                    button {
                        style: "font-size: 12px; cursor: pointer;",
                        onclick: move |_| state.criteria.write().reset(),
                        {RESET_FILTERS.get(language)}
                    }
                }
            }

            if expanded {
                div {
                    style: "display: flex; flex-direction: column; gap: 12px; margin-top: 12px; font-size: 12px;",

                    // Height range
                    div {
                        label { style: "font-weight: 500;", {HEIGHT.get(language)} }
                        div {
                            style: "display: flex; gap: 8px;",
                            input {
                                r#type: "range",
                                min: "{HEIGHT_MIN}",
                                max: "{HEIGHT_MAX}",
                                step: "{HEIGHT_STEP}",
                                value: "{criteria.height_range.min}",
                                oninput: on_height_min,
                            }
                            input {
                                r#type: "range",
                                min: "{HEIGHT_MIN}",
                                max: "{HEIGHT_MAX}",
                                step: "{HEIGHT_STEP}",
                                value: "{criteria.height_range.max}",
                                oninput: on_height_max,
                            }
                        }
                        div {
                            style: "display: flex; justify-content: space-between; color: #666;",
                            span { "{criteria.height_range.min}m" }
                            span { "{criteria.height_range.max}m" }
                        }
                    }

                    // Difficulty range
                    div {
                        label { style: "font-weight: 500;", {DIFFICULTY.get(language)} }
                        div {
                            style: "display: flex; gap: 8px;",
                            input {
                                r#type: "range",
                                min: "0",
                                max: "{max_index}",
                                step: "1",
                                value: "{criteria.difficulty_range.min}",
                                oninput: on_difficulty_min,
                            }
                            input {
                                r#type: "range",
                                min: "0",
                                max: "{max_index}",
                                step: "1",
                                value: "{criteria.difficulty_range.max}",
                                oninput: on_difficulty_max,
                            }
                        }
                        div {
                            style: "display: flex; justify-content: space-between; color: #666;",
                            span { "{difficulty_low}" }
                            span { "{difficulty_high}" }
                        }
                    }

                    // Flags
                    label {
                        style: "display: flex; gap: 6px; align-items: center; cursor: pointer;",
                        input {
                            r#type: "checkbox",
                            checked: criteria.editors_choice_only,
                            onchange: move |_| {
                                let mut criteria = state.criteria.write();
                                criteria.editors_choice_only = !criteria.editors_choice_only;
                            },
                        }
                        {EDITORS_CHOICE.get(language)}
                    }
                    label {
                        style: "display: flex; gap: 6px; align-items: center; cursor: pointer;",
                        input {
                            r#type: "checkbox",
                            checked: criteria.switzerland_only,
                            onchange: move |_| {
                                let mut criteria = state.criteria.write();
                                criteria.switzerland_only = !criteria.switzerland_only;
                            },
                        }
                        {ONLY_SWITZERLAND.get(language)}
                    }
                    label {
                        style: "display: flex; gap: 6px; align-items: center; cursor: pointer;",
                        input {
                            r#type: "checkbox",
                            checked: criteria.graubunden_only,
                            onchange: move |_| {
                                let mut criteria = state.criteria.write();
                                criteria.graubunden_only = !criteria.graubunden_only;
                            },
                        }
                        {ONLY_GRAUBUNDEN.get(language)}
                    }
                }
            }
        }
    }
}
