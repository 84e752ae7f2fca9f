//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! The filter engine never sees these signals; callers read them and pass
//! plain values into `gpm_data`.

use dioxus::prelude::*;
use gpm_core::bounds::GeoBounds;
use gpm_core::i18n::Language;
use gpm_core::location::Location;
use gpm_core::map_style::{MapStyle, Theme};
use gpm_data::filter::FilterCriteria;

/// Shared application state for the map gallery.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Full dataset; empty while loading or after a failed load
    pub locations: Signal<Vec<Location>>,
    /// Whether the dataset fetch is still pending
    pub loading: Signal<bool>,
    /// User-selected filters
    pub criteria: Signal<FilterCriteria>,
    /// Current map viewport (None until the map reports it)
    pub bounds: Signal<Option<GeoBounds>>,
    /// Location shown in the detail panel
    pub selected: Signal<Option<Location>>,
    /// Location hovered in the gallery grid
    pub hovered: Signal<Option<Location>>,
    pub panel_open: Signal<bool>,
    /// Whether the selected photo is shown in the fullscreen viewer
    pub fullscreen_open: Signal<bool>,
    pub filters_expanded: Signal<bool>,
    pub map_style: Signal<MapStyle>,
    pub theme: Signal<Theme>,
    pub language: Signal<Language>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            locations: Signal::new(Vec::new()),
            loading: Signal::new(true),
            criteria: Signal::new(FilterCriteria::default()),
            bounds: Signal::new(None),
            selected: Signal::new(None),
            hovered: Signal::new(None),
            panel_open: Signal::new(false),
            fullscreen_open: Signal::new(false),
            filters_expanded: Signal::new(true),
            map_style: Signal::new(MapStyle::default()),
            theme: Signal::new(Theme::default()),
            language: Signal::new(Language::default()),
        }
    }

    /// Open the detail panel on `location`.
    pub fn select(&mut self, location: Location) {
        self.selected.set(Some(location));
        self.panel_open.set(true);
    }

    /// Select the record with the given filename, if it is in the dataset.
    pub fn select_by_filename(&mut self, filename: &str) {
        let found = self
            .locations
            .read()
            .iter()
            .find(|l| l.filename == filename)
            .cloned();
        match found {
            Some(location) => self.select(location),
            None => log::warn!("[GPM] Marker for unknown location {}", filename),
        }
    }

    pub fn close_panel(&mut self) {
        self.panel_open.set(false);
        self.fullscreen_open.set(false);
    }

    /// Show the selected photo fullscreen. Does nothing without a selection.
    pub fn open_fullscreen(&mut self) {
        if self.selected.read().is_some() {
            self.fullscreen_open.set(true);
        }
    }

    pub fn close_fullscreen(&mut self) {
        self.fullscreen_open.set(false);
    }

    /// Apply a map style selector tag, including the theme-qualified
    /// `light-simple` / `dark-simple` variants.
    pub fn apply_style_tag(&mut self, tag: &str) {
        match MapStyle::from_tag(tag) {
            Some((style, theme)) => {
                self.map_style.set(style);
                if let Some(theme) = theme {
                    self.theme.set(theme);
                }
            }
            None => log::warn!("[GPM] Unknown map style tag {}", tag),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
