//! Reusable Dioxus RSX components for the map gallery.

mod detail_panel;
mod filter_panel;
mod fullscreen_modal;
mod gallery_grid;
mod language_selector;
mod loading_spinner;
mod map_container;
mod map_style_selector;
mod theme_toggle;

pub use detail_panel::DetailPanel;
pub use filter_panel::FilterPanel;
pub use fullscreen_modal::FullscreenModal;
pub use gallery_grid::GalleryGrid;
pub use language_selector::LanguageSelector;
pub use loading_spinner::LoadingSpinner;
pub use map_container::MapContainer;
pub use map_style_selector::MapStyleSelector;
pub use theme_toggle::ThemeToggle;
