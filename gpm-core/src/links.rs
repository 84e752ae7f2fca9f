//! Outbound deep links built from location coordinates.
//!
//! These only construct strings; no request is made.

use crate::i18n::Language;
use crate::swiss_grid::wgs84_to_swiss_grid;

/// Zoom level passed to map.geo.admin.ch.
pub const SWISSTOPO_ZOOM: u8 = 7;

/// Background layer passed to map.geo.admin.ch.
pub const SWISSTOPO_BG_LAYER: &str = "ch.swisstopo.pixelkarte-farbe";

/// Link to the federal map viewer centered on the projected point.
pub fn swisstopo_url(lat: f64, lng: f64, language: Language) -> String {
    let grid = wgs84_to_swiss_grid(lat, lng);
    format!(
        "https://map.geo.admin.ch/?E={}&N={}&zoom={}&bgLayer={}&lang={}",
        grid.e,
        grid.n,
        SWISSTOPO_ZOOM,
        SWISSTOPO_BG_LAYER,
        language.code()
    )
}

/// Driving directions to the raw WGS84 point.
pub fn directions_url(lat: f64, lng: f64) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&destination={},{}",
        lat, lng
    )
}

/// Clipboard text for the "copy coordinates" action.
pub fn coordinates_text(lat: f64, lng: f64) -> String {
    format!("{:.4}, {:.4}", lat, lng)
}
