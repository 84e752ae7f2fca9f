//! Base map tile layers selectable in the UI.

use serde::{Deserialize, Serialize};

/// Light or dark color scheme.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// CSS class applied to the Leaflet container background.
    pub fn map_background_class(&self) -> &'static str {
        match self {
            Theme::Light => "map-bg-light",
            Theme::Dark => "map-bg-dark",
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapStyle {
    #[default]
    Simple,
    Satellite,
    Terrain,
    Street,
    Swisstopo,
}

const CARTO_LIGHT: &str = "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png";
const CARTO_DARK: &str = "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png";
const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a>";

impl MapStyle {
    pub const ALL: [MapStyle; 5] = [
        MapStyle::Simple,
        MapStyle::Satellite,
        MapStyle::Terrain,
        MapStyle::Street,
        MapStyle::Swisstopo,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            MapStyle::Simple => "simple",
            MapStyle::Satellite => "satellite",
            MapStyle::Terrain => "terrain",
            MapStyle::Street => "street",
            MapStyle::Swisstopo => "swisstopo",
        }
    }

    /// Parse a style selector tag.
    ///
    /// `light-simple` and `dark-simple` select the simple style together with
    /// a theme; plain tags leave the theme untouched.
    pub fn from_tag(tag: &str) -> Option<(MapStyle, Option<Theme>)> {
        match tag {
            "light-simple" => Some((MapStyle::Simple, Some(Theme::Light))),
            "dark-simple" => Some((MapStyle::Simple, Some(Theme::Dark))),
            _ => MapStyle::ALL
                .iter()
                .copied()
                .find(|s| s.tag() == tag)
                .map(|s| (s, None)),
        }
    }

    /// Leaflet tile URL template. Only the simple style depends on the theme.
    pub fn tile_url(&self, theme: Theme) -> &'static str {
        match self {
            MapStyle::Simple => match theme {
                Theme::Light => CARTO_LIGHT,
                Theme::Dark => CARTO_DARK,
            },
            MapStyle::Satellite => {
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}"
            }
            MapStyle::Terrain => "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png",
            MapStyle::Street => "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            MapStyle::Swisstopo => {
                "https://wmts.geo.admin.ch/1.0.0/ch.swisstopo.pixelkarte-farbe/default/current/3857/{z}/{x}/{y}.jpeg"
            }
        }
    }

    /// Attribution HTML shown by Leaflet.
    pub fn attribution(&self) -> &'static str {
        match self {
            MapStyle::Simple | MapStyle::Street => OSM_ATTRIBUTION,
            MapStyle::Satellite => "&copy; <a href=\"https://www.esri.com/\">Esri</a>",
            MapStyle::Terrain => "&copy; <a href=\"https://opentopomap.org/\">OpenTopoMap</a>",
            MapStyle::Swisstopo => {
                "&copy; <a href=\"https://www.swisstopo.admin.ch/\">swisstopo</a>"
            }
        }
    }

    /// The swisstopo layer also needs the federal office notice strip.
    pub fn needs_swisstopo_notice(&self) -> bool {
        matches!(self, MapStyle::Swisstopo)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MapStyle::Simple => "Simple",
            MapStyle::Satellite => "Satellite",
            MapStyle::Terrain => "Terrain",
            MapStyle::Street => "Street",
            MapStyle::Swisstopo => "SwissTopo",
        }
    }
}
