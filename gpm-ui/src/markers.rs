//! Marker descriptions handed to the Leaflet bridge.

use gpm_core::detail::display_label;
use gpm_core::i18n::{Language, Translation};
use gpm_core::location::Location;
use serde::Serialize;

const MARKER_DATE: Translation = Translation::new("Date", "Datum", "Data", "Date");
const MARKER_TIME: Translation = Translation::new("Time", "Zeit", "Ora", "Heure");

/// One map marker, serialized to JSON for `window.gpmSetMarkers`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerSpec {
    pub filename: String,
    pub lat: f64,
    pub lng: f64,
    /// Inner HTML of the Leaflet `DivIcon`
    pub html: String,
    pub tooltip: String,
    pub large: bool,
}

/// Escape text for interpolation into HTML attributes and content.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn marker_html(location: &Location, large: bool) -> String {
    let size = if large { "marker-large" } else { "marker-small" };
    let badge = if location.is_recommended() {
        r#"<span class="marker-badge">&#9733;</span>"#
    } else {
        ""
    };
    format!(
        r#"<div class="marker-wrapper"><div class="marker-image {}"><img src="{}" alt="{}" loading="lazy"/></div>{}</div>"#,
        size,
        escape_html(&location.filename),
        escape_html(display_label(location)),
        badge
    )
}

fn marker_tooltip(location: &Location, language: Language) -> String {
    format!(
        "<strong>{}</strong><br/>{}: {}<br/>{}: {}",
        escape_html(&location.location),
        MARKER_DATE.get(language),
        escape_html(&location.date),
        MARKER_TIME.get(language),
        escape_html(&location.time)
    )
}

/// Build markers for every filtered location.
///
/// A marker is drawn large when it is the selected location and the detail
/// panel is open, or when it is hovered in the gallery grid.
pub fn marker_specs(
    locations: &[Location],
    selected: Option<&str>,
    hovered: Option<&str>,
    panel_open: bool,
    language: Language,
) -> Vec<MarkerSpec> {
    locations
        .iter()
        .map(|location| {
            let is_active = selected == Some(location.filename.as_str());
            let is_hovered = hovered == Some(location.filename.as_str());
            let large = (is_active && panel_open) || is_hovered;
            MarkerSpec {
                filename: location.filename.clone(),
                lat: location.lat(),
                lng: location.lng(),
                html: marker_html(location, large),
                tooltip: marker_tooltip(location, language),
                large,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locations() -> Vec<Location> {
        let json = r#"[
            {"filename":"/img/a.jpg","location":"Lai Nair","date":"01-07-2024","time":"07:10","coordinates":[46.80,10.23],"recommended":true},
            {"filename":"/img/b.jpg","location":"Piz \"Lad\"","short":"Lad","date":"02-07-2024","time":"18:30","coordinates":[46.81,10.31]}
        ]"#;
        Location::parse_locations_json(json).unwrap()
    }

    #[test]
    fn test_large_only_when_active_with_panel_or_hovered() {
        let all = locations();
        let specs = marker_specs(&all, Some("/img/a.jpg"), None, false, Language::En);
        assert!(specs.iter().all(|m| !m.large));

        let specs = marker_specs(&all, Some("/img/a.jpg"), None, true, Language::En);
        assert!(specs[0].large);
        assert!(!specs[1].large);

        let specs = marker_specs(&all, None, Some("/img/b.jpg"), false, Language::En);
        assert!(!specs[0].large);
        assert!(specs[1].large);
    }

    #[test]
    fn test_marker_html_and_tooltip() {
        let all = locations();
        let specs = marker_specs(&all, None, None, false, Language::De);
        assert!(specs[0].html.contains("marker-badge"));
        assert!(!specs[1].html.contains("marker-badge"));
        assert!(specs[1].html.contains(r#"alt="Lad""#));
        assert!(specs[1].tooltip.contains("Piz &quot;Lad&quot;"));
        assert!(specs[1].tooltip.contains("Zeit: 18:30"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<a href='x'>&</a>"), "&lt;a href=&#39;x&#39;&gt;&amp;&lt;/a&gt;");
    }
}
