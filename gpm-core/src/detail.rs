//! Derived text for the location detail panel.

use crate::i18n::Language;
use crate::location::Location;

/// Short label when present, otherwise the full location name.
pub fn display_label(location: &Location) -> &str {
    location
        .short
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(&location.location)
}

/// Height rounded to whole meters.
pub fn rounded_height(location: &Location) -> Option<i64> {
    location.height.map(|h| h.round() as i64)
}

/// One-sentence description of how the spot is reached.
///
/// Returns `None` unless at least one of distance, elevation gain or nearest
/// city is known. Unknown pieces render as `?`.
pub fn hike_summary(location: &Location, language: Language) -> Option<String> {
    if location.hike_distance_km.is_none()
        && location.elevation_gain_m.is_none()
        && location.nearest_city.is_none()
    {
        return None;
    }

    let place = display_label(location);
    let distance = optional_number(location.hike_distance_km);
    let gain = optional_number(location.elevation_gain_m);
    let city = location.nearest_city.as_deref().unwrap_or("?");

    let text = match language {
        Language::En => format!(
            "This specific location near/in the area of {} is reachable via a {} km hike with {} m total elevation gain from {}.",
            place, distance, gain, city
        ),
        Language::De => format!(
            "Dieser spezifische Ort in der Nähe von {} ist über eine {} km lange Wanderung mit insgesamt {} m Höhenunterschied von {} erreichbar.",
            place, distance, gain, city
        ),
        Language::It => format!(
            "Questa località specifica nell'area di {} è raggiungibile tramite un'escursione di {} km con un dislivello totale di {} m da {}.",
            place, distance, gain, city
        ),
        Language::Fr => format!(
            "Cet emplacement spécifique près de {} est accessible via une randonnée de {} km avec un gain d'altitude total de {} m depuis {}.",
            place, distance, gain, city
        ),
    };
    Some(text)
}

fn optional_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "?".to_string())
}
