use serde::{Deserialize, Serialize};

use crate::difficulty::Difficulty;

#[cfg(feature = "api")]
use log::info;
#[cfg(feature = "api")]
use reqwest::{Client, StatusCode};

/// Static path the web app requests the dataset from.
pub const DATASET_PATH: &str = "/data/locations.json";

/// Country value matched by the "Switzerland only" filter.
pub const SWITZERLAND: &str = "Switzerland";

/// Province value matched by the "Graubünden only" filter.
pub const GRAUBUNDEN: &str = "Graubünden";

/// A photographed location from `locations.json`.
///
/// Records are loaded once per session and never mutated. Extra JSON fields
/// are ignored; missing optional fields deserialize as `None`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Image path or URL; unique within a session
    pub filename: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub country: String,
    /// Capture date as `DD-MM-YYYY`
    #[serde(default)]
    pub date: String,
    /// Capture time, already formatted for display
    #[serde(default)]
    pub time: String,
    /// `[latitude, longitude]` in WGS84 decimal degrees
    pub coordinates: [f64; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,
    /// Meters above sea level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Raw difficulty key, kept verbatim even when unrecognized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    /// Editor's choice flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hike_distance_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_gain_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nearest_city: Option<String>,
}

impl Location {
    pub fn lat(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn lng(&self) -> f64 {
        self.coordinates[1]
    }

    /// True only when `recommended` is explicitly `true`.
    pub fn is_recommended(&self) -> bool {
        self.recommended == Some(true)
    }

    /// The recognized difficulty level, or `None` when absent or unknown.
    pub fn difficulty_level(&self) -> Option<Difficulty> {
        self.difficulty.as_deref().and_then(Difficulty::from_key)
    }

    /// Parse a JSON array of location records.
    pub fn parse_locations_json(json: &str) -> Result<Vec<Location>, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse a JSON array of location records, degrading to an empty dataset.
    ///
    /// A dataset that fails to parse is reported through the log and then
    /// treated exactly like a dataset with no locations.
    pub fn parse_or_empty(json: &str) -> Vec<Location> {
        match Location::parse_locations_json(json) {
            Ok(locations) => {
                log::debug!("Parsed {} locations", locations.len());
                locations
            }
            Err(e) => {
                log::error!("Error loading locations: {}", e);
                Vec::new()
            }
        }
    }

    /// Fetch the dataset with a single GET request.
    ///
    /// Network errors, non-200 responses and malformed bodies all yield an
    /// empty vector. There is no retry.
    #[cfg(feature = "api")]
    pub async fn fetch_locations(client: &Client, url: &str) -> Vec<Location> {
        let response = match client.get(url).send().await {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Failed to fetch locations from {}: {}", url, e);
                return Vec::new();
            }
        };

        if response.status() != StatusCode::OK {
            log::warn!("Bad response status for {}: {}", url, response.status());
            return Vec::new();
        }

        match response.text().await {
            Ok(body) => {
                let locations = Location::parse_or_empty(&body);
                info!("Fetched {} locations from {}", locations.len(), url);
                locations
            }
            Err(e) => {
                log::warn!("Failed to read response body from {}: {}", url, e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "filename": "/images/lai-da-palpuogna.jpg",
            "location": "Lai da Palpuogna",
            "province": "Graubünden",
            "country": "Switzerland",
            "date": "14-10-2023",
            "time": "10:42",
            "coordinates": [46.5786, 9.7706],
            "short": "Palpuogna",
            "height": 1918,
            "difficulty": "hiking",
            "recommended": true,
            "hike_distance_km": 1.2,
            "elevation_gain_m": 40,
            "nearest_city": "Bergün",
            "camera": "ignored extra field"
        },
        {
            "filename": "/images/tre-cime.jpg",
            "location": "Tre Cime di Lavaredo",
            "province": "Veneto",
            "country": "Italy",
            "date": "02-08-2022",
            "time": "06:15",
            "coordinates": [46.6187, 12.3022]
        }
    ]"#;

    #[test]
    fn test_parse_locations_json() {
        let locations = Location::parse_locations_json(SAMPLE).unwrap();
        assert_eq!(locations.len(), 2);

        let first = &locations[0];
        assert_eq!(first.filename, "/images/lai-da-palpuogna.jpg");
        assert_eq!(first.province, "Graubünden");
        assert!((first.lat() - 46.5786).abs() < f64::EPSILON);
        assert!((first.lng() - 9.7706).abs() < f64::EPSILON);
        assert_eq!(first.height, Some(1918.0));
        assert_eq!(first.difficulty_level(), Some(Difficulty::Hiking));
        assert!(first.is_recommended());
        assert_eq!(first.nearest_city.as_deref(), Some("Bergün"));

        let second = &locations[1];
        assert_eq!(second.short, None);
        assert_eq!(second.height, None);
        assert_eq!(second.difficulty, None);
        assert!(!second.is_recommended());
    }

    #[test]
    fn test_unknown_difficulty_kept_verbatim() {
        let json = r#"[{"filename":"a.jpg","coordinates":[46.0,9.0],"difficulty":"via_ferrata"}]"#;
        let locations = Location::parse_locations_json(json).unwrap();
        assert_eq!(locations[0].difficulty.as_deref(), Some("via_ferrata"));
        assert_eq!(locations[0].difficulty_level(), None);
    }

    #[test]
    fn test_null_optional_fields() {
        let json = r#"[{"filename":"a.jpg","coordinates":[46.0,9.0],"height":null,"recommended":null}]"#;
        let locations = Location::parse_locations_json(json).unwrap();
        assert_eq!(locations[0].height, None);
        assert_eq!(locations[0].recommended, None);
    }

    #[test]
    fn test_parse_or_empty_on_malformed_input() {
        assert!(Location::parse_or_empty("<html>404</html>").is_empty());
        assert!(Location::parse_or_empty("[{\"filename\": \"x.jpg\"}]").is_empty());
        assert!(Location::parse_or_empty("[]").is_empty());
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let locations = Location::parse_locations_json(SAMPLE).unwrap();
        let json = serde_json::to_string(&locations[1]).unwrap();
        assert!(!json.contains("height"));
        assert!(!json.contains("recommended"));
        let back: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(back, locations[1]);
    }
}
