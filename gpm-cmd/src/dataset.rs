//! Loading `locations.json` from disk or over HTTP.

use gpm_core::location::Location;
use log::info;

fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Load the dataset from a file path or an http(s) URL.
///
/// An unreachable URL or a malformed body degrades to an empty dataset, the
/// same way the web app behaves. A missing local file is an error, since it
/// is almost always a typo on the command line.
pub async fn load_dataset(input: &str) -> anyhow::Result<Vec<Location>> {
    if is_url(input) {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        return Ok(Location::fetch_locations(&client, input).await);
    }

    let body = tokio::fs::read_to_string(input)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", input, e))?;
    let locations = Location::parse_or_empty(&body);
    info!("Loaded {} locations from {}", locations.len(), input);
    Ok(locations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("gpm-cmd-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_is_url() {
        assert!(is_url("https://example.org/data/locations.json"));
        assert!(is_url("http://localhost:8080/data/locations.json"));
        assert!(!is_url("public/data/locations.json"));
    }

    #[tokio::test]
    async fn test_load_dataset_from_file() {
        let path = temp_file(
            "ok.json",
            r#"[{"filename":"a.jpg","coordinates":[46.6,9.8],"country":"Switzerland"}]"#,
        );
        let locations = load_dataset(path.to_str().unwrap()).await.unwrap();
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].country, "Switzerland");
        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn test_malformed_file_is_empty_dataset() {
        let path = temp_file("bad.json", "{not json");
        let locations = load_dataset(path.to_str().unwrap()).await.unwrap();
        assert!(locations.is_empty());
        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn test_missing_file_is_error() {
        assert!(load_dataset("/nonexistent/gpm/locations.json").await.is_err());
    }
}
