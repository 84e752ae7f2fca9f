//! `swiss-grid` and `links` subcommands.

use crate::dataset::load_dataset;
use anyhow::Context;
use gpm_core::detail::display_label;
use gpm_core::i18n::Language;
use gpm_core::links::{coordinates_text, directions_url, swisstopo_url};
use gpm_core::location::Location;
use gpm_core::swiss_grid::wgs84_to_swiss_grid;

fn parse_language(code: &str) -> anyhow::Result<Language> {
    Language::from_code(code)
        .with_context(|| format!("Unsupported language '{}', expected en, de, it or fr", code))
}

pub fn swiss_grid_report(lat: f64, lng: f64, language: Language) -> String {
    let grid = wgs84_to_swiss_grid(lat, lng);
    format!(
        "E: {}\nN: {}\n{}\n",
        grid.e,
        grid.n,
        swisstopo_url(lat, lng, language)
    )
}

pub fn links_report(location: &Location, language: Language) -> String {
    format!(
        "{}\n{}\n{}\n{}\n",
        display_label(location),
        coordinates_text(location.lat(), location.lng()),
        swisstopo_url(location.lat(), location.lng(), language),
        directions_url(location.lat(), location.lng()),
    )
}

pub fn run_swiss_grid(lat: f64, lng: f64, lang: &str) -> anyhow::Result<()> {
    let language = parse_language(lang)?;
    print!("{}", swiss_grid_report(lat, lng, language));
    Ok(())
}

pub async fn run_links(input: &str, filename: &str, lang: &str) -> anyhow::Result<()> {
    let language = parse_language(lang)?;
    let all = load_dataset(input).await?;
    let location = all
        .iter()
        .find(|l| l.filename == filename)
        .with_context(|| format!("No location with filename '{}' in {}", filename, input))?;
    print!("{}", links_report(location, language));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swiss_grid_report() {
        let report = swiss_grid_report(46.6, 9.8, Language::It);
        assert_eq!(
            report,
            "E: 2780909\nN: 1163693\nhttps://map.geo.admin.ch/?E=2780909&N=1163693&zoom=7&bgLayer=ch.swisstopo.pixelkarte-farbe&lang=it\n"
        );
    }

    #[test]
    fn test_links_report() {
        let json = r#"[{"filename":"chur.jpg","location":"Chur Altstadt","short":"Chur","coordinates":[46.8499,9.5331]}]"#;
        let all = Location::parse_locations_json(json).unwrap();
        let report = links_report(&all[0], Language::En);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "Chur");
        assert_eq!(lines[1], "46.8499, 9.5331");
        assert!(lines[2].contains("E=2759725&N=1190883"));
        assert_eq!(
            lines[3],
            "https://www.google.com/maps/dir/?api=1&destination=46.8499,9.5331"
        );
    }

    #[test]
    fn test_parse_language() {
        assert_eq!(parse_language("fr").unwrap(), Language::Fr);
        assert!(parse_language("rm").is_err());
    }
}
