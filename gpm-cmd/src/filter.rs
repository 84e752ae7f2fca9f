//! `filter` subcommand: run the map's filter pipeline from the command line.

use crate::dataset::load_dataset;
use crate::OutputFormat;
use anyhow::Context;
use gpm_core::bounds::GeoBounds;
use gpm_core::location::Location;
use gpm_data::filter::{filter_locations, DifficultyRange, FilterCriteria, HeightRange};
use gpm_data::ordering::editors_choice_first;
use gpm_data::viewport::visible_within_bounds;
use log::info;

/// Parsed-from-CLI options for the `filter` subcommand.
#[derive(Debug, Clone)]
pub struct FilterOptions {
    pub editors_choice: bool,
    pub switzerland: bool,
    pub graubunden: bool,
    /// "MIN..MAX" difficulty indices
    pub difficulty: String,
    /// "MIN..MAX" meters
    pub height: String,
    /// "SOUTH,WEST,NORTH,EAST"
    pub bounds: Option<String>,
    pub format: OutputFormat,
}

/// Split "MIN..MAX" into its two halves.
fn split_range(s: &str) -> anyhow::Result<(&str, &str)> {
    s.split_once("..")
        .map(|(a, b)| (a.trim(), b.trim()))
        .with_context(|| format!("Expected MIN..MAX, got '{}'", s))
}

pub fn parse_difficulty_range(s: &str) -> anyhow::Result<DifficultyRange> {
    let (min, max) = split_range(s)?;
    let min: usize = min
        .parse()
        .with_context(|| format!("Invalid difficulty index '{}'", min))?;
    let max: usize = max
        .parse()
        .with_context(|| format!("Invalid difficulty index '{}'", max))?;
    Ok(DifficultyRange::new(min, max))
}

pub fn parse_height_range(s: &str) -> anyhow::Result<HeightRange> {
    let (min, max) = split_range(s)?;
    let min: f64 = min
        .parse()
        .with_context(|| format!("Invalid height '{}'", min))?;
    let max: f64 = max
        .parse()
        .with_context(|| format!("Invalid height '{}'", max))?;
    Ok(HeightRange::new(min, max))
}

pub fn parse_bounds(s: &str) -> anyhow::Result<GeoBounds> {
    let parts = s
        .split(',')
        .map(|p| {
            p.trim()
                .parse::<f64>()
                .with_context(|| format!("Invalid coordinate '{}'", p.trim()))
        })
        .collect::<anyhow::Result<Vec<f64>>>()?;
    match parts.as_slice() {
        [south, west, north, east] => {
            if south > north {
                anyhow::bail!("South {} is above north {}", south, north);
            }
            Ok(GeoBounds::new(*south, *west, *north, *east))
        }
        _ => anyhow::bail!("Expected SOUTH,WEST,NORTH,EAST, got '{}'", s),
    }
}

impl FilterOptions {
    pub fn criteria(&self) -> anyhow::Result<FilterCriteria> {
        Ok(FilterCriteria {
            editors_choice_only: self.editors_choice,
            switzerland_only: self.switzerland,
            graubunden_only: self.graubunden,
            difficulty_range: parse_difficulty_range(&self.difficulty)?,
            height_range: parse_height_range(&self.height)?,
        })
    }
}

/// Filter, optionally clip to a viewport, and order editor's choice first.
pub fn apply(all: &[Location], options: &FilterOptions) -> anyhow::Result<Vec<Location>> {
    let criteria = options.criteria()?;
    let filtered = filter_locations(all, &criteria);
    let in_view = match &options.bounds {
        Some(b) => visible_within_bounds(&filtered, &parse_bounds(b)?),
        None => filtered,
    };
    Ok(editors_choice_first(&in_view))
}

pub fn render(locations: &[Location], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(locations)?),
        OutputFormat::Csv => render_csv(locations),
        OutputFormat::Table => Ok(render_table(locations)),
    }
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn render_csv(locations: &[Location]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record([
        "filename",
        "location",
        "province",
        "country",
        "latitude",
        "longitude",
        "height",
        "difficulty",
        "recommended",
    ])?;
    for l in locations {
        wtr.write_record([
            l.filename.clone(),
            l.location.clone(),
            l.province.clone(),
            l.country.clone(),
            l.lat().to_string(),
            l.lng().to_string(),
            optional(l.height),
            l.difficulty.clone().unwrap_or_default(),
            l.is_recommended().to_string(),
        ])?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV: {}", e))?;
    Ok(String::from_utf8(bytes)?)
}

fn render_table(locations: &[Location]) -> String {
    let mut out = String::new();
    for l in locations {
        let star = if l.is_recommended() { "*" } else { " " };
        let height = l
            .height
            .map(|h| format!("{:.0} m", h))
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{} {:<32} {:<12} {:<12} {:>8.4} {:>8.4} {:>7}  {}\n",
            star,
            l.location,
            l.province,
            l.country,
            l.lat(),
            l.lng(),
            height,
            l.difficulty.as_deref().unwrap_or("-"),
        ));
    }
    out.push_str(&format!("{} locations\n", locations.len()));
    out
}

pub async fn run_filter(input: &str, options: &FilterOptions) -> anyhow::Result<()> {
    let all = load_dataset(input).await?;
    let result = apply(&all, options)?;
    info!("{} of {} locations match", result.len(), all.len());
    print!("{}", render(&result, options.format)?);
    Ok(())
}
