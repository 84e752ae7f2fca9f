//! Command implementations for the GPM CLI.
//!
//! Provides subcommands for filtering a locations dataset the same way the
//! map does, and for building the outbound map links of a location.

use clap::{Subcommand, ValueEnum};

pub mod dataset;
pub mod filter;
pub mod links;

/// How filtered locations are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
pub enum Command {
    /// Filter a locations dataset and print it in gallery order
    Filter {
        /// Path or http(s) URL of locations.json
        #[arg(short = 'i', long)]
        input: String,

        /// Only include editor's choice locations
        #[arg(long)]
        editors_choice: bool,

        /// Only include locations in Switzerland
        #[arg(long)]
        switzerland: bool,

        /// Only include locations in Graubünden
        #[arg(long)]
        graubunden: bool,

        /// Inclusive difficulty index range, 0 (hiking) to 4 (difficult alpine hiking)
        #[arg(long, default_value = "0..4")]
        difficulty: String,

        /// Inclusive height range in meters
        #[arg(long, default_value = "100..4000")]
        height: String,

        /// Viewport as SOUTH,WEST,NORTH,EAST; omit to keep every filtered location
        #[arg(long, allow_hyphen_values = true)]
        bounds: Option<String>,

        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Project WGS84 coordinates to the Swiss grid
    SwissGrid {
        /// Latitude in decimal degrees
        #[arg(allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(allow_hyphen_values = true)]
        lng: f64,

        /// Language of the generated map link (en, de, it, fr)
        #[arg(long, default_value = "en")]
        lang: String,
    },

    /// Print the map links of one location
    Links {
        /// Path or http(s) URL of locations.json
        #[arg(short = 'i', long)]
        input: String,

        /// Filename identifying the location
        filename: String,

        /// Language of the generated map link (en, de, it, fr)
        #[arg(long, default_value = "en")]
        lang: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Filter {
            input,
            editors_choice,
            switzerland,
            graubunden,
            difficulty,
            height,
            bounds,
            format,
        } => {
            let options = filter::FilterOptions {
                editors_choice,
                switzerland,
                graubunden,
                difficulty,
                height,
                bounds,
                format,
            };
            filter::run_filter(&input, &options).await
        }
        Command::SwissGrid { lat, lng, lang } => links::run_swiss_grid(lat, lng, &lang),
        Command::Links {
            input,
            filename,
            lang,
        } => links::run_links(&input, &filename, &lang).await,
    }
}
