//! Command implementations for the GTH CLI.
//!
//! Provides subcommands for downloading the global temperature dataset and
//! rendering it as a static heatmap (SVG or self-contained HTML).

use clap::Subcommand;
use gth_data::DEFAULT_DATASET_URL;
use std::path::PathBuf;

pub mod export;
pub mod fetch;
pub mod render;
pub mod source;

use render::{ChartArgs, OutputFormat};
use source::SourceArgs;

#[derive(Subcommand)]
pub enum Command {
    /// Download the dataset and save the raw JSON (gzipped for `.gz` paths)
    Fetch {
        /// Dataset URL
        #[arg(long, default_value = DEFAULT_DATASET_URL)]
        url: String,

        /// Output path for the dataset JSON
        #[arg(short = 'o', long)]
        output: PathBuf,
    },

    /// Render the heatmap as a static SVG or HTML page
    Render {
        #[command(flatten)]
        source: SourceArgs,

        /// Output path; `.html` selects the HTML page unless --format is given
        #[arg(short = 'o', long)]
        output: PathBuf,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        #[command(flatten)]
        chart: ChartArgs,
    },

    /// Print record count, year span and temperature extremes
    Summary {
        #[command(flatten)]
        source: SourceArgs,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export the records as CSV (year,month,variance,temperature)
    Export {
        #[command(flatten)]
        source: SourceArgs,

        /// Output path for the CSV
        #[arg(short = 'o', long)]
        output: PathBuf,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fetch { url, output } => fetch::run_fetch(&url, &output).await,
        Command::Render {
            source,
            output,
            format,
            chart,
        } => render::run_render(&source, &output, format, &chart).await,
        Command::Summary { source, json } => export::run_summary(&source, json).await,
        Command::Export { source, output } => export::run_export(&source, &output).await,
    }
}
