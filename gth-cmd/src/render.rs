//! `render`: lay out the dataset and write a static SVG or HTML page.

use anyhow::Context;
use clap::{Args, ValueEnum};
use gth_chart::html::{default_description, render_html, DEFAULT_TITLE};
use gth_chart::svg::render_svg;
use gth_chart::{ChartConfig, HeatmapLayout};
use gth_data::Dataset;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::source::{load_dataset, SourceArgs};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Html,
}

/// Chart dimension flags. Flags override the config file, which overrides defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct ChartArgs {
    /// JSON file with chart dimensions (see ChartConfig)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Surface width
    #[arg(long)]
    pub width: Option<f64>,

    /// Surface height
    #[arg(long)]
    pub height: Option<f64>,

    /// Padding around the cell area
    #[arg(long)]
    pub padding: Option<f64>,

    /// Label x-axis years divisible by this
    #[arg(long)]
    pub year_tick_interval: Option<i32>,

    /// Page title (HTML only)
    #[arg(long)]
    pub title: Option<String>,
}

/// Explicit format wins; otherwise `.html`/`.htm` selects HTML and anything else SVG.
pub fn resolve_format(explicit: Option<OutputFormat>, output: &Path) -> OutputFormat {
    if let Some(format) = explicit {
        return format;
    }
    match output.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm") => {
            OutputFormat::Html
        }
        _ => OutputFormat::Svg,
    }
}

/// Merge defaults, the optional config file and the command-line flags.
pub fn build_config(args: &ChartArgs) -> anyhow::Result<ChartConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            ChartConfig::from_json_str(&text)?
        }
        None => ChartConfig::default(),
    };

    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(padding) = args.padding {
        config.padding = padding;
    }
    if let Some(interval) = args.year_tick_interval {
        config.year_tick_interval = interval;
    }

    config.validate()?;
    Ok(config)
}

/// Render the document text for `dataset`.
pub fn render_document(
    dataset: &Dataset,
    config: &ChartConfig,
    format: OutputFormat,
    title: Option<&str>,
) -> anyhow::Result<String> {
    let layout = HeatmapLayout::new(dataset, config)?;
    let document = match format {
        OutputFormat::Svg => render_svg(&layout)?,
        OutputFormat::Html => render_html(
            &layout,
            title.unwrap_or(DEFAULT_TITLE),
            &default_description(&layout),
        )?,
    };
    Ok(document)
}

pub async fn run_render(
    source: &SourceArgs,
    output: &Path,
    format: Option<OutputFormat>,
    chart: &ChartArgs,
) -> anyhow::Result<()> {
    let config = build_config(chart)?;
    let dataset = load_dataset(source).await?;
    let format = resolve_format(format, output);

    let document = render_document(&dataset, &config, format, chart.title.as_deref())?;
    fs::write(output, document)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!(
        "Rendered {} cells as {:?} to {}",
        dataset.monthly_variance.len(),
        format,
        output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_JSON: &str = include_str!("../../fixtures/global-temperature-sample.json");

    #[test]
    fn test_resolve_format() {
        assert_eq!(resolve_format(None, Path::new("out.svg")), OutputFormat::Svg);
        assert_eq!(resolve_format(None, Path::new("out.HTML")), OutputFormat::Html);
        assert_eq!(resolve_format(None, Path::new("out.htm")), OutputFormat::Html);
        assert_eq!(resolve_format(None, Path::new("out")), OutputFormat::Svg);
        assert_eq!(
            resolve_format(Some(OutputFormat::Svg), Path::new("out.html")),
            OutputFormat::Svg
        );
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = ChartArgs {
            width: Some(1600.0),
            year_tick_interval: Some(20),
            ..ChartArgs::default()
        };
        let config = build_config(&args).unwrap();
        assert_eq!(config.width, 1600.0);
        assert_eq!(config.height, 600.0);
        assert_eq!(config.year_tick_interval, 20);
    }

    #[test]
    fn test_invalid_flags_rejected() {
        let args = ChartArgs {
            padding: Some(700.0),
            ..ChartArgs::default()
        };
        assert!(build_config(&args).is_err());
    }

    #[test]
    fn test_config_file_then_flags() {
        let dir = std::env::temp_dir().join(format!("gth-render-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("chart.json");
        fs::write(&path, r#"{"width": 1400, "height": 700}"#).unwrap();

        let args = ChartArgs {
            config: Some(path),
            height: Some(800.0),
            ..ChartArgs::default()
        };
        let config = build_config(&args).unwrap();
        assert_eq!(config.width, 1400.0);
        assert_eq!(config.height, 800.0);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_render_document_formats() {
        let dataset = Dataset::from_json(SAMPLE_JSON).unwrap();
        let config = ChartConfig::default();

        let svg = render_document(&dataset, &config, OutputFormat::Svg, None).unwrap();
        assert!(svg.starts_with("<?xml"));
        assert_eq!(svg.matches(r#"class="cell""#).count(), 336);

        let html = render_document(&dataset, &config, OutputFormat::Html, Some("Heat")).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<h1 id="title">Heat</h1>"#));
    }
}
