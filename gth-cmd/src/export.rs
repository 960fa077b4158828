//! `summary` and `export`: read-only views of the dataset.

use anyhow::Context;
use log::info;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::source::{load_dataset, SourceArgs};

/// Print the dataset summary to stdout, as text or JSON.
pub async fn run_summary(source: &SourceArgs, json: bool) -> anyhow::Result<()> {
    let dataset = load_dataset(source).await?;
    let summary = dataset.summary()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary);
    }
    Ok(())
}

/// Write every record as CSV.
pub async fn run_export(source: &SourceArgs, output: &Path) -> anyhow::Result<()> {
    let dataset = load_dataset(source).await?;
    let file = File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    dataset.to_csv(BufWriter::new(file))?;
    info!(
        "Exported {} records to {}",
        dataset.monthly_variance.len(),
        output.display()
    );
    Ok(())
}
