//! `fetch`: download the dataset and keep the raw body on disk.

use anyhow::Context;
use flate2::write::GzEncoder;
use flate2::Compression;
use gth_data::dataset::is_gzip_path;
use gth_data::fetch::fetch_dataset_text;
use gth_data::Dataset;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::source::http_client;

/// Fetch the dataset, validate it, and write the body unchanged.
pub async fn run_fetch(url: &str, output: &Path) -> anyhow::Result<()> {
    let client = http_client()?;
    let body = fetch_dataset_text(&client, url).await?;
    let dataset = Dataset::from_json(&body).context("Fetched body is not a usable dataset")?;

    write_body(output, &body)?;
    info!(
        "Saved {} records to {}",
        dataset.monthly_variance.len(),
        output.display()
    );
    Ok(())
}

/// Write `body` to `path`, gzip-compressed when the path ends in `.gz`.
pub fn write_body(path: &Path, body: &str) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    if is_gzip_path(path) {
        let mut encoder = GzEncoder::new(writer, Compression::default());
        encoder.write_all(body.as_bytes())?;
        encoder.finish()?.flush()?;
    } else {
        writer.write_all(body.as_bytes())?;
        writer.flush()?;
    }
    Ok(())
}
