//! Native HTTP client for the dataset (feature `api`).
//!
//! A single unauthenticated GET; no retry.

use crate::dataset::Dataset;
use crate::error::{DatasetError, Result};
use log::{info, warn};
use reqwest::Client;

/// Fetch the raw response body, failing on any non-success status.
pub async fn fetch_dataset_text(client: &Client, url: &str) -> Result<String> {
    info!("Fetching dataset from {}", url);
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        warn!("Bad response status for {}: {}", url, status);
        return Err(DatasetError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    let body = response.text().await?;
    info!("Received {} bytes from {}", body.len(), url);
    Ok(body)
}

/// Fetch and parse the dataset.
pub async fn fetch_dataset(client: &Client, url: &str) -> Result<Dataset> {
    let body = fetch_dataset_text(client, url).await?;
    Dataset::from_json(&body)
}
