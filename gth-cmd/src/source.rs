//! Where a command reads the dataset from: a local file or the network.

use anyhow::Context;
use clap::Args;
use gth_data::fetch::fetch_dataset;
use gth_data::{Dataset, DEFAULT_DATASET_URL};
use log::info;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Dataset URL, used when no --input is given
    #[arg(long, default_value = DEFAULT_DATASET_URL)]
    pub url: String,

    /// Local dataset file (.json or .json.gz); takes precedence over --url
    #[arg(short = 'i', long)]
    pub input: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(String),
}

impl SourceArgs {
    pub fn source(&self) -> Source {
        match &self.input {
            Some(path) => Source::File(path.clone()),
            None => Source::Url(self.url.clone()),
        }
    }
}

/// HTTP client shared by the network commands.
pub fn http_client() -> anyhow::Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()?)
}

/// Load and validate the dataset from wherever the arguments point.
pub async fn load_dataset(args: &SourceArgs) -> anyhow::Result<Dataset> {
    match args.source() {
        Source::File(path) => {
            info!("Reading dataset from {}", path.display());
            Dataset::from_path(&path)
                .with_context(|| format!("Failed to load dataset from {}", path.display()))
        }
        Source::Url(url) => {
            let client = http_client()?;
            fetch_dataset(&client, &url)
                .await
                .with_context(|| format!("Failed to fetch dataset from {}", url))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_wins_over_url() {
        let args = SourceArgs {
            url: "https://example.com/data.json".to_string(),
            input: Some(PathBuf::from("data.json")),
        };
        assert_eq!(args.source(), Source::File(PathBuf::from("data.json")));
    }

    #[test]
    fn test_url_when_no_input() {
        let args = SourceArgs {
            url: DEFAULT_DATASET_URL.to_string(),
            input: None,
        };
        assert_eq!(args.source(), Source::Url(DEFAULT_DATASET_URL.to_string()));
    }

    #[tokio::test]
    async fn test_load_fixture_file() {
        let args = SourceArgs {
            url: DEFAULT_DATASET_URL.to_string(),
            input: Some(PathBuf::from(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/../fixtures/global-temperature-sample.json"
            ))),
        };
        let dataset = load_dataset(&args).await.unwrap();
        assert_eq!(dataset.monthly_variance.len(), 336);
    }

    #[tokio::test]
    async fn test_missing_file_names_path() {
        let args = SourceArgs {
            url: DEFAULT_DATASET_URL.to_string(),
            input: Some(PathBuf::from("/nonexistent/gth/data.json")),
        };
        let err = load_dataset(&args).await.unwrap_err();
        assert!(err.to_string().contains("/nonexistent/gth/data.json"));
    }
}
