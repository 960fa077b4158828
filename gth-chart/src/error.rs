//! Error types for chart construction.

use gth_data::DatasetError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    /// The dataset is absent or failed validation
    #[error("Dataset unusable: {0}")]
    Data(#[from] DatasetError),

    /// Chart dimensions leave no room to draw
    #[error("Invalid chart config: {0}")]
    InvalidConfig(String),

    /// Config file was not valid JSON
    #[error("Failed to parse chart config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Writing the rendered document failed
    #[error("Failed to write chart markup: {0}")]
    Render(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
