//! Error types for dataset parsing and fetching.

use thiserror::Error;

/// Main error type for dataset operations
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Body was not valid dataset JSON
    #[error("Failed to parse dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing CSV output failed
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The dataset has no monthly variance records
    #[error("Dataset contains no monthly variance records")]
    Empty,

    /// A record carries a month outside 1-12
    #[error("Record for year {year} has month {month}, expected 1-12")]
    MonthOutOfRange { year: i32, month: u32 },

    /// HTTP request failed
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[cfg(feature = "api")]
    #[error("GET {url} returned status {status}")]
    HttpStatus { url: String, status: u16 },
}

/// Type alias for Results using DatasetError
pub type Result<T> = std::result::Result<T, DatasetError>;
