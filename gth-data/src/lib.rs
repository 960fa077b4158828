//! Global monthly temperature anomaly dataset.
//!
//! This crate provides:
//! - `dataset`: the `Dataset` / `Record` model with JSON, gzip and CSV I/O
//! - `summary`: descriptive statistics over a dataset
//! - `fetch`: a reqwest client for the public dataset (feature `api`)
//!
//! The dataset is a base temperature plus an ordered list of
//! `{year, month, variance}` records, where variance is the deviation in °C
//! from the base temperature.

pub mod dataset;
pub mod error;
#[cfg(feature = "api")]
pub mod fetch;
pub mod summary;

pub use dataset::{Dataset, Record};
pub use error::{DatasetError, Result};
pub use summary::DatasetSummary;

/// Public location of the global temperature dataset.
pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";
