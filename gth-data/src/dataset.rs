//! The dataset model: a base temperature plus ordered monthly variance records.

use crate::error::{DatasetError, Result};
use flate2::read::GzDecoder;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

/// A single monthly observation.
///
/// Records have no identity beyond `(year, month)`; duplicates are kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub year: i32,
    /// Calendar month, 1 = January.
    pub month: u32,
    /// Deviation in °C from the dataset's base temperature.
    pub variance: f64,
}

impl Record {
    /// Zero-based month index (0 = January, 11 = December).
    pub fn month_index(&self) -> u32 {
        self.month.saturating_sub(1)
    }
}

/// The full dataset as published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<Record>,
}

impl Dataset {
    /// Parse a JSON body and validate it.
    pub fn from_json(body: &str) -> Result<Dataset> {
        let dataset: Dataset = serde_json::from_str(body)?;
        dataset.validate()?;
        debug!(
            "Parsed dataset with {} records (base {})",
            dataset.monthly_variance.len(),
            dataset.base_temperature
        );
        Ok(dataset)
    }

    /// Parse plain JSON from a reader and validate it.
    pub fn from_reader<R: Read>(reader: R) -> Result<Dataset> {
        let dataset: Dataset = serde_json::from_reader(reader)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Parse gzip-compressed JSON from a reader and validate it.
    pub fn from_gzip_reader<R: Read>(reader: R) -> Result<Dataset> {
        Dataset::from_reader(GzDecoder::new(reader))
    }

    /// Load a dataset file. Paths ending in `.gz` are decompressed.
    pub fn from_path(path: &Path) -> Result<Dataset> {
        let reader = BufReader::new(File::open(path)?);
        if is_gzip_path(path) {
            Dataset::from_gzip_reader(reader)
        } else {
            Dataset::from_reader(reader)
        }
    }

    /// Check the invariants the renderer relies on.
    ///
    /// A dataset that fails here is treated as absent: nothing is drawn.
    pub fn validate(&self) -> Result<()> {
        if self.monthly_variance.is_empty() {
            return Err(DatasetError::Empty);
        }
        if let Some(bad) = self
            .monthly_variance
            .iter()
            .find(|r| !(1..=12).contains(&r.month))
        {
            return Err(DatasetError::MonthOutOfRange {
                year: bad.year,
                month: bad.month,
            });
        }
        Ok(())
    }

    /// Absolute temperature for a record: base + variance.
    pub fn temperature(&self, record: &Record) -> f64 {
        self.base_temperature + record.variance
    }

    /// Distinct years present, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.monthly_variance
            .iter()
            .map(|r| r.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Minimum and maximum variance across all records.
    pub fn variance_extent(&self) -> Option<(f64, f64)> {
        self.monthly_variance.iter().fold(None, |acc, r| match acc {
            None => Some((r.variance, r.variance)),
            Some((lo, hi)) => Some((lo.min(r.variance), hi.max(r.variance))),
        })
    }

    /// Write `year,month,variance,temperature` rows in source order.
    pub fn to_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(["year", "month", "variance", "temperature"])?;
        for record in &self.monthly_variance {
            wtr.write_record(&[
                record.year.to_string(),
                record.month.to_string(),
                record.variance.to_string(),
                self.temperature(record).to_string(),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// True when the path carries a `.gz` extension.
pub fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}
