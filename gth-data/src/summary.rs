//! Descriptive statistics over a dataset.

use crate::dataset::{Dataset, Record};
use crate::error::{DatasetError, Result};
use serde::Serialize;
use std::fmt;

/// Span and extremes of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub records: usize,
    pub first_year: i32,
    pub last_year: i32,
    pub base_temperature: f64,
    pub min_variance: f64,
    pub max_variance: f64,
    pub min_temperature: f64,
    pub max_temperature: f64,
    /// First record holding the minimum variance.
    pub coldest: Record,
    /// First record holding the maximum variance.
    pub warmest: Record,
}

impl Dataset {
    /// Summarise the dataset. Fails only on an empty dataset.
    pub fn summary(&self) -> Result<DatasetSummary> {
        let first = self.monthly_variance.first().ok_or(DatasetError::Empty)?;
        let mut coldest = *first;
        let mut warmest = *first;
        let mut first_year = first.year;
        let mut last_year = first.year;

        for record in &self.monthly_variance[1..] {
            if record.variance < coldest.variance {
                coldest = *record;
            }
            if record.variance > warmest.variance {
                warmest = *record;
            }
            first_year = first_year.min(record.year);
            last_year = last_year.max(record.year);
        }

        Ok(DatasetSummary {
            records: self.monthly_variance.len(),
            first_year,
            last_year,
            base_temperature: self.base_temperature,
            min_variance: coldest.variance,
            max_variance: warmest.variance,
            min_temperature: self.temperature(&coldest),
            max_temperature: self.temperature(&warmest),
            coldest,
            warmest,
        })
    }
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Records:          {}", self.records)?;
        writeln!(f, "Years:            {} - {}", self.first_year, self.last_year)?;
        writeln!(f, "Base temperature: {:.2}°C", self.base_temperature)?;
        writeln!(
            f,
            "Variance range:   {:.3} to {:.3}°C",
            self.min_variance, self.max_variance
        )?;
        writeln!(
            f,
            "Coldest month:    {}-{:02} at {:.3}°C",
            self.coldest.year, self.coldest.month, self.min_temperature
        )?;
        write!(
            f,
            "Warmest month:    {}-{:02} at {:.3}°C",
            self.warmest.year, self.warmest.month, self.max_temperature
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_JSON: &str = include_str!("../../fixtures/global-temperature-sample.json");

    #[test]
    fn test_summary_of_fixture() {
        let dataset = Dataset::from_json(SAMPLE_JSON).unwrap();
        let summary = dataset.summary().unwrap();
        assert_eq!(summary.records, 336);
        assert_eq!(summary.first_year, 1895);
        assert_eq!(summary.last_year, 1922);
        assert_eq!((summary.coldest.year, summary.coldest.month), (1895, 6));
        assert_eq!((summary.warmest.year, summary.warmest.month), (1922, 5));
        assert_eq!(summary.min_variance, -1.35);
        assert_eq!(summary.max_variance, 0.353);
        assert!((summary.min_temperature - 7.31).abs() < 1e-9);
        assert!((summary.max_temperature - 9.013).abs() < 1e-9);
    }

    #[test]
    fn test_summary_keeps_first_extreme() {
        let body = r#"{"baseTemperature": 8.0, "monthlyVariance": [
            {"year": 1901, "month": 3, "variance": -1.0},
            {"year": 1900, "month": 4, "variance": -1.0},
            {"year": 1902, "month": 5, "variance": 2.0}
        ]}"#;
        let summary = Dataset::from_json(body).unwrap().summary().unwrap();
        assert_eq!((summary.coldest.year, summary.coldest.month), (1901, 3));
        assert_eq!(summary.first_year, 1900);
        assert_eq!(summary.last_year, 1902);
    }

    #[test]
    fn test_summary_empty_fails() {
        let dataset = Dataset {
            base_temperature: 8.0,
            monthly_variance: Vec::new(),
        };
        assert!(matches!(dataset.summary(), Err(DatasetError::Empty)));
    }

    #[test]
    fn test_summary_display() {
        let body = r#"{"baseTemperature": 8.0, "monthlyVariance": [{"year": 1900, "month": 1, "variance": -0.5}]}"#;
        let text = Dataset::from_json(body).unwrap().summary().unwrap().to_string();
        assert!(text.contains("Years:            1900 - 1900"));
        assert!(text.contains("Coldest month:    1900-01 at 7.500°C"));
    }
}
