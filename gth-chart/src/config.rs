//! Chart dimensions.
//!
//! Defaults reproduce the published page: a 1200×600 surface with 60 units of
//! padding and a 400×20 legend strip centered below the cells.

use crate::error::{ChartError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub legend_width: f64,
    pub legend_height: f64,
    pub legend_padding: f64,
    /// Only years divisible by this get an x-axis label
    pub year_tick_interval: i32,
    pub tick_size: f64,
    pub legend_tick_size: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 600.0,
            padding: 60.0,
            legend_width: 400.0,
            legend_height: 20.0,
            legend_padding: 30.0,
            year_tick_interval: 10,
            tick_size: 6.0,
            legend_tick_size: 10.0,
        }
    }
}

impl ChartConfig {
    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json_str(s: &str) -> Result<ChartConfig> {
        let config: ChartConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width <= 2.0 * self.padding || self.height <= 2.0 * self.padding {
            return Err(ChartError::InvalidConfig(format!(
                "{}x{} surface leaves no room inside padding {}",
                self.width, self.height, self.padding
            )));
        }
        if self.legend_width <= 0.0 || self.legend_height <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "legend dimensions must be positive".to_string(),
            ));
        }
        if self.year_tick_interval <= 0 {
            return Err(ChartError::InvalidConfig(format!(
                "year tick interval must be positive, got {}",
                self.year_tick_interval
            )));
        }
        Ok(())
    }

    /// Horizontal pixel range of the cell area.
    pub fn x_range(&self) -> (f64, f64) {
        (self.padding, self.width - self.padding)
    }

    /// Vertical pixel range of the cell area.
    pub fn y_range(&self) -> (f64, f64) {
        (self.padding, self.height - self.padding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ChartConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.x_range(), (60.0, 1140.0));
        assert_eq!(config.y_range(), (60.0, 540.0));
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config = ChartConfig::from_json_str(r#"{"width": 1600, "year_tick_interval": 25}"#).unwrap();
        assert_eq!(config.width, 1600.0);
        assert_eq!(config.year_tick_interval, 25);
        assert_eq!(config.height, 600.0);
        assert_eq!(config.legend_width, 400.0);
    }

    #[test]
    fn test_rejects_padding_larger_than_surface() {
        let err = ChartConfig::from_json_str(r#"{"width": 100, "padding": 60}"#).unwrap_err();
        assert!(matches!(err, ChartError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_zero_tick_interval() {
        let config = ChartConfig {
            year_tick_interval: 0,
            ..ChartConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(matches!(
            ChartConfig::from_json_str("{width: 1}"),
            Err(ChartError::ConfigParse(_))
        ));
    }
}
