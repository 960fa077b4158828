//! Heatmap layout: every mark the chart draws, already positioned.
//!
//! `HeatmapLayout::new` computes the scales from the dataset and resolves each
//! record into a `Cell`, both axes into `Tick`s and the legend into swatches.
//! Renderers only iterate over the result.

use crate::config::ChartConfig;
use crate::error::Result;
use crate::palette::TEMPERATURE_PALETTE;
use crate::scale::{BandScale, LinearScale, QuantizeScale};
use chrono::Month;
use gth_data::{Dataset, DatasetError};
use log::debug;
use serde::Serialize;

/// One rectangle of the heatmap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    /// Zero-based month (0 = January).
    pub month_index: u32,
    pub year: i32,
    pub variance: f64,
    /// Base temperature + variance.
    pub temperature: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: &'static str,
}

impl Cell {
    /// Tooltip body for this cell.
    pub fn tooltip_html(&self) -> String {
        format!("Year: {}<br>Temperature: {}°C", self.year, self.temperature)
    }

    /// Same text with a newline in place of the markup line break.
    pub fn tooltip_text(&self) -> String {
        format!("Year: {}\nTemperature: {}°C", self.year, self.temperature)
    }

    /// Value of the `data-temp` attribute.
    pub fn data_temp(&self) -> String {
        self.temperature.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AxisOrientation {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    /// Offset along the axis, in the axis' own coordinates.
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub orientation: AxisOrientation,
    /// Translation applied to the axis group.
    pub offset: (f64, f64),
    /// Extent of the domain line.
    pub range: (f64, f64),
    pub tick_size: f64,
    pub ticks: Vec<Tick>,
}

/// Space between a tick line and its label.
pub const TICK_PADDING: f64 = 3.0;

impl Axis {
    pub fn labels(&self) -> Vec<&str> {
        self.ticks.iter().map(|t| t.label.as_str()).collect()
    }

    /// `transform` attribute for the axis group.
    pub fn transform(&self) -> String {
        format!("translate({},{})", self.offset.0, self.offset.1)
    }

    /// Path of the domain line, with outer ticks at both ends.
    pub fn domain_path(&self) -> String {
        let (r0, r1) = self.range;
        let ts = self.tick_size;
        match self.orientation {
            AxisOrientation::Bottom => format!("M{},{}V0H{}V{}", r0, ts, r1, ts),
            AxisOrientation::Left => format!("M-{},{}H0V{}H-{}", ts, r0, r1, ts),
        }
    }

    /// `transform` attribute for one tick group.
    pub fn tick_transform(&self, tick: &Tick) -> String {
        match self.orientation {
            AxisOrientation::Bottom => format!("translate({},0)", tick.position),
            AxisOrientation::Left => format!("translate(0,{})", tick.position),
        }
    }

    /// Distance from the domain line to the label anchor.
    pub fn label_offset(&self) -> f64 {
        self.tick_size + TICK_PADDING
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendSwatch {
    pub threshold: f64,
    pub x: f64,
    pub width: f64,
    pub fill: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub offset: (f64, f64),
    pub width: f64,
    pub height: f64,
    pub swatches: Vec<LegendSwatch>,
    /// Linear axis under the strip, one tick per threshold.
    pub axis: Axis,
}

impl Legend {
    pub fn transform(&self) -> String {
        format!("translate({},{})", self.offset.0, self.offset.1)
    }
}

/// All geometry for one render of the dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapLayout {
    pub width: f64,
    pub height: f64,
    pub base_temperature: f64,
    pub first_year: i32,
    pub last_year: i32,
    pub cells: Vec<Cell>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: Legend,
}

/// Full English month name for a zero-based month index.
pub fn month_name(month_index: u32) -> &'static str {
    u8::try_from(month_index + 1)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("")
}

/// Legend tick label with one decimal place. Exact halves round away from
/// zero and a value that rounds to zero never carries a minus sign.
pub fn format_tick(value: f64) -> String {
    // Only odd multiples of 0.25 sit exactly halfway between two labels
    let quarters = value * 4.0;
    let value = if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        (value * 10.0).round() / 10.0
    } else {
        value
    };
    let label = format!("{:.1}", value);
    if label == "-0.0" {
        "0.0".to_string()
    } else {
        label
    }
}

/// Color scale over the dataset's variance extent.
pub fn color_scale(dataset: &Dataset) -> Result<QuantizeScale<&'static str>> {
    let extent = dataset.variance_extent().ok_or(DatasetError::Empty)?;
    Ok(QuantizeScale::new(extent, TEMPERATURE_PALETTE.to_vec()))
}

impl HeatmapLayout {
    /// Lay out the dataset. Fails when the dataset or config is unusable,
    /// in which case nothing should be drawn.
    pub fn new(dataset: &Dataset, config: &ChartConfig) -> Result<HeatmapLayout> {
        config.validate()?;
        dataset.validate()?;

        let years = dataset.years();
        let x_scale = BandScale::new(years.iter().copied(), config.x_range());
        let y_scale = BandScale::new(0u32..12, config.y_range());
        let colors = color_scale(dataset)?;

        let cells: Vec<Cell> = dataset
            .monthly_variance
            .iter()
            .map(|record| {
                let month_index = record.month_index();
                Cell {
                    month_index,
                    year: record.year,
                    variance: record.variance,
                    temperature: dataset.temperature(record),
                    // validate() guarantees both lookups hit the domain
                    x: x_scale.position(&record.year).unwrap_or(config.padding),
                    y: y_scale.position(&month_index).unwrap_or(config.padding),
                    width: x_scale.bandwidth(),
                    height: y_scale.bandwidth(),
                    fill: colors.apply(record.variance).copied().unwrap_or(TEMPERATURE_PALETTE[0]),
                }
            })
            .collect();

        let x_axis = Axis {
            orientation: AxisOrientation::Bottom,
            offset: (0.0, config.height - config.padding),
            range: x_scale.range(),
            tick_size: config.tick_size,
            ticks: years
                .iter()
                .filter(|year| *year % config.year_tick_interval == 0)
                .filter_map(|year| {
                    x_scale.center(year).map(|position| Tick {
                        position,
                        label: year.to_string(),
                    })
                })
                .collect(),
        };

        let y_axis = Axis {
            orientation: AxisOrientation::Left,
            offset: (config.padding, 0.0),
            range: y_scale.range(),
            tick_size: config.tick_size,
            ticks: y_scale
                .domain()
                .iter()
                .filter_map(|month| {
                    y_scale.center(month).map(|position| Tick {
                        position,
                        label: month_name(*month).to_string(),
                    })
                })
                .collect(),
        };

        let legend = build_legend(&colors, config);

        debug!(
            "Laid out {} cells over {} years, {} x-axis ticks",
            cells.len(),
            years.len(),
            x_axis.ticks.len()
        );

        Ok(HeatmapLayout {
            width: config.width,
            height: config.height,
            base_temperature: dataset.base_temperature,
            first_year: years.first().copied().unwrap_or_default(),
            last_year: years.last().copied().unwrap_or_default(),
            cells,
            x_axis,
            y_axis,
            legend,
        })
    }
}

/// One swatch per threshold, filled with the color the threshold itself maps to.
fn build_legend(colors: &QuantizeScale<&'static str>, config: &ChartConfig) -> Legend {
    let thresholds = colors.thresholds();
    let lo = thresholds.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = thresholds.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let legend_scale = LinearScale::new((lo, hi), (0.0, config.legend_width));
    let swatch_width = if thresholds.is_empty() {
        0.0
    } else {
        config.legend_width / thresholds.len() as f64
    };

    let swatches = thresholds
        .iter()
        .map(|&threshold| LegendSwatch {
            threshold,
            x: legend_scale.apply(threshold),
            width: swatch_width,
            fill: colors.apply(threshold).copied().unwrap_or(TEMPERATURE_PALETTE[0]),
        })
        .collect();

    let axis = Axis {
        orientation: AxisOrientation::Bottom,
        offset: (0.0, config.legend_height),
        range: legend_scale.range(),
        tick_size: config.legend_tick_size,
        ticks: thresholds
            .iter()
            .map(|&threshold| Tick {
                position: legend_scale.apply(threshold),
                label: format_tick(threshold),
            })
            .collect(),
    };

    Legend {
        offset: (
            (config.width - config.legend_width) / 2.0,
            config.height - config.legend_height - config.legend_padding + 10.0,
        ),
        width: config.legend_width,
        height: config.legend_height,
        swatches,
        axis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::is_palette_color;

    const SAMPLE_JSON: &str = include_str!("../../fixtures/global-temperature-sample.json");

    fn sample_layout() -> (Dataset, HeatmapLayout) {
        let dataset = Dataset::from_json(SAMPLE_JSON).unwrap();
        let layout = HeatmapLayout::new(&dataset, &ChartConfig::default()).unwrap();
        (dataset, layout)
    }

    #[test]
    fn test_one_cell_per_record() {
        let (dataset, layout) = sample_layout();
        assert_eq!(layout.cells.len(), dataset.monthly_variance.len());
        for (cell, record) in layout.cells.iter().zip(&dataset.monthly_variance) {
            assert_eq!(cell.year, record.year);
            assert_eq!(cell.month_index, record.month - 1);
            assert_eq!(cell.temperature, dataset.base_temperature + record.variance);
        }
    }

    #[test]
    fn test_fill_matches_color_scale() {
        let (dataset, layout) = sample_layout();
        let colors = color_scale(&dataset).unwrap();
        for cell in &layout.cells {
            assert!(is_palette_color(cell.fill));
            assert_eq!(Some(&cell.fill), colors.apply(cell.variance));
        }
        // Extremes land in the end colors
        let coldest = layout.cells.iter().find(|c| c.variance == -1.35).unwrap();
        let warmest = layout.cells.iter().find(|c| c.variance == 0.353).unwrap();
        assert_eq!(coldest.fill, TEMPERATURE_PALETTE[0]);
        assert_eq!(warmest.fill, TEMPERATURE_PALETTE[10]);
    }

    #[test]
    fn test_cell_geometry() {
        let (_, layout) = sample_layout();
        let width = 1080.0 / 28.0;
        let first = &layout.cells[0];
        assert_eq!((first.x, first.y), (60.0, 60.0));
        assert_eq!(first.width, width);
        assert_eq!(first.height, 40.0);

        let june_1900 = layout
            .cells
            .iter()
            .find(|c| c.year == 1900 && c.month_index == 5)
            .unwrap();
        assert_eq!(june_1900.x, 60.0 + width * 5.0);
        assert_eq!(june_1900.y, 260.0);
    }

    #[test]
    fn test_x_axis_only_decades() {
        let (_, layout) = sample_layout();
        assert_eq!(layout.x_axis.labels(), vec!["1900", "1910", "1920"]);
        assert_eq!(layout.x_axis.offset, (0.0, 540.0));
        assert_eq!(layout.x_axis.orientation, AxisOrientation::Bottom);
        let width = 1080.0 / 28.0;
        assert_eq!(layout.x_axis.ticks[0].position, 60.0 + width * 5.0 + width / 2.0);
        assert_eq!((layout.first_year, layout.last_year), (1895, 1922));
    }

    #[test]
    fn test_y_axis_month_names() {
        let (_, layout) = sample_layout();
        assert_eq!(
            layout.y_axis.labels(),
            vec![
                "January", "February", "March", "April", "May", "June", "July",
                "August", "September", "October", "November", "December"
            ]
        );
        assert_eq!(layout.y_axis.offset, (60.0, 0.0));
        assert_eq!(layout.y_axis.ticks[0].position, 80.0);
        assert_eq!(layout.y_axis.ticks[11].position, 520.0);
    }

    #[test]
    fn test_legend() {
        let (dataset, layout) = sample_layout();
        let colors = color_scale(&dataset).unwrap();
        let legend = &layout.legend;
        assert_eq!(legend.offset, (400.0, 560.0));
        assert_eq!(legend.swatches.len(), 10);
        assert_eq!(legend.swatches[0].x, 0.0);
        assert_eq!(legend.swatches[9].x, 400.0);
        for swatch in &legend.swatches {
            assert_eq!(swatch.width, 40.0);
            assert_eq!(Some(&swatch.fill), colors.apply(swatch.threshold));
        }
        assert_eq!(legend.swatches[0].fill, TEMPERATURE_PALETTE[1]);
        assert_eq!(legend.axis.ticks.len(), 10);
        assert_eq!(legend.axis.tick_size, 10.0);
        assert_eq!(legend.axis.ticks[0].label, "-1.2");
        assert_eq!(legend.axis.ticks[9].label, "0.2");
    }

    #[test]
    fn test_single_record_example() {
        let body = r#"{"baseTemperature": 8.0, "monthlyVariance": [{"year": 1900, "month": 1, "variance": -0.5}]}"#;
        let dataset = Dataset::from_json(body).unwrap();
        let layout = HeatmapLayout::new(&dataset, &ChartConfig::default()).unwrap();
        let cell = &layout.cells[0];
        assert_eq!(cell.month_index, 0);
        assert_eq!(cell.year, 1900);
        assert_eq!(cell.data_temp(), "7.5");
        assert_eq!(cell.tooltip_html(), "Year: 1900<br>Temperature: 7.5°C");
        // Single value domain falls in the warmest bin
        assert_eq!(cell.fill, TEMPERATURE_PALETTE[10]);
        // Degenerate legend scale centers every swatch
        assert!(layout.legend.swatches.iter().all(|s| s.x == 200.0));
    }

    #[test]
    fn test_duplicates_are_drawn() {
        let body = r#"{"baseTemperature": 8.0, "monthlyVariance": [
            {"year": 1900, "month": 1, "variance": -0.5},
            {"year": 1900, "month": 1, "variance": 0.5}
        ]}"#;
        let dataset = Dataset::from_json(body).unwrap();
        let layout = HeatmapLayout::new(&dataset, &ChartConfig::default()).unwrap();
        assert_eq!(layout.cells.len(), 2);
        assert_eq!(layout.cells[0].x, layout.cells[1].x);
    }

    #[test]
    fn test_absent_dataset_draws_nothing() {
        let dataset = Dataset {
            base_temperature: 8.0,
            monthly_variance: Vec::new(),
        };
        assert!(HeatmapLayout::new(&dataset, &ChartConfig::default()).is_err());
    }

    #[test]
    fn test_custom_tick_interval() {
        let dataset = Dataset::from_json(SAMPLE_JSON).unwrap();
        let config = ChartConfig {
            year_tick_interval: 5,
            ..ChartConfig::default()
        };
        let layout = HeatmapLayout::new(&dataset, &config).unwrap();
        assert_eq!(
            layout.x_axis.labels(),
            vec!["1895", "1900", "1905", "1910", "1915", "1920"]
        );
    }

    #[test]
    fn test_axis_helpers() {
        let (_, layout) = sample_layout();
        assert_eq!(layout.x_axis.transform(), "translate(0,540)");
        assert_eq!(layout.x_axis.domain_path(), "M60,6V0H1140V6");
        assert_eq!(layout.y_axis.domain_path(), "M-6,60H0V540H-6");
        assert_eq!(layout.y_axis.tick_transform(&layout.y_axis.ticks[0]), "translate(0,80)");
        assert_eq!(layout.x_axis.label_offset(), 9.0);
        assert_eq!(layout.legend.axis.domain_path(), "M0,10V0H400V10");
        assert_eq!(layout.legend.transform(), "translate(400,560)");
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(0.25), "0.3");
        assert_eq!(format_tick(1.25), "1.3");
        assert_eq!(format_tick(-0.25), "-0.3");
        assert_eq!(format_tick(0.75), "0.8");
        assert_eq!(format_tick(0.5), "0.5");
        assert_eq!(format_tick(-0.04), "0.0");
        assert_eq!(format_tick(-0.0), "0.0");
        assert_eq!(format_tick(0.35), "0.3");
        assert_eq!(format_tick(-1.1952), "-1.2");
    }

    #[test]
    fn test_legend_labels_near_zero_and_halves() {
        let body = r#"{"baseTemperature": 8.0, "monthlyVariance": [
            {"year": 1900, "month": 1, "variance": -0.64},
            {"year": 1900, "month": 2, "variance": 0.46}
        ]}"#;
        let dataset = Dataset::from_json(body).unwrap();
        let layout = HeatmapLayout::new(&dataset, &ChartConfig::default()).unwrap();
        let labels = layout.legend.axis.labels();
        assert!(labels.contains(&"0.0"));
        assert!(!labels.contains(&"-0.0"));

        let body = r#"{"baseTemperature": 8.0, "monthlyVariance": [
            {"year": 1900, "month": 1, "variance": -1.0},
            {"year": 1900, "month": 2, "variance": 1.75}
        ]}"#;
        let dataset = Dataset::from_json(body).unwrap();
        let layout = HeatmapLayout::new(&dataset, &ChartConfig::default()).unwrap();
        assert_eq!(
            layout.legend.axis.labels(),
            vec!["-0.8", "-0.5", "-0.3", "0.0", "0.3", "0.5", "0.8", "1.0", "1.3", "1.5"]
        );
    }

    #[test]
    fn test_month_name_out_of_range() {
        assert_eq!(month_name(0), "January");
        assert_eq!(month_name(11), "December");
        assert_eq!(month_name(12), "");
    }
}
