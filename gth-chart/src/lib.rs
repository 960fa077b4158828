//! Heatmap geometry and rendering for the global temperature dataset.
//!
//! This crate provides:
//! - `scale`: band, quantize and linear scales
//! - `palette`: the fixed 11-step diverging color palette
//! - `config`: chart dimensions (`ChartConfig`)
//! - `layout`: `HeatmapLayout`, every cell, axis tick and legend swatch positioned
//! - `tooltip`: hover tooltip state shared by the web app and the static page
//! - `svg` / `html`: static rendering of a layout
//!
//! The layout is computed once per render and is the single source for both
//! the Dioxus components and the static output, so they always agree.

pub mod config;
pub mod error;
pub mod html;
pub mod layout;
pub mod palette;
pub mod scale;
pub mod svg;
pub mod tooltip;

pub use config::ChartConfig;
pub use error::{ChartError, Result};
pub use layout::{Axis, AxisOrientation, Cell, HeatmapLayout, Legend, LegendSwatch, Tick};
pub use tooltip::TooltipState;
