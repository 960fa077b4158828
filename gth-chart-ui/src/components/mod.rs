//! Reusable Dioxus RSX components for the heatmap page.

mod axis;
mod chart_container;
mod chart_header;
mod error_display;
mod heatmap;
mod legend;
mod loading_spinner;
mod tooltip;

pub use axis::AxisGroup;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use heatmap::{HeatCell, Heatmap};
pub use legend::LegendGroup;
pub use loading_spinner::LoadingSpinner;
pub use tooltip::Tooltip;
