//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use gth_chart::{ChartConfig, TooltipState};
use gth_data::Dataset;

/// Shared application state for the heatmap page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the dataset fetch is still in flight
    pub loading: Signal<bool>,
    /// Error message if the fetch or parse failed
    pub error_msg: Signal<Option<String>>,
    /// Fetched dataset (None until loaded, and forever on failure)
    pub dataset: Signal<Option<Dataset>>,
    /// Hover tooltip, written by cell pointer events
    pub tooltip: Signal<TooltipState>,
    /// Chart dimensions
    pub config: Signal<ChartConfig>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            dataset: Signal::new(None),
            tooltip: Signal::new(TooltipState::hidden()),
            config: Signal::new(ChartConfig::default()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
