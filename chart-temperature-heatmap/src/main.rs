//! Monthly Global Land-Surface Temperature heatmap.
//!
//! Data flow:
//! 1. On mount: GET the public dataset via `window.fetch`.
//! 2. On success: store the dataset in `AppState`; on failure show the error.
//! 3. Render: lay out the dataset once and draw it as inline SVG, with
//!    per-cell hover driving the shared tooltip.

use dioxus::prelude::*;
use dioxus_logger::tracing::{error, info, Level};
use gth_chart::html::{default_description, DEFAULT_TITLE};
use gth_chart::HeatmapLayout;
use gth_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, Heatmap, LoadingSpinner, Tooltip,
};
use gth_chart_ui::fetch_bridge;
use gth_chart_ui::state::AppState;
use gth_data::DEFAULT_DATASET_URL;

/// DOM id of the container the heatmap is drawn into.
const CHART_CONTAINER_ID: &str = "heatmap";

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("temperature-heatmap-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Fetch once on mount ───
    use_effect(move || {
        spawn(async move {
            info!("Fetching dataset from {}", DEFAULT_DATASET_URL);
            match fetch_bridge::fetch_dataset(DEFAULT_DATASET_URL).await {
                Ok(dataset) => {
                    info!("Loaded {} monthly records", dataset.monthly_variance.len());
                    state.dataset.set(Some(dataset));
                }
                Err(e) => {
                    error!("Dataset fetch failed: {}", e);
                    state.error_msg.set(Some(format!("Failed to load temperature data: {}", e)));
                }
            }
            state.loading.set(false);
        });
    });

    // ─── Layout: recomputed whenever the dataset or config changes ───
    let layout = use_memo(move || {
        let config = state.config.read().clone();
        state.dataset.read().as_ref().and_then(|dataset| {
            HeatmapLayout::new(dataset, &config)
                .map_err(|e| error!("Cannot lay out dataset: {}", e))
                .ok()
        })
    });

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1240px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif; text-align: center;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else if let Some(layout) = layout() {
                ChartHeader {
                    title: DEFAULT_TITLE.to_string(),
                    description: default_description(&layout),
                }

                ChartContainer {
                    id: CHART_CONTAINER_ID.to_string(),
                    min_height: layout.height as u32,
                    Heatmap { layout: layout.clone() }
                }
            }

            Tooltip {}
        }
    }
}
