//! Shown in place of the heatmap when the dataset could not be loaded.

use dioxus::prelude::*;

/// Heading shown above the failure detail.
pub const LOAD_FAILURE_HEADING: &str = "Could not load the temperature dataset";

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    /// Fetch or parse failure detail.
    pub message: String,
}

#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            id: "heatmap-error",
            role: "alert",
            style: "max-width: 1200px; margin: 16px auto; padding: 12px 16px; background: #fff5f0; color: #a50026; border: 1px solid #f46d43; border-radius: 4px;",
            strong { "{LOAD_FAILURE_HEADING}" }
            p {
                style: "margin: 6px 0 0; font-family: monospace; font-size: 0.9em;",
                "{props.message}"
            }
        }
    }
}
