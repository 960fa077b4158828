//! Floating tooltip bound to `AppState.tooltip`.

use crate::state::AppState;
use dioxus::prelude::*;

/// Absolutely positioned tooltip div; cells write its state on hover.
#[component]
pub fn Tooltip() -> Element {
    let state = use_context::<AppState>();
    let tooltip = state.tooltip.read().clone();
    let style = tooltip.style();
    let data_year = tooltip.data_year.map(|year| year.to_string());

    rsx! {
        div {
            id: "tooltip",
            style: "{style}",
            "data-year": data_year,
            dangerous_inner_html: "{tooltip.html}",
        }
    }
}
