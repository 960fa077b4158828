//! The heatmap drawing surface.
//!
//! Renders a precomputed `HeatmapLayout` as inline SVG: both axes, one
//! `rect.cell` per record, and the legend. Pointer events on each cell drive
//! the shared tooltip state.

use super::axis::AxisGroup;
use super::legend::LegendGroup;
use crate::state::AppState;
use dioxus::prelude::*;
use gth_chart::{Cell, HeatmapLayout};

#[component]
pub fn Heatmap(layout: HeatmapLayout) -> Element {
    rsx! {
        svg {
            width: "{layout.width}",
            height: "{layout.height}",
            AxisGroup { id: "x-axis".to_string(), axis: layout.x_axis.clone() }
            AxisGroup { id: "y-axis".to_string(), axis: layout.y_axis.clone() }
            for (i, cell) in layout.cells.iter().enumerate() {
                HeatCell { key: "{i}", cell: cell.clone() }
            }
            LegendGroup { legend: layout.legend.clone() }
        }
    }
}

/// One rectangle, tagged with its month, year and absolute temperature.
#[component]
pub fn HeatCell(cell: Cell) -> Element {
    let mut state = use_context::<AppState>();
    let data_temp = cell.data_temp();
    let hovered = cell.clone();

    rsx! {
        rect {
            class: "cell",
            "data-month": "{cell.month_index}",
            "data-year": "{cell.year}",
            "data-temp": "{data_temp}",
            x: "{cell.x}",
            y: "{cell.y}",
            width: "{cell.width}",
            height: "{cell.height}",
            fill: "{cell.fill}",
            onmouseenter: move |evt: MouseEvent| {
                let point = evt.page_coordinates();
                state.tooltip.write().show(&hovered, point.x, point.y);
            },
            onmouseleave: move |_| {
                state.tooltip.write().hide();
            },
        }
    }
}
