//! Legend strip: one swatch per color threshold with a labelled axis.

use super::axis::AxisGroup;
use dioxus::prelude::*;
use gth_chart::Legend;

#[component]
pub fn LegendGroup(legend: Legend) -> Element {
    rsx! {
        g {
            id: "legend",
            transform: legend.transform(),
            for (i, swatch) in legend.swatches.iter().enumerate() {
                rect {
                    key: "{i}",
                    x: "{swatch.x}",
                    y: "0",
                    width: "{swatch.width}",
                    height: "{legend.height}",
                    fill: "{swatch.fill}",
                }
            }
            AxisGroup { axis: legend.axis.clone() }
        }
    }
}
