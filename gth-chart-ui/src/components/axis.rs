//! SVG axis group: domain line plus one tick per label.

use dioxus::prelude::*;
use gth_chart::{Axis, AxisOrientation};

/// Draws an `Axis` from the layout. `id` becomes the group's DOM id.
#[component]
pub fn AxisGroup(axis: Axis, id: Option<String>) -> Element {
    let ts = axis.tick_size;
    let offset = axis.label_offset();
    let transform = axis.transform();
    let domain = axis.domain_path();

    rsx! {
        g {
            id: id,
            transform: "{transform}",
            fill: "none",
            "font-size": "10",
            "font-family": "sans-serif",
            path {
                class: "domain",
                stroke: "currentColor",
                d: "{domain}",
            }
            for (i, tick) in axis.ticks.iter().enumerate() {
                g {
                    key: "{i}",
                    class: "tick",
                    transform: axis.tick_transform(tick),
                    {match axis.orientation {
                        AxisOrientation::Bottom => rsx! {
                            line { stroke: "currentColor", y2: "{ts}" }
                            text {
                                fill: "currentColor",
                                y: "{offset}",
                                dy: "0.71em",
                                "text-anchor": "middle",
                                "{tick.label}"
                            }
                        },
                        AxisOrientation::Left => rsx! {
                            line { stroke: "currentColor", x2: "-{ts}" }
                            text {
                                fill: "currentColor",
                                x: "-{offset}",
                                dy: "0.32em",
                                "text-anchor": "end",
                                "{tick.label}"
                            }
                        },
                    }}
                }
            }
        }
    }
}
