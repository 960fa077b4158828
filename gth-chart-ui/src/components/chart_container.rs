//! Chart container component.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id of the container the heatmap is drawn into
    #[props(default = "heatmap".to_string())]
    pub id: String,
    /// Minimum height in pixels, reserved while the data loads
    #[props(default = 600)]
    pub min_height: u32,
    pub children: Element,
}

/// A fixed-id container div holding the drawing surface.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; display: inline-block;",
        props.min_height
    );

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
            {props.children}
        }
    }
}
