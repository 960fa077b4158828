//! Chart header component with title and description.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title
    pub title: String,
    /// Year span and base temperature, e.g. "1753 - 2015: base temperature 8.66°C"
    #[props(default = String::new())]
    pub description: String,
}

/// Header for the chart showing title and optional description.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px; text-align: center;",
            h1 {
                id: "title",
                style: "margin: 0 0 4px 0; font-size: 24px;",
                "{props.title}"
            }
            if !props.description.is_empty() {
                h3 {
                    id: "description",
                    style: "margin: 0; font-size: 14px; font-weight: normal; color: #666;",
                    "{props.description}"
                }
            }
        }
    }
}
