//! Chart header component with title and optional note.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title
    pub title: String,
    /// Short explanation shown under the title
    #[props(default = String::new())]
    pub note: String,
}

/// Header for chart and table sections.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if !props.note.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{props.note}"
                }
            }
        }
    }
}
