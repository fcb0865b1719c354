//! Badge naming the scope of the shown statistics.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct FilterInfoProps {
    pub label: String,
}

#[component]
pub fn FilterInfo(props: FilterInfoProps) -> Element {
    rsx! {
        span {
            id: "stats-filter-info",
            style: "display: inline-block; padding: 4px 10px; border-radius: 999px; background: #DBEAFE; color: #1E3A8A; font-size: 13px;",
            "{props.label}"
        }
    }
}
