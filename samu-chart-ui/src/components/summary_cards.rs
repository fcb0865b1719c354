//! Headline numbers above the charts.

use dioxus::prelude::*;
use samu_stats::format;
use samu_stats::projection::Summary;

#[derive(Props, Clone, PartialEq)]
pub struct SummaryCardsProps {
    pub summary: Summary,
}

#[component]
pub fn SummaryCards(props: SummaryCardsProps) -> Element {
    let s = &props.summary;
    let cards = [
        ("Analyzed territories", format::thousands(s.territories)),
        ("Municipalities", format::thousands(s.municipalities as u64)),
        ("Hazard events", format::thousands(s.events as u64)),
        ("Endangered population", format::thousands(s.population)),
        ("Endangered area (km²)", format::area(s.area)),
    ];

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 12px; margin: 12px 0;",
            for (title, value) in cards {
                div {
                    key: "{title}",
                    style: "background: #fff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 12px;",
                    div { style: "font-size: 12px; color: #6B7280;", "{title}" }
                    div { style: "font-size: 22px; font-weight: 600; color: #111827;", "{value}" }
                }
            }
        }
    }
}
