//! Critical territories ranked by endangered population.

use super::{ChartHeader, PANEL_STYLE};
use dioxus::prelude::*;
use samu_stats::format;
use samu_stats::projection::RiskRow;

#[derive(Props, Clone, PartialEq)]
pub struct TopRisksTableProps {
    pub rows: Vec<RiskRow>,
}

const CELL: &str = "padding: 6px 8px; border-bottom: 1px solid #f3f4f6; text-align: left;";

#[component]
pub fn TopRisksTable(props: TopRisksTableProps) -> Element {
    rsx! {
        section {
            style: PANEL_STYLE,
            ChartHeader {
                title: "Top critical risks".to_string(),
                note: "Critical territories with the largest endangered population".to_string(),
            }
            if props.rows.is_empty() {
                p { style: "color: #6B7280; font-size: 14px;", "No critical territories in the current selection." }
            }
            table {
                style: "width: 100%; border-collapse: collapse; font-size: 14px;",
                thead {
                    tr {
                        th { style: CELL, "#" }
                        th { style: CELL, "Municipality" }
                        th { style: CELL, "Event" }
                        th { style: CELL, "Risk source" }
                        th { style: CELL, "Probability" }
                        th { style: "{CELL} text-align: right;", "Population" }
                    }
                }
                tbody {
                    id: "top-risks-table",
                    for (i, row) in props.rows.iter().enumerate() {
                        tr {
                            td { style: CELL, {(i + 1).to_string()} }
                            td { style: CELL, "{row.municipality}" }
                            td { style: CELL, "{row.event}" }
                            td { style: CELL, "{row.risk_source}" }
                            td {
                                style: format!("{CELL} color: {};", row.level.border_color()),
                                "{row.probability}"
                            }
                            td { style: "{CELL} text-align: right;", {format::thousands(row.population)} }
                        }
                    }
                }
            }
        }
    }
}
