//! Per-district summary table.

use super::{ChartHeader, PANEL_STYLE};
use dioxus::prelude::*;
use samu_risk::RiskLevel;
use samu_stats::format;
use samu_stats::projection::DistrictRow;

#[derive(Props, Clone, PartialEq)]
pub struct DistrictTableProps {
    pub rows: Vec<DistrictRow>,
}

const CELL: &str = "padding: 6px 8px; border-bottom: 1px solid #f3f4f6; text-align: right;";
const HEAD: &str = "padding: 6px 8px; border-bottom: 2px solid #e5e7eb; text-align: right;";

#[component]
pub fn DistrictTable(props: DistrictTableProps) -> Element {
    rsx! {
        section {
            style: PANEL_STYLE,
            ChartHeader { title: "Districts".to_string() }
            table {
                style: "width: 100%; border-collapse: collapse; font-size: 14px;",
                thead {
                    tr {
                        th { style: "{HEAD} text-align: left;", "District" }
                        th { style: HEAD, "Territories" }
                        for level in RiskLevel::CLASSIFIED {
                            th {
                                style: format!("{HEAD} color: {};", level.border_color()),
                                {level.label()}
                            }
                        }
                        th { style: HEAD, "Population" }
                    }
                }
                tbody {
                    id: "district-stats-table",
                    for row in props.rows.iter() {
                        tr {
                            key: "{row.district}",
                            td { style: "{CELL} text-align: left;", "{row.district}" }
                            td { style: CELL, {format::thousands(row.total)} }
                            for level in RiskLevel::CLASSIFIED {
                                td { style: CELL, {format::thousands(row.risk_levels.get(level))} }
                            }
                            td { style: CELL, {format::thousands(row.population)} }
                        }
                    }
                }
            }
        }
    }
}
