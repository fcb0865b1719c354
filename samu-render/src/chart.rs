//! Chart.js configurations built from a snapshot.
//!
//! Each builder returns the full `new Chart(ctx, config)` argument as JSON.
//! Tooltip callbacks cannot travel through JSON, so the doughnut carries a
//! `samu.percentTooltip` flag that `charts.js` turns into a callback.

use crate::mount::MountPoint;
use samu_risk::ProbabilityCodes;
use samu_stats::projection::{self, Bar};
use samu_stats::Snapshot;
use serde_json::{json, Value};

/// Palette for the district pie, cycled when there are more districts.
const DISTRICT_PALETTE: [&str; 13] = [
    "rgba(59, 130, 246, 0.8)",
    "rgba(16, 185, 129, 0.8)",
    "rgba(245, 158, 11, 0.8)",
    "rgba(239, 68, 68, 0.8)",
    "rgba(139, 92, 246, 0.8)",
    "rgba(236, 72, 153, 0.8)",
    "rgba(20, 184, 166, 0.8)",
    "rgba(251, 146, 60, 0.8)",
    "rgba(34, 211, 238, 0.8)",
    "rgba(248, 113, 113, 0.8)",
    "rgba(192, 132, 252, 0.8)",
    "rgba(251, 191, 36, 0.8)",
    "rgba(134, 239, 172, 0.8)",
];

/// Chart.js config for `mount`.
pub fn config_for(mount: MountPoint, snapshot: &Snapshot, codes: &ProbabilityCodes) -> Value {
    match mount {
        MountPoint::RiskDistribution => risk_distribution(snapshot),
        MountPoint::TopMunicipalities => vertical_bars(
            &projection::top_municipalities(snapshot),
            "Analyses",
            "rgba(30, 64, 175, 0.8)",
            "rgb(30, 64, 175)",
        ),
        MountPoint::TopEvents => horizontal_bars(
            &projection::top_events(snapshot),
            "Occurrences",
            "rgba(234, 88, 12, 0.8)",
            "rgb(234, 88, 12)",
        ),
        MountPoint::DistrictBreakdown => district_pie(snapshot),
        MountPoint::ProbabilityHistogram => probability_histogram(snapshot, codes),
        MountPoint::FactorBreakdown => horizontal_bars(
            &projection::factor_breakdown(snapshot),
            "Occurrences",
            "rgba(139, 92, 246, 0.8)",
            "rgb(139, 92, 246)",
        ),
    }
}

fn count_scale() -> Value {
    json!({ "beginAtZero": true, "ticks": { "precision": 0 } })
}

fn labels(bars: &[Bar]) -> Vec<&str> {
    bars.iter().map(|b| b.label.as_str()).collect()
}

fn counts(bars: &[Bar]) -> Vec<u64> {
    bars.iter().map(|b| b.count).collect()
}

fn risk_distribution(snapshot: &Snapshot) -> Value {
    let slices = projection::risk_distribution(snapshot);
    json!({
        "type": "doughnut",
        "data": {
            "labels": slices.iter().map(|s| s.level.label()).collect::<Vec<_>>(),
            "datasets": [{
                "data": slices.iter().map(|s| s.count).collect::<Vec<_>>(),
                "backgroundColor": slices.iter().map(|s| s.level.fill_color()).collect::<Vec<_>>(),
                "borderColor": slices.iter().map(|s| s.level.border_color()).collect::<Vec<_>>(),
                "borderWidth": 2,
            }],
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": {
                    "position": "bottom",
                    "labels": { "font": { "size": 14 }, "padding": 15 },
                },
            },
        },
        "samu": { "percentTooltip": true },
    })
}

fn vertical_bars(bars: &[Bar], series: &str, fill: &str, border: &str) -> Value {
    json!({
        "type": "bar",
        "data": {
            "labels": labels(bars),
            "datasets": [{
                "label": series,
                "data": counts(bars),
                "backgroundColor": fill,
                "borderColor": border,
                "borderWidth": 2,
            }],
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": { "legend": { "display": false } },
            "scales": { "y": count_scale() },
        },
    })
}

fn horizontal_bars(bars: &[Bar], series: &str, fill: &str, border: &str) -> Value {
    json!({
        "type": "bar",
        "data": {
            "labels": labels(bars),
            "datasets": [{
                "label": series,
                "data": counts(bars),
                "backgroundColor": fill,
                "borderColor": border,
                "borderWidth": 2,
            }],
        },
        "options": {
            "indexAxis": "y",
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": { "legend": { "display": false } },
            "scales": { "x": count_scale() },
        },
    })
}

fn district_pie(snapshot: &Snapshot) -> Value {
    let bars = projection::district_breakdown(snapshot);
    let colors: Vec<&str> = (0..bars.len())
        .map(|i| DISTRICT_PALETTE[i % DISTRICT_PALETTE.len()])
        .collect();
    json!({
        "type": "pie",
        "data": {
            "labels": labels(&bars),
            "datasets": [{
                "data": counts(&bars),
                "backgroundColor": colors,
            }],
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": {
                    "position": "right",
                    "labels": { "font": { "size": 12 }, "padding": 10 },
                },
            },
        },
    })
}

fn probability_histogram(snapshot: &Snapshot, codes: &ProbabilityCodes) -> Value {
    let bars = projection::probability_histogram(snapshot, codes);
    json!({
        "type": "bar",
        "data": {
            "labels": bars.iter().map(|b| b.band).collect::<Vec<_>>(),
            "datasets": [{
                "label": "Territories",
                "data": bars.iter().map(|b| b.count).collect::<Vec<_>>(),
                "backgroundColor": bars.iter().map(|b| b.level.fill_color()).collect::<Vec<_>>(),
                "borderWidth": 2,
            }],
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": { "legend": { "display": false } },
            "scales": { "y": count_scale() },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use samu_risk::{RiskLevel, TerritoryRecord, PROBABILITY_BAND_ORDER};
    use samu_stats::calculate_statistics;

    fn sample() -> (Snapshot, ProbabilityCodes) {
        let codes = ProbabilityCodes::from_pairs([
            ("Každé 2 - 3 roky", RiskLevel::Critical),
            ("Každých 200 a viac rokov", RiskLevel::Low),
        ]);
        let territories: Vec<TerritoryRecord> = [
            ("A", "m1", "Povodeň", "Každé 2 - 3 roky"),
            ("A", "m2", "Povodeň", "Každých 200 a viac rokov"),
            ("B", "m3", "Víchrica", "Každé 2 - 3 roky"),
        ]
        .into_iter()
        .map(|(d, m, e, p)| TerritoryRecord {
            district: d.into(),
            municipality_name: m.into(),
            event_name: e.into(),
            probability: p.into(),
            factor_name: "Prírodný".into(),
            ..TerritoryRecord::default()
        })
        .collect();
        (calculate_statistics(&territories, &codes), codes)
    }

    #[test]
    fn risk_doughnut_lists_levels_in_order() {
        let (snapshot, codes) = sample();
        let config = config_for(MountPoint::RiskDistribution, &snapshot, &codes);
        assert_eq!(config["type"], "doughnut");
        assert_eq!(
            config["data"]["labels"],
            json!(["Critical", "High", "Medium", "Low"])
        );
        assert_eq!(config["data"]["datasets"][0]["data"], json!([2, 0, 0, 1]));
        assert_eq!(config["samu"]["percentTooltip"], true);
    }

    #[test]
    fn histogram_keeps_every_band() {
        let (snapshot, codes) = sample();
        let config = config_for(MountPoint::ProbabilityHistogram, &snapshot, &codes);
        let data = config["data"]["datasets"][0]["data"].as_array().unwrap();
        assert_eq!(data.len(), PROBABILITY_BAND_ORDER.len());
        assert_eq!(data[0], 2);
        assert_eq!(data[10], 1);
        assert_eq!(
            config["data"]["datasets"][0]["backgroundColor"][0],
            RiskLevel::Critical.fill_color()
        );
    }

    #[test]
    fn events_are_horizontal_bars() {
        let (snapshot, codes) = sample();
        let config = config_for(MountPoint::TopEvents, &snapshot, &codes);
        assert_eq!(config["options"]["indexAxis"], "y");
        assert_eq!(config["data"]["labels"], json!(["Povodeň", "Víchrica"]));
        assert_eq!(config["data"]["datasets"][0]["data"], json!([2, 1]));
    }

    #[test]
    fn district_pie_cycles_palette() {
        let (snapshot, codes) = sample();
        let config = config_for(MountPoint::DistrictBreakdown, &snapshot, &codes);
        assert_eq!(config["type"], "pie");
        assert_eq!(config["data"]["labels"], json!(["A", "B"]));
        assert_eq!(
            config["data"]["datasets"][0]["backgroundColor"][1],
            DISTRICT_PALETTE[1]
        );
    }
}
