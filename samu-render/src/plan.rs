//! Render plan for one committed cycle.

use crate::chart;
use crate::mount::{Capabilities, MountPoint};
use samu_risk::ProbabilityCodes;
use samu_stats::projection::{self, DistrictRow, RiskRow, Summary};
use samu_stats::Cycle;
use serde_json::Value;

/// One chart to (re)build, tagged with the cycle it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartJob {
    pub mount: MountPoint,
    pub generation: u64,
    pub config: Value,
}

impl ChartJob {
    pub fn config_json(&self) -> String {
        self.config.to_string()
    }
}

/// Everything the render layer draws for a cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub generation: u64,
    pub filter_label: String,
    pub summary: Summary,
    pub charts: Vec<ChartJob>,
    /// Mount points with no target in the current layout.
    pub skipped: Vec<MountPoint>,
    pub district_rows: Vec<DistrictRow>,
    pub top_risks: Vec<RiskRow>,
}

impl RenderPlan {
    pub fn build(cycle: &Cycle, codes: &ProbabilityCodes, capabilities: &Capabilities) -> Self {
        let snapshot = &cycle.snapshot;
        let (available, skipped): (Vec<MountPoint>, Vec<MountPoint>) = MountPoint::ALL
            .into_iter()
            .partition(|m| capabilities.supports(*m));

        for mount in &skipped {
            log::warn!(
                "Chart target '{}' not in layout, skipping {}",
                mount.dom_id(),
                mount.title()
            );
        }

        let charts = available
            .into_iter()
            .map(|mount| ChartJob {
                mount,
                generation: cycle.generation,
                config: chart::config_for(mount, snapshot, codes),
            })
            .collect();

        Self {
            generation: cycle.generation,
            filter_label: cycle.selection.label(),
            summary: projection::summary(snapshot),
            charts,
            skipped,
            district_rows: projection::district_rows(snapshot),
            top_risks: projection::top_critical_risks(&cycle.territories, codes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use samu_risk::{RiskLevel, TerritoryRecord};
    use samu_stats::{Dashboard, UpdateOutcome};

    fn cycle() -> (std::rc::Rc<Cycle>, ProbabilityCodes) {
        let codes = ProbabilityCodes::from_pairs([("Každé 2 - 3 roky", RiskLevel::Critical)]);
        let territories = vec![
            TerritoryRecord {
                district: "A".into(),
                municipality_name: "a1".into(),
                event_name: "Povodeň".into(),
                probability: "Každé 2 - 3 roky".into(),
                endangered_population: 100,
                ..TerritoryRecord::default()
            },
            TerritoryRecord {
                district: "B".into(),
                municipality_name: "b1".into(),
                event_name: "Zosuv".into(),
                probability: "Každých 31 - 50 rokov".into(),
                endangered_population: 10,
                ..TerritoryRecord::default()
            },
        ];
        let mut dashboard =
            Dashboard::initialize(territories, Vec::new(), Vec::new(), codes.clone()).unwrap();
        match dashboard.update_now() {
            UpdateOutcome::Updated(cycle) => (cycle, codes),
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[test]
    fn skips_missing_mounts_without_failing() {
        let (cycle, codes) = cycle();
        let caps = Capabilities::new([MountPoint::RiskDistribution, MountPoint::TopEvents]);
        let plan = RenderPlan::build(&cycle, &codes, &caps);

        let mounts: Vec<MountPoint> = plan.charts.iter().map(|c| c.mount).collect();
        assert_eq!(mounts, vec![MountPoint::RiskDistribution, MountPoint::TopEvents]);
        assert_eq!(plan.skipped.len(), 4);
        assert!(plan.skipped.contains(&MountPoint::FactorBreakdown));
    }

    #[test]
    fn jobs_carry_cycle_generation() {
        let (cycle, codes) = cycle();
        let plan = RenderPlan::build(&cycle, &codes, &Capabilities::all());
        assert_eq!(plan.charts.len(), MountPoint::ALL.len());
        assert!(plan.charts.iter().all(|c| c.generation == cycle.generation));
        assert!(plan.skipped.is_empty());
    }

    #[test]
    fn tables_and_label_come_from_cycle() {
        let (cycle, codes) = cycle();
        let plan = RenderPlan::build(&cycle, &codes, &Capabilities::default());
        assert!(plan.charts.is_empty());
        assert_eq!(plan.filter_label, "Entire region");
        assert_eq!(plan.district_rows.len(), 2);
        assert_eq!(plan.top_risks.len(), 1);
        assert_eq!(plan.top_risks[0].municipality, "a1");
        assert_eq!(plan.summary.territories, 2);
    }
}
