//! Named chart mount points and the capability set of a layout.

use serde::Serialize;
use std::collections::BTreeSet;

/// A chart slot in the dashboard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MountPoint {
    RiskDistribution,
    TopMunicipalities,
    TopEvents,
    DistrictBreakdown,
    ProbabilityHistogram,
    FactorBreakdown,
}

impl MountPoint {
    pub const ALL: [MountPoint; 6] = [
        MountPoint::RiskDistribution,
        MountPoint::TopMunicipalities,
        MountPoint::TopEvents,
        MountPoint::DistrictBreakdown,
        MountPoint::ProbabilityHistogram,
        MountPoint::FactorBreakdown,
    ];

    /// DOM id of the chart's canvas.
    pub fn dom_id(&self) -> &'static str {
        match self {
            MountPoint::RiskDistribution => "risk-distribution-chart",
            MountPoint::TopMunicipalities => "top-municipalities-chart",
            MountPoint::TopEvents => "top-events-chart",
            MountPoint::DistrictBreakdown => "district-breakdown-chart",
            MountPoint::ProbabilityHistogram => "probability-histogram-chart",
            MountPoint::FactorBreakdown => "factor-breakdown-chart",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MountPoint::RiskDistribution => "Risk Distribution",
            MountPoint::TopMunicipalities => "Top Municipalities",
            MountPoint::TopEvents => "Top Hazard Events",
            MountPoint::DistrictBreakdown => "Territories by District",
            MountPoint::ProbabilityHistogram => "Probability Bands",
            MountPoint::FactorBreakdown => "Risk Factors",
        }
    }

    pub fn from_dom_id(id: &str) -> Option<MountPoint> {
        MountPoint::ALL.into_iter().find(|m| m.dom_id() == id)
    }
}

/// Mount points present in the current layout.
///
/// Produced once by the render layer's initialization; charts whose mount
/// point is absent are skipped instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities {
    mounts: BTreeSet<MountPoint>,
}

impl Capabilities {
    pub fn new<I: IntoIterator<Item = MountPoint>>(mounts: I) -> Self {
        Self {
            mounts: mounts.into_iter().collect(),
        }
    }

    /// Every mount point available.
    pub fn all() -> Self {
        Self::new(MountPoint::ALL)
    }

    pub fn supports(&self, mount: MountPoint) -> bool {
        self.mounts.contains(&mount)
    }

    pub fn available(&self) -> impl Iterator<Item = MountPoint> + '_ {
        self.mounts.iter().copied()
    }

    /// Mount points of [`MountPoint::ALL`] that are not available.
    pub fn missing(&self) -> Vec<MountPoint> {
        MountPoint::ALL
            .into_iter()
            .filter(|m| !self.supports(*m))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.mounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_ids_are_unique_and_round_trip() {
        let ids: BTreeSet<&str> = MountPoint::ALL.iter().map(|m| m.dom_id()).collect();
        assert_eq!(ids.len(), MountPoint::ALL.len());
        for mount in MountPoint::ALL {
            assert_eq!(MountPoint::from_dom_id(mount.dom_id()), Some(mount));
        }
        assert_eq!(MountPoint::from_dom_id("nope"), None);
    }

    #[test]
    fn missing_lists_absent_mounts() {
        let caps = Capabilities::new([MountPoint::RiskDistribution, MountPoint::TopEvents]);
        assert!(caps.supports(MountPoint::TopEvents));
        assert!(!caps.supports(MountPoint::FactorBreakdown));
        assert_eq!(caps.missing().len(), 4);
        assert!(Capabilities::all().missing().is_empty());
        assert!(Capabilities::default().is_empty());
    }
}
