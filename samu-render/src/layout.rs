//! Panels mounted by the dashboard.

use crate::mount::MountPoint;

/// A section of the dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    SummaryCards,
    Chart(MountPoint),
    DistrictTable,
    TopRisksTable,
}

/// Ordered list of panels the page renders.
///
/// Charts left out of the layout have no canvas, so the capability probe
/// reports them missing and their rendering is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardLayout {
    panels: Vec<Panel>,
}

impl Default for DashboardLayout {
    /// The standard page: every chart except the factor breakdown.
    fn default() -> Self {
        let mut panels = vec![Panel::SummaryCards];
        panels.extend(
            MountPoint::ALL
                .into_iter()
                .filter(|m| *m != MountPoint::FactorBreakdown)
                .map(Panel::Chart),
        );
        panels.push(Panel::DistrictTable);
        panels.push(Panel::TopRisksTable);
        Self { panels }
    }
}

impl DashboardLayout {
    pub fn new(panels: Vec<Panel>) -> Self {
        Self { panels }
    }

    /// Every panel, including the factor breakdown chart.
    pub fn full() -> Self {
        let mut panels = vec![Panel::SummaryCards];
        panels.extend(MountPoint::ALL.into_iter().map(Panel::Chart));
        panels.push(Panel::DistrictTable);
        panels.push(Panel::TopRisksTable);
        Self { panels }
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn charts(&self) -> impl Iterator<Item = MountPoint> + '_ {
        self.panels.iter().filter_map(|p| match p {
            Panel::Chart(m) => Some(*m),
            _ => None,
        })
    }

    pub fn has(&self, panel: Panel) -> bool {
        self.panels.contains(&panel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_omits_factor_chart() {
        let layout = DashboardLayout::default();
        assert!(!layout.has(Panel::Chart(MountPoint::FactorBreakdown)));
        assert_eq!(layout.charts().count(), 5);
        assert!(layout.has(Panel::DistrictTable));
        assert!(layout.has(Panel::TopRisksTable));
    }

    #[test]
    fn full_layout_has_every_chart() {
        let charts: Vec<MountPoint> = DashboardLayout::full().charts().collect();
        assert_eq!(charts, MountPoint::ALL.to_vec());
    }
}
