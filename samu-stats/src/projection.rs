//! Chart series and table rows derived from a snapshot.
//!
//! Projections only read their inputs. Everything the render layer shows
//! comes from here, except the two tables that need per-record detail,
//! which also take the filtered territory list.

use crate::aggregate::{DistrictStats, RiskCounts, Snapshot};
use samu_risk::{ProbabilityCodes, RiskLevel, TerritoryRecord, PROBABILITY_BAND_ORDER};
use serde::Serialize;

/// Municipalities shown in the top municipalities chart.
pub const TOP_MUNICIPALITIES: usize = 10;
/// Hazard events shown in the top events chart.
pub const TOP_EVENTS: usize = 15;
/// Rows in the critical risks table.
pub const TOP_CRITICAL_RISKS: usize = 20;

/// A labelled count in a chart series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bar {
    pub label: String,
    pub count: u64,
}

/// A risk distribution slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskSlice {
    pub level: RiskLevel,
    pub count: u64,
}

/// A probability histogram bar at its fixed position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandBar {
    pub band: &'static str,
    pub count: u64,
    /// Level the band resolves to, used for the bar color.
    pub level: RiskLevel,
}

/// One row of the district summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistrictRow {
    pub district: String,
    pub total: u64,
    #[serde(flatten)]
    pub risk_levels: RiskCounts,
    pub population: u64,
}

/// One row of the critical risks table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskRow {
    pub municipality: String,
    pub event: String,
    pub risk_source: String,
    pub level: RiskLevel,
    pub population: u64,
    pub probability: String,
}

/// Headline numbers for the summary cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub territories: u64,
    pub municipalities: usize,
    pub events: usize,
    pub population: u64,
    pub area: f64,
}

fn bars<'a>(entries: impl IntoIterator<Item = (&'a str, u64)>) -> Vec<Bar> {
    entries
        .into_iter()
        .map(|(label, count)| Bar {
            label: label.to_string(),
            count,
        })
        .collect()
}

/// Risk level distribution, most severe first. The fallback bucket is
/// only included when it is non-empty.
pub fn risk_distribution(snapshot: &Snapshot) -> Vec<RiskSlice> {
    RiskLevel::ALL
        .into_iter()
        .filter(|&level| level != RiskLevel::Unknown || snapshot.risk_levels.unknown > 0)
        .map(|level| RiskSlice {
            level,
            count: snapshot.risk_levels.get(level),
        })
        .collect()
}

pub fn top_municipalities(snapshot: &Snapshot) -> Vec<Bar> {
    bars(snapshot.municipalities.top(TOP_MUNICIPALITIES))
}

pub fn top_events(snapshot: &Snapshot) -> Vec<Bar> {
    bars(snapshot.events.top(TOP_EVENTS))
}

/// Territory count per district, largest first.
pub fn district_breakdown(snapshot: &Snapshot) -> Vec<Bar> {
    bars(
        snapshot
            .districts
            .ranked_by(|d| d.total)
            .into_iter()
            .map(|(name, d)| (name, d.total)),
    )
}

pub fn factor_breakdown(snapshot: &Snapshot) -> Vec<Bar> {
    bars(snapshot.factors.top(snapshot.factors.len()))
}

/// One bar per band in [`PROBABILITY_BAND_ORDER`], zero where absent.
///
/// Bands outside the fixed order are not shown.
pub fn probability_histogram(snapshot: &Snapshot, codes: &ProbabilityCodes) -> Vec<BandBar> {
    PROBABILITY_BAND_ORDER
        .iter()
        .map(|&band| BandBar {
            band,
            count: snapshot.probabilities.count(band),
            level: codes.resolve(band),
        })
        .collect()
}

/// District summary rows, largest district first.
pub fn district_rows(snapshot: &Snapshot) -> Vec<DistrictRow> {
    snapshot
        .districts
        .ranked_by(|d: &DistrictStats| d.total)
        .into_iter()
        .map(|(name, d)| DistrictRow {
            district: name.to_string(),
            total: d.total,
            risk_levels: d.risk_levels,
            population: d.population,
        })
        .collect()
}

/// Critical territories by endangered population, largest first.
///
/// The level is resolved from the probability band, the same way the
/// snapshot counts it.
pub fn top_critical_risks(territories: &[TerritoryRecord], codes: &ProbabilityCodes) -> Vec<RiskRow> {
    let mut critical: Vec<&TerritoryRecord> = territories
        .iter()
        .filter(|t| codes.resolve(&t.probability) == RiskLevel::Critical)
        .collect();
    critical.sort_by(|a, b| b.endangered_population.cmp(&a.endangered_population));
    critical
        .into_iter()
        .take(TOP_CRITICAL_RISKS)
        .map(|t| RiskRow {
            municipality: t.municipality_name.clone(),
            event: t.event_name.clone(),
            risk_source: t.risk_source.clone(),
            level: RiskLevel::Critical,
            population: t.endangered_population,
            probability: t.probability.clone(),
        })
        .collect()
}

pub fn summary(snapshot: &Snapshot) -> Summary {
    Summary {
        territories: snapshot.total,
        municipalities: snapshot.municipalities.len(),
        events: snapshot.events.len(),
        population: snapshot.total_population,
        area: snapshot.total_area,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::calculate_statistics;
    use crate::fixtures::{self, codes, region, territory};

    #[test]
    fn histogram_accounts_for_every_territory() {
        let mut territories = region();
        territories.push(territory(
            "Čadca",
            "Krásno",
            "Povodeň",
            &format!(" {} ", fixtures::CRITICAL_BAND),
            10,
        ));
        let stats = calculate_statistics(&territories, &codes());
        let histogram = probability_histogram(&stats, &codes());
        let sum: u64 = histogram.iter().map(|b| b.count).sum();
        assert_eq!(sum, stats.total);
        assert_eq!(histogram[0].count, stats.risk_levels.critical);
    }

    #[test]
    fn histogram_has_fixed_order_with_zeros() {
        let stats = calculate_statistics(&region(), &codes());
        let histogram = probability_histogram(&stats, &codes());

        assert_eq!(histogram.len(), PROBABILITY_BAND_ORDER.len());
        for (bar, band) in histogram.iter().zip(PROBABILITY_BAND_ORDER) {
            assert_eq!(bar.band, band);
        }
        assert_eq!(histogram[0].count, 2);
        assert_eq!(histogram[0].level, RiskLevel::Critical);
        assert_eq!(histogram[1].count, 0);
        assert_eq!(histogram[1].level, RiskLevel::Unknown);
        assert_eq!(histogram[10].count, 1);
    }

    #[test]
    fn histogram_order_ignores_counts() {
        // The least frequent band has the most territories here.
        let territories = vec![
            territory("A", "m", "e", fixtures::LOW_BAND, 1),
            territory("A", "m", "e", fixtures::LOW_BAND, 1),
            territory("A", "m", "e", fixtures::CRITICAL_BAND, 1),
        ];
        let stats = calculate_statistics(&territories, &codes());
        let histogram = probability_histogram(&stats, &codes());
        assert_eq!(histogram[0].band, fixtures::CRITICAL_BAND);
        assert_eq!(histogram[0].count, 1);
        assert_eq!(histogram[10].band, fixtures::LOW_BAND);
        assert_eq!(histogram[10].count, 2);
    }

    #[test]
    fn district_rows_match_example() {
        let territories = vec![
            territory("A", "a1", "e", fixtures::CRITICAL_BAND, 100),
            territory("A", "a2", "e", fixtures::LOW_BAND, 5),
            territory("B", "b1", "e", fixtures::HIGH_BAND, 40),
        ];
        let stats = calculate_statistics(&territories, &codes());
        let rows = district_rows(&stats);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].district, "A");
        assert_eq!(rows[0].total, 2);
        assert_eq!(rows[0].risk_levels.critical, 1);
        assert_eq!(rows[0].risk_levels.low, 1);
        assert_eq!(rows[0].population, 105);
        assert_eq!(rows[1].district, "B");
        assert_eq!(rows[1].total, 1);
        assert_eq!(rows[1].risk_levels.high, 1);
        assert_eq!(rows[1].population, 40);
    }

    #[test]
    fn district_rows_tie_keeps_first_seen() {
        let territories = vec![
            territory("B", "b", "e", fixtures::LOW_BAND, 1),
            territory("A", "a", "e", fixtures::LOW_BAND, 1),
        ];
        let stats = calculate_statistics(&territories, &codes());
        let names: Vec<String> = district_rows(&stats).into_iter().map(|r| r.district).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn critical_risks_use_resolved_level_and_population_order() {
        let territories = region();
        let rows = top_critical_risks(&territories, &codes());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].municipality, "Rajec");
        assert_eq!(rows[0].population, 1200);
        assert_eq!(rows[1].municipality, "Krásno");
        assert!(rows.iter().all(|r| r.level == RiskLevel::Critical));
    }

    #[test]
    fn critical_risks_capped_at_twenty() {
        let territories: Vec<_> = (0..30)
            .map(|i| territory("A", &format!("m{i}"), "e", fixtures::CRITICAL_BAND, i))
            .collect();
        let rows = top_critical_risks(&territories, &codes());
        assert_eq!(rows.len(), TOP_CRITICAL_RISKS);
        assert_eq!(rows[0].population, 29);
        assert_eq!(rows[19].population, 10);
    }

    #[test]
    fn risk_distribution_hides_empty_unknown() {
        let stats = calculate_statistics(&region(), &codes());
        let slices = risk_distribution(&stats);
        assert_eq!(slices.len(), 4);
        assert_eq!(slices.iter().map(|s| s.count).sum::<u64>(), stats.total);

        let with_unknown = calculate_statistics(
            &[territory("A", "m", "e", "Neznáme pásmo", 1)],
            &codes(),
        );
        let slices = risk_distribution(&with_unknown);
        assert_eq!(slices.len(), 5);
        assert_eq!(slices[4].level, RiskLevel::Unknown);
        assert_eq!(slices[4].count, 1);
    }

    #[test]
    fn top_lists_are_ranked_and_capped() {
        let territories: Vec<_> = (0..12)
            .flat_map(|i| {
                (0..=i).map(move |_| territory("A", &format!("m{i:02}"), "e", fixtures::LOW_BAND, 0))
            })
            .collect();
        let stats = calculate_statistics(&territories, &codes());
        let top = top_municipalities(&stats);
        assert_eq!(top.len(), TOP_MUNICIPALITIES);
        assert_eq!(top[0].label, "m11");
        assert_eq!(top[0].count, 12);
        assert_eq!(top[9].label, "m02");
    }

    #[test]
    fn summary_counts_distinct_values() {
        let stats = calculate_statistics(&region(), &codes());
        let s = summary(&stats);
        assert_eq!(s.territories, 6);
        assert_eq!(s.municipalities, 4);
        assert_eq!(s.events, 3);
        assert_eq!(s.population, 2530);
    }
}
