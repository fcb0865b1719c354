//! Single-pass statistics aggregation over territory records.
//!
//! A [`Snapshot`] is computed wholesale from a territory list and never
//! mutated afterwards; every filter change produces a fresh one.

use crate::tally::Tally;
use samu_risk::{ProbabilityCodes, RiskLevel, TerritoryRecord};
use serde::Serialize;

/// Territory counts per risk level, including the `unknown` fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RiskCounts {
    pub critical: u64,
    pub high: u64,
    pub medium: u64,
    pub low: u64,
    pub unknown: u64,
}

impl RiskCounts {
    pub fn increment(&mut self, level: RiskLevel) {
        *self.slot(level) += 1;
    }

    pub fn get(&self, level: RiskLevel) -> u64 {
        match level {
            RiskLevel::Critical => self.critical,
            RiskLevel::High => self.high,
            RiskLevel::Medium => self.medium,
            RiskLevel::Low => self.low,
            RiskLevel::Unknown => self.unknown,
        }
    }

    fn slot(&mut self, level: RiskLevel) -> &mut u64 {
        match level {
            RiskLevel::Critical => &mut self.critical,
            RiskLevel::High => &mut self.high,
            RiskLevel::Medium => &mut self.medium,
            RiskLevel::Low => &mut self.low,
            RiskLevel::Unknown => &mut self.unknown,
        }
    }

    pub fn total(&self) -> u64 {
        self.critical + self.high + self.medium + self.low + self.unknown
    }
}

/// Per-district totals with a risk level breakdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DistrictStats {
    pub total: u64,
    #[serde(flatten)]
    pub risk_levels: RiskCounts,
    pub population: u64,
}

/// Grouped counts and sums over one set of territories.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Snapshot {
    pub total: u64,
    pub risk_levels: RiskCounts,
    pub municipalities: Tally,
    pub events: Tally,
    pub districts: Tally<DistrictStats>,
    pub probabilities: Tally,
    pub factors: Tally,
    pub total_population: u64,
    pub total_area: f64,
}

/// Aggregate `territories` into a snapshot.
///
/// The risk level of every record is resolved from its probability band
/// through `codes`; bands missing from the table count towards the
/// fallback bucket.
pub fn calculate_statistics(territories: &[TerritoryRecord], codes: &ProbabilityCodes) -> Snapshot {
    let mut stats = Snapshot {
        total: territories.len() as u64,
        ..Snapshot::default()
    };

    for territory in territories {
        let band = territory.probability.trim();
        let level = codes.resolve(band);
        let population = territory.endangered_population;

        stats.risk_levels.increment(level);
        stats.municipalities.increment(&territory.municipality_name);
        stats.events.increment(&territory.event_name);

        let district = stats.districts.entry(&territory.district);
        district.total += 1;
        district.risk_levels.increment(level);
        district.population += population;

        stats.probabilities.increment(band);
        stats.factors.increment(&territory.factor_name);

        stats.total_population += population;
        if territory.endangered_area.is_finite() {
            stats.total_area += territory.endangered_area;
        }
    }

    if stats.risk_levels.unknown > 0 {
        log::warn!(
            "{} territories have a probability band missing from the code table",
            stats.risk_levels.unknown
        );
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{self, codes, region, territory};

    #[test]
    fn risk_levels_sum_to_total() {
        let territories = region();
        let stats = calculate_statistics(&territories, &codes());
        assert_eq!(stats.total, territories.len() as u64);
        assert_eq!(stats.risk_levels.total(), stats.total);
        assert_eq!(stats.risk_levels.critical, 2);
        assert_eq!(stats.risk_levels.high, 2);
        assert_eq!(stats.risk_levels.medium, 1);
        assert_eq!(stats.risk_levels.low, 1);
        assert_eq!(stats.risk_levels.unknown, 0);
    }

    #[test]
    fn every_dimension_sums_to_total() {
        let stats = calculate_statistics(&region(), &codes());
        assert_eq!(stats.municipalities.sum(), stats.total);
        assert_eq!(stats.events.sum(), stats.total);
        assert_eq!(stats.probabilities.sum(), stats.total);
        assert_eq!(stats.factors.sum(), stats.total);
        let district_total: u64 = stats.districts.iter().map(|(_, d)| d.total).sum();
        assert_eq!(district_total, stats.total);
        for (_, d) in stats.districts.iter() {
            assert_eq!(d.risk_levels.total(), d.total);
        }
    }

    #[test]
    fn population_and_area_totals() {
        let territories = region();
        let stats = calculate_statistics(&territories, &codes());
        let expected: u64 = territories.iter().map(|t| t.endangered_population).sum();
        assert_eq!(stats.total_population, expected);
        assert_eq!(stats.total_population, 2530);
        assert!((stats.total_area - 9.0).abs() < 1e-9);
    }

    #[test]
    fn unseen_band_counts_as_unknown() {
        let territories = vec![
            territory("A", "m1", "e", fixtures::CRITICAL_BAND, 1),
            territory("A", "m1", "e", "Raz za storočie", 1),
        ];
        let stats = calculate_statistics(&territories, &codes());
        assert_eq!(stats.risk_levels.critical, 1);
        assert_eq!(stats.risk_levels.unknown, 1);
        assert_eq!(stats.risk_levels.total(), 2);
        assert_eq!(stats.districts.get("A").unwrap().risk_levels.unknown, 1);
        assert_eq!(stats.probabilities.count("Raz za storočie"), 1);
    }

    #[test]
    fn padded_band_is_counted_under_its_trimmed_label() {
        let padded = format!("{} ", fixtures::CRITICAL_BAND);
        let territories = vec![territory("A", "m1", "e", &padded, 1)];
        let stats = calculate_statistics(&territories, &codes());
        assert_eq!(stats.risk_levels.critical, 1);
        assert_eq!(stats.probabilities.count(fixtures::CRITICAL_BAND), 1);
        assert_eq!(stats.probabilities.count(&padded), 0);
    }

    #[test]
    fn empty_code_table_puts_everything_in_unknown() {
        let territories = region();
        let stats = calculate_statistics(&territories, &ProbabilityCodes::default());
        assert_eq!(stats.risk_levels.unknown, territories.len() as u64);
    }

    #[test]
    fn district_breakdown_example() {
        let territories = vec![
            territory("A", "a1", "e", fixtures::CRITICAL_BAND, 100),
            territory("A", "a2", "e", fixtures::LOW_BAND, 5),
            territory("B", "b1", "e", fixtures::HIGH_BAND, 40),
        ];
        let stats = calculate_statistics(&territories, &codes());

        let a = stats.districts.get("A").unwrap();
        assert_eq!(a.total, 2);
        assert_eq!(a.risk_levels.critical, 1);
        assert_eq!(a.risk_levels.low, 1);
        assert_eq!(a.population, 105);

        let b = stats.districts.get("B").unwrap();
        assert_eq!(b.total, 1);
        assert_eq!(b.risk_levels.high, 1);
        assert_eq!(b.population, 40);
    }

    #[test]
    fn counts_do_not_depend_on_input_order() {
        let territories = region();
        let mut reversed = territories.clone();
        reversed.reverse();
        let a = calculate_statistics(&territories, &codes());
        let b = calculate_statistics(&reversed, &codes());
        assert_eq!(a.risk_levels, b.risk_levels);
        assert_eq!(a.total_population, b.total_population);
        for (name, count) in a.municipalities.iter() {
            assert_eq!(b.municipalities.count(name), *count);
        }
    }

    #[test]
    fn empty_input_yields_zero_snapshot() {
        let stats = calculate_statistics(&[], &codes());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.risk_levels.total(), 0);
        assert!(stats.districts.is_empty());
    }
}
