//! Plain-text statistics report.

use samu_risk::{ProbabilityCodes, RiskLevel, TerritoryRecord};
use samu_stats::format::{area, percent, thousands};
use samu_stats::projection;
use samu_stats::Snapshot;
use std::fmt::Write;

/// Render summary, risk distribution, district table and top critical risks.
pub fn render(
    label: &str,
    snapshot: &Snapshot,
    territories: &[TerritoryRecord],
    codes: &ProbabilityCodes,
) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_report(&mut out, label, snapshot, territories, codes);
    out
}

fn write_report(
    out: &mut String,
    label: &str,
    snapshot: &Snapshot,
    territories: &[TerritoryRecord],
    codes: &ProbabilityCodes,
) -> std::fmt::Result {
    let summary = projection::summary(snapshot);
    writeln!(out, "== {label} ==")?;
    writeln!(out, "Territories:            {}", thousands(summary.territories))?;
    writeln!(out, "Municipalities:         {}", thousands(summary.municipalities as u64))?;
    writeln!(out, "Hazard events:          {}", thousands(summary.events as u64))?;
    writeln!(out, "Endangered population:  {}", thousands(summary.population))?;
    writeln!(out, "Endangered area (km²):  {}", area(summary.area))?;

    writeln!(out, "\nRisk distribution")?;
    for slice in projection::risk_distribution(snapshot) {
        writeln!(
            out,
            "  {:<10} {:>8} {:>7}",
            slice.level.label(),
            thousands(slice.count),
            percent(slice.count, snapshot.total)
        )?;
    }

    writeln!(out, "\nDistricts")?;
    write!(out, "  {:<24} {:>8}", "District", "Total")?;
    for level in RiskLevel::CLASSIFIED {
        write!(out, " {:>8}", level.label())?;
    }
    writeln!(out, " {:>12}", "Population")?;
    for row in projection::district_rows(snapshot) {
        write!(out, "  {:<24} {:>8}", row.district, thousands(row.total))?;
        for level in RiskLevel::CLASSIFIED {
            write!(out, " {:>8}", thousands(row.risk_levels.get(level)))?;
        }
        writeln!(out, " {:>12}", thousands(row.population))?;
    }

    let risks = projection::top_critical_risks(territories, codes);
    writeln!(out, "\nTop critical risks")?;
    if risks.is_empty() {
        writeln!(out, "  none")?;
    }
    for (i, risk) in risks.iter().enumerate() {
        writeln!(
            out,
            "  {:>2}. {} / {} ({}) - {} people",
            i + 1,
            risk.municipality,
            risk.event,
            risk.risk_source,
            thousands(risk.population)
        )?;
    }
    Ok(())
}
