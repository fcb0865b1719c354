//! Statistics for one filter selection.

use crate::report;
use crate::Connection;
use log::info;
use samu_stats::{calculate_statistics, FilterSelection};

/// Fetch all tables, filter, aggregate and print.
pub async fn run_stats(
    connection: &Connection,
    district: Option<String>,
    municipality: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let client = connection.client()?;
    let bundle = client.fetch_all().await?;

    let selection = FilterSelection::new(district, municipality);
    let territories = selection.apply(&bundle.territories);
    info!(
        "{}: {} of {} territories",
        selection.label(),
        territories.len(),
        bundle.territories.len()
    );
    if territories.is_empty() {
        anyhow::bail!("No territories match the filter ({})", selection.label());
    }

    let snapshot = calculate_statistics(&territories, &bundle.codes);
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!(
            "{}",
            report::render(&selection.label(), &snapshot, &territories, &bundle.codes)
        );
    }
    Ok(())
}
