//! Connection test.

use crate::Connection;
use anyhow::Context;
use log::info;

/// Request a single row to confirm the project URL and key work.
pub async fn run_check(connection: &Connection) -> anyhow::Result<()> {
    let client = connection.client()?;
    info!("Checking Supabase connection to {}", client.config().url());
    client
        .test_connection()
        .await
        .with_context(|| format!("connection test against {} failed", client.config().url()))?;
    println!("Connection OK: {}", client.config().url());
    Ok(())
}
