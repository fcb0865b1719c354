//! REST client for the Supabase tables backing the dashboard.

use crate::config::SupabaseConfig;
use crate::error::{Result, SourceError};
use log::{debug, info};
use samu_risk::{HazardEvent, Municipality, ProbabilityCode, ProbabilityCodes, TerritoryRecord};
use serde::de::DeserializeOwned;

pub const TERRITORIES_TABLE: &str = "territories";
pub const MUNICIPALITIES_TABLE: &str = "municipalities";
pub const EVENTS_TABLE: &str = "events";
pub const PROBABILITY_CODES_TABLE: &str = "probability_codes";

/// Everything the dashboard needs for one page load.
#[derive(Debug, Clone)]
pub struct DataBundle {
    pub territories: Vec<TerritoryRecord>,
    pub municipalities: Vec<Municipality>,
    pub events: Vec<HazardEvent>,
    pub codes: ProbabilityCodes,
}

/// Client for the Supabase REST API.
#[derive(Clone, Debug)]
pub struct SupabaseClient {
    config: SupabaseConfig,
    http: reqwest::Client,
}

impl SupabaseClient {
    pub fn new(config: SupabaseConfig) -> Result<Self> {
        #[cfg(not(target_arch = "wasm32"))]
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        #[cfg(target_arch = "wasm32")]
        let http = reqwest::Client::new();

        Ok(Self { config, http })
    }

    pub fn config(&self) -> &SupabaseConfig {
        &self.config
    }

    pub async fn fetch_territories(&self) -> Result<Vec<TerritoryRecord>> {
        self.get_rows(TERRITORIES_TABLE).await
    }

    pub async fn fetch_municipalities(&self) -> Result<Vec<Municipality>> {
        self.get_rows(MUNICIPALITIES_TABLE).await
    }

    pub async fn fetch_events(&self) -> Result<Vec<HazardEvent>> {
        self.get_rows(EVENTS_TABLE).await
    }

    /// Fetch the probability code table as an ordered band -> level mapping.
    pub async fn fetch_probability_codes(&self) -> Result<ProbabilityCodes> {
        let rows: Vec<ProbabilityCode> = self.get_rows(PROBABILITY_CODES_TABLE).await?;
        Ok(ProbabilityCodes::from_rows(&rows))
    }

    /// Fetch all four tables concurrently.
    pub async fn fetch_all(&self) -> Result<DataBundle> {
        let (territories, municipalities, events, codes) = futures::try_join!(
            self.fetch_territories(),
            self.fetch_municipalities(),
            self.fetch_events(),
            self.fetch_probability_codes(),
        )?;
        info!(
            "Loaded {} territories, {} municipalities, {} events, {} probability codes",
            territories.len(),
            municipalities.len(),
            events.len(),
            codes.len()
        );
        Ok(DataBundle {
            territories,
            municipalities,
            events,
            codes,
        })
    }

    /// Request a single municipality id to verify URL and key.
    pub async fn test_connection(&self) -> Result<()> {
        let body = self
            .get_text(MUNICIPALITIES_TABLE, &page_query("id", 1, 0))
            .await?;
        let _: Vec<serde_json::Value> = parse_rows(MUNICIPALITIES_TABLE, &body)?;
        info!("Supabase connection test passed");
        Ok(())
    }

    /// Fetch every row of `table`, one page at a time until a short page.
    async fn get_rows<T: DeserializeOwned>(&self, table: &str) -> Result<Vec<T>> {
        let page_size = self.config.page_size();
        let mut rows = Vec::new();
        let mut offset = 0;
        loop {
            let body = self
                .get_text(table, &page_query("*", page_size, offset))
                .await?;
            let page: Vec<T> = parse_rows(table, &body)?;
            let fetched = page.len();
            rows.extend(page);
            debug!("{}: fetched {} rows at offset {}", table, fetched, offset);
            if fetched < page_size {
                break;
            }
            offset += fetched;
        }
        Ok(rows)
    }

    async fn get_text(&self, table: &str, query: &[(&str, String)]) -> Result<String> {
        let response = self
            .http
            .get(self.config.rest_url(table))
            .query(query)
            .header("apikey", self.config.anon_key())
            .header(
                "Authorization",
                format!("Bearer {}", self.config.anon_key()),
            )
            .header("Accept", "application/json")
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        check_status(table, status, body)
    }
}

/// PostgREST query parameters for one page ordered by primary key.
fn page_query(select: &str, limit: usize, offset: usize) -> Vec<(&'static str, String)> {
    vec![
        ("select", select.to_string()),
        ("order", "id.asc".to_string()),
        ("limit", limit.to_string()),
        ("offset", offset.to_string()),
    ]
}

/// Map an HTTP status to the error taxonomy, passing the body through on success.
fn check_status(table: &str, status: u16, body: String) -> Result<String> {
    match status {
        200..=299 => Ok(body),
        401 | 403 => Err(SourceError::Auth {
            table: table.to_string(),
            status,
        }),
        _ => Err(SourceError::Status {
            table: table.to_string(),
            status,
            body,
        }),
    }
}

fn parse_rows<T: DeserializeOwned>(table: &str, body: &str) -> Result<Vec<T>> {
    serde_json::from_str(body).map_err(|source| SourceError::Decode {
        table: table.to_string(),
        source,
    })
}
