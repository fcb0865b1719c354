//! Command implementations for the SAMU statistics CLI.
//!
//! Provides subcommands for checking the Supabase connection and printing
//! territory risk statistics for the whole region, a district or a
//! municipality.

use clap::{Args, Subcommand};
use samu_source::{SupabaseClient, SupabaseConfig};

pub mod check;
pub mod report;
pub mod stats;

/// Supabase connection settings shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct Connection {
    /// Supabase project URL
    #[arg(long, env = "SUPABASE_URL", hide_env_values = true)]
    pub url: String,

    /// Supabase anon key
    #[arg(long, env = "SUPABASE_ANON_KEY", hide_env_values = true)]
    pub key: String,

    /// Rows requested per page
    #[arg(long, default_value_t = samu_source::config::DEFAULT_PAGE_SIZE)]
    pub page_size: usize,
}

impl Connection {
    pub fn client(&self) -> anyhow::Result<SupabaseClient> {
        let config = SupabaseConfig::new(&self.url, &self.key)?.with_page_size(self.page_size);
        Ok(SupabaseClient::new(config)?)
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch territory analyses and print statistics
    Stats {
        #[command(flatten)]
        connection: Connection,

        /// Only include territories in this district
        #[arg(short, long)]
        district: Option<String>,

        /// Only include territories in this municipality
        #[arg(short, long)]
        municipality: Option<String>,

        /// Print the snapshot as JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Verify the Supabase URL and key
    Check {
        #[command(flatten)]
        connection: Connection,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Stats {
            connection,
            district,
            municipality,
            json,
        } => stats::run_stats(&connection, district, municipality, json).await,
        Command::Check { connection } => check::run_check(&connection).await,
    }
}
