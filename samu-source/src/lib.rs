//! Supabase data source for SAMU territory risk data.
//!
//! Reads the `territories`, `municipalities`, `events` and
//! `probability_codes` tables through the Supabase REST (PostgREST) API.
//! The client is built on `reqwest` and runs both natively (CLI) and in
//! the browser (WASM dashboard).

pub mod client;
pub mod config;
pub mod error;

pub use client::{DataBundle, SupabaseClient};
pub use config::SupabaseConfig;
pub use error::{Result, SourceError};
