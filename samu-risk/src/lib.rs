//! Core domain types for SAMU territory risk analysis.
//!
//! This crate provides:
//! - `territory`: the territory record fetched from the backend
//! - `catalog`: municipality and hazard event catalog rows
//! - `risk_level`: the coarse risk classification and its display metadata
//! - `probability`: the probability code table that maps recurrence bands
//!   to risk levels

pub mod catalog;
pub mod probability;
pub mod risk_level;
pub mod territory;

mod serde_util;

pub use catalog::{HazardEvent, Municipality};
pub use probability::{ProbabilityCode, ProbabilityCodes, PROBABILITY_BAND_ORDER};
pub use risk_level::RiskLevel;
pub use territory::TerritoryRecord;
