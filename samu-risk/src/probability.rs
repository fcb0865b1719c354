//! Probability code table.
//!
//! The backend keeps the mapping from recurrence-interval band to risk
//! level in a lookup table (`probability_codes`) so the classification
//! stays data-driven. [`ProbabilityCodes`] is the in-memory form of that
//! table with an explicit fallback for unseen bands.

use crate::risk_level::RiskLevel;
use crate::serde_util::null_as_default;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fixed display order of probability bands, most frequent first.
///
/// Both the "Každé" and "Každých" spellings occur in the source data for
/// the 4-5 and 6-10 year bands, so both are listed.
pub const PROBABILITY_BAND_ORDER: [&str; 11] = [
    "Každé 2 - 3 roky",
    "Každé 4 - 5 rokov",
    "Každých 4 - 5 rokov",
    "Každé 6 - 10 rokov",
    "Každých 6 - 10 rokov",
    "Každých 11 - 20 rokov",
    "Každých 21 - 30 rokov",
    "Každých 31 - 50 rokov",
    "Každých 50 - 100 rokov",
    "Každých 100 - 200 rokov",
    "Každých 200 a viac rokov",
];

/// A row of the `probability_codes` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityCode {
    pub label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub risk_level: String,
    #[serde(default)]
    pub sort_order: Option<i32>,
}

/// Ordered mapping from probability band label to risk level.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityCodes {
    entries: Vec<(String, RiskLevel)>,
    index: HashMap<String, usize>,
    fallback: RiskLevel,
}

impl Default for ProbabilityCodes {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            fallback: RiskLevel::Unknown,
        }
    }
}

impl ProbabilityCodes {
    /// Build the table from backend rows.
    ///
    /// Rows with a `sort_order` come first in ascending order; rows without
    /// one keep their fetch order after them. A repeated label keeps its
    /// first entry.
    pub fn from_rows(rows: &[ProbabilityCode]) -> Self {
        let mut ordered: Vec<&ProbabilityCode> = rows.iter().collect();
        ordered.sort_by_key(|row| (row.sort_order.is_none(), row.sort_order));

        let mut codes = Self::default();
        for row in ordered {
            let level = RiskLevel::parse(&row.risk_level);
            if level == RiskLevel::Unknown {
                log::warn!(
                    "Probability band '{}' has unrecognized risk level '{}'",
                    row.label,
                    row.risk_level
                );
            }
            codes.insert(&row.label, level);
        }
        codes
    }

    /// Build the table from `(label, level)` pairs in order.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, RiskLevel)>,
    {
        let mut codes = Self::default();
        for (label, level) in pairs {
            codes.insert(label, level);
        }
        codes
    }

    fn insert(&mut self, label: &str, level: RiskLevel) {
        let label = label.trim();
        if self.index.contains_key(label) {
            log::debug!("Duplicate probability band '{}' ignored", label);
            return;
        }
        self.index.insert(label.to_string(), self.entries.len());
        self.entries.push((label.to_string(), level));
    }

    /// Set the risk level returned for bands missing from the table.
    pub fn with_fallback(mut self, fallback: RiskLevel) -> Self {
        self.fallback = fallback;
        self
    }

    /// Resolve a band label to its risk level, falling back for unseen bands.
    pub fn resolve(&self, band: &str) -> RiskLevel {
        self.get(band).unwrap_or(self.fallback)
    }

    /// Look up a band without applying the fallback.
    pub fn get(&self, band: &str) -> Option<RiskLevel> {
        self.index.get(band.trim()).map(|&i| self.entries[i].1)
    }

    pub fn fallback(&self) -> RiskLevel {
        self.fallback
    }

    /// Entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, RiskLevel)> {
        self.entries.iter().map(|(label, level)| (label.as_str(), *level))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
