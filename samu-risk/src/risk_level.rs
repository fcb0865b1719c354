//! Coarse risk classification derived from a probability band.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk level of a territory.
///
/// `Unknown` is the fallback bucket for probability bands that are missing
/// from the probability code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Critical,
    High,
    Medium,
    Low,
    Unknown,
}

impl RiskLevel {
    /// The four classified levels, most severe first.
    pub const CLASSIFIED: [RiskLevel; 4] = [
        RiskLevel::Critical,
        RiskLevel::High,
        RiskLevel::Medium,
        RiskLevel::Low,
    ];

    /// Every bucket, including the fallback.
    pub const ALL: [RiskLevel; 5] = [
        RiskLevel::Critical,
        RiskLevel::High,
        RiskLevel::Medium,
        RiskLevel::Low,
        RiskLevel::Unknown,
    ];

    /// Lowercase key used in JSON and CSS class names.
    pub fn key(&self) -> &'static str {
        match self {
            RiskLevel::Critical => "critical",
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
            RiskLevel::Unknown => "unknown",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Critical => "Critical",
            RiskLevel::High => "High",
            RiskLevel::Medium => "Medium",
            RiskLevel::Low => "Low",
            RiskLevel::Unknown => "Unknown",
        }
    }

    /// Chart fill color (80% opacity).
    pub fn fill_color(&self) -> &'static str {
        match self {
            RiskLevel::Critical => "rgba(220, 38, 38, 0.8)",
            RiskLevel::High => "rgba(234, 88, 12, 0.8)",
            RiskLevel::Medium => "rgba(217, 119, 6, 0.8)",
            RiskLevel::Low => "rgba(22, 163, 74, 0.8)",
            RiskLevel::Unknown => "rgba(107, 114, 128, 0.8)",
        }
    }

    /// Chart border color.
    pub fn border_color(&self) -> &'static str {
        match self {
            RiskLevel::Critical => "rgb(220, 38, 38)",
            RiskLevel::High => "rgb(234, 88, 12)",
            RiskLevel::Medium => "rgb(217, 119, 6)",
            RiskLevel::Low => "rgb(22, 163, 74)",
            RiskLevel::Unknown => "rgb(107, 114, 128)",
        }
    }

    /// Parse a risk level as stored in the probability code table.
    ///
    /// Accepts the English keys and the Slovak labels used by the source
    /// data, case-insensitively. Anything else maps to `Unknown`.
    pub fn parse(s: &str) -> RiskLevel {
        match s.trim().to_lowercase().as_str() {
            "critical" | "kritické" | "kriticke" | "kritická" => RiskLevel::Critical,
            "high" | "vysoké" | "vysoke" | "vysoká" => RiskLevel::High,
            "medium" | "stredné" | "stredne" | "stredná" => RiskLevel::Medium,
            "low" | "nízke" | "nizke" | "nízka" => RiskLevel::Low,
            _ => RiskLevel::Unknown,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_keys_and_slovak_labels() {
        assert_eq!(RiskLevel::parse("critical"), RiskLevel::Critical);
        assert_eq!(RiskLevel::parse(" HIGH "), RiskLevel::High);
        assert_eq!(RiskLevel::parse("Stredné"), RiskLevel::Medium);
        assert_eq!(RiskLevel::parse("nízke"), RiskLevel::Low);
    }

    #[test]
    fn parse_unrecognized_is_unknown() {
        assert_eq!(RiskLevel::parse(""), RiskLevel::Unknown);
        assert_eq!(RiskLevel::parse("catastrophic"), RiskLevel::Unknown);
    }

    #[test]
    fn serializes_as_lowercase_key() {
        let json = serde_json::to_string(&RiskLevel::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
        for level in RiskLevel::ALL {
            assert_eq!(
                serde_json::to_string(&level).unwrap(),
                format!("\"{}\"", level.key())
            );
        }
    }
}
