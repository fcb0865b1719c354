//! Territory records: one municipality/hazard event pairing with its
//! risk and impact attributes.

use crate::serde_util::{lenient_count, null_as_default};
use serde::{Deserialize, Serialize};

/// A territory row as returned by the `territories` table.
///
/// Nullable columns deserialize to empty strings or zero. A stored risk
/// level column, if present on the row, is ignored: the risk level is
/// always derived from `probability` through
/// [`ProbabilityCodes`](crate::ProbabilityCodes).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TerritoryRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub district: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub municipality_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub event_name: String,
    /// Recurrence-interval band label, e.g. "Každé 2 - 3 roky".
    #[serde(default, deserialize_with = "null_as_default")]
    pub probability: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub risk_source: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub factor_name: String,
    /// Number of endangered inhabitants. Malformed values decode as 0.
    #[serde(default, deserialize_with = "lenient_count")]
    pub endangered_population: u64,
    /// Endangered area in square kilometres.
    #[serde(default, deserialize_with = "null_as_default")]
    pub endangered_area: f64,
}
