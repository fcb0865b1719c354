//! Catalog rows for municipalities and hazard events.

use crate::serde_util::null_as_default;
use serde::{Deserialize, Serialize};

/// A municipality from the `municipalities` table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Municipality {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub district: String,
}

/// A hazard event type from the `events` table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HazardEvent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}
