//! Statistics aggregation, filtering and debounced updates for SAMU risk data.
//!
//! Everything in this crate is pure and synchronous so it can be shared
//! between the WASM dashboard and the native CLI:
//!
//! - `aggregate`: single-pass [`Snapshot`] computation over territories
//! - `filter`: district/municipality selection and the filtered subset
//! - `debounce`: trailing-edge debounce state machine
//! - `dashboard`: the [`Dashboard`] state object tying the above together
//! - `projection`: chart series and table rows derived from a snapshot
//! - `format`: number formatting for cards and tables

pub mod aggregate;
pub mod dashboard;
pub mod debounce;
pub mod filter;
pub mod format;
pub mod projection;
pub mod tally;

pub use aggregate::{calculate_statistics, DistrictStats, RiskCounts, Snapshot};
pub use dashboard::{Cycle, Dashboard, UpdateOutcome};
pub use debounce::{Debouncer, Ticket, QUIESCENCE_MS};
pub use filter::{FilterController, FilterSelection};
pub use tally::Tally;
