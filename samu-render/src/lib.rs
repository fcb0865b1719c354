//! Render contract for SAMU statistics.
//!
//! The render layer receives a committed [`Cycle`](samu_stats::Cycle) and
//! never mutates it. This crate turns a cycle into a [`RenderPlan`]: one
//! Chart.js job per mount point that exists in the current layout, the
//! mount points that were skipped, and the rows of the two HTML tables.
//!
//! Nothing here touches the DOM, so plans can be built and tested natively.

pub mod chart;
pub mod layout;
pub mod mount;
pub mod plan;

pub use layout::{DashboardLayout, Panel};
pub use mount::{Capabilities, MountPoint};
pub use plan::{ChartJob, RenderPlan};
