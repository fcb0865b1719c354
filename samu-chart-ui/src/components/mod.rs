//! Reusable Dioxus RSX components for the statistics dashboard.

mod chart_header;
mod chart_panel;
mod district_table;
mod error_display;
mod filter_bar;
mod filter_info;
mod loading_spinner;
mod summary_cards;
mod top_risks_table;

pub use chart_header::ChartHeader;
pub use chart_panel::ChartPanel;
pub use district_table::DistrictTable;
pub use error_display::{ErrorDisplay, Severity};
pub use filter_bar::FilterBar;
pub use filter_info::FilterInfo;
pub use loading_spinner::LoadingSpinner;
pub use summary_cards::SummaryCards;
pub use top_risks_table::TopRisksTable;

/// Shared card style for dashboard panels.
pub(crate) const PANEL_STYLE: &str = "background: #fff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px; margin: 12px 0;";
