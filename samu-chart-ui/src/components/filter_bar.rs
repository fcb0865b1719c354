//! District and municipality selectors with the apply button.

use super::PANEL_STYLE;
use crate::state::AppState;
use dioxus::prelude::*;

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Filter bar.
///
/// Changing the district narrows the municipality list and clears the
/// municipality. Nothing is recomputed until "Apply" is pressed.
#[component]
pub fn FilterBar() -> Element {
    let mut state = use_context::<AppState>();
    let (districts, municipalities, selection) = match state.dashboard.read().as_ref() {
        Some(dashboard) => {
            let filter = dashboard.filter();
            (
                filter.districts().to_vec(),
                filter.municipality_options().to_vec(),
                filter.selection().clone(),
            )
        }
        None => return rsx! {},
    };
    let selected_district = selection.district.unwrap_or_default();
    let selected_municipality = selection.municipality.unwrap_or_default();

    let on_district_change = move |evt: Event<FormData>| {
        if let Some(dashboard) = state.dashboard.write().as_mut() {
            dashboard.select_district(non_empty(evt.value()));
        }
    };

    let on_municipality_change = move |evt: Event<FormData>| {
        if let Some(dashboard) = state.dashboard.write().as_mut() {
            dashboard.select_municipality(non_empty(evt.value()));
        }
    };

    rsx! {
        div {
            style: "{PANEL_STYLE} display: flex; flex-wrap: wrap; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "District: "
                select {
                    id: "stats-filter-district",
                    onchange: on_district_change,
                    option { value: "", selected: selected_district.is_empty(), "All districts" }
                    for district in districts.iter() {
                        option {
                            value: "{district}",
                            selected: *district == selected_district,
                            "{district}"
                        }
                    }
                }
            }
            label {
                style: "font-weight: bold;",
                "Municipality: "
                select {
                    id: "stats-filter-municipality",
                    onchange: on_municipality_change,
                    option { value: "", selected: selected_municipality.is_empty(), "All municipalities" }
                    for municipality in municipalities.iter() {
                        option {
                            value: "{municipality}",
                            selected: *municipality == selected_municipality,
                            "{municipality}"
                        }
                    }
                }
            }
            button {
                id: "apply-stats-filter",
                style: "padding: 6px 16px; background: #1E40AF; color: #fff; border: none; border-radius: 4px; cursor: pointer;",
                onclick: move |_| state.apply_filter(),
                "Apply"
            }
        }
    }
}
