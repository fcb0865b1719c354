//! SAMU territory risk statistics dashboard.
//!
//! Data flow:
//! 1. `build.rs` bakes `SUPABASE_URL` and `SUPABASE_ANON_KEY` into the binary.
//! 2. On mount: fetch territories, municipalities, events and probability
//!    codes concurrently, build the `Dashboard` and schedule the first update.
//! 3. "Apply" schedules a debounced update; only the last one in a burst commits.
//! 4. Each committed cycle is turned into a `RenderPlan` against the probed
//!    layout and drawn. Chart paints are deferred to the next frame.

use dioxus::prelude::*;
use samu_chart_ui::components::{
    ChartPanel, DistrictTable, ErrorDisplay, FilterBar, FilterInfo, LoadingSpinner, Severity,
    SummaryCards, TopRisksTable,
};
use samu_chart_ui::js_bridge;
use samu_chart_ui::render::RenderContext;
use samu_chart_ui::state::AppState;
use samu_render::{DashboardLayout, Panel, RenderPlan};
use samu_source::{DataBundle, SourceError, SupabaseClient, SupabaseConfig};
use samu_stats::Dashboard;
use std::rc::Rc;

const SUPABASE_URL: &str = env!("SAMU_SUPABASE_URL");
const SUPABASE_ANON_KEY: &str = env!("SAMU_SUPABASE_ANON_KEY");

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("samu-stats-root"))
        .launch(App);
}

async fn load_data() -> Result<DataBundle, SourceError> {
    let config = SupabaseConfig::new(SUPABASE_URL, SUPABASE_ANON_KEY)?;
    let client = SupabaseClient::new(config)?;
    client.fetch_all().await
}

fn describe(err: &SourceError) -> String {
    if err.is_auth() {
        "Access to the territory database was denied. Check the anon key.".to_string()
    } else {
        format!("Could not load territory data: {err}")
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: load data once on mount ───
    use_effect(move || {
        spawn(async move {
            js_bridge::time("samu-load");
            let result = load_data().await;
            js_bridge::time_end("samu-load");

            match result {
                Ok(bundle) => {
                    let dashboard = Dashboard::initialize(
                        bundle.territories,
                        bundle.municipalities,
                        bundle.events,
                        bundle.codes,
                    );
                    match dashboard {
                        Some(dashboard) => {
                            state.dashboard.set(Some(dashboard));
                            state.apply_filter();
                        }
                        None => {
                            state
                                .notice
                                .set(Some("No territory analyses available.".to_string()));
                        }
                    }
                }
                Err(err) => {
                    log::error!("Loading data failed: {err}");
                    state.error_msg.set(Some(describe(&err)));
                }
            }
            state.loading.set(false);
        });
    });

    // ─── Effect 2: draw each committed cycle ───
    // Re-runs when a new cycle lands or the render layer comes up.
    use_effect(move || {
        let Some(cycle) = state.cycle.read().clone() else {
            return;
        };
        let Some(render) = state.render.read().clone() else {
            return;
        };
        let plan = match state.dashboard.peek().as_ref() {
            Some(dashboard) => RenderPlan::build(&cycle, dashboard.codes(), render.capabilities()),
            None => return,
        };
        render.render(&plan);
        state.plan.set(Some(Rc::new(plan)));
    });

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif; background: #F9FAFB;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if let Some(notice) = state.notice.read().as_ref() {
                ErrorDisplay { message: notice.clone(), severity: Severity::Notice }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else if state.dashboard.read().is_some() {
                DashboardView {}
            }
        }
    }
}

/// The loaded dashboard: filter bar and every panel of the layout.
#[component]
fn DashboardView() -> Element {
    let mut state = use_context::<AppState>();
    let layout = use_hook(DashboardLayout::default);
    let plan = state.plan.read().clone();

    use_drop(move || {
        if let Some(render) = state.render.peek().as_ref() {
            render.dispose();
        }
    });

    rsx! {
        div {
            onmounted: move |_| {
                if state.render.peek().is_none() {
                    state.render.set(Some(Rc::new(RenderContext::initialize())));
                }
            },
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin: 8px 0;",
                h2 { style: "margin: 0; font-size: 20px;", "Territory risk statistics" }
                if let Some(plan) = plan.as_ref() {
                    FilterInfo { label: plan.filter_label.clone() }
                }
            }
            FilterBar {}
            for panel in layout.panels().iter().copied() {
                PanelView { panel, plan: plan.clone() }
            }
        }
    }
}

#[component]
fn PanelView(panel: Panel, plan: Option<Rc<RenderPlan>>) -> Element {
    match panel {
        Panel::SummaryCards => match plan {
            Some(plan) => rsx! { SummaryCards { summary: plan.summary.clone() } },
            None => rsx! {},
        },
        Panel::Chart(mount) => rsx! { ChartPanel { mount } },
        Panel::DistrictTable => rsx! {
            DistrictTable { rows: plan.map(|p| p.district_rows.clone()).unwrap_or_default() }
        },
        Panel::TopRisksTable => rsx! {
            TopRisksTable { rows: plan.map(|p| p.top_risks.clone()).unwrap_or_default() }
        },
    }
}
