//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use crate::render::RenderContext;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use samu_render::RenderPlan;
use samu_stats::{Cycle, Dashboard, UpdateOutcome};
use std::rc::Rc;

/// Milliseconds since the epoch, from the browser clock.
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Shared application state for the statistics dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded data, filter and update loop (None until loaded)
    pub dashboard: Signal<Option<Dashboard>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Non-fatal diagnostic, e.g. a filter that matched nothing
    pub notice: Signal<Option<String>>,
    /// Last committed cycle
    pub cycle: Signal<Option<Rc<Cycle>>>,
    /// Plan built for the last committed cycle
    pub plan: Signal<Option<Rc<RenderPlan>>>,
    /// Render layer, created once the layout is mounted
    pub render: Signal<Option<Rc<RenderContext>>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dashboard: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            notice: Signal::new(None),
            cycle: Signal::new(None),
            plan: Signal::new(None),
            render: Signal::new(None),
        }
    }

    /// Schedule a recomputation with the current draft selection.
    ///
    /// Each call supersedes the previous one; only the last call in a burst
    /// commits a cycle, once the quiescence window has passed.
    pub fn apply_filter(mut self) {
        let ticket = match self.dashboard.write().as_mut() {
            Some(dashboard) => dashboard.apply_filter(now_ms()),
            None => return,
        };
        let mut wait = match self.dashboard.peek().as_ref().and_then(|d| d.deadline(ticket)) {
            Some(due) => due.saturating_sub(now_ms()),
            None => return,
        };

        spawn(async move {
            loop {
                TimeoutFuture::new(wait as u32).await;
                let now = now_ms();
                let outcome = match self.dashboard.write().as_mut() {
                    Some(dashboard) => dashboard.fire(ticket, now),
                    None => return,
                };
                match outcome {
                    UpdateOutcome::Updated(cycle) => {
                        self.notice.set(None);
                        self.cycle.set(Some(cycle));
                        return;
                    }
                    UpdateOutcome::Empty => {
                        self.notice.set(Some(
                            "No territories match the selected filter, showing the previous statistics."
                                .to_string(),
                        ));
                        return;
                    }
                    UpdateOutcome::Superseded => {
                        // Timers may fire a little early; retry while this ticket is still the latest.
                        match self.dashboard.peek().as_ref().and_then(|d| d.deadline(ticket)) {
                            Some(due) if due > now => wait = due - now,
                            _ => return,
                        }
                    }
                }
            }
        });
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
