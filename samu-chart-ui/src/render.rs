//! Drawing render plans into the page.

use crate::js_bridge;
use crate::surface;
use samu_render::{Capabilities, MountPoint, RenderPlan};
use std::cell::RefCell;
use std::collections::BTreeSet;

/// Render layer for one mounted layout.
///
/// Created after the layout is in the DOM so the capability probe sees the
/// final set of canvases. Tracks which charts are live so they can be torn
/// down when the layout unmounts.
#[derive(Debug)]
pub struct RenderContext {
    capabilities: Capabilities,
    live: RefCell<BTreeSet<MountPoint>>,
}

impl RenderContext {
    /// Install the chart glue and probe the mounted layout.
    pub fn initialize() -> Self {
        js_bridge::install();
        Self {
            capabilities: surface::probe(),
            live: RefCell::new(BTreeSet::new()),
        }
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Schedule every chart in `plan`. Paints happen on the next animation
    /// frame; any still pending from older plans are dropped.
    pub fn render(&self, plan: &RenderPlan) {
        let label = format!("samu-render-{}", plan.generation);
        js_bridge::time(&label);
        js_bridge::begin_cycle(plan.generation);
        let mut live = self.live.borrow_mut();
        for job in &plan.charts {
            js_bridge::schedule_chart(job.mount.dom_id(), &job.config_json(), job.generation);
            live.insert(job.mount);
        }
        js_bridge::time_end(&label);
        log::debug!(
            "Scheduled {} charts for cycle {} ({} skipped)",
            plan.charts.len(),
            plan.generation,
            plan.skipped.len()
        );
    }

    /// Tear down every live chart at once.
    pub fn dispose(&self) {
        let live = std::mem::take(&mut *self.live.borrow_mut());
        if !live.is_empty() {
            log::debug!("Disposing {} charts", live.len());
            js_bridge::dispose_all();
        }
    }
}
