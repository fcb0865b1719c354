//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Chart.js glue lives in `assets/js/charts.js` and is evaluated once as a
//! global script exposing `window.samu*` functions. Chart configs are passed
//! as JSON literals, which are valid JS expressions, so no string escaping is
//! needed.

static CHARTS_JS: &str = include_str!("../assets/js/charts.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SAMU JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Evaluate the chart glue. Safe to call more than once.
pub fn install() {
    call_js(&format!(
        "if (!window.__samuChartsReady) {{ (0, eval)({}); }}",
        serde_json::to_string(CHARTS_JS).unwrap_or_default()
    ));
}

/// Mark `generation` as the newest render cycle. Deferred paints from older
/// cycles are dropped when their frame comes up.
pub fn begin_cycle(generation: u64) {
    call_js(&format!("window.samuBeginCycle({generation});"));
}

/// Paint a chart on the next animation frame, replacing any existing chart
/// on the same canvas.
pub fn schedule_chart(canvas_id: &str, config_json: &str, generation: u64) {
    call_js(&format!(
        "window.samuScheduleChart('{canvas_id}', {config_json}, {generation});"
    ));
}

/// Destroy every chart the glue has created.
pub fn dispose_all() {
    call_js("window.samuDestroyAll && window.samuDestroyAll();");
}

/// Start a named console timer.
pub fn time(label: &str) {
    web_sys::console::time_with_label(label);
}

/// Stop a named console timer and log its duration.
pub fn time_end(label: &str) {
    web_sys::console::time_end_with_label(label);
}
