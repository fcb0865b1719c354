//! Shared Dioxus components and Chart.js bridge for the SAMU statistics dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Chart.js glue via `js_sys::eval()`
//! - `surface`: capability probe over the mounted page
//! - `render`: `RenderContext`, which draws a `RenderPlan` into the page
//! - `state`: Reactive AppState with Dioxus Signals and the debounced filter loop
//! - `components`: Reusable RSX components (filter bar, tables, chart panels, etc.)

pub mod components;
pub mod js_bridge;
pub mod render;
pub mod state;
pub mod surface;
