//! Panel holding one chart canvas.

use super::{ChartHeader, PANEL_STYLE};
use dioxus::prelude::*;
use samu_render::MountPoint;

#[derive(Props, Clone, PartialEq)]
pub struct ChartPanelProps {
    /// Which chart this canvas hosts; its DOM id is the mount point id
    pub mount: MountPoint,
    #[props(default = String::new())]
    pub note: String,
    #[props(default = 320)]
    pub height: u32,
}

/// A titled panel with a `<canvas>` that Chart.js draws into.
#[component]
pub fn ChartPanel(props: ChartPanelProps) -> Element {
    let style = format!("position: relative; width: 100%; height: {}px;", props.height);

    rsx! {
        section {
            style: PANEL_STYLE,
            ChartHeader {
                title: props.mount.title().to_string(),
                note: props.note.clone(),
            }
            div {
                style: "{style}",
                canvas { id: props.mount.dom_id() }
            }
        }
    }
}
