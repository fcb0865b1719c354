//! Capability probe over the mounted page.
//!
//! The render layer only draws into mount points that exist as `<canvas>`
//! elements. Probing once after mount replaces per-chart existence checks.

use samu_render::{Capabilities, MountPoint};

/// Report which chart canvases are present in the current document.
pub fn probe() -> Capabilities {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available, all charts disabled");
        return Capabilities::default();
    };

    let present = MountPoint::ALL.into_iter().filter(|mount| {
        match document.get_element_by_id(mount.dom_id()) {
            Some(element) if element.tag_name().eq_ignore_ascii_case("canvas") => true,
            Some(element) => {
                log::warn!(
                    "Chart target '{}' is a <{}>, not a canvas",
                    mount.dom_id(),
                    element.tag_name().to_lowercase()
                );
                false
            }
            None => {
                log::info!("Chart target '{}' not in layout", mount.dom_id());
                false
            }
        }
    });
    let capabilities = Capabilities::new(present);
    log::info!(
        "Render surface: {} of {} charts available",
        capabilities.available().count(),
        MountPoint::ALL.len()
    );
    capabilities
}
