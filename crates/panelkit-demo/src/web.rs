//! WebAssembly entry point.

use crate::panel::build_object_panel;
use panelkit_core::{DomSurface, ScrubConfig, Surface, SurfaceHandle};
use panelkit_widgets::Widget;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// Mount the object panel into the page body.
#[wasm_bindgen(start)]
pub fn run_wasm() -> Result<(), JsValue> {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        return Err(JsValue::from_str(&format!("Failed to initialize logger: {}", e)));
    }
    log::info!("Starting PanelKit demo (WASM)");

    let dom = DomSurface::new().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let body = dom.body();
    let surface: SurfaceHandle = Rc::new(dom);

    let panel = build_object_panel(&surface, ScrubConfig::default());
    for node in [panel.root.node(), panel.modal.node()] {
        surface
            .append_child(body, node)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
    }

    // The page keeps running after this returns; keep the surface and its
    // listeners alive with it.
    std::mem::forget(surface);
    Ok(())
}
