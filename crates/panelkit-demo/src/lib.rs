//! PanelKit Demo
//!
//! Builds an object-properties panel from PanelKit widgets. Natively it
//! replays a scripted session on an in-memory surface; on WASM it mounts the
//! panel into the page.

mod panel;
mod replay;

pub use panel::{ObjectPanel, build_object_panel};
pub use replay::{DemoError, DemoResult, ReplayReport, load_config, replay};

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::run_wasm;
