//! Scripted interaction replay on an in-memory surface.

use crate::panel::{ObjectPanel, build_object_panel};
use kurbo::Point;
use panelkit_core::{
    ConfigError, MemorySurface, Modifiers, NodeId, ScrubConfig, Surface, SurfaceError,
    SurfaceHandle,
};
use panelkit_widgets::Widget;
use std::rc::Rc;
use thiserror::Error;

/// Demo errors.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Failed to read config {path}: {source}")]
    ReadConfig {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

pub type DemoResult<T> = Result<T, DemoError>;

/// Load scrub tuning from a JSON file.
pub fn load_config(path: &str) -> DemoResult<ScrubConfig> {
    let json = std::fs::read_to_string(path).map_err(|source| DemoError::ReadConfig {
        path: path.to_string(),
        source,
    })?;
    Ok(ScrubConfig::from_json(&json)?)
}

/// Values observed after the replay.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayReport {
    pub position: [f64; 3],
    pub segments: i64,
    pub focused_field: Option<NodeId>,
    pub modal_visible: bool,
    /// Outline of the surface after the replay.
    pub tree: String,
}

fn drag(memory: &MemorySurface, node: NodeId, path: &[Point], modifiers: Modifiers) {
    let Some((first, rest)) = path.split_first() else {
        return;
    };
    memory.press(node, *first, modifiers);
    let mut last = *first;
    for point in rest {
        memory.move_pointer(*point, modifiers);
        last = *point;
    }
    memory.release(last, modifiers);
}

/// Build the panel and drive it with a fixed script:
/// a coarse scrub on X, a fine scrub on Z, an upward scrub on the segment
/// count, a click-to-edit with typed entry on Y, and opening the info modal.
pub fn replay(config: ScrubConfig) -> DemoResult<ReplayReport> {
    let memory = Rc::new(MemorySurface::new());
    let handle: SurfaceHandle = memory.clone();

    let panel = build_object_panel(&handle, config);
    memory.append_child(memory.body(), panel.root.node())?;
    memory.append_child(memory.body(), panel.modal.node())?;
    let ObjectPanel {
        position,
        segments,
        modal,
        info,
        ..
    } = &panel;

    drag(
        &memory,
        position[0].node(),
        &[Point::new(10.0, 10.0), Point::new(60.0, 10.0), Point::new(110.0, 10.0)],
        Modifiers::NONE,
    );
    log::info!("Position X scrubbed to {}", position[0].get_value());

    drag(
        &memory,
        position[2].node(),
        &[Point::new(10.0, 10.0), Point::new(20.0, 10.0)],
        Modifiers::SHIFT,
    );
    log::info!("Position Z fine-scrubbed to {}", position[2].get_value());

    drag(
        &memory,
        segments.node(),
        &[Point::new(0.0, 200.0), Point::new(0.0, 0.0)],
        Modifiers::NONE,
    );
    log::info!("Segments scrubbed to {}", segments.get_value());

    drag(&memory, position[1].node(), &[Point::ZERO], Modifiers::NONE);
    let focused_field = memory.focused();
    memory.type_text(position[1].node(), "2.25 m");
    log::info!("Position Y typed as {}", position[1].get_value());

    memory.click(info.node());
    log::info!("Info modal visible: {}", modal.is_visible());

    Ok(ReplayReport {
        position: [
            position[0].get_value(),
            position[1].get_value(),
            position[2].get_value(),
        ],
        segments: segments.get_value(),
        focused_field,
        modal_visible: modal.is_visible(),
        tree: memory.render_tree(memory.body()),
    })
}
