//! Visual cue that a numeric field can be dragged.

use crate::style::StyleProperty;
use crate::surface::{NodeId, Surface};

/// Background shown while the field is not being edited.
pub const DRAG_BACKGROUND: &str = "transparent";
/// Cursor shown while the field is not being edited.
pub const DRAG_CURSOR: &str = "col-resize";

/// Make the field look draggable.
pub fn show_drag_affordance(surface: &dyn Surface, node: NodeId) {
    surface.set_style(node, StyleProperty::BackgroundColor, DRAG_BACKGROUND);
    surface.set_style(node, StyleProperty::Cursor, DRAG_CURSOR);
}

/// Restore the platform look for typed entry.
pub fn clear_drag_affordance(surface: &dyn Surface, node: NodeId) {
    surface.set_style(node, StyleProperty::BackgroundColor, "");
    surface.set_style(node, StyleProperty::Cursor, "");
}

pub fn has_drag_affordance(surface: &dyn Surface, node: NodeId) -> bool {
    surface.style(node, StyleProperty::Cursor).as_deref() == Some(DRAG_CURSOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{ElementKind, MemorySurface};

    #[test]
    fn test_show_and_clear() {
        let surface = MemorySurface::new();
        let input = surface.create_element(ElementKind::Input);

        show_drag_affordance(&surface, input);
        assert!(has_drag_affordance(&surface, input));
        assert_eq!(
            surface.style(input, StyleProperty::BackgroundColor).as_deref(),
            Some("transparent")
        );

        clear_drag_affordance(&surface, input);
        assert!(!has_drag_affordance(&surface, input));
        assert_eq!(surface.style(input, StyleProperty::BackgroundColor), None);
    }
}
