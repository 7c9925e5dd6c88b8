//! Full-surface modal overlay.

use crate::element::{Element, Widget};
use crate::layout::Panel;
use crate::theme;
use panelkit_core::{ElementKind, EventKind, StyleProperty, SurfaceEvent, SurfaceHandle};
use std::rc::Rc;

/// Dimmed overlay that centers a content panel.
///
/// Hidden until [`Modal::show`]. Any click inside the overlay, including one
/// that bubbles up from the content, hides it again.
#[derive(Debug, Clone)]
pub struct Modal {
    element: Element,
    container: Panel,
}

impl Modal {
    pub fn new(surface: &SurfaceHandle) -> Self {
        let element = Element::new(surface, ElementKind::Div);
        element
            .set_position("absolute")
            .set_width("100%")
            .set_height("100%")
            .set_background_color(theme::OVERLAY_BG)
            .set_display("none")
            .set_align_items("center")
            .set_justify_content("center");

        let weak = Rc::downgrade(surface);
        let node = element.node();
        element.listen(EventKind::Click, move |_: &SurfaceEvent| {
            if let Some(surface) = weak.upgrade() {
                surface.set_style(node, StyleProperty::Display, "none");
            }
        });

        let container = Panel::new(surface);
        container
            .set_width(theme::MODAL_WIDTH)
            .set_padding(theme::MODAL_PADDING)
            .set_background_color(theme::PANEL_BG)
            .set_box_shadow(theme::MODAL_SHADOW);
        element.add(&container);

        Self { element, container }
    }

    /// The panel that holds the modal's content.
    pub fn container(&self) -> &Panel {
        &self.container
    }

    /// Replace the content and display the overlay.
    pub fn show(&self, content: &dyn Widget) -> &Self {
        self.container.clear().add(content);
        self.set_display("flex")
    }

    pub fn hide(&self) -> &Self {
        self.set_display("none")
    }

    pub fn is_visible(&self) -> bool {
        self.element
            .surface()
            .style(self.element.node(), StyleProperty::Display)
            .is_some_and(|display| display != "none")
    }
}

impl Widget for Modal {
    fn element(&self) -> &Element {
        &self.element
    }
}
