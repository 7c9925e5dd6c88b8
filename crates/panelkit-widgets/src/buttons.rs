//! Push button.

use crate::element::{Element, Widget};
use panelkit_core::{ElementKind, SurfaceHandle};

#[derive(Debug, Clone)]
pub struct Button {
    element: Element,
}

impl Button {
    pub fn new(surface: &SurfaceHandle, label: &str) -> Self {
        let button = Self {
            element: Element::with_class(surface, ElementKind::Button, "Button"),
        };
        button.set_label(label);
        button
    }

    pub fn set_label(&self, label: &str) -> &Self {
        self.set_text_content(label)
    }

    pub fn label(&self) -> String {
        self.element.surface().text_content(self.element.node())
    }
}

impl Widget for Button {
    fn element(&self) -> &Element {
        &self.element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panelkit_core::MemorySurface;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_label_and_click() {
        let memory = Rc::new(MemorySurface::new());
        let handle: SurfaceHandle = memory.clone();
        let button = Button::new(&handle, "Add");
        let clicked = Rc::new(Cell::new(false));

        let c = clicked.clone();
        button.on_click(move |_| c.set(true)).set_label("Remove");
        memory.click(button.node());

        assert!(clicked.get());
        assert_eq!(button.label(), "Remove");
    }
}
