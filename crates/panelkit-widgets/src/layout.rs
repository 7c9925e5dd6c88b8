//! Layout containers and separators.

use crate::element::{Element, Widget};
use panelkit_core::{ElementKind, SurfaceHandle};

/// Horizontal group of widgets (a `div` with class `Row`).
#[derive(Debug, Clone)]
pub struct Row {
    element: Element,
}

impl Row {
    pub fn new(surface: &SurfaceHandle) -> Self {
        Self {
            element: Element::with_class(surface, ElementKind::Div, "Row"),
        }
    }
}

impl Widget for Row {
    fn element(&self) -> &Element {
        &self.element
    }
}

/// Grouping container (a `div` with class `Panel`).
#[derive(Debug, Clone)]
pub struct Panel {
    element: Element,
}

impl Panel {
    pub fn new(surface: &SurfaceHandle) -> Self {
        Self {
            element: Element::with_class(surface, ElementKind::Div, "Panel"),
        }
    }
}

impl Widget for Panel {
    fn element(&self) -> &Element {
        &self.element
    }
}

/// Line break.
#[derive(Debug, Clone)]
pub struct Break {
    element: Element,
}

impl Break {
    pub fn new(surface: &SurfaceHandle) -> Self {
        Self {
            element: Element::with_class(surface, ElementKind::Break, "Break"),
        }
    }
}

impl Widget for Break {
    fn element(&self) -> &Element {
        &self.element
    }
}

/// Horizontal separator line.
#[derive(Debug, Clone)]
pub struct HorizontalRule {
    element: Element,
}

impl HorizontalRule {
    pub fn new(surface: &SurfaceHandle) -> Self {
        Self {
            element: Element::with_class(surface, ElementKind::HorizontalRule, "HorizontalRule"),
        }
    }
}

impl Widget for HorizontalRule {
    fn element(&self) -> &Element {
        &self.element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panelkit_core::{Attribute, MemorySurface, Surface};
    use std::rc::Rc;

    #[test]
    fn test_classes_and_tags() {
        let memory = Rc::new(MemorySurface::new());
        let handle: SurfaceHandle = memory.clone();

        let row = Row::new(&handle);
        let rule = HorizontalRule::new(&handle);
        let br = Break::new(&handle);
        let panel = Panel::new(&handle);
        panel.add(&row).add(&rule).add(&br);

        assert_eq!(memory.attribute(row.node(), Attribute::Class).as_deref(), Some("Row"));
        assert_eq!(memory.kind(rule.node()), Some(ElementKind::HorizontalRule));
        assert_eq!(memory.kind(br.node()), Some(ElementKind::Break));
        assert_eq!(
            memory.render_tree(panel.node()),
            "<div class=\"Panel\">\n  <div class=\"Row\">\n  <hr class=\"HorizontalRule\">\n  <br class=\"Break\">\n"
        );
    }
}
