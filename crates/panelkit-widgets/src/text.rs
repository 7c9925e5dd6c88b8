//! Text display and free-text entry widgets.

use crate::element::{Element, Widget};
use panelkit_core::{Attribute, ElementKind, EventKind, SurfaceEvent, SurfaceHandle, key_code};
use std::rc::Rc;

/// Static label.
#[derive(Debug, Clone)]
pub struct Text {
    element: Element,
}

impl Text {
    pub fn new(surface: &SurfaceHandle, value: Option<&str>) -> Self {
        let text = Self {
            element: Element::with_class(surface, ElementKind::Span, "Text"),
        };
        text.set_cursor("default")
            .set_display("inline-block")
            .set_vertical_align("middle");
        text.set_value(value);
        text
    }

    pub fn get_value(&self) -> String {
        self.element.surface().text_content(self.element.node())
    }

    /// Replace the label. `None` leaves it unchanged.
    pub fn set_value(&self, value: Option<&str>) -> &Self {
        if let Some(value) = value {
            self.element.surface().set_text_content(self.element.node(), value);
        }
        self
    }
}

impl Widget for Text {
    fn element(&self) -> &Element {
        &self.element
    }
}

/// Single-line text entry.
#[derive(Debug, Clone)]
pub struct Input {
    element: Element,
}

impl Input {
    pub fn new(surface: &SurfaceHandle, text: &str) -> Self {
        let input = Self {
            element: Element::with_class(surface, ElementKind::Input, "Input"),
        };
        input.set_padding("2px").set_border("1px solid transparent");
        input.listen(EventKind::KeyDown, |event: &SurfaceEvent| event.stop_propagation());
        input.set_value(text);
        input
    }

    pub fn get_value(&self) -> String {
        self.element.value()
    }

    pub fn set_value(&self, value: &str) -> &Self {
        self.element.set_value(value);
        self
    }
}

impl Widget for Input {
    fn element(&self) -> &Element {
        &self.element
    }
}

/// Multi-line text entry. Tab inserts a tab character instead of moving focus.
#[derive(Debug, Clone)]
pub struct TextArea {
    element: Element,
}

impl TextArea {
    pub fn new(surface: &SurfaceHandle) -> Self {
        let area = Self {
            element: Element::with_class(surface, ElementKind::TextArea, "TextArea"),
        };
        area.set_padding("2px");
        surface.set_attribute(area.node(), Attribute::Spellcheck, "false");

        let weak = Rc::downgrade(surface);
        let node = area.node();
        area.listen(EventKind::KeyDown, move |event: &SurfaceEvent| {
            event.stop_propagation();
            if event.key_code != Some(key_code::TAB) {
                return;
            }
            event.prevent_default();
            let Some(surface) = weak.upgrade() else {
                return;
            };

            let value = surface.attribute(node, Attribute::Value).unwrap_or_default();
            let cursor = surface
                .selection_range(node)
                .map(|(start, _)| start)
                .unwrap_or_else(|| value.chars().count());
            let mut updated: String = value.chars().take(cursor).collect();
            updated.push('\t');
            updated.extend(value.chars().skip(cursor));

            surface.set_attribute(node, Attribute::Value, &updated);
            surface.set_selection_range(node, cursor + 1, cursor + 1);
        });
        area
    }

    pub fn get_value(&self) -> String {
        self.element.value()
    }

    pub fn set_value(&self, value: &str) -> &Self {
        self.element.set_value(value);
        self
    }
}

impl Widget for TextArea {
    fn element(&self) -> &Element {
        &self.element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Panel;
    use panelkit_core::{MemorySurface, Modifiers, StyleProperty, Surface};
    use std::cell::Cell;

    fn surface() -> (Rc<MemorySurface>, SurfaceHandle) {
        let memory = Rc::new(MemorySurface::new());
        let handle: SurfaceHandle = memory.clone();
        (memory, handle)
    }

    #[test]
    fn test_text_value() {
        let (memory, handle) = surface();
        let text = Text::new(&handle, Some("Position"));
        assert_eq!(text.get_value(), "Position");
        assert_eq!(
            memory.style(text.node(), StyleProperty::Display).as_deref(),
            Some("inline-block")
        );

        text.set_value(None);
        assert_eq!(text.get_value(), "Position");
        text.set_value(Some("Rotation"));
        assert_eq!(text.get_value(), "Rotation");
    }

    #[test]
    fn test_empty_text() {
        let (_, handle) = surface();
        assert_eq!(Text::new(&handle, None).get_value(), "");
    }

    #[test]
    fn test_input_keydown_does_not_bubble() {
        let (memory, handle) = surface();
        let panel = Panel::new(&handle);
        let input = Input::new(&handle, "name");
        panel.add(&input);

        let bubbled = Rc::new(Cell::new(false));
        let b = bubbled.clone();
        panel.on_key_down(move |_| b.set(true));

        memory.key_down(input.node(), 65, Modifiers::NONE);
        assert!(!bubbled.get());
        assert_eq!(input.get_value(), "name");
    }

    #[test]
    fn test_textarea_tab_inserts_at_caret() {
        let (memory, handle) = surface();
        let area = TextArea::new(&handle);
        area.set_value("ab");
        memory.set_selection_range(area.node(), 1, 1);

        let prevented = memory.key_down(area.node(), key_code::TAB, Modifiers::NONE);

        assert!(prevented);
        assert_eq!(area.get_value(), "a\tb");
        assert_eq!(memory.selection_range(area.node()), Some((2, 2)));
    }

    #[test]
    fn test_textarea_other_keys_pass_through() {
        let (memory, handle) = surface();
        let area = TextArea::new(&handle);
        area.set_value("ab");

        assert!(!memory.key_down(area.node(), 65, Modifiers::NONE));
        assert_eq!(area.get_value(), "ab");
        assert_eq!(
            memory.attribute(area.node(), Attribute::Spellcheck).as_deref(),
            Some("false")
        );
    }
}
