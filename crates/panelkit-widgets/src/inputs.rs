//! Choice inputs: drop-down select and checkbox.

use crate::element::{Element, Widget};
use panelkit_core::surface::set_flag;
use panelkit_core::{Attribute, ElementKind, SurfaceHandle};

/// Drop-down list.
#[derive(Debug, Clone)]
pub struct Select {
    element: Element,
}

impl Select {
    pub fn new(surface: &SurfaceHandle) -> Self {
        let select = Self {
            element: Element::with_class(surface, ElementKind::Select, "Select"),
        };
        select.set_padding("2px");
        select
    }

    pub fn set_multiple(&self, multiple: bool) -> &Self {
        set_flag(
            self.element.surface().as_ref(),
            self.element.node(),
            Attribute::Multiple,
            multiple,
        );
        self
    }

    /// Replace the options with `(value, label)` pairs.
    ///
    /// The previous selection is kept when its value is still offered.
    pub fn set_options<K, V>(&self, options: impl IntoIterator<Item = (K, V)>) -> &Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let selected = self.get_value();
        self.clear();

        let surface = self.element.surface();
        for (value, label) in options {
            let option = Element::new(surface, ElementKind::SelectOption);
            surface.set_attribute(option.node(), Attribute::Value, value.as_ref());
            surface.set_text_content(option.node(), label.as_ref());
            self.add(&option);
        }
        self.element.set_value(&selected);
        self
    }

    pub fn get_value(&self) -> String {
        self.element.value()
    }

    /// Select the option with `value`. Writes only when the selection changes.
    pub fn set_value(&self, value: &str) -> &Self {
        if self.get_value() != value {
            self.element.set_value(value);
        }
        self
    }
}

impl Widget for Select {
    fn element(&self) -> &Element {
        &self.element
    }
}

/// Boolean toggle.
#[derive(Debug, Clone)]
pub struct Checkbox {
    element: Element,
}

impl Checkbox {
    pub fn new(surface: &SurfaceHandle, checked: Option<bool>) -> Self {
        let checkbox = Self {
            element: Element::with_class(surface, ElementKind::Input, "Checkbox"),
        };
        surface.set_attribute(checkbox.node(), Attribute::Type, "checkbox");
        checkbox.set_value(checked);
        checkbox
    }

    pub fn get_value(&self) -> bool {
        self.element
            .surface()
            .attribute(self.element.node(), Attribute::Checked)
            .is_some()
    }

    /// Set the checked state. `None` leaves it unchanged.
    pub fn set_value(&self, checked: Option<bool>) -> &Self {
        if let Some(checked) = checked {
            set_flag(
                self.element.surface().as_ref(),
                self.element.node(),
                Attribute::Checked,
                checked,
            );
        }
        self
    }
}

impl Widget for Checkbox {
    fn element(&self) -> &Element {
        &self.element
    }
}
