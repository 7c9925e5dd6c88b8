//! Color picker input and hex color helpers.

use crate::element::{Element, Widget};
use crate::theme;
use panelkit_core::{Attribute, ElementKind, SurfaceHandle};

/// Parse a `#rrggbb` color into a 24-bit RGB value.
pub fn parse_hex_color(color: &str) -> Option<u32> {
    let digits = color.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Format a 24-bit RGB value as `#rrggbb`. Bits above 24 are dropped.
pub fn format_hex_color(hex: u32) -> String {
    format!("#{:06x}", hex & 0x00ff_ffff)
}

/// Native color picker.
#[derive(Debug, Clone)]
pub struct Color {
    element: Element,
}

impl Color {
    pub fn new(surface: &SurfaceHandle) -> Self {
        let color = Self {
            element: Element::with_class(surface, ElementKind::Input, "Color"),
        };
        color
            .set_width(theme::COLOR_WIDTH)
            .set_height(theme::COLOR_HEIGHT)
            .set_border("0px")
            .set_padding("2px")
            .set_background_color("transparent");
        surface.set_attribute(color.node(), Attribute::Type, "color");
        color.element.set_value(theme::DEFAULT_COLOR);
        color
    }

    /// The color as `#rrggbb`.
    pub fn get_value(&self) -> String {
        self.element.value()
    }

    pub fn set_value(&self, value: &str) -> &Self {
        self.element.set_value(value);
        self
    }

    /// The color as a 24-bit RGB value, if the current value is well formed.
    pub fn get_hex_value(&self) -> Option<u32> {
        let value = self.get_value();
        let hex = parse_hex_color(&value);
        if hex.is_none() {
            log::warn!("Color {} holds malformed value {:?}", self.node(), value);
        }
        hex
    }

    pub fn set_hex_value(&self, hex: u32) -> &Self {
        self.element.set_value(&format_hex_color(hex));
        self
    }
}

impl Widget for Color {
    fn element(&self) -> &Element {
        &self.element
    }
}
