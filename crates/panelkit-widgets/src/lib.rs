//! Retained widget objects over a PanelKit presentation surface.
//!
//! Every widget wraps one native element and exposes chainable configuration
//! through the [`Widget`] trait:
//!
//! - **Element**: generic tree, attribute, style and event methods
//! - **Layout**: rows, panels, line breaks, horizontal rules
//! - **Text**: labels, single- and multi-line text entry
//! - **Inputs**: select lists and checkboxes
//! - **Colors**: color picker with hex helpers
//! - **Buttons** and the **Modal** overlay
//! - **Number**: decimal and integer fields with drag-to-scrub editing

pub mod buttons;
pub mod colors;
pub mod element;
pub mod error;
pub mod inputs;
pub mod layout;
pub mod modal;
pub mod number;
pub mod text;

pub use buttons::Button;
pub use colors::{Color, format_hex_color, parse_hex_color};
pub use element::{Element, Widget, div, span};
pub use error::{MisuseError, MisuseResult};
pub use inputs::{Checkbox, Select};
pub use layout::{Break, HorizontalRule, Panel, Row};
pub use modal::Modal;
pub use number::{Integer, Number, NumberField};
pub use text::{Input, Text, TextArea};

/// Fixed styling used by the built-in widgets.
pub mod theme {
    /// Initial value of a color picker.
    pub const DEFAULT_COLOR: &str = "#ffffff";
    pub const COLOR_WIDTH: &str = "64px";
    pub const COLOR_HEIGHT: &str = "17px";
    /// Dimmed backdrop behind a modal.
    pub const OVERLAY_BG: &str = "rgba(0,0,0,0.5)";
    /// Modal content panel background.
    pub const PANEL_BG: &str = "#ffffff";
    pub const MODAL_WIDTH: &str = "200px";
    pub const MODAL_PADDING: &str = "20px";
    pub const MODAL_SHADOW: &str = "0px 5px 10px rgba(0,0,0,0.5)";
}
