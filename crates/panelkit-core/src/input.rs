//! Input events delivered by a surface: pointer, keyboard, focus and change.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::cell::Cell;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// No modifier held.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Only shift held.
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
        meta: false,
    };
}

/// Legacy `keyCode` values the widgets react to.
pub mod key_code {
    pub const TAB: u32 = 9;
    pub const ENTER: u32 = 13;
}

/// Kinds of events a listener can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Pointer button pressed (`mousedown`).
    Press,
    /// Pointer moved (`mousemove`).
    Move,
    /// Pointer button released (`mouseup`).
    Release,
    Click,
    DblClick,
    MouseOver,
    MouseOut,
    KeyDown,
    KeyUp,
    Focus,
    Blur,
    Change,
}

impl EventKind {
    /// The DOM event type name.
    pub fn dom_name(self) -> &'static str {
        match self {
            Self::Press => "mousedown",
            Self::Move => "mousemove",
            Self::Release => "mouseup",
            Self::Click => "click",
            Self::DblClick => "dblclick",
            Self::MouseOver => "mouseover",
            Self::MouseOut => "mouseout",
            Self::KeyDown => "keydown",
            Self::KeyUp => "keyup",
            Self::Focus => "focus",
            Self::Blur => "blur",
            Self::Change => "change",
        }
    }

    /// Whether the event travels up through the ancestors of its target.
    pub fn bubbles(self) -> bool {
        !matches!(self, Self::Focus | Self::Blur)
    }
}

/// An event as seen by listeners.
///
/// `prevent_default` and `stop_propagation` take `&self` so that a shared
/// reference can be handed to every listener along the dispatch path.
#[derive(Debug, Clone)]
pub struct SurfaceEvent {
    pub kind: EventKind,
    /// Pointer position in client coordinates.
    pub client: Point,
    pub button: Option<MouseButton>,
    pub modifiers: Modifiers,
    pub key_code: Option<u32>,
    trusted: bool,
    default_prevented: Cell<bool>,
    propagation_stopped: Cell<bool>,
}

impl SurfaceEvent {
    /// Create a trusted event (one that originates from user input).
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            client: Point::ZERO,
            button: None,
            modifiers: Modifiers::NONE,
            key_code: None,
            trusted: true,
            default_prevented: Cell::new(false),
            propagation_stopped: Cell::new(false),
        }
    }

    /// Set the client position.
    pub fn at(mut self, client: Point) -> Self {
        self.client = client;
        self
    }

    /// Set the pressed button.
    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = Some(button);
        self
    }

    /// Set the modifier state.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the key code.
    pub fn with_key_code(mut self, key_code: u32) -> Self {
        self.key_code = Some(key_code);
        self
    }

    /// Mark the event as synthetic (dispatched by code rather than the user).
    pub fn untrusted(mut self) -> Self {
        self.trusted = false;
        self
    }

    /// Whether the event originates from user input.
    pub fn is_trusted(&self) -> bool {
        self.trusted
    }

    /// Suppress the surface's default action for this event.
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }

    /// Stop the event from reaching further ancestors.
    /// Remaining listeners on the current target still run.
    pub fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }
}
