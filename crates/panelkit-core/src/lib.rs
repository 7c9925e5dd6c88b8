//! PanelKit Core Library
//!
//! Presentation surface abstraction and the platform-agnostic logic behind
//! PanelKit's numeric fields: value clamping and formatting, drag-to-scrub
//! gesture tracking and scrub tuning.

pub mod config;
pub mod input;
pub mod numeric;
pub mod style;
pub mod surface;

pub use config::{ConfigError, ScrubConfig};
pub use input::{EventKind, Modifiers, MouseButton, SurfaceEvent, key_code};
pub use numeric::{DragSession, FieldState, NumberFormat, ScrubController, ScrubOutcome, ValueModel};
pub use style::StyleProperty;
pub use surface::{
    Attribute, ElementKind, EventTarget, Listener, ListenerId, MemorySurface, NodeId, Subscription,
    Surface, SurfaceError, SurfaceHandle, SurfaceResult,
};

#[cfg(target_arch = "wasm32")]
pub use surface::DomSurface;
