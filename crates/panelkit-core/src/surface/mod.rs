//! Presentation surface abstraction.
//!
//! A [`Surface`] owns a tree of native elements and delivers input events to
//! listeners. Widgets only ever talk to a surface through this trait, so the
//! same widget code runs against the in-memory surface in tests and the
//! browser DOM on `wasm32`.

mod memory;
mod subscription;

#[cfg(target_arch = "wasm32")]
mod dom;

pub use memory::MemorySurface;
pub use subscription::Subscription;

#[cfg(target_arch = "wasm32")]
pub use dom::DomSurface;

use crate::input::{EventKind, SurfaceEvent};
use crate::style::StyleProperty;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// Identifies an element within one surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifies a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Kind of native element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Span,
    Div,
    Input,
    TextArea,
    Select,
    SelectOption,
    Button,
    Break,
    HorizontalRule,
}

impl ElementKind {
    /// HTML tag name.
    pub fn tag_name(self) -> &'static str {
        match self {
            Self::Span => "span",
            Self::Div => "div",
            Self::Input => "input",
            Self::TextArea => "textarea",
            Self::Select => "select",
            Self::SelectOption => "option",
            Self::Button => "button",
            Self::Break => "br",
            Self::HorizontalRule => "hr",
        }
    }

    /// Whether the element can receive keyboard focus.
    pub fn is_focusable(self) -> bool {
        matches!(self, Self::Input | Self::TextArea | Self::Select | Self::Button)
    }

    /// Whether the element holds an editable value with a text selection.
    pub fn is_text_control(self) -> bool {
        matches!(self, Self::Input | Self::TextArea)
    }
}

/// Element attributes and properties widgets read or write.
///
/// Boolean attributes (`Checked`, `Disabled`, `Multiple`, `Spellcheck`) are
/// present with the value `"true"` when set and absent otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attribute {
    Id,
    Class,
    Value,
    Checked,
    Disabled,
    Multiple,
    Type,
    Spellcheck,
}

impl Attribute {
    pub fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Class => "class",
            Self::Value => "value",
            Self::Checked => "checked",
            Self::Disabled => "disabled",
            Self::Multiple => "multiple",
            Self::Type => "type",
            Self::Spellcheck => "spellcheck",
        }
    }

    pub fn is_boolean(self) -> bool {
        matches!(self, Self::Checked | Self::Disabled | Self::Multiple | Self::Spellcheck)
    }
}

/// Value stored for a set boolean attribute.
pub const FLAG_SET: &str = "true";

/// Where a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTarget {
    /// A single element; bubbling events from descendants also arrive here.
    Node(NodeId),
    /// The whole surface; receives every bubbling event and all pointer
    /// moves/releases regardless of which element is under the pointer.
    Document,
}

/// Event callback.
pub type Listener = Rc<dyn Fn(&SurfaceEvent)>;

/// Shared handle to a surface.
pub type SurfaceHandle = Rc<dyn Surface>;

/// Surface errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),
    #[error("Node {child} is not a child of {parent}")]
    NotAChild { parent: NodeId, child: NodeId },
    #[error("Cannot insert {child} into {parent}: it would create a cycle")]
    HierarchyRequest { parent: NodeId, child: NodeId },
    #[error("Platform error: {0}")]
    Platform(String),
}

/// Result type for surface operations.
pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Trait for presentation surface backends.
///
/// Attribute, style, text and focus operations on unknown nodes are ignored;
/// tree mutations report errors. All methods take `&self` because listeners
/// call back into the surface while it is dispatching.
pub trait Surface {
    /// Create a detached element.
    fn create_element(&self, kind: ElementKind) -> NodeId;

    /// Kind of an element, if it exists.
    fn kind(&self, node: NodeId) -> Option<ElementKind>;

    /// Append `child` to `parent`, detaching it from any previous parent.
    fn append_child(&self, parent: NodeId, child: NodeId) -> SurfaceResult<()>;

    /// Remove `child` from `parent`.
    fn remove_child(&self, parent: NodeId, child: NodeId) -> SurfaceResult<()>;

    /// Children of an element, in order.
    fn children(&self, parent: NodeId) -> Vec<NodeId>;

    fn set_attribute(&self, node: NodeId, attribute: Attribute, value: &str);

    fn attribute(&self, node: NodeId, attribute: Attribute) -> Option<String>;

    fn remove_attribute(&self, node: NodeId, attribute: Attribute);

    /// Set an inline style property. An empty value clears it.
    fn set_style(&self, node: NodeId, property: StyleProperty, value: &str);

    /// Inline style value, if set.
    fn style(&self, node: NodeId, property: StyleProperty) -> Option<String>;

    fn set_text_content(&self, node: NodeId, text: &str);

    fn text_content(&self, node: NodeId) -> String;

    /// Give keyboard focus to an element, blurring the previous owner.
    fn focus(&self, node: NodeId);

    /// Remove keyboard focus from an element if it has it.
    fn blur(&self, node: NodeId);

    /// Element that currently has keyboard focus.
    fn focused(&self) -> Option<NodeId>;

    /// Select all text of a text control.
    fn select_text(&self, node: NodeId);

    /// Text selection of a text control, as character offsets.
    fn selection_range(&self, node: NodeId) -> Option<(usize, usize)>;

    fn set_selection_range(&self, node: NodeId, start: usize, end: usize);

    /// Register a listener.
    fn add_listener(&self, target: EventTarget, kind: EventKind, listener: Listener) -> ListenerId;

    /// Unregister a listener. Unknown ids are ignored.
    fn remove_listener(&self, id: ListenerId);

    /// Dispatch a synthetic event at `target`. Listeners see it as untrusted.
    fn dispatch_event(&self, target: NodeId, event: SurfaceEvent);
}

/// Set or clear a boolean attribute.
pub fn set_flag(surface: &dyn Surface, node: NodeId, attribute: Attribute, on: bool) {
    if on {
        surface.set_attribute(node, attribute, FLAG_SET);
    } else {
        surface.remove_attribute(node, attribute);
    }
}

/// Compare two surface handles by identity.
pub fn same_surface(a: &SurfaceHandle, b: &SurfaceHandle) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}
