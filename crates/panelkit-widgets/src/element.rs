//! Base element wrapper and the generic widget methods.

use crate::error::{MisuseError, MisuseResult};
use panelkit_core::surface::{same_surface, set_flag};
use panelkit_core::{
    Attribute, ElementKind, EventKind, EventTarget, ListenerId, NodeId, StyleProperty,
    Subscription, SurfaceEvent, SurfaceHandle,
};
use std::rc::Rc;

/// A native element on a surface.
///
/// Cloning yields another handle to the same element.
#[derive(Clone)]
pub struct Element {
    surface: SurfaceHandle,
    node: NodeId,
}

impl Element {
    /// Create a detached element of `kind`.
    pub fn new(surface: &SurfaceHandle, kind: ElementKind) -> Self {
        Self {
            surface: surface.clone(),
            node: surface.create_element(kind),
        }
    }

    /// Create a detached element with a class name.
    pub fn with_class(surface: &SurfaceHandle, kind: ElementKind, class: &str) -> Self {
        let element = Self::new(surface, kind);
        element.surface.set_attribute(element.node, Attribute::Class, class);
        element
    }

    pub fn surface(&self) -> &SurfaceHandle {
        &self.surface
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn kind(&self) -> Option<ElementKind> {
        self.surface.kind(self.node)
    }

    /// Current `value` of a form control, empty when unset.
    pub fn value(&self) -> String {
        self.surface
            .attribute(self.node, Attribute::Value)
            .unwrap_or_default()
    }

    pub fn set_value(&self, value: &str) {
        self.surface.set_attribute(self.node, Attribute::Value, value);
    }

    /// Child widgets' elements, in order.
    pub fn children(&self) -> Vec<NodeId> {
        self.surface.children(self.node)
    }

    fn append(&self, child: &Element) -> MisuseResult<()> {
        if !same_surface(&self.surface, &child.surface) {
            return Err(MisuseError::ForeignSurface {
                parent: self.node,
                child: child.node,
            });
        }
        self.surface.append_child(self.node, child.node)?;
        Ok(())
    }

    fn detach(&self, child: &Element) -> MisuseResult<()> {
        if !same_surface(&self.surface, &child.surface) {
            return Err(MisuseError::ForeignSurface {
                parent: self.node,
                child: child.node,
            });
        }
        self.surface.remove_child(self.node, child.node)?;
        Ok(())
    }
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("node", &self.node)
            .field("kind", &self.kind())
            .finish()
    }
}

/// Create a `span`.
pub fn span(surface: &SurfaceHandle) -> Element {
    Element::new(surface, ElementKind::Span)
}

/// Create a `div`.
pub fn div(surface: &SurfaceHandle) -> Element {
    Element::new(surface, ElementKind::Div)
}

macro_rules! style_setters {
    ($($variant:ident => $css:literal, $setter:ident;)*) => {
        $(
            #[doc = concat!("Set the `", $css, "` style.")]
            fn $setter(&self, value: &str) -> &Self
            where
                Self: Sized,
            {
                self.set_style(StyleProperty::$variant, value)
            }
        )*
    };
}

macro_rules! event_shorthands {
    ($($method:ident => $kind:ident;)*) => {
        $(
            fn $method(&self, callback: impl Fn(&SurfaceEvent) + 'static) -> &Self
            where
                Self: Sized,
            {
                self.listen(EventKind::$kind, callback);
                self
            }
        )*
    };
}

/// Behaviour shared by every widget.
///
/// Configuration methods return `&Self` so calls chain:
/// `row.add(&label).add(&field).set_margin_top("4px");`.
/// Composition mistakes in the chainable forms are logged and skipped; use the
/// `try_` forms to handle them.
pub trait Widget {
    fn element(&self) -> &Element;

    fn node(&self) -> NodeId {
        self.element().node()
    }

    fn try_add(&self, child: &dyn Widget) -> MisuseResult<()> {
        self.element().append(child.element())
    }

    fn add(&self, child: &dyn Widget) -> &Self
    where
        Self: Sized,
    {
        if let Err(e) = self.try_add(child) {
            log::error!("Cannot add {} to {}: {}", child.node(), self.node(), e);
        }
        self
    }

    /// Append several children in order.
    fn add_all(&self, children: &[&dyn Widget]) -> &Self
    where
        Self: Sized,
    {
        for child in children {
            self.add(*child);
        }
        self
    }

    fn try_remove(&self, child: &dyn Widget) -> MisuseResult<()> {
        self.element().detach(child.element())
    }

    fn remove(&self, child: &dyn Widget) -> &Self
    where
        Self: Sized,
    {
        if let Err(e) = self.try_remove(child) {
            log::error!("Cannot remove {} from {}: {}", child.node(), self.node(), e);
        }
        self
    }

    /// Detach every child.
    fn clear(&self) -> &Self
    where
        Self: Sized,
    {
        let element = self.element();
        for child in element.children().into_iter().rev() {
            if let Err(e) = element.surface().remove_child(element.node(), child) {
                log::error!("Cannot clear {} from {}: {}", child, element.node(), e);
            }
        }
        self
    }

    fn set_id(&self, id: &str) -> &Self
    where
        Self: Sized,
    {
        let element = self.element();
        element.surface().set_attribute(element.node(), Attribute::Id, id);
        self
    }

    fn set_class(&self, name: &str) -> &Self
    where
        Self: Sized,
    {
        let element = self.element();
        element.surface().set_attribute(element.node(), Attribute::Class, name);
        self
    }

    fn set_style(&self, property: StyleProperty, value: &str) -> &Self
    where
        Self: Sized,
    {
        let element = self.element();
        element.surface().set_style(element.node(), property, value);
        self
    }

    fn set_disabled(&self, disabled: bool) -> &Self
    where
        Self: Sized,
    {
        let element = self.element();
        set_flag(element.surface().as_ref(), element.node(), Attribute::Disabled, disabled);
        self
    }

    fn set_text_content(&self, text: &str) -> &Self
    where
        Self: Sized,
    {
        let element = self.element();
        element.surface().set_text_content(element.node(), text);
        self
    }

    /// Register a listener for the lifetime of the surface.
    fn listen(&self, kind: EventKind, callback: impl Fn(&SurfaceEvent) + 'static) -> ListenerId
    where
        Self: Sized,
    {
        let element = self.element();
        element
            .surface()
            .add_listener(EventTarget::Node(element.node()), kind, Rc::new(callback))
    }

    /// Register a listener that is removed when the guard drops.
    fn subscribe(&self, kind: EventKind, callback: impl Fn(&SurfaceEvent) + 'static) -> Subscription
    where
        Self: Sized,
    {
        let element = self.element();
        Subscription::new(
            element.surface(),
            EventTarget::Node(element.node()),
            kind,
            Rc::new(callback),
        )
    }

    panelkit_core::for_each_style_property!(style_setters);

    event_shorthands! {
        on_key_up => KeyUp;
        on_key_down => KeyDown;
        on_mouse_over => MouseOver;
        on_mouse_out => MouseOut;
        on_click => Click;
        on_dbl_click => DblClick;
        on_change => Change;
    }
}

impl Widget for Element {
    fn element(&self) -> &Element {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panelkit_core::{MemorySurface, Surface, SurfaceError};
    use std::cell::Cell;

    fn surface() -> (Rc<MemorySurface>, SurfaceHandle) {
        let memory = Rc::new(MemorySurface::new());
        let handle: SurfaceHandle = memory.clone();
        (memory, handle)
    }

    #[test]
    fn test_add_and_remove() {
        let (memory, handle) = surface();
        let parent = div(&handle);
        let a = span(&handle);
        let b = span(&handle);

        parent.add(&a).add(&b);
        assert_eq!(memory.children(parent.node()), vec![a.node(), b.node()]);

        parent.remove(&a);
        assert_eq!(memory.children(parent.node()), vec![b.node()]);
    }

    #[test]
    fn test_add_all_keeps_order() {
        let (memory, handle) = surface();
        let parent = div(&handle);
        let a = span(&handle);
        let b = div(&handle);

        parent.add_all(&[&a, &b]);
        assert_eq!(memory.children(parent.node()), vec![a.node(), b.node()]);
    }

    #[test]
    fn test_foreign_surface_is_rejected() {
        let (memory, handle) = surface();
        let (_, other) = surface();
        let parent = div(&handle);
        let stranger = span(&other);

        assert_eq!(
            parent.try_add(&stranger),
            Err(MisuseError::ForeignSurface {
                parent: parent.node(),
                child: stranger.node(),
            })
        );

        // The chainable form logs and carries on.
        parent.add(&stranger);
        assert!(memory.children(parent.node()).is_empty());
    }

    #[test]
    fn test_remove_non_child_reports_error() {
        let (_, handle) = surface();
        let parent = div(&handle);
        let orphan = span(&handle);

        let err = parent.try_remove(&orphan).unwrap_err();
        assert_eq!(
            err,
            MisuseError::Surface(SurfaceError::NotAChild {
                parent: parent.node(),
                child: orphan.node(),
            })
        );
        parent.remove(&orphan);
    }

    #[test]
    fn test_adding_ancestor_is_rejected() {
        let (_, handle) = surface();
        let outer = div(&handle);
        let inner = div(&handle);
        outer.add(&inner);

        assert!(matches!(
            inner.try_add(&outer),
            Err(MisuseError::Surface(SurfaceError::HierarchyRequest { .. }))
        ));
    }

    #[test]
    fn test_clear_detaches_all_children() {
        let (memory, handle) = surface();
        let parent = div(&handle);
        parent.add(&span(&handle)).add(&span(&handle)).add(&div(&handle));

        parent.clear();
        assert!(memory.children(parent.node()).is_empty());
    }

    #[test]
    fn test_attribute_setters() {
        let (memory, handle) = surface();
        let element = Element::new(&handle, ElementKind::Input);

        element.set_id("px").set_class("Number").set_disabled(true);
        assert_eq!(memory.attribute(element.node(), Attribute::Id).as_deref(), Some("px"));
        assert_eq!(
            memory.attribute(element.node(), Attribute::Class).as_deref(),
            Some("Number")
        );
        assert!(memory.attribute(element.node(), Attribute::Disabled).is_some());

        element.set_disabled(false);
        assert_eq!(memory.attribute(element.node(), Attribute::Disabled), None);
    }

    #[test]
    fn test_style_shorthands() {
        let (memory, handle) = surface();
        let element = div(&handle);

        element
            .set_width("90px")
            .set_margin_left("4px")
            .set_z_index("3")
            .set_background_color("#222");

        assert_eq!(memory.style(element.node(), StyleProperty::Width).as_deref(), Some("90px"));
        assert_eq!(
            memory.style(element.node(), StyleProperty::MarginLeft).as_deref(),
            Some("4px")
        );
        assert_eq!(memory.style(element.node(), StyleProperty::ZIndex).as_deref(), Some("3"));
        assert_eq!(
            memory.style(element.node(), StyleProperty::BackgroundColor).as_deref(),
            Some("#222")
        );
    }

    #[test]
    fn test_event_shorthands() {
        let (memory, handle) = surface();
        let element = Element::new(&handle, ElementKind::Button);
        let clicks = Rc::new(Cell::new(0));
        let keys = Rc::new(Cell::new(0));

        let c = clicks.clone();
        let k = keys.clone();
        element
            .on_click(move |_| c.set(c.get() + 1))
            .on_key_down(move |_| k.set(k.get() + 1));

        memory.click(element.node());
        memory.click(element.node());
        memory.key_down(element.node(), 65, panelkit_core::Modifiers::NONE);

        assert_eq!(clicks.get(), 2);
        assert_eq!(keys.get(), 1);
    }

    #[test]
    fn test_subscribe_is_scoped() {
        let (memory, handle) = surface();
        let element = Element::new(&handle, ElementKind::Button);
        let clicks = Rc::new(Cell::new(0));

        let c = clicks.clone();
        let guard = element.subscribe(EventKind::Click, move |_| c.set(c.get() + 1));
        memory.click(element.node());
        drop(guard);
        memory.click(element.node());

        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_text_content() {
        let (memory, handle) = surface();
        let element = span(&handle);
        element.set_text_content("Position");
        assert_eq!(memory.text_content(element.node()), "Position");
    }
}
