//! Browser DOM surface for WebAssembly.

use super::{
    Attribute, ElementKind, EventTarget, FLAG_SET, Listener, ListenerId, NodeId, Surface,
    SurfaceError, SurfaceResult,
};
use crate::input::{EventKind, Modifiers, MouseButton, SurfaceEvent};
use crate::style::StyleProperty;
use kurbo::Point;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, KeyboardEvent,
    MouseEvent,
};

type DomCallback = Closure<dyn Fn(web_sys::Event)>;

struct DomListener {
    id: ListenerId,
    target: web_sys::EventTarget,
    kind: EventKind,
    closure: DomCallback,
}

/// Surface backed by the page's document.
///
/// Node ids index a table of created elements; the page body is always the
/// first entry. Element creation failures are logged and leave an empty slot
/// so later operations on that id become no-ops.
pub struct DomSurface {
    document: Document,
    elements: RefCell<Vec<Option<(ElementKind, HtmlElement)>>>,
    listeners: RefCell<Vec<DomListener>>,
    /// Closures of removed listeners. A closure may be removed while it is
    /// running, so these are only freed when no callback is on the stack.
    retired: RefCell<Vec<DomCallback>>,
    depth: Rc<Cell<usize>>,
    next_listener: Cell<u64>,
}

impl DomSurface {
    /// Attach to the current page.
    pub fn new() -> SurfaceResult<Self> {
        let window =
            web_sys::window().ok_or_else(|| SurfaceError::Platform("No window object".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| SurfaceError::Platform("No document object".to_string()))?;
        let body = document
            .body()
            .ok_or_else(|| SurfaceError::Platform("Document has no body".to_string()))?;

        Ok(Self {
            document,
            elements: RefCell::new(vec![Some((ElementKind::Div, body))]),
            listeners: RefCell::new(Vec::new()),
            retired: RefCell::new(Vec::new()),
            depth: Rc::new(Cell::new(0)),
            next_listener: Cell::new(0),
        })
    }

    /// The page body.
    pub fn body(&self) -> NodeId {
        NodeId::from_index(0)
    }

    fn element(&self, node: NodeId) -> Option<HtmlElement> {
        self.elements
            .borrow()
            .get(node.index())
            .and_then(|slot| slot.as_ref().map(|(_, element)| element.clone()))
    }

    fn lookup(&self, node: &web_sys::Node) -> Option<NodeId> {
        self.elements
            .borrow()
            .iter()
            .position(|slot| {
                slot.as_ref()
                    .is_some_and(|(_, element)| element.is_same_node(Some(node)))
            })
            .map(NodeId::from_index)
    }

    fn require(&self, node: NodeId) -> SurfaceResult<HtmlElement> {
        self.element(node).ok_or(SurfaceError::UnknownNode(node))
    }

    fn flush_retired(&self) {
        if self.depth.get() == 0 {
            self.retired.borrow_mut().clear();
        }
    }
}

fn platform_error(error: JsValue) -> SurfaceError {
    SurfaceError::Platform(format!("{:?}", error))
}

fn modifiers_of(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Modifiers {
    Modifiers {
        shift,
        ctrl,
        alt,
        meta,
    }
}

/// Translate a browser event into the surface's event model.
fn translate(kind: EventKind, event: &web_sys::Event) -> SurfaceEvent {
    let mut translated = SurfaceEvent::new(kind);
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        translated = translated
            .at(Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y())))
            .with_modifiers(modifiers_of(
                mouse.shift_key(),
                mouse.ctrl_key(),
                mouse.alt_key(),
                mouse.meta_key(),
            ));
        translated.button = match mouse.button() {
            0 => Some(MouseButton::Left),
            1 => Some(MouseButton::Middle),
            2 => Some(MouseButton::Right),
            _ => None,
        };
    } else if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
        translated = translated.with_key_code(key.key_code()).with_modifiers(modifiers_of(
            key.shift_key(),
            key.ctrl_key(),
            key.alt_key(),
            key.meta_key(),
        ));
    }
    if !event.is_trusted() {
        translated = translated.untrusted();
    }
    translated
}

impl Surface for DomSurface {
    fn create_element(&self, kind: ElementKind) -> NodeId {
        let created = self
            .document
            .create_element(kind.tag_name())
            .map_err(platform_error)
            .and_then(|element| {
                element
                    .dyn_into::<HtmlElement>()
                    .map_err(|_| SurfaceError::Platform("Not an HTML element".to_string()))
            });

        let slot = match created {
            Ok(element) => Some((kind, element)),
            Err(e) => {
                log::error!("Failed to create <{}>: {}", kind.tag_name(), e);
                None
            }
        };
        let mut elements = self.elements.borrow_mut();
        elements.push(slot);
        NodeId::from_index(elements.len() - 1)
    }

    fn kind(&self, node: NodeId) -> Option<ElementKind> {
        self.elements
            .borrow()
            .get(node.index())
            .and_then(|slot| slot.as_ref().map(|(kind, _)| *kind))
    }

    fn append_child(&self, parent: NodeId, child: NodeId) -> SurfaceResult<()> {
        let parent_el = self.require(parent)?;
        let child_el = self.require(child)?;
        if child_el.contains(Some(parent_el.as_ref())) {
            return Err(SurfaceError::HierarchyRequest { parent, child });
        }
        parent_el.append_child(&child_el).map_err(platform_error)?;
        Ok(())
    }

    fn remove_child(&self, parent: NodeId, child: NodeId) -> SurfaceResult<()> {
        let parent_el = self.require(parent)?;
        let child_el = self.require(child)?;
        let is_child = child_el
            .parent_node()
            .is_some_and(|p| p.is_same_node(Some(parent_el.as_ref())));
        if !is_child {
            return Err(SurfaceError::NotAChild { parent, child });
        }
        parent_el.remove_child(&child_el).map_err(platform_error)?;
        Ok(())
    }

    fn children(&self, parent: NodeId) -> Vec<NodeId> {
        let Some(parent_el) = self.element(parent) else {
            return Vec::new();
        };
        let collection = parent_el.children();
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .filter_map(|child| self.lookup(child.as_ref()))
            .collect()
    }

    fn set_attribute(&self, node: NodeId, attribute: Attribute, value: &str) {
        let Some(element) = self.element(node) else {
            return;
        };
        match attribute {
            Attribute::Value => {
                if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
                    input.set_value(value);
                    return;
                }
                if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
                    area.set_value(value);
                    return;
                }
                if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
                    select.set_value(value);
                    return;
                }
            }
            Attribute::Checked => {
                if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
                    input.set_checked(true);
                    return;
                }
            }
            _ => {}
        }
        if let Err(e) = element.set_attribute(attribute.name(), value) {
            log::warn!("Failed to set {} on {}: {:?}", attribute.name(), node, e);
        }
    }

    fn attribute(&self, node: NodeId, attribute: Attribute) -> Option<String> {
        let element = self.element(node)?;
        match attribute {
            Attribute::Value => {
                if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
                    return Some(input.value());
                }
                if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
                    return Some(area.value());
                }
                if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
                    return Some(select.value());
                }
            }
            Attribute::Checked => {
                if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
                    return input.checked().then(|| FLAG_SET.to_string());
                }
            }
            _ => {}
        }
        element.get_attribute(attribute.name())
    }

    fn remove_attribute(&self, node: NodeId, attribute: Attribute) {
        let Some(element) = self.element(node) else {
            return;
        };
        if attribute == Attribute::Checked {
            if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
                input.set_checked(false);
                return;
            }
        }
        if let Err(e) = element.remove_attribute(attribute.name()) {
            log::warn!("Failed to remove {} on {}: {:?}", attribute.name(), node, e);
        }
    }

    fn set_style(&self, node: NodeId, property: StyleProperty, value: &str) {
        let Some(element) = self.element(node) else {
            return;
        };
        let style = element.style();
        let result = if value.is_empty() {
            style.remove_property(property.css_name()).map(|_| ())
        } else {
            style.set_property(property.css_name(), value)
        };
        if let Err(e) = result {
            log::warn!("Failed to set style {} on {}: {:?}", property, node, e);
        }
    }

    fn style(&self, node: NodeId, property: StyleProperty) -> Option<String> {
        let element = self.element(node)?;
        element
            .style()
            .get_property_value(property.css_name())
            .ok()
            .filter(|value| !value.is_empty())
    }

    fn set_text_content(&self, node: NodeId, text: &str) {
        if let Some(element) = self.element(node) {
            element.set_text_content(Some(text));
        }
    }

    fn text_content(&self, node: NodeId) -> String {
        self.element(node)
            .and_then(|element| element.text_content())
            .unwrap_or_default()
    }

    fn focus(&self, node: NodeId) {
        if let Some(element) = self.element(node) {
            if let Err(e) = element.focus() {
                log::warn!("Failed to focus {}: {:?}", node, e);
            }
        }
    }

    fn blur(&self, node: NodeId) {
        if self.focused() != Some(node) {
            return;
        }
        if let Some(element) = self.element(node) {
            if let Err(e) = element.blur() {
                log::warn!("Failed to blur {}: {:?}", node, e);
            }
        }
    }

    fn focused(&self) -> Option<NodeId> {
        let active = self.document.active_element()?;
        self.lookup(active.as_ref())
    }

    fn select_text(&self, node: NodeId) {
        let Some(element) = self.element(node) else {
            return;
        };
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.select();
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.select();
        }
    }

    fn selection_range(&self, node: NodeId) -> Option<(usize, usize)> {
        let element = self.element(node)?;
        let (start, end) = if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            (input.selection_start().ok()??, input.selection_end().ok()??)
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            (area.selection_start().ok()??, area.selection_end().ok()??)
        } else {
            return None;
        };
        Some((start as usize, end as usize))
    }

    fn set_selection_range(&self, node: NodeId, start: usize, end: usize) {
        let Some(element) = self.element(node) else {
            return;
        };
        let (start, end) = (start as u32, end as u32);
        let result = if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_selection_range(start, end)
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.set_selection_range(start, end)
        } else {
            Ok(())
        };
        if let Err(e) = result {
            log::warn!("Failed to set selection on {}: {:?}", node, e);
        }
    }

    fn add_listener(&self, target: EventTarget, kind: EventKind, listener: Listener) -> ListenerId {
        self.flush_retired();

        let id = ListenerId::new(self.next_listener.get());
        self.next_listener.set(self.next_listener.get() + 1);

        let js_target: web_sys::EventTarget = match target {
            EventTarget::Document => self.document.clone().into(),
            EventTarget::Node(node) => match self.element(node) {
                Some(element) => element.into(),
                None => {
                    log::debug!("add_listener on unknown node {}", node);
                    return id;
                }
            },
        };

        let depth = self.depth.clone();
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            depth.set(depth.get() + 1);
            let translated = translate(kind, &event);
            listener(&translated);
            if translated.default_prevented() {
                event.prevent_default();
            }
            if translated.propagation_stopped() {
                event.stop_propagation();
            }
            depth.set(depth.get() - 1);
        }) as Box<dyn Fn(web_sys::Event)>);

        if let Err(e) =
            js_target.add_event_listener_with_callback(kind.dom_name(), closure.as_ref().unchecked_ref())
        {
            log::warn!("Failed to add {} listener: {:?}", kind.dom_name(), e);
        }
        self.listeners.borrow_mut().push(DomListener {
            id,
            target: js_target,
            kind,
            closure,
        });
        id
    }

    fn remove_listener(&self, id: ListenerId) {
        let removed = {
            let mut listeners = self.listeners.borrow_mut();
            let Some(pos) = listeners.iter().position(|entry| entry.id == id) else {
                return;
            };
            listeners.remove(pos)
        };
        if let Err(e) = removed.target.remove_event_listener_with_callback(
            removed.kind.dom_name(),
            removed.closure.as_ref().unchecked_ref(),
        ) {
            log::warn!("Failed to remove {} listener: {:?}", removed.kind.dom_name(), e);
        }
        self.retired.borrow_mut().push(removed.closure);
        self.flush_retired();
    }

    fn dispatch_event(&self, target: NodeId, event: SurfaceEvent) {
        let Some(element) = self.element(target) else {
            return;
        };
        let init = web_sys::EventInit::new();
        init.set_bubbles(event.kind.bubbles());
        match web_sys::Event::new_with_event_init_dict(event.kind.dom_name(), &init) {
            Ok(dom_event) => {
                if let Err(e) = element.dispatch_event(&dom_event) {
                    log::warn!("Failed to dispatch {}: {:?}", event.kind.dom_name(), e);
                }
            }
            Err(e) => log::warn!("Failed to create {} event: {:?}", event.kind.dom_name(), e),
        }
    }
}

impl std::fmt::Debug for DomSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomSurface")
            .field("elements", &self.elements.borrow().len())
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}
