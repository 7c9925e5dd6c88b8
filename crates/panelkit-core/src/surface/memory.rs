//! In-memory surface implementation.

use super::{
    Attribute, ElementKind, EventTarget, Listener, ListenerId, NodeId, Surface, SurfaceError,
    SurfaceResult,
};
use crate::input::{EventKind, Modifiers, MouseButton, SurfaceEvent};
use crate::style::StyleProperty;
use kurbo::Point;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt::Write as _;

#[derive(Debug)]
struct NodeData {
    kind: ElementKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    attributes: BTreeMap<Attribute, String>,
    styles: BTreeMap<StyleProperty, String>,
    text: String,
    selection: Option<(usize, usize)>,
}

impl NodeData {
    fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
            attributes: BTreeMap::new(),
            styles: BTreeMap::new(),
            text: String::new(),
            selection: None,
        }
    }
}

struct ListenerEntry {
    id: ListenerId,
    target: EventTarget,
    kind: EventKind,
    listener: Listener,
}

/// In-memory surface for testing and headless use.
///
/// Models the parts of a DOM document the widgets rely on: an element tree
/// rooted at a body element, attributes and inline styles, single-owner
/// keyboard focus, text selection, and event dispatch with bubbling to the
/// document. The `press`/`move_pointer`/`release`/`type_text` family drives it
/// with trusted input, including the default actions a browser would take.
pub struct MemorySurface {
    nodes: RefCell<Vec<NodeData>>,
    listeners: RefCell<Vec<ListenerEntry>>,
    focused: Cell<Option<NodeId>>,
    next_listener: Cell<u64>,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySurface {
    /// Create a surface holding only an empty body element.
    pub fn new() -> Self {
        Self {
            nodes: RefCell::new(vec![NodeData::new(ElementKind::Div)]),
            listeners: RefCell::new(Vec::new()),
            focused: Cell::new(None),
            next_listener: Cell::new(0),
        }
    }

    /// The root element. Only elements attached below it bubble to the document.
    pub fn body(&self) -> NodeId {
        NodeId::from_index(0)
    }

    /// Number of listeners registered on a target.
    pub fn listener_count(&self, target: EventTarget) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|entry| entry.target == target)
            .count()
    }

    /// Parent of an element.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.borrow().get(node.index()).and_then(|n| n.parent)
    }

    /// Simulate a left-button press on `node`.
    ///
    /// Unless a listener prevents it, the default action moves keyboard focus
    /// to the element (or away from the current owner when the element is not
    /// focusable). Returns whether the default action was prevented.
    pub fn press(&self, node: NodeId, at: Point, modifiers: Modifiers) -> bool {
        let event = SurfaceEvent::new(EventKind::Press)
            .at(at)
            .with_button(MouseButton::Left)
            .with_modifiers(modifiers);
        self.dispatch(EventTarget::Node(node), &event);

        if event.default_prevented() {
            return true;
        }
        match self.kind(node) {
            Some(kind) if kind.is_focusable() => self.focus(node),
            _ => {
                if let Some(current) = self.focused.get() {
                    self.blur(current);
                }
            }
        }
        false
    }

    /// Simulate pointer motion. Delivered at document level.
    pub fn move_pointer(&self, at: Point, modifiers: Modifiers) {
        let event = SurfaceEvent::new(EventKind::Move)
            .at(at)
            .with_modifiers(modifiers);
        self.dispatch(EventTarget::Document, &event);
    }

    /// Simulate a left-button release. Delivered at document level.
    pub fn release(&self, at: Point, modifiers: Modifiers) {
        let event = SurfaceEvent::new(EventKind::Release)
            .at(at)
            .with_button(MouseButton::Left)
            .with_modifiers(modifiers);
        self.dispatch(EventTarget::Document, &event);
    }

    /// Simulate a click on `node`.
    pub fn click(&self, node: NodeId) {
        let event = SurfaceEvent::new(EventKind::Click).with_button(MouseButton::Left);
        self.dispatch(EventTarget::Node(node), &event);
    }

    /// Simulate a key press on `node`. Returns whether the default action was prevented.
    pub fn key_down(&self, node: NodeId, key_code: u32, modifiers: Modifiers) -> bool {
        let event = SurfaceEvent::new(EventKind::KeyDown)
            .with_key_code(key_code)
            .with_modifiers(modifiers);
        self.dispatch(EventTarget::Node(node), &event);
        event.default_prevented()
    }

    /// Simulate the user replacing a control's text and committing it.
    pub fn type_text(&self, node: NodeId, text: &str) {
        self.set_attribute(node, Attribute::Value, text);
        self.dispatch(EventTarget::Node(node), &SurfaceEvent::new(EventKind::Change));
    }

    /// Indented outline of the subtree at `node`.
    pub fn render_tree(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.render_into(node, 0, &mut out);
        out
    }

    fn render_into(&self, node: NodeId, depth: usize, out: &mut String) {
        let children = {
            let nodes = self.nodes.borrow();
            let Some(data) = nodes.get(node.index()) else {
                return;
            };
            let _ = write!(out, "{}<{}", "  ".repeat(depth), data.kind.tag_name());
            for (attribute, value) in &data.attributes {
                let _ = write!(out, " {}=\"{}\"", attribute.name(), value);
            }
            if !data.styles.is_empty() {
                let style: Vec<String> = data
                    .styles
                    .iter()
                    .map(|(property, value)| format!("{}: {}", property, value))
                    .collect();
                let _ = write!(out, " style=\"{}\"", style.join("; "));
            }
            out.push('>');
            if !data.text.is_empty() {
                out.push_str(&data.text);
            }
            out.push('\n');
            data.children.clone()
        };
        for child in children {
            self.render_into(child, depth + 1, out);
        }
    }

    fn is_registered(&self, id: ListenerId) -> bool {
        self.listeners.borrow().iter().any(|entry| entry.id == id)
    }

    fn propagation_path(&self, target: EventTarget, kind: EventKind) -> Vec<EventTarget> {
        let node = match target {
            EventTarget::Document => return vec![EventTarget::Document],
            EventTarget::Node(node) => node,
        };
        let mut path = vec![EventTarget::Node(node)];
        if !kind.bubbles() {
            return path;
        }

        let nodes = self.nodes.borrow();
        let mut top = node;
        let mut current = nodes.get(node.index()).and_then(|n| n.parent);
        while let Some(parent) = current {
            path.push(EventTarget::Node(parent));
            top = parent;
            current = nodes[parent.index()].parent;
        }
        if top == self.body() {
            path.push(EventTarget::Document);
        }
        path
    }

    fn dispatch(&self, target: EventTarget, event: &SurfaceEvent) {
        for current in self.propagation_path(target, event.kind) {
            // Snapshot so listeners may add or remove listeners while running.
            let listeners: Vec<(ListenerId, Listener)> = self
                .listeners
                .borrow()
                .iter()
                .filter(|entry| entry.target == current && entry.kind == event.kind)
                .map(|entry| (entry.id, entry.listener.clone()))
                .collect();

            for (id, listener) in listeners {
                if self.is_registered(id) {
                    listener(event);
                }
            }

            if event.propagation_stopped() {
                break;
            }
        }
    }

    fn is_ancestor_or_self(nodes: &[NodeData], ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = nodes[id.index()].parent;
        }
        false
    }

    fn option_value(nodes: &[NodeData], option: NodeId) -> String {
        let data = &nodes[option.index()];
        data.attributes
            .get(&Attribute::Value)
            .cloned()
            .unwrap_or_else(|| data.text.clone())
    }

    fn collect_text(nodes: &[NodeData], node: NodeId, out: &mut String) {
        let data = &nodes[node.index()];
        out.push_str(&data.text);
        for child in &data.children {
            Self::collect_text(nodes, *child, out);
        }
    }
}

impl Surface for MemorySurface {
    fn create_element(&self, kind: ElementKind) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(NodeData::new(kind));
        NodeId::from_index(nodes.len() - 1)
    }

    fn kind(&self, node: NodeId) -> Option<ElementKind> {
        self.nodes.borrow().get(node.index()).map(|n| n.kind)
    }

    fn append_child(&self, parent: NodeId, child: NodeId) -> SurfaceResult<()> {
        let mut nodes = self.nodes.borrow_mut();
        if parent.index() >= nodes.len() {
            return Err(SurfaceError::UnknownNode(parent));
        }
        if child.index() >= nodes.len() {
            return Err(SurfaceError::UnknownNode(child));
        }
        if Self::is_ancestor_or_self(&nodes, child, parent) {
            return Err(SurfaceError::HierarchyRequest { parent, child });
        }

        if let Some(old_parent) = nodes[child.index()].parent {
            nodes[old_parent.index()].children.retain(|c| *c != child);
        }
        nodes[child.index()].parent = Some(parent);
        nodes[parent.index()].children.push(child);
        Ok(())
    }

    fn remove_child(&self, parent: NodeId, child: NodeId) -> SurfaceResult<()> {
        let mut nodes = self.nodes.borrow_mut();
        if parent.index() >= nodes.len() {
            return Err(SurfaceError::UnknownNode(parent));
        }
        match nodes.get(child.index()) {
            None => return Err(SurfaceError::UnknownNode(child)),
            Some(data) if data.parent != Some(parent) => {
                return Err(SurfaceError::NotAChild { parent, child });
            }
            Some(_) => {}
        }

        nodes[parent.index()].children.retain(|c| *c != child);
        nodes[child.index()].parent = None;
        Ok(())
    }

    fn children(&self, parent: NodeId) -> Vec<NodeId> {
        self.nodes
            .borrow()
            .get(parent.index())
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    fn set_attribute(&self, node: NodeId, attribute: Attribute, value: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let Some(kind) = nodes.get(node.index()).map(|n| n.kind) else {
            log::debug!("set_attribute on unknown node {}", node);
            return;
        };

        let stored = if kind == ElementKind::Select && attribute == Attribute::Value {
            // A select can only hold the value of one of its options.
            let matches = nodes[node.index()]
                .children
                .iter()
                .any(|option| Self::option_value(&nodes, *option) == value);
            if matches { value.to_string() } else { String::new() }
        } else {
            value.to_string()
        };

        let data = &mut nodes[node.index()];
        if attribute == Attribute::Value && kind.is_text_control() {
            let end = stored.chars().count();
            data.selection = Some((end, end));
        }
        data.attributes.insert(attribute, stored);
    }

    fn attribute(&self, node: NodeId, attribute: Attribute) -> Option<String> {
        let nodes = self.nodes.borrow();
        let data = nodes.get(node.index())?;
        if let Some(value) = data.attributes.get(&attribute) {
            return Some(value.clone());
        }
        match (data.kind, attribute) {
            (ElementKind::Select, Attribute::Value) => Some(
                data.children
                    .first()
                    .map(|option| Self::option_value(&nodes, *option))
                    .unwrap_or_default(),
            ),
            (ElementKind::SelectOption, Attribute::Value) => Some(data.text.clone()),
            (kind, Attribute::Value) if kind.is_text_control() => Some(String::new()),
            _ => None,
        }
    }

    fn remove_attribute(&self, node: NodeId, attribute: Attribute) {
        if let Some(data) = self.nodes.borrow_mut().get_mut(node.index()) {
            data.attributes.remove(&attribute);
        }
    }

    fn set_style(&self, node: NodeId, property: StyleProperty, value: &str) {
        if let Some(data) = self.nodes.borrow_mut().get_mut(node.index()) {
            if value.is_empty() {
                data.styles.remove(&property);
            } else {
                data.styles.insert(property, value.to_string());
            }
        }
    }

    fn style(&self, node: NodeId, property: StyleProperty) -> Option<String> {
        self.nodes
            .borrow()
            .get(node.index())
            .and_then(|n| n.styles.get(&property).cloned())
    }

    fn set_text_content(&self, node: NodeId, text: &str) {
        let mut nodes = self.nodes.borrow_mut();
        if node.index() >= nodes.len() {
            return;
        }
        let children = std::mem::take(&mut nodes[node.index()].children);
        for child in children {
            nodes[child.index()].parent = None;
        }
        nodes[node.index()].text = text.to_string();
    }

    fn text_content(&self, node: NodeId) -> String {
        let nodes = self.nodes.borrow();
        let mut out = String::new();
        if node.index() < nodes.len() {
            Self::collect_text(&nodes, node, &mut out);
        }
        out
    }

    fn focus(&self, node: NodeId) {
        let Some(kind) = self.kind(node) else {
            return;
        };
        if !kind.is_focusable() || self.attribute(node, Attribute::Disabled).is_some() {
            return;
        }
        if self.focused.get() == Some(node) {
            return;
        }

        if let Some(previous) = self.focused.take() {
            self.dispatch(EventTarget::Node(previous), &SurfaceEvent::new(EventKind::Blur));
        }
        self.focused.set(Some(node));
        self.dispatch(EventTarget::Node(node), &SurfaceEvent::new(EventKind::Focus));
    }

    fn blur(&self, node: NodeId) {
        if self.focused.get() != Some(node) {
            return;
        }
        self.focused.set(None);
        self.dispatch(EventTarget::Node(node), &SurfaceEvent::new(EventKind::Blur));
    }

    fn focused(&self) -> Option<NodeId> {
        self.focused.get()
    }

    fn select_text(&self, node: NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        let Some(data) = nodes.get_mut(node.index()) else {
            return;
        };
        if !data.kind.is_text_control() {
            return;
        }
        let len = data
            .attributes
            .get(&Attribute::Value)
            .map(|v| v.chars().count())
            .unwrap_or(0);
        data.selection = Some((0, len));
    }

    fn selection_range(&self, node: NodeId) -> Option<(usize, usize)> {
        let nodes = self.nodes.borrow();
        let data = nodes.get(node.index())?;
        if !data.kind.is_text_control() {
            return None;
        }
        Some(data.selection.unwrap_or((0, 0)))
    }

    fn set_selection_range(&self, node: NodeId, start: usize, end: usize) {
        let mut nodes = self.nodes.borrow_mut();
        let Some(data) = nodes.get_mut(node.index()) else {
            return;
        };
        if !data.kind.is_text_control() {
            return;
        }
        let len = data
            .attributes
            .get(&Attribute::Value)
            .map(|v| v.chars().count())
            .unwrap_or(0);
        let end = end.min(len);
        data.selection = Some((start.min(end), end));
    }

    fn add_listener(&self, target: EventTarget, kind: EventKind, listener: Listener) -> ListenerId {
        let id = ListenerId::new(self.next_listener.get());
        self.next_listener.set(self.next_listener.get() + 1);
        self.listeners.borrow_mut().push(ListenerEntry {
            id,
            target,
            kind,
            listener,
        });
        id
    }

    fn remove_listener(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|entry| entry.id != id);
    }

    fn dispatch_event(&self, target: NodeId, event: SurfaceEvent) {
        self.dispatch(EventTarget::Node(target), &event.untrusted());
    }
}

impl std::fmt::Debug for MemorySurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemorySurface")
            .field("nodes", &self.nodes.borrow().len())
            .field("listeners", &self.listeners.borrow().len())
            .field("focused", &self.focused.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::set_flag;
    use std::rc::Rc;

    fn recorder(log: &Rc<RefCell<Vec<String>>>, label: &str) -> Listener {
        let log = log.clone();
        let label = label.to_string();
        Rc::new(move |event: &SurfaceEvent| {
            log.borrow_mut().push(format!("{}:{}", label, event.kind.dom_name()));
        })
    }

    #[test]
    fn test_append_and_remove_child() {
        let surface = MemorySurface::new();
        let parent = surface.create_element(ElementKind::Div);
        let child = surface.create_element(ElementKind::Span);

        surface.append_child(parent, child).unwrap();
        assert_eq!(surface.children(parent), vec![child]);
        assert_eq!(surface.parent(child), Some(parent));

        surface.remove_child(parent, child).unwrap();
        assert!(surface.children(parent).is_empty());
        assert_eq!(surface.parent(child), None);
    }

    #[test]
    fn test_append_moves_between_parents() {
        let surface = MemorySurface::new();
        let a = surface.create_element(ElementKind::Div);
        let b = surface.create_element(ElementKind::Div);
        let child = surface.create_element(ElementKind::Span);

        surface.append_child(a, child).unwrap();
        surface.append_child(b, child).unwrap();

        assert!(surface.children(a).is_empty());
        assert_eq!(surface.children(b), vec![child]);
    }

    #[test]
    fn test_remove_non_child_fails() {
        let surface = MemorySurface::new();
        let parent = surface.create_element(ElementKind::Div);
        let stranger = surface.create_element(ElementKind::Span);

        let result = surface.remove_child(parent, stranger);
        assert_eq!(
            result,
            Err(SurfaceError::NotAChild {
                parent,
                child: stranger
            })
        );
    }

    #[test]
    fn test_append_ancestor_fails() {
        let surface = MemorySurface::new();
        let outer = surface.create_element(ElementKind::Div);
        let inner = surface.create_element(ElementKind::Div);
        surface.append_child(outer, inner).unwrap();

        assert!(matches!(
            surface.append_child(inner, outer),
            Err(SurfaceError::HierarchyRequest { .. })
        ));
        assert!(matches!(
            surface.append_child(inner, inner),
            Err(SurfaceError::HierarchyRequest { .. })
        ));
    }

    #[test]
    fn test_unknown_node_errors() {
        let surface = MemorySurface::new();
        let parent = surface.create_element(ElementKind::Div);
        let bogus = NodeId::from_index(99);

        assert_eq!(
            surface.append_child(parent, bogus),
            Err(SurfaceError::UnknownNode(bogus))
        );
        assert!(surface.children(bogus).is_empty());
        assert_eq!(surface.attribute(bogus, Attribute::Id), None);
    }

    #[test]
    fn test_empty_style_clears_property() {
        let surface = MemorySurface::new();
        let node = surface.create_element(ElementKind::Div);

        surface.set_style(node, StyleProperty::Cursor, "col-resize");
        assert_eq!(surface.style(node, StyleProperty::Cursor).as_deref(), Some("col-resize"));

        surface.set_style(node, StyleProperty::Cursor, "");
        assert_eq!(surface.style(node, StyleProperty::Cursor), None);
    }

    #[test]
    fn test_text_content_replaces_children() {
        let surface = MemorySurface::new();
        let parent = surface.create_element(ElementKind::Div);
        let child = surface.create_element(ElementKind::Span);
        surface.set_text_content(child, "inner");
        surface.append_child(parent, child).unwrap();

        assert_eq!(surface.text_content(parent), "inner");

        surface.set_text_content(parent, "replaced");
        assert!(surface.children(parent).is_empty());
        assert_eq!(surface.text_content(parent), "replaced");
    }

    #[test]
    fn test_bubbling_reaches_document_only_when_attached() {
        let surface = MemorySurface::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let panel = surface.create_element(ElementKind::Div);
        let button = surface.create_element(ElementKind::Button);
        surface.append_child(panel, button).unwrap();

        surface.add_listener(EventTarget::Node(button), EventKind::Click, recorder(&log, "button"));
        surface.add_listener(EventTarget::Node(panel), EventKind::Click, recorder(&log, "panel"));
        surface.add_listener(EventTarget::Document, EventKind::Click, recorder(&log, "document"));

        surface.click(button);
        assert_eq!(*log.borrow(), vec!["button:click", "panel:click"]);

        log.borrow_mut().clear();
        surface.append_child(surface.body(), panel).unwrap();
        surface.click(button);
        assert_eq!(
            *log.borrow(),
            vec!["button:click", "panel:click", "document:click"]
        );
    }

    #[test]
    fn test_stop_propagation_finishes_current_target() {
        let surface = MemorySurface::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let panel = surface.create_element(ElementKind::Div);
        let input = surface.create_element(ElementKind::Input);
        surface.append_child(panel, input).unwrap();

        surface.add_listener(
            EventTarget::Node(input),
            EventKind::KeyDown,
            Rc::new(|event: &SurfaceEvent| event.stop_propagation()),
        );
        surface.add_listener(EventTarget::Node(input), EventKind::KeyDown, recorder(&log, "input"));
        surface.add_listener(EventTarget::Node(panel), EventKind::KeyDown, recorder(&log, "panel"));

        surface.key_down(input, 65, Modifiers::NONE);
        assert_eq!(*log.borrow(), vec!["input:keydown"]);
    }

    #[test]
    fn test_listener_removed_during_dispatch_is_skipped() {
        let surface = Rc::new(MemorySurface::new());
        let hits = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(None));

        let s = surface.clone();
        let pending = second.clone();
        surface.add_listener(
            EventTarget::Document,
            EventKind::Release,
            Rc::new(move |_: &SurfaceEvent| {
                if let Some(id) = pending.get() {
                    s.remove_listener(id);
                }
            }),
        );
        let counter = hits.clone();
        let id = surface.add_listener(
            EventTarget::Document,
            EventKind::Release,
            Rc::new(move |_: &SurfaceEvent| counter.set(counter.get() + 1)),
        );
        second.set(Some(id));

        surface.release(Point::ZERO, Modifiers::NONE);
        assert_eq!(hits.get(), 0);
        assert_eq!(surface.listener_count(EventTarget::Document), 1);
    }

    #[test]
    fn test_focus_moves_and_fires_blur_then_focus() {
        let surface = MemorySurface::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let a = surface.create_element(ElementKind::Input);
        let b = surface.create_element(ElementKind::Input);
        for (node, label) in [(a, "a"), (b, "b")] {
            surface.add_listener(EventTarget::Node(node), EventKind::Focus, recorder(&log, label));
            surface.add_listener(EventTarget::Node(node), EventKind::Blur, recorder(&log, label));
        }

        surface.focus(a);
        surface.focus(a);
        surface.focus(b);
        surface.blur(a);
        surface.blur(b);

        assert_eq!(
            *log.borrow(),
            vec!["a:focus", "a:blur", "b:focus", "b:blur"]
        );
        assert_eq!(surface.focused(), None);
    }

    #[test]
    fn test_non_focusable_and_disabled_ignore_focus() {
        let surface = MemorySurface::new();
        let div = surface.create_element(ElementKind::Div);
        let input = surface.create_element(ElementKind::Input);
        set_flag(&surface, input, Attribute::Disabled, true);

        surface.focus(div);
        surface.focus(input);
        assert_eq!(surface.focused(), None);
    }

    #[test]
    fn test_press_default_action_focuses() {
        let surface = MemorySurface::new();
        let input = surface.create_element(ElementKind::Input);
        let div = surface.create_element(ElementKind::Div);

        assert!(!surface.press(input, Point::ZERO, Modifiers::NONE));
        assert_eq!(surface.focused(), Some(input));

        surface.press(div, Point::ZERO, Modifiers::NONE);
        assert_eq!(surface.focused(), None);
    }

    #[test]
    fn test_prevented_press_keeps_focus() {
        let surface = MemorySurface::new();
        let input = surface.create_element(ElementKind::Input);
        surface.add_listener(
            EventTarget::Node(input),
            EventKind::Press,
            Rc::new(|event: &SurfaceEvent| event.prevent_default()),
        );

        assert!(surface.press(input, Point::ZERO, Modifiers::NONE));
        assert_eq!(surface.focused(), None);
    }

    #[test]
    fn test_dispatch_event_is_untrusted() {
        let surface = MemorySurface::new();
        let input = surface.create_element(ElementKind::Input);
        let trusted = Rc::new(RefCell::new(Vec::new()));
        let seen = trusted.clone();
        surface.add_listener(
            EventTarget::Node(input),
            EventKind::Change,
            Rc::new(move |event: &SurfaceEvent| seen.borrow_mut().push(event.is_trusted())),
        );

        surface.type_text(input, "abc");
        surface.dispatch_event(input, SurfaceEvent::new(EventKind::Change));

        assert_eq!(*trusted.borrow(), vec![true, false]);
        assert_eq!(surface.attribute(input, Attribute::Value).as_deref(), Some("abc"));
    }

    #[test]
    fn test_select_text_and_selection_range() {
        let surface = MemorySurface::new();
        let input = surface.create_element(ElementKind::Input);
        surface.set_attribute(input, Attribute::Value, "1.50 m");
        assert_eq!(surface.selection_range(input), Some((6, 6)));

        surface.select_text(input);
        assert_eq!(surface.selection_range(input), Some((0, 6)));

        surface.set_selection_range(input, 2, 40);
        assert_eq!(surface.selection_range(input), Some((2, 6)));

        let div = surface.create_element(ElementKind::Div);
        assert_eq!(surface.selection_range(div), None);
    }

    #[test]
    fn test_select_value_must_match_an_option() {
        let surface = MemorySurface::new();
        let select = surface.create_element(ElementKind::Select);
        for (value, label) in [("a", "Alpha"), ("b", "Beta")] {
            let option = surface.create_element(ElementKind::SelectOption);
            surface.set_attribute(option, Attribute::Value, value);
            surface.set_text_content(option, label);
            surface.append_child(select, option).unwrap();
        }

        assert_eq!(surface.attribute(select, Attribute::Value).as_deref(), Some("a"));

        surface.set_attribute(select, Attribute::Value, "b");
        assert_eq!(surface.attribute(select, Attribute::Value).as_deref(), Some("b"));

        surface.set_attribute(select, Attribute::Value, "zzz");
        assert_eq!(surface.attribute(select, Attribute::Value).as_deref(), Some(""));
    }

    #[test]
    fn test_render_tree_outline() {
        let surface = MemorySurface::new();
        let panel = surface.create_element(ElementKind::Div);
        surface.set_attribute(panel, Attribute::Class, "Panel");
        let text = surface.create_element(ElementKind::Span);
        surface.set_text_content(text, "Position");
        surface.set_style(text, StyleProperty::Cursor, "default");
        surface.append_child(panel, text).unwrap();

        let outline = surface.render_tree(panel);
        assert_eq!(
            outline,
            "<div class=\"Panel\">\n  <span style=\"cursor: default\">Position\n"
        );
    }
}
