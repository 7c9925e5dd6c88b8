//! Numeric fields with drag-to-scrub editing.
//!
//! A field accepts two kinds of input. Pressing and dragging anywhere on the
//! field scrubs the value: moving right or up increases it, and holding shift
//! makes the change faster. A press and release with negligible motion is
//! treated as a click and puts the field into typed entry with its text
//! selected. Typed text is committed when the surface reports a change.
//!
//! While the field is not focused it shows a resize cursor and a transparent
//! background to advertise the drag gesture.

use crate::element::{Element, Widget};
use panelkit_core::numeric::{clear_drag_affordance, show_drag_affordance};
use panelkit_core::{
    Attribute, ElementKind, EventKind, EventTarget, FieldState, NodeId, ScrubConfig,
    ScrubController, ScrubOutcome, Subscription, Surface, SurfaceEvent, SurfaceHandle, ValueModel,
    key_code,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

struct FieldModel {
    value: ValueModel,
    scrub: ScrubController,
    focused: bool,
    /// Document-level move/release listeners of the active drag.
    drag_subscriptions: Vec<Subscription>,
}

/// Shared state reachable from the field's listeners.
///
/// Holds the surface weakly because the surface owns the listeners.
#[derive(Clone)]
struct FieldCore {
    surface: Weak<dyn Surface>,
    node: NodeId,
    model: Rc<RefCell<FieldModel>>,
}

impl FieldCore {
    fn render(&self, surface: &dyn Surface) {
        let text = self.model.borrow().value.display();
        surface.set_attribute(self.node, Attribute::Value, &text);
    }

    fn notify_change(&self, surface: &dyn Surface) {
        surface.dispatch_event(self.node, SurfaceEvent::new(EventKind::Change));
    }

    fn on_key_down(&self, event: &SurfaceEvent) {
        event.stop_propagation();
        if event.key_code == Some(key_code::ENTER) {
            if let Some(surface) = self.surface.upgrade() {
                surface.blur(self.node);
            }
        }
    }

    fn on_press(&self, event: &SurfaceEvent) {
        event.prevent_default();
        let Some(surface) = self.surface.upgrade() else {
            return;
        };

        let stale = {
            let mut model = self.model.borrow_mut();
            let origin = model.value.value();
            model.scrub.press(origin, event.client);
            std::mem::take(&mut model.drag_subscriptions)
        };
        drop(stale);

        let on_move = {
            let core = self.clone();
            Rc::new(move |event: &SurfaceEvent| core.on_move(event))
        };
        let on_release = {
            let core = self.clone();
            Rc::new(move |event: &SurfaceEvent| core.on_release(event))
        };
        let subscriptions = vec![
            Subscription::new(&surface, EventTarget::Document, EventKind::Move, on_move),
            Subscription::new(&surface, EventTarget::Document, EventKind::Release, on_release),
        ];
        self.model.borrow_mut().drag_subscriptions = subscriptions;
        log::debug!("Scrub started on {} at {:?}", self.node, event.client);
    }

    fn on_move(&self, event: &SurfaceEvent) {
        let committed = {
            let mut model = self.model.borrow_mut();
            let FieldModel { value, scrub, .. } = &mut *model;
            match scrub.drag(event.client, event.modifiers, value) {
                Some(candidate) => value.commit(candidate).then(|| value.value()),
                None => None,
            }
        };

        if let Some(value) = committed {
            log::trace!("Scrub {} -> {}", self.node, value);
            if let Some(surface) = self.surface.upgrade() {
                self.render(surface.as_ref());
                self.notify_change(surface.as_ref());
            }
        }
    }

    fn on_release(&self, _event: &SurfaceEvent) {
        let (outcome, subscriptions) = {
            let mut model = self.model.borrow_mut();
            let outcome = model.scrub.release();
            (outcome, std::mem::take(&mut model.drag_subscriptions))
        };
        drop(subscriptions);

        let Some(surface) = self.surface.upgrade() else {
            return;
        };
        match outcome {
            Some(ScrubOutcome::Click { origin_value }) => {
                let rolled_back = {
                    let mut model = self.model.borrow_mut();
                    model.value.value() != origin_value && model.value.commit(origin_value)
                };
                if rolled_back {
                    self.render(surface.as_ref());
                    self.notify_change(surface.as_ref());
                }
                log::debug!("Click on {}; entering typed entry", self.node);
                surface.focus(self.node);
                surface.select_text(self.node);
            }
            Some(ScrubOutcome::Scrub { distance }) => {
                log::debug!("Scrub on {} finished after {} px", self.node, distance);
            }
            None => {}
        }
    }

    fn on_change(&self, event: &SurfaceEvent) {
        // Our own drag notifications are untrusted; only typed text is parsed.
        if !event.is_trusted() {
            return;
        }
        if let Some(surface) = self.surface.upgrade() {
            let text = surface.attribute(self.node, Attribute::Value).unwrap_or_default();
            self.model.borrow_mut().value.commit_text(&text);
            self.render(surface.as_ref());
        }
    }

    fn on_focus(&self) {
        self.model.borrow_mut().focused = true;
        if let Some(surface) = self.surface.upgrade() {
            clear_drag_affordance(surface.as_ref(), self.node);
        }
    }

    fn on_blur(&self) {
        self.model.borrow_mut().focused = false;
        if let Some(surface) = self.surface.upgrade() {
            show_drag_affordance(surface.as_ref(), self.node);
        }
    }
}

/// Numeric input shared by [`Number`] and [`Integer`].
#[derive(Clone)]
pub struct NumberField {
    element: Element,
    core: FieldCore,
}

impl NumberField {
    /// Create a field around `value`, committing `initial` if given.
    pub fn new(surface: &SurfaceHandle, value: ValueModel, initial: Option<f64>) -> Self {
        let element = Element::with_class(surface, ElementKind::Input, "Number");
        let core = FieldCore {
            surface: Rc::downgrade(surface),
            node: element.node(),
            model: Rc::new(RefCell::new(FieldModel {
                value,
                scrub: ScrubController::default(),
                focused: false,
                drag_subscriptions: Vec::new(),
            })),
        };
        let field = Self { element, core };

        field.install_listeners();
        field.set_value(initial);
        field.refresh();
        show_drag_affordance(surface.as_ref(), field.node());
        field
    }

    fn install_listeners(&self) {
        let core = self.core.clone();
        self.listen(EventKind::KeyDown, move |event: &SurfaceEvent| core.on_key_down(event));
        let core = self.core.clone();
        self.listen(EventKind::Press, move |event: &SurfaceEvent| core.on_press(event));
        let core = self.core.clone();
        self.listen(EventKind::Change, move |event: &SurfaceEvent| core.on_change(event));
        let core = self.core.clone();
        self.listen(EventKind::Focus, move |_: &SurfaceEvent| core.on_focus());
        let core = self.core.clone();
        self.listen(EventKind::Blur, move |_: &SurfaceEvent| core.on_blur());
    }

    fn surface(&self) -> &dyn Surface {
        self.element.surface().as_ref()
    }

    /// Commit a value and refresh the display. `None` is ignored.
    pub fn set_value(&self, value: Option<f64>) -> &Self {
        if let Some(value) = value {
            self.core.model.borrow_mut().value.commit(value);
            self.core.render(self.surface());
        }
        self
    }

    /// Commit typed text; unparsable text keeps the current value.
    pub fn set_text(&self, text: &str) -> &Self {
        self.core.model.borrow_mut().value.commit_text(text);
        self.core.render(self.surface());
        self
    }

    /// Rewrite the display from the stored value.
    pub fn refresh(&self) -> &Self {
        self.core.render(self.surface());
        self
    }

    pub fn get_value(&self) -> f64 {
        self.core.model.borrow().value.value()
    }

    /// Text currently shown in the field.
    pub fn display_text(&self) -> String {
        self.element.value()
    }

    /// Set the clamp bounds. The current value is not re-clamped.
    pub fn set_range(&self, min: f64, max: f64) -> &Self {
        self.core.model.borrow_mut().value.set_range(min, max);
        self
    }

    pub fn set_step(&self, step: f64) -> &Self {
        self.core.model.borrow_mut().value.set_step(step);
        self
    }

    /// Tune how pointer motion maps to value changes. An invalid config is
    /// reported and the previous one kept.
    pub fn set_scrub_config(&self, config: ScrubConfig) -> &Self {
        if let Err(e) = config.validate() {
            log::error!("Ignoring scrub config for {}: {}", self.core.node, e);
            return self;
        }
        self.core.model.borrow_mut().scrub.set_config(config);
        self
    }

    /// Snapshot of the value model.
    pub fn model(&self) -> ValueModel {
        self.core.model.borrow().value.clone()
    }

    /// End an active drag without treating it as a click or scrub.
    pub fn abort_session(&self) -> &Self {
        let (session, subscriptions) = {
            let mut model = self.core.model.borrow_mut();
            (
                model.scrub.abort(),
                std::mem::take(&mut model.drag_subscriptions),
            )
        };
        drop(subscriptions);
        if session.is_some() {
            log::debug!("Scrub on {} aborted", self.node());
        }
        self
    }

    pub fn is_dragging(&self) -> bool {
        self.core.model.borrow().scrub.is_dragging()
    }

    pub fn state(&self) -> FieldState {
        let model = self.core.model.borrow();
        FieldState::from_flags(model.scrub.is_dragging(), model.focused)
    }

    fn update_model(&self, update: impl FnOnce(&mut ValueModel)) {
        update(&mut self.core.model.borrow_mut().value);
    }
}

impl Widget for NumberField {
    fn element(&self) -> &Element {
        &self.element
    }
}

impl std::fmt::Debug for NumberField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let model = self.core.model.borrow();
        f.debug_struct("NumberField")
            .field("node", &self.core.node)
            .field("value", &model.value)
            .field("dragging", &model.scrub.is_dragging())
            .finish()
    }
}

/// Decimal field with fixed precision and an optional unit suffix.
#[derive(Debug, Clone)]
pub struct Number {
    field: NumberField,
}

impl Number {
    pub fn new(surface: &SurfaceHandle, initial: Option<f64>) -> Self {
        Self {
            field: NumberField::new(surface, ValueModel::decimal(), initial),
        }
    }

    pub fn field(&self) -> &NumberField {
        &self.field
    }

    pub fn get_value(&self) -> f64 {
        self.field.get_value()
    }

    pub fn set_value(&self, value: Option<f64>) -> &Self {
        self.field.set_value(value);
        self
    }

    pub fn set_text(&self, text: &str) -> &Self {
        self.field.set_text(text);
        self
    }

    pub fn set_range(&self, min: f64, max: f64) -> &Self {
        self.field.set_range(min, max);
        self
    }

    pub fn set_step(&self, step: f64) -> &Self {
        self.field.set_step(step);
        self
    }

    /// Set the fraction digits. Takes effect on the next commit or refresh.
    pub fn set_precision(&self, precision: usize) -> &Self {
        self.field.update_model(|model| model.set_precision(precision));
        self
    }

    /// Set the unit suffix. Takes effect on the next commit or refresh.
    pub fn set_unit(&self, unit: &str) -> &Self {
        self.field.update_model(|model| model.set_unit(unit));
        self
    }
}

impl Widget for Number {
    fn element(&self) -> &Element {
        self.field.element()
    }
}

/// Whole-number field.
#[derive(Debug, Clone)]
pub struct Integer {
    field: NumberField,
}

impl Integer {
    pub fn new(surface: &SurfaceHandle, initial: Option<i64>) -> Self {
        Self {
            field: NumberField::new(surface, ValueModel::integer(), initial.map(|v| v as f64)),
        }
    }

    pub fn field(&self) -> &NumberField {
        &self.field
    }

    pub fn get_value(&self) -> i64 {
        self.field.get_value() as i64
    }

    pub fn set_value(&self, value: Option<i64>) -> &Self {
        self.field.set_value(value.map(|v| v as f64));
        self
    }

    pub fn set_text(&self, text: &str) -> &Self {
        self.field.set_text(text);
        self
    }

    pub fn set_range(&self, min: f64, max: f64) -> &Self {
        self.field.set_range(min, max);
        self
    }

    /// Set the drag step, truncated toward zero.
    pub fn set_step(&self, step: f64) -> &Self {
        self.field.set_step(step);
        self
    }
}

impl Widget for Integer {
    fn element(&self) -> &Element {
        self.field.element()
    }
}
