//! Scoped listener registration.

use super::{EventTarget, Listener, ListenerId, Surface, SurfaceHandle};
use crate::input::EventKind;
use std::rc::{Rc, Weak};

/// A listener that stays registered for as long as this guard lives.
///
/// Holds the surface weakly: a guard stored inside a listener's own state
/// does not keep the surface alive.
pub struct Subscription {
    surface: Weak<dyn Surface>,
    id: ListenerId,
}

impl Subscription {
    /// Register `listener` and return its guard.
    pub fn new(
        surface: &SurfaceHandle,
        target: EventTarget,
        kind: EventKind,
        listener: Listener,
    ) -> Self {
        let id = surface.add_listener(target, kind, listener);
        Self {
            surface: Rc::downgrade(surface),
            id,
        }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(surface) = self.surface.upgrade() {
            surface.remove_listener(self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
