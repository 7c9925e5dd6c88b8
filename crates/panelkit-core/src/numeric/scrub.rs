//! Drag-to-scrub gesture tracking.
//!
//! Horizontal motion to the right and vertical motion upward both increase
//! the value. Motion accumulates into a single signed distance which is
//! mapped onto the value relative to where the gesture started, so replaying
//! the same pointer path from the same origin always lands on the same value.

use super::value::ValueModel;
use crate::config::ScrubConfig;
use crate::input::Modifiers;
use kurbo::Point;

/// State of one press-move-release gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Field value when the gesture started.
    pub origin_value: f64,
    /// Pointer position at press time.
    pub origin_pointer: Point,
    /// Pointer position at the previous move.
    pub last_pointer: Point,
    /// Signed distance accumulated across all moves.
    pub accumulated_distance: f64,
}

impl DragSession {
    pub fn new(origin_value: f64, pointer: Point) -> Self {
        Self {
            origin_value,
            origin_pointer: pointer,
            last_pointer: pointer,
            accumulated_distance: 0.0,
        }
    }

    /// Fold a pointer position into the session and return the signed delta.
    pub fn advance(&mut self, pointer: Point) -> f64 {
        let delta = (pointer.x - self.last_pointer.x) - (pointer.y - self.last_pointer.y);
        self.accumulated_distance += delta;
        self.last_pointer = pointer;
        delta
    }

    /// Unclamped value for the accumulated distance.
    pub fn candidate(&self, step: f64, divisor: f64) -> f64 {
        self.origin_value + (self.accumulated_distance / divisor) * step
    }
}

/// How a finished gesture is interpreted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrubOutcome {
    /// Negligible motion: the user wants to type into the field. Any value
    /// change made during the gesture should be rolled back to `origin_value`.
    Click { origin_value: f64 },
    /// A real drag; the value has already been updated along the way.
    Scrub { distance: f64 },
}

/// Tracks at most one drag session for a field.
#[derive(Debug, Clone, Default)]
pub struct ScrubController {
    config: ScrubConfig,
    session: Option<DragSession>,
}

impl ScrubController {
    pub fn new(config: ScrubConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    pub fn config(&self) -> &ScrubConfig {
        &self.config
    }

    /// Replace the tuning. An active session picks it up on its next move.
    pub fn set_config(&mut self, config: ScrubConfig) {
        self.config = config;
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Start a gesture. A session left over from a lost release is discarded.
    pub fn press(&mut self, origin_value: f64, pointer: Point) {
        if let Some(stale) = self.session.take() {
            log::warn!(
                "Discarding unfinished drag session (distance {})",
                stale.accumulated_distance
            );
        }
        self.session = Some(DragSession::new(origin_value, pointer));
    }

    /// Advance the gesture and return the clamped value to commit, if it changed.
    pub fn drag(&mut self, pointer: Point, modifiers: Modifiers, model: &ValueModel) -> Option<f64> {
        let divisor = self.config.divisor(modifiers);
        let session = self.session.as_mut()?;
        session.advance(pointer);

        let candidate = model.clamp(session.candidate(model.step(), divisor));
        if candidate.is_nan() || candidate == model.value() {
            return None;
        }
        Some(candidate)
    }

    /// Finish the gesture. Returns `None` when no gesture was active.
    pub fn release(&mut self) -> Option<ScrubOutcome> {
        let session = self.session.take()?;
        let distance = session.accumulated_distance;
        if self.config.is_click(distance) {
            Some(ScrubOutcome::Click {
                origin_value: session.origin_value,
            })
        } else {
            Some(ScrubOutcome::Scrub { distance })
        }
    }

    /// Drop the gesture without interpreting it.
    pub fn abort(&mut self) -> Option<DragSession> {
        self.session.take()
    }
}
