//! Interaction state of a numeric field.

/// Which input modality currently owns a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    /// Not focused, not dragging. The drag affordance is shown.
    Idle,
    /// A drag-scrub gesture is in progress.
    Scrubbing,
    /// The field has keyboard focus for typed entry.
    Editing,
}

impl Default for FieldState {
    fn default() -> Self {
        Self::Idle
    }
}

impl FieldState {
    /// Derive the state from the gesture and focus flags. A drag wins over focus.
    pub fn from_flags(dragging: bool, focused: bool) -> Self {
        if dragging {
            Self::Scrubbing
        } else if focused {
            Self::Editing
        } else {
            Self::Idle
        }
    }

    /// Check if a scrub gesture is in progress.
    pub fn is_scrubbing(&self) -> bool {
        matches!(self, Self::Scrubbing)
    }

    /// Check if the field is in typed-entry mode.
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing)
    }
}
