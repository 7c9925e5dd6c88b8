//! Numeric field logic: value model, drag-scrub gestures and field state.

mod affordance;
mod scrub;
mod state;
mod value;

pub use affordance::{
    DRAG_BACKGROUND, DRAG_CURSOR, clear_drag_affordance, has_drag_affordance, show_drag_affordance,
};
pub use scrub::{DragSession, ScrubController, ScrubOutcome};
pub use state::FieldState;
pub use value::{
    DEFAULT_PRECISION, DEFAULT_STEP, NumberFormat, ValueModel, parse_leading_float,
    parse_leading_int,
};
