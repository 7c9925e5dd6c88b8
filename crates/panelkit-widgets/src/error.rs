//! Widget composition errors.

use panelkit_core::{NodeId, SurfaceError};
use thiserror::Error;

/// Invalid widget composition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MisuseError {
    #[error("Widget {child} belongs to a different surface than {parent}")]
    ForeignSurface { parent: NodeId, child: NodeId },
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// Result type for widget composition.
pub type MisuseResult<T> = Result<T, MisuseError>;
