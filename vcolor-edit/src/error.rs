//! Error types for editing operations.

use thiserror::Error;

/// Errors reported by the Get and Apply operations.
///
/// Both are non-fatal: the triggering action aborts without mutating state
/// and the UI shows a warning. They never propagate past the invoking
/// action.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    /// The mesh has no corner color layer to read from. Only Get reports
    /// this; Apply creates the layer itself.
    #[error("mesh has no color layer")]
    NoColorData,

    /// No vertex is selected for the requested operation.
    #[error("no vertices selected")]
    NoSelection,
}
