//! Error types for store operations.

use thiserror::Error;

use crate::ActionKind;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced at the boundary where actions arrive as text, plus the
/// locally recovered out-of-range swap.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Action tag outside the closed set.
    #[error("unknown action {tag:?}")]
    UnknownAction { tag: String },

    /// `select`/`remove` without the row they act on.
    #[error("action {kind} requires a row")]
    MissingEntry { kind: ActionKind },

    /// A script step addressed a row that does not exist.
    #[error("row index {index} out of range for {len} rows")]
    RowIndexOutOfRange { index: usize, len: usize },

    /// A positional operation needs more rows than the state holds.
    #[error("operation needs row {index} but only {len} rows exist")]
    OutOfRangeOperation { index: usize, len: usize },

    /// Script step that does not follow `tag` or `tag:index`.
    #[error("invalid script step {step:?}")]
    InvalidStep { step: String },
}
