//! Typed failure modes of the task store and projection layer.
//!
//! Validation failures and missing records are expected outcomes that
//! commands translate into user-facing messages; storage failures carry
//! the underlying SQLite error unchanged for operator diagnostics.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("task {0} not found")]
    NotFound(i64),

    #[error("task storage failed: {0}")]
    Storage(#[from] rusqlite::Error),
}

/// A rejected write or query parameter, distinct from a storage failure.
/// Nothing is persisted when any of these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("task title is required")]
    EmptyTitle,

    #[error("task title must be 200 characters or fewer")]
    TitleTooLong,

    #[error("task description must be 1000 characters or fewer")]
    DescriptionTooLong,

    #[error("status must be 'complete' or 'incomplete', got '{0}'")]
    InvalidStatus(String),

    #[error("status filter must be 'complete' or 'incomplete', got '{0}'")]
    InvalidFilterValue(String),

    #[error("unknown sort key '{0}'")]
    InvalidSortKey(String),

    #[error("sort direction must be 'ascending' or 'descending', got '{0}'")]
    InvalidSortDirection(String),
}
