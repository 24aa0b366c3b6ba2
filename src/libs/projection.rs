//! Read-only views over a task collection.
//!
//! Filtering, sorting and aggregation are pure functions: they consume a
//! snapshot and return a new one, never touching the store. Consumers
//! compose them as filter, then sort, then (optionally) stats.

use crate::libs::error::ValidationError;
use crate::libs::task::{Task, TaskStatus};
use serde::Serialize;
use std::cmp::Ordering;
use std::str::FromStr;

/// Sort key applied when a caller does not name one.
pub const DEFAULT_SORT_KEY: SortKey = SortKey::CreatedAt;

/// Subset selection over a task collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    Status(TaskStatus),
}

impl TaskFilter {
    /// Parses an optional status argument; absence selects all tasks.
    pub fn parse(raw: Option<&str>) -> Result<Self, ValidationError> {
        match raw {
            None => Ok(TaskFilter::All),
            Some(value) => value
                .parse::<TaskStatus>()
                .map(TaskFilter::Status)
                .map_err(|_| ValidationError::InvalidFilterValue(value.to_string())),
        }
    }

    /// Returns the matching subset, preserving relative input order.
    pub fn apply(&self, tasks: Vec<Task>) -> Vec<Task> {
        match self {
            TaskFilter::All => tasks,
            TaskFilter::Status(status) => tasks.into_iter().filter(|task| task.status == *status).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    CreatedAt,
    UpdatedAt,
    Title,
    Status,
}

impl SortKey {
    /// Direction used when the caller does not name one: most recent
    /// first for timestamps, alphabetical for title and status.
    pub fn default_direction(&self) -> SortDirection {
        match self {
            SortKey::CreatedAt | SortKey::UpdatedAt => SortDirection::Descending,
            SortKey::Title | SortKey::Status => SortDirection::Ascending,
        }
    }

    fn compare(&self, a: &Task, b: &Task) -> Ordering {
        match self {
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            SortKey::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            SortKey::Title => a.title.cmp(&b.title),
            SortKey::Status => a.status.as_str().cmp(b.status.as_str()),
        }
    }
}

impl FromStr for SortKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created_at" => Ok(SortKey::CreatedAt),
            "updated_at" => Ok(SortKey::UpdatedAt),
            "title" => Ok(SortKey::Title),
            "status" => Ok(SortKey::Status),
            other => Err(ValidationError::InvalidSortKey(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl FromStr for SortDirection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascending" => Ok(SortDirection::Ascending),
            "descending" => Ok(SortDirection::Descending),
            other => Err(ValidationError::InvalidSortDirection(other.to_string())),
        }
    }
}

/// Orders a snapshot by the requested key. Tasks that compare equal on
/// the key fall back to ascending id, regardless of direction, so the
/// result is a deterministic total order.
pub fn sorted(mut tasks: Vec<Task>, key: SortKey, direction: SortDirection) -> Vec<Task> {
    tasks.sort_by(|a, b| {
        let ord = match direction {
            SortDirection::Ascending => key.compare(a, b),
            SortDirection::Descending => key.compare(a, b).reverse(),
        };
        ord.then_with(|| a.id.cmp(&b.id))
    });
    tasks
}

/// Task counts grouped by completion status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub total: i64,
    pub complete: i64,
    pub incomplete: i64,
}

/// Counts over whatever collection the caller passes in; store-wide
/// figures come from `Tasks::count_by_status` instead.
pub fn stats(tasks: &[Task]) -> TaskStats {
    let total = tasks.len() as i64;
    let complete = tasks.iter().filter(|task| task.status == TaskStatus::Complete).count() as i64;

    TaskStats {
        total,
        complete,
        incomplete: total - complete,
    }
}
