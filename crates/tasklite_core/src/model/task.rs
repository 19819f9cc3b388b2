//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its persisted wire shape.
//! - Provide the priority ranking used by the view pipeline.
//!
//! # Invariants
//! - `id` is unique within the collection at all times.
//! - `title` and `due_date` are non-empty for every persisted task; the
//!   write boundary in the service layer enforces this.
//! - Persisted field names are `id`, `title`, `dueDate`, `category`,
//!   `priority`, `completed`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stable identifier for a task.
///
/// Assigned from the epoch-millisecond clock at creation time, so ids are
/// roughly monotonic with creation order. Kept as a type alias to make
/// semantic intent explicit in signatures.
pub type TaskId = i64;

/// Task urgency level.
///
/// Order of the variants matters: the derived `Ord` agrees with `rank`, so
/// `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Numeric rank used for priority sorting: low=1, medium=2, high=3.
    pub fn rank(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }
}

/// Canonical task record.
///
/// Serialized field names follow the persisted blob layout (`dueDate`
/// rather than `due_date`), so a blob written by an earlier build of the
/// application reads back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    /// Serializes as `YYYY-MM-DD`.
    pub due_date: NaiveDate,
    /// Open-ended tag; not validated against a fixed set.
    pub category: String,
    pub priority: Priority,
    /// Defaults to `false` when absent from a persisted blob.
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Creates a task with `completed = false`.
    ///
    /// Field validation lives at the service write boundary, not here; this
    /// constructor only fixes the initial lifecycle state.
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        due_date: NaiveDate,
        category: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            due_date,
            category: category.into(),
            priority,
            completed: false,
        }
    }
}
