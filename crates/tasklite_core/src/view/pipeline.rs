//! Filter/sort projection pipeline.
//!
//! # Responsibility
//! - Apply completion filter, category filter and sort, in that fixed
//!   order, producing a fresh display sequence.
//!
//! # Invariants
//! - Due dates sort as calendar dates, not as strings.
//! - Both sorts are stable: tasks with equal keys keep their storage
//!   (insertion) order relative to each other.

use crate::model::task::Task;
use std::cmp::Reverse;

/// Subset of tasks shown based on their completed flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionFilter {
    #[default]
    All,
    Pending,
    Completed,
}

/// Subset of tasks shown based on exact category match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

/// Field used to order the displayed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Ascending by due date, earliest first.
    #[default]
    DueDate,
    /// Descending by priority rank, high first.
    Priority,
}

/// Active view selections. Exactly one completion filter and one category
/// filter is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub completion: CompletionFilter,
    pub category: CategoryFilter,
    pub sort: SortKey,
}

/// Projects the stored collection into the sequence to display.
///
/// Pure function: returns a new sequence and leaves `tasks` untouched. An
/// empty result is the caller's cue to show a "no tasks" placeholder.
pub fn project(tasks: &[Task], view: &ViewState) -> Vec<Task> {
    let mut shown: Vec<Task> = tasks
        .iter()
        .filter(|task| match view.completion {
            CompletionFilter::All => true,
            CompletionFilter::Pending => !task.completed,
            CompletionFilter::Completed => task.completed,
        })
        .filter(|task| match &view.category {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => task.category == *category,
        })
        .cloned()
        .collect();

    match view.sort {
        SortKey::DueDate => shown.sort_by_key(|task| task.due_date),
        SortKey::Priority => shown.sort_by_key(|task| Reverse(task.priority.rank())),
    }

    shown
}
