//! Task store service.
//!
//! # Responsibility
//! - Own the canonical ordered task collection in memory.
//! - Provide the create/update/toggle/remove/read operations.
//! - Mirror the full collection to the repository on every mutation.
//!
//! # Invariants
//! - Collection order is insertion order; display ordering is the view
//!   pipeline's job and is never written back here.
//! - `title` and due date are validated at this write boundary; an invalid
//!   submission is a silent no-op, not an error.
//! - Unknown task ids are no-ops on every mutating operation.

use crate::model::task::{Priority, Task, TaskId};
use crate::repo::task_repo::{RepoResult, TaskRepository};
use chrono::{NaiveDate, Utc};
use log::{info, warn};

/// Fallback collection used when no usable persisted state exists.
///
/// Chosen to avoid an empty first-run experience; a malformed persisted
/// blob is treated identically to "no data".
pub fn seed_tasks() -> Vec<Task> {
    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("seed dates are fixed valid constants")
    }
    let mut dentist = Task::new(
        3,
        "Schedule a dentist appointment",
        date(2025, 10, 10),
        "personal",
        Priority::Low,
    );
    dentist.completed = true;

    vec![
        Task::new(
            1,
            "Design the new landing page",
            date(2025, 10, 15),
            "work",
            Priority::High,
        ),
        Task::new(
            2,
            "Buy groceries for the week",
            date(2025, 10, 4),
            "shopping",
            Priority::Medium,
        ),
        dentist,
    ]
}

/// Use-case service owning the canonical task collection.
pub struct TaskService<R: TaskRepository> {
    repo: R,
    tasks: Vec<Task>,
}

impl<R: TaskRepository> TaskService<R> {
    /// Loads the persisted collection, falling back to [`seed_tasks`] when
    /// nothing usable is stored.
    pub fn open(repo: R) -> RepoResult<Self> {
        let tasks = match repo.load()? {
            Some(tasks) => tasks,
            None => {
                warn!("event=tasks_load module=service status=fallback reason=missing_or_malformed");
                seed_tasks()
            }
        };
        Ok(Self { repo, tasks })
    }

    /// Creates a task with a fresh unique id and `completed = false`.
    ///
    /// Returns `Ok(None)` without mutating or persisting anything when the
    /// trimmed title is empty or `due_date_text` is not a `YYYY-MM-DD` date.
    pub fn add(
        &mut self,
        title: &str,
        due_date_text: &str,
        category: &str,
        priority: Priority,
    ) -> RepoResult<Option<Task>> {
        let Some((title, due_date)) = validate_form_fields(title, due_date_text) else {
            return Ok(None);
        };

        let task = Task::new(self.next_id(), title, due_date, category, priority);
        self.tasks.push(task.clone());
        self.repo.save(&self.tasks)?;
        info!("event=task_add module=service status=ok id={}", task.id);
        Ok(Some(task))
    }

    /// Replaces all mutable fields of the task matching `id`.
    ///
    /// Returns `Ok(false)` without persisting when the submission fails
    /// validation or no task has that id; `Ok(true)` once the replacement
    /// is persisted. The completed flag is not touched here.
    pub fn update(
        &mut self,
        id: TaskId,
        title: &str,
        due_date_text: &str,
        category: &str,
        priority: Priority,
    ) -> RepoResult<bool> {
        let Some((title, due_date)) = validate_form_fields(title, due_date_text) else {
            return Ok(false);
        };
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(false);
        };

        task.title = title;
        task.due_date = due_date;
        task.category = category.to_string();
        task.priority = priority;
        self.repo.save(&self.tasks)?;
        info!("event=task_update module=service status=ok id={id}");
        Ok(true)
    }

    /// Flips the completed flag of the task matching `id`.
    ///
    /// Returns `Ok(false)` when no task has that id.
    pub fn toggle_completed(&mut self, id: TaskId) -> RepoResult<bool> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(false);
        };

        task.completed = !task.completed;
        self.repo.save(&self.tasks)?;
        Ok(true)
    }

    /// Removes the task matching `id`. No tombstone, no undo.
    ///
    /// Returns `Ok(false)` when no task has that id.
    pub fn remove(&mut self, id: TaskId) -> RepoResult<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return Ok(false);
        }

        self.repo.save(&self.tasks)?;
        info!("event=task_remove module=service status=ok id={id}");
        Ok(true)
    }

    /// Read-only view of the full collection in insertion order.
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the task matching `id`, if any.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Count of not-yet-completed tasks across the entire collection,
    /// independent of any active filter or sort selection.
    pub fn pending_count(&self) -> usize {
        self.tasks.iter().filter(|task| !task.completed).count()
    }

    /// Next unique id: epoch milliseconds, bumped past any collision so two
    /// creations within the same clock tick still get distinct ids.
    fn next_id(&self) -> TaskId {
        let mut candidate = Utc::now().timestamp_millis();
        while self.tasks.iter().any(|task| task.id == candidate) {
            candidate += 1;
        }
        candidate
    }
}

/// Validation gate shared by `add` and `update`.
///
/// Empty trimmed title or a due date that is not a real `YYYY-MM-DD`
/// calendar date rejects the submission.
fn validate_form_fields(title: &str, due_date_text: &str) -> Option<(String, NaiveDate)> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }
    let due_date = NaiveDate::parse_from_str(due_date_text.trim(), "%Y-%m-%d").ok()?;
    Some((title.to_string(), due_date))
}

#[cfg(test)]
mod tests {
    use super::validate_form_fields;
    use chrono::NaiveDate;

    #[test]
    fn validate_rejects_empty_and_whitespace_title() {
        assert!(validate_form_fields("", "2025-11-01").is_none());
        assert!(validate_form_fields("   ", "2025-11-01").is_none());
    }

    #[test]
    fn validate_rejects_empty_and_malformed_date() {
        assert!(validate_form_fields("ship it", "").is_none());
        assert!(validate_form_fields("ship it", "next tuesday").is_none());
        assert!(validate_form_fields("ship it", "2025-02-30").is_none());
    }

    #[test]
    fn validate_trims_title_and_parses_date() {
        let (title, due) = validate_form_fields("  ship it  ", "2025-11-01").unwrap();
        assert_eq!(title, "ship it");
        assert_eq!(due, NaiveDate::from_ymd_opt(2025, 11, 1).unwrap());
    }
}
