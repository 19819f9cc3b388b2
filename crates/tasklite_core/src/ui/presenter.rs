//! Presentation layer contract.
//!
//! # Responsibility
//! - Define the surface the interaction controller uses to show state and
//!   read form input. Rendering itself lives outside this crate.
//!
//! # Invariants
//! - Implementations receive read-only task views and must route any
//!   mutation back through the controller.

use crate::model::task::{Priority, Task};
use crate::ui::controller::ModalMode;

/// Raw values read from the task form.
///
/// The due date stays textual here; the service write boundary decides
/// whether it is a usable calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFormValues {
    pub title: String,
    pub due_date: String,
    pub category: String,
    pub priority: Priority,
}

/// External collaborator that renders state and reads user input.
pub trait Presenter {
    /// Displays the projected sequence; an empty slice means the
    /// "no tasks" placeholder state.
    fn render_task_list(&mut self, tasks: &[Task]);

    /// Displays the pending-task count for the whole collection.
    fn render_pending_count(&mut self, pending: usize);

    /// Reads the currently staged task form values.
    fn read_task_form_values(&self) -> TaskFormValues;

    /// Opens the task form; `prefill` carries the task under edit.
    fn show_modal(&mut self, mode: ModalMode, prefill: Option<&Task>);

    /// Closes the task form.
    fn hide_modal(&mut self);
}
