//! Interaction controller state machine.
//!
//! # Responsibility
//! - Hold the transient modal and view state.
//! - Route gestures to task store operations, then re-project and push the
//!   result through the presenter.
//!
//! # Invariants
//! - Every mutating transition is followed by a re-render and a fresh
//!   pending count over the entire collection.
//! - A rejected submission (empty title or unusable due date) leaves the
//!   modal open and the collection untouched.

use crate::model::task::TaskId;
use crate::repo::task_repo::{RepoResult, TaskRepository};
use crate::service::task_service::TaskService;
use crate::ui::presenter::Presenter;
use crate::view::pipeline::{project, CategoryFilter, CompletionFilter, SortKey, ViewState};

/// Transient modal state. `Edit` remembers which task the form is staging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalMode {
    #[default]
    Closed,
    Add,
    Edit(TaskId),
}

/// Event-driven controller wiring gestures to the task store and view
/// pipeline. Single-threaded: every operation runs to completion before
/// the next event is processed.
pub struct Controller<R: TaskRepository, P: Presenter> {
    service: TaskService<R>,
    presenter: P,
    modal: ModalMode,
    view: ViewState,
}

impl<R: TaskRepository, P: Presenter> Controller<R, P> {
    /// Wires the controller and pushes the initial render.
    pub fn new(service: TaskService<R>, presenter: P) -> Self {
        let mut controller = Self {
            service,
            presenter,
            modal: ModalMode::Closed,
            view: ViewState::default(),
        };
        controller.refresh();
        controller
    }

    /// Opens the add form with cleared staged values.
    pub fn open_add(&mut self) {
        self.modal = ModalMode::Add;
        self.presenter.show_modal(self.modal, None);
    }

    /// Opens the edit form staged from the task matching `id`.
    ///
    /// No-op when the id no longer exists (stale edit control).
    pub fn open_edit(&mut self, id: TaskId) {
        let Some(task) = self.service.get(id).cloned() else {
            return;
        };
        self.modal = ModalMode::Edit(id);
        self.presenter.show_modal(self.modal, Some(&task));
    }

    /// Closes the form without mutating anything.
    pub fn cancel(&mut self) {
        self.modal = ModalMode::Closed;
        self.presenter.hide_modal();
    }

    /// Submits the staged form values.
    ///
    /// In add mode this creates a task; in edit mode it replaces the staged
    /// task's fields. A validation rejection keeps the modal open; anything
    /// else closes it and re-renders.
    pub fn submit(&mut self) -> RepoResult<()> {
        let values = self.presenter.read_task_form_values();
        let accepted = match self.modal {
            ModalMode::Closed => return Ok(()),
            ModalMode::Add => self
                .service
                .add(
                    &values.title,
                    &values.due_date,
                    &values.category,
                    values.priority,
                )?
                .is_some(),
            ModalMode::Edit(id) => {
                let applied = self.service.update(
                    id,
                    &values.title,
                    &values.due_date,
                    &values.category,
                    values.priority,
                )?;
                // A stale edit target is a no-op mutation; close as if it
                // had succeeded rather than trapping the user in the form.
                applied || self.service.get(id).is_none()
            }
        };

        if accepted {
            self.modal = ModalMode::Closed;
            self.presenter.hide_modal();
            self.refresh();
        }
        Ok(())
    }

    /// Checkbox gesture: flips completion and re-renders.
    pub fn toggle_task(&mut self, id: TaskId) -> RepoResult<()> {
        self.service.toggle_completed(id)?;
        self.refresh();
        Ok(())
    }

    /// Delete gesture: removes the task and re-renders.
    pub fn delete_task(&mut self, id: TaskId) -> RepoResult<()> {
        self.service.remove(id)?;
        self.refresh();
        Ok(())
    }

    /// Selects the single active completion filter.
    pub fn set_completion_filter(&mut self, filter: CompletionFilter) {
        self.view.completion = filter;
        self.refresh();
    }

    /// Selects the single active category filter.
    pub fn set_category_filter(&mut self, filter: CategoryFilter) {
        self.view.category = filter;
        self.refresh();
    }

    /// Selects the sort key.
    pub fn set_sort_key(&mut self, sort: SortKey) {
        self.view.sort = sort;
        self.refresh();
    }

    /// Re-projects the collection and pushes list plus pending count to the
    /// presenter. The pending count always covers the entire collection,
    /// independent of the active filters.
    pub fn refresh(&mut self) {
        let shown = project(self.service.all(), &self.view);
        self.presenter.render_task_list(&shown);
        self.presenter.render_pending_count(self.service.pending_count());
    }

    pub fn modal(&self) -> ModalMode {
        self.modal
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn service(&self) -> &TaskService<R> {
        &self.service
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}
