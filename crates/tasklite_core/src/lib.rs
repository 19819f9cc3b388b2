//! Core domain logic for Tasklite.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod ui;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Priority, Task, TaskId};
pub use repo::task_repo::{RepoError, RepoResult, SqliteTaskRepository, TaskRepository};
pub use service::task_service::{seed_tasks, TaskService};
pub use ui::controller::{Controller, ModalMode};
pub use ui::presenter::{Presenter, TaskFormValues};
pub use view::pipeline::{project, CategoryFilter, CompletionFilter, SortKey, ViewState};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
