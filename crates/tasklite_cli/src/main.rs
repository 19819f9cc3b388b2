//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `tasklite_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use tasklite_core::db::open_db_in_memory;
use tasklite_core::{project, SqliteTaskRepository, TaskService, ViewState};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("tasklite_core ping={}", tasklite_core::ping());
    println!("tasklite_core version={}", tasklite_core::core_version());

    // Why: an in-memory store seeded with the fixed fallback set exercises
    // the full load/project path without touching any on-disk state.
    let conn = open_db_in_memory()?;
    let repo = SqliteTaskRepository::new(&conn);
    let service = TaskService::open(repo)?;

    println!("pending={}", service.pending_count());
    for task in project(service.all(), &ViewState::default()) {
        let mark = if task.completed { "x" } else { " " };
        println!("[{mark}] {} {} ({})", task.due_date, task.title, task.category);
    }

    Ok(())
}
