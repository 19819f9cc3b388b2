//! Domain model for the task collection.
//!
//! # Responsibility
//! - Define the canonical task record shared by storage, view and UI layers.
//! - Keep the wire shape of persisted tasks in one place.
//!
//! # Invariants
//! - Every task is identified by a unique `TaskId` within the collection.
//! - Due dates are calendar dates and compare as such, never as strings.

pub mod task;
