//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the blob-level persistence contract for the task collection.
//! - Isolate SQLite and JSON details from service/business orchestration.
//!
//! # Invariants
//! - The collection is persisted as one serialized value under one key;
//!   there are no partial updates.
//! - A malformed persisted value reads back as "no data", never as an error.

pub mod task_repo;
