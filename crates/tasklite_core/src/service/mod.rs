//! Core use-case services.
//!
//! # Responsibility
//! - Own the canonical in-memory task collection.
//! - Funnel every mutation through one write boundary that validates and
//!   then mirrors the full collection to persistence.

pub mod task_service;
