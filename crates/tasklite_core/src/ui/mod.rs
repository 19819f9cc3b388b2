//! Interaction layer between user gestures and the task store.
//!
//! # Responsibility
//! - Translate gestures into task store mutations or view state changes.
//! - Keep the presentation layer behind the `Presenter` trait so core
//!   logic never touches rendering directly.

pub mod controller;
pub mod presenter;
