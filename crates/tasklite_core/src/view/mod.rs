//! Display projection of the task collection.
//!
//! # Responsibility
//! - Turn the stored collection plus the active view selections into the
//!   ordered sequence to display.
//!
//! # Invariants
//! - Projection is a pure function; the stored collection is never mutated.

pub mod pipeline;
