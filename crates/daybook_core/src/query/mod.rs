//! Derived views over the repositories' collections.
//!
//! # Responsibility
//! - Turn the raw collections into the ordered views the rendering layer
//!   consumes: task list, notes board, calendar counts, dashboard, trash.
//!
//! # Invariants
//! - Every function here is a pure read; mutations stay in the repositories.
//! - Result ordering is deterministic for a given input.

pub mod notes;
pub mod tasks;
