//! Domain model for tasks and notes.
//!
//! # Responsibility
//! - Define the canonical records owned by the repositories.
//! - Provide lifecycle helpers for the shared soft-delete semantics.
//!
//! # Invariants
//! - Every entity is identified by a stable UUID.
//! - Deletion is represented by soft-delete tombstones; purge is the only
//!   destructive operation.

pub mod note;
pub mod task;
