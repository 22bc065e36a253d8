//! Repository layer owning the task and note collections.
//!
//! # Responsibility
//! - Expose the create/update/trash-lifecycle operations as use-case APIs.
//! - Enforce entity invariants at the only mutation boundary.
//!
//! # Invariants
//! - Every mutation writes through to the persistence port before returning.
//! - Validation refusals and not-found operations are reported through the
//!   return value, never raised as errors.

pub mod note_repo;
pub mod task_repo;
