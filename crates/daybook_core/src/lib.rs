//! Core domain logic for Daybook, a local-first task-and-notes manager.
//! This crate is the single source of truth for business invariants: the
//! recurrence engine, the repositories and their trash lifecycle, the view
//! pipeline, the reminder scan, and snapshot import/export. Rendering,
//! alert delivery and the host shell live outside and consume these APIs.

pub mod logging;
pub mod model;
pub mod query;
pub mod recurrence;
pub mod reminder;
pub mod repo;
pub mod snapshot;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteDraft, NoteId, DEFAULT_NOTE_COLOR};
pub use model::task::{Priority, Repeat, RepeatUnit, Task, TaskDraft, TaskId};
pub use query::notes::{note_view, trashed_notes};
pub use query::tasks::{
    dashboard_counts, due_count_on, task_view, trashed_tasks, upcoming, DashboardCounts,
    RepeatFilter, SortKey, StatusFilter, TaskViewQuery, UPCOMING_LIMIT,
};
pub use recurrence::next_occurrence;
pub use reminder::{
    AlertSink, Clock, LogAlertSink, ReminderScheduler, SystemClock, SCAN_PERIOD,
};
pub use repo::note_repo::NoteRepository;
pub use repo::task_repo::TaskRepository;
pub use snapshot::{export_snapshot, import_snapshot, Snapshot, SnapshotError, SNAPSHOT_VERSION};
pub use store::{BlobStore, MemoryStore, SqliteStore, StoreError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
