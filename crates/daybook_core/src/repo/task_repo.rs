//! Task repository.
//!
//! # Responsibility
//! - Own the task collection and every task mutation.
//! - Couple completion to the recurrence engine for repeating tasks.
//!
//! # Invariants
//! - Upsert requires a non-empty title and a resolved due timestamp;
//!   a refusal persists nothing.
//! - `created_at` is preserved across edits; `notified_at` is reset on every
//!   upsert.
//! - A repeating task never reaches the completed state.

use crate::model::task::{Task, TaskDraft, TaskId};
use crate::recurrence::next_occurrence;
use crate::store::BlobStore;
use chrono::Utc;
use log::warn;
use uuid::Uuid;

/// Blob key the task collection persists under.
pub const TASKS_BLOB_KEY: &str = "tasks";

/// Owner of the task collection, writing through to a [`BlobStore`].
pub struct TaskRepository<'s, S: BlobStore> {
    store: &'s S,
    tasks: Vec<Task>,
}

impl<'s, S: BlobStore> TaskRepository<'s, S> {
    /// Loads the persisted collection, falling back to empty on missing or
    /// corrupt data.
    pub fn load(store: &'s S) -> Self {
        let tasks = store.get(TASKS_BLOB_KEY, Vec::new());
        Self { store, tasks }
    }

    /// All tasks, trashed ones included. Views filter on top of this.
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Creates or edits a task.
    ///
    /// Returns the task id, or `None` when the draft is refused (empty title
    /// or unresolved due timestamp). An edit preserves `created_at` and
    /// resets the completion, trash and notification state.
    pub fn upsert(&mut self, draft: TaskDraft) -> Option<TaskId> {
        let title = draft.title.trim().to_string();
        if title.is_empty() {
            warn!("event=task_upsert module=repo status=refused reason=empty_title");
            return None;
        }
        let Some(when) = draft.when else {
            warn!("event=task_upsert module=repo status=refused reason=missing_due");
            return None;
        };

        let id = draft.id.unwrap_or_else(Uuid::new_v4);
        let description = draft
            .description
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());
        let created_at = self
            .get(id)
            .map(|existing| existing.created_at)
            .unwrap_or_else(Utc::now);

        let task = Task {
            id,
            title,
            description,
            when,
            repeat: draft.repeat.normalized(),
            priority: draft.priority,
            completed: false,
            completed_at: None,
            deleted: false,
            deleted_at: None,
            created_at,
            notified_at: None,
        };

        match self.tasks.iter_mut().find(|existing| existing.id == id) {
            Some(existing) => *existing = task,
            None => self.tasks.push(task),
        }
        self.persist();
        Some(id)
    }

    /// Flips completion state.
    ///
    /// An open repeating task is not completed; its `when` advances to the
    /// next occurrence and `notified_at` is cleared. A completed task is
    /// reopened. Returns `false` when the id is unknown.
    pub fn toggle_completion(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return false;
        };

        if !task.completed {
            if task.repeat.is_repeating() {
                task.when = next_occurrence(task.when, task.repeat);
                task.notified_at = None;
            } else {
                task.completed = true;
                task.completed_at = Some(Utc::now());
            }
        } else {
            task.completed = false;
            task.completed_at = None;
        }
        self.persist();
        true
    }

    /// Moves a task to the trash. Returns `false` when the id is unknown.
    pub fn soft_delete(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return false;
        };
        task.soft_delete(Utc::now());
        self.persist();
        true
    }

    /// Returns a trashed task to the active state.
    pub fn restore(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return false;
        };
        task.restore();
        self.persist();
        true
    }

    /// Permanently removes a task. Irreversible.
    pub fn purge(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        let removed = self.tasks.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    /// Stamps the occurrence key of the alert just fired.
    ///
    /// The reminder scheduler's only mutation path.
    pub fn mark_notified(&mut self, id: TaskId, occurrence_key: String) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return false;
        };
        task.notified_at = Some(occurrence_key);
        self.persist();
        true
    }

    /// Replaces the whole collection. Snapshot import path.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.persist();
    }

    fn persist(&self) {
        self.store.set(TASKS_BLOB_KEY, &self.tasks);
    }
}
