//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its repeat/priority vocabulary.
//! - Provide lifecycle helpers shared with the trash views.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - A repeating task is never marked `completed`; completing it advances
//!   `when` instead (enforced by the task repository).
//! - `completed` and `deleted` are independent flags.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Repeat cadence for a task.
///
/// `Custom` carries its interval inline, so "custom repeat requires
/// every+unit" holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "repeat", rename_all = "snake_case")]
pub enum Repeat {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Custom { every: u32, unit: RepeatUnit },
}

impl Repeat {
    /// Builds a custom cadence, clamping `every` to at least 1.
    pub fn custom(every: u32, unit: RepeatUnit) -> Self {
        Self::Custom {
            every: every.max(1),
            unit,
        }
    }

    /// Re-applies the `every >= 1` clamp.
    ///
    /// Deserialized data can carry `every = 0`; the policy is clamp, never
    /// reject.
    pub fn normalized(self) -> Self {
        match self {
            Self::Custom { every, unit } => Self::custom(every, unit),
            other => other,
        }
    }

    /// Returns whether this cadence repeats at all.
    pub fn is_repeating(self) -> bool {
        self != Self::None
    }
}

/// Interval unit for [`Repeat::Custom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RepeatUnit {
    #[default]
    Days,
    Weeks,
    Months,
}

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Sort rank: high sorts before medium sorts before low.
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

/// Canonical task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable global ID used for linking and auditing.
    pub id: TaskId,
    /// Non-empty, trimmed display title.
    pub title: String,
    /// Optional free-form text; trimmed, never stored empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Due instant of the current occurrence, normalized to UTC.
    pub when: DateTime<Utc>,
    /// Repeat cadence, flattened into the record (`repeat`/`every`/`unit`).
    #[serde(flatten)]
    pub repeat: Repeat,
    pub priority: Priority,
    pub completed: bool,
    /// Present iff `completed` (and therefore only for non-repeating tasks).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Soft-delete tombstone; deleted tasks only appear in the trash view.
    pub deleted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
    /// Immutable once set; edits preserve it.
    pub created_at: DateTime<Utc>,
    /// Occurrence key of the last alert fired, or `None` when no alert is
    /// pending suppression. Edits and occurrence advances reset it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notified_at: Option<String>,
}

impl Task {
    /// Canonical string form of the current occurrence's due instant.
    ///
    /// RFC 3339 UTC with milliseconds (`2024-01-10T09:00:00.000Z`), matching
    /// the format used by previously exported snapshots.
    pub fn occurrence_key(&self) -> String {
        self.when.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Marks this task as softly deleted (tombstoned).
    pub fn soft_delete(&mut self, at: DateTime<Utc>) {
        self.deleted = true;
        self.deleted_at = Some(at);
    }

    /// Clears the soft-delete tombstone.
    pub fn restore(&mut self) {
        self.deleted = false;
        self.deleted_at = None;
    }

    /// Returns whether this task should be considered visible/active.
    pub fn is_active(&self) -> bool {
        !self.deleted
    }

    /// Active and not yet completed.
    pub fn is_open(&self) -> bool {
        !self.deleted && !self.completed
    }

    /// Open with a due instant strictly in the past.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.is_open() && self.when < now
    }
}

/// Input fields for [`crate::repo::task_repo::TaskRepository::upsert`].
///
/// `id` is `None` for a brand-new task. `when` is `None` when the caller
/// could not resolve a due timestamp, which makes the upsert a refusal.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub id: Option<TaskId>,
    pub title: String,
    pub description: Option<String>,
    pub when: Option<DateTime<Utc>>,
    pub repeat: Repeat,
    pub priority: Priority,
}
