//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record for the notes board.
//! - Share the task model's soft-delete lifecycle shape.
//!
//! # Invariants
//! - `created_at` is immutable; `updated_at` is refreshed on every edit.
//! - `color` is an opaque display token and is never empty.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a note.
pub type NoteId = Uuid;

/// Display color applied when a draft carries none.
pub const DEFAULT_NOTE_COLOR: &str = "#111527";

/// Canonical note record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    /// Non-empty, trimmed display title.
    pub title: String,
    /// Non-empty body text.
    pub body: String,
    /// Opaque display token, defaults to [`DEFAULT_NOTE_COLOR`].
    pub color: String,
    /// Pinned notes sort before unpinned ones on the board.
    pub pinned: bool,
    pub deleted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
    /// Immutable once set; edits preserve it.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every edit; drives board recency ordering.
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Marks this note as softly deleted (tombstoned).
    pub fn soft_delete(&mut self, at: DateTime<Utc>) {
        self.deleted = true;
        self.deleted_at = Some(at);
    }

    /// Clears the soft-delete tombstone.
    pub fn restore(&mut self) {
        self.deleted = false;
        self.deleted_at = None;
    }

    /// Returns whether this note should be considered visible/active.
    pub fn is_active(&self) -> bool {
        !self.deleted
    }
}

/// Input fields for [`crate::repo::note_repo::NoteRepository::upsert`].
#[derive(Debug, Clone, Default)]
pub struct NoteDraft {
    pub id: Option<NoteId>,
    pub title: String,
    pub body: String,
    /// `None` or empty falls back to [`DEFAULT_NOTE_COLOR`].
    pub color: Option<String>,
    pub pinned: bool,
}
