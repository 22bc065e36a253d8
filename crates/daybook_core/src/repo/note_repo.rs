//! Note repository.
//!
//! # Responsibility
//! - Own the note collection with the same trash lifecycle as tasks.
//!
//! # Invariants
//! - Upsert requires a non-empty title and body; a refusal persists nothing.
//! - `created_at` is preserved across edits; `updated_at` is refreshed on
//!   every edit.

use crate::model::note::{Note, NoteDraft, NoteId, DEFAULT_NOTE_COLOR};
use crate::store::BlobStore;
use chrono::Utc;
use log::warn;
use uuid::Uuid;

/// Blob key the note collection persists under.
pub const NOTES_BLOB_KEY: &str = "notes";

/// Owner of the note collection, writing through to a [`BlobStore`].
pub struct NoteRepository<'s, S: BlobStore> {
    store: &'s S,
    notes: Vec<Note>,
}

impl<'s, S: BlobStore> NoteRepository<'s, S> {
    /// Loads the persisted collection, falling back to empty on missing or
    /// corrupt data.
    pub fn load(store: &'s S) -> Self {
        let notes = store.get(NOTES_BLOB_KEY, Vec::new());
        Self { store, notes }
    }

    /// All notes, trashed ones included.
    pub fn all(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Creates or edits a note.
    ///
    /// Returns the note id, or `None` when title or body is empty after
    /// trimming.
    pub fn upsert(&mut self, draft: NoteDraft) -> Option<NoteId> {
        let title = draft.title.trim().to_string();
        let body = draft.body.trim().to_string();
        if title.is_empty() || body.is_empty() {
            warn!("event=note_upsert module=repo status=refused reason=empty_fields");
            return None;
        }

        let id = draft.id.unwrap_or_else(Uuid::new_v4);
        let color = draft
            .color
            .filter(|color| !color.is_empty())
            .unwrap_or_else(|| DEFAULT_NOTE_COLOR.to_string());
        let now = Utc::now();
        let created_at = self
            .get(id)
            .map(|existing| existing.created_at)
            .unwrap_or(now);

        let note = Note {
            id,
            title,
            body,
            color,
            pinned: draft.pinned,
            deleted: false,
            deleted_at: None,
            created_at,
            updated_at: now,
        };

        match self.notes.iter_mut().find(|existing| existing.id == id) {
            Some(existing) => *existing = note,
            None => self.notes.push(note),
        }
        self.persist();
        Some(id)
    }

    /// Moves a note to the trash. Returns `false` when the id is unknown.
    pub fn soft_delete(&mut self, id: NoteId) -> bool {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            return false;
        };
        note.soft_delete(Utc::now());
        self.persist();
        true
    }

    /// Returns a trashed note to the active state.
    pub fn restore(&mut self, id: NoteId) -> bool {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            return false;
        };
        note.restore();
        self.persist();
        true
    }

    /// Permanently removes a note. Irreversible.
    pub fn purge(&mut self, id: NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        let removed = self.notes.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    /// Replaces the whole collection. Snapshot import path.
    pub fn replace_all(&mut self, notes: Vec<Note>) {
        self.notes = notes;
        self.persist();
    }

    fn persist(&self) {
        self.store.set(NOTES_BLOB_KEY, &self.notes);
    }
}
