//! Notes board ordering and search.
//!
//! # Responsibility
//! - Produce the board view: pinned first, then most recently updated.
//!
//! # Invariants
//! - Trashed notes never appear on the board.

use crate::model::note::Note;

/// Produces the ordered notes board view.
///
/// `search` is a case-insensitive substring over title and body; an empty
/// string disables it.
pub fn note_view<'a>(notes: &'a [Note], search: &str) -> Vec<&'a Note> {
    let needle = search.to_lowercase();
    let mut items: Vec<&Note> = notes
        .iter()
        .filter(|note| note.is_active())
        .filter(|note| {
            needle.is_empty()
                || note.title.to_lowercase().contains(&needle)
                || note.body.to_lowercase().contains(&needle)
        })
        .collect();

    items.sort_by(|a, b| {
        b.pinned
            .cmp(&a.pinned)
            .then_with(|| b.updated_at.cmp(&a.updated_at))
    });
    items
}

/// Trashed notes, most recently deleted first.
pub fn trashed_notes(notes: &[Note]) -> Vec<&Note> {
    let mut items: Vec<&Note> = notes.iter().filter(|note| note.deleted).collect();
    items.sort_by(|a, b| b.deleted_at.cmp(&a.deleted_at));
    items
}
