use chrono::{DateTime, Utc};
use daybook_core::{note_view, trashed_notes, Note, DEFAULT_NOTE_COLOR};
use uuid::Uuid;

fn ts(value: &str) -> DateTime<Utc> {
    value.parse().unwrap()
}

fn note(title: &str, body: &str, pinned: bool, updated_at: &str) -> Note {
    Note {
        id: Uuid::new_v4(),
        title: title.to_string(),
        body: body.to_string(),
        color: DEFAULT_NOTE_COLOR.to_string(),
        pinned,
        deleted: false,
        deleted_at: None,
        created_at: ts(updated_at),
        updated_at: ts(updated_at),
    }
}

fn titles(view: &[&Note]) -> Vec<String> {
    view.iter().map(|note| note.title.clone()).collect()
}

#[test]
fn pinned_note_sorts_first_regardless_of_recency() {
    let notes = vec![
        note("Old unpinned", "a", false, "2024-03-01T09:00:00Z"),
        note("Old pinned", "b", true, "2024-02-01T09:00:00Z"),
        note("Fresh unpinned", "c", false, "2024-03-05T09:00:00Z"),
    ];

    let view = note_view(&notes, "");
    assert_eq!(
        titles(&view),
        vec!["Old pinned", "Fresh unpinned", "Old unpinned"]
    );
}

#[test]
fn search_matches_title_and_body_case_insensitively() {
    let notes = vec![
        note("Shopping", "oat milk, bread", false, "2024-03-01T09:00:00Z"),
        note("Travel", "book the MILK train", false, "2024-03-02T09:00:00Z"),
        note("Misc", "nothing here", false, "2024-03-03T09:00:00Z"),
    ];

    let view = note_view(&notes, "milk");
    assert_eq!(titles(&view), vec!["Travel", "Shopping"]);
}

#[test]
fn board_excludes_deleted_notes() {
    let mut gone = note("Gone", "tombstoned", true, "2024-03-01T09:00:00Z");
    gone.soft_delete(ts("2024-03-02T09:00:00Z"));
    let notes = vec![note("Kept", "visible", false, "2024-03-01T09:00:00Z"), gone];

    let view = note_view(&notes, "");
    assert_eq!(titles(&view), vec!["Kept"]);
}

#[test]
fn trash_view_orders_by_most_recent_deletion() {
    let mut first = note("First out", "a", false, "2024-03-01T09:00:00Z");
    first.soft_delete(ts("2024-03-02T09:00:00Z"));
    let mut second = note("Second out", "b", false, "2024-03-01T09:00:00Z");
    second.soft_delete(ts("2024-03-03T09:00:00Z"));
    let notes = vec![
        first,
        second,
        note("Active", "c", false, "2024-03-01T09:00:00Z"),
    ];

    let trash = trashed_notes(&notes);
    assert_eq!(titles(&trash), vec!["Second out", "First out"]);
}
