use chrono::{DateTime, Utc};
use daybook_core::{
    BlobStore, MemoryStore, Priority, Repeat, Task, TaskDraft, TaskRepository,
};

fn ts(value: &str) -> DateTime<Utc> {
    value.parse().unwrap()
}

fn draft(title: &str, when: &str) -> TaskDraft {
    TaskDraft {
        title: title.to_string(),
        when: Some(ts(when)),
        ..TaskDraft::default()
    }
}

#[test]
fn upsert_refuses_blank_title() {
    let store = MemoryStore::new();
    let mut repo = TaskRepository::load(&store);

    let mut blank = draft("  ", "2024-01-10T09:00:00Z");
    blank.description = Some("still refused".to_string());
    assert_eq!(repo.upsert(blank), None);
    assert!(repo.all().is_empty());

    let persisted: Vec<Task> = store.get("tasks", Vec::new());
    assert!(persisted.is_empty());
}

#[test]
fn upsert_refuses_missing_due_timestamp() {
    let store = MemoryStore::new();
    let mut repo = TaskRepository::load(&store);

    let no_due = TaskDraft {
        title: "Dentist".to_string(),
        ..TaskDraft::default()
    };
    assert_eq!(repo.upsert(no_due), None);
    assert!(repo.all().is_empty());
}

#[test]
fn upsert_trims_fields_and_drops_empty_description() {
    let store = MemoryStore::new();
    let mut repo = TaskRepository::load(&store);

    let mut padded = draft("  Groceries  ", "2024-01-10T09:00:00Z");
    padded.description = Some("   ".to_string());
    let id = repo.upsert(padded).unwrap();

    let task = repo.get(id).unwrap();
    assert_eq!(task.title, "Groceries");
    assert_eq!(task.description, None);
    assert!(!task.completed);
    assert!(!task.deleted);
}

#[test]
fn edit_preserves_created_at_and_resets_notification_state() {
    let store = MemoryStore::new();
    let mut repo = TaskRepository::load(&store);

    let id = repo.upsert(draft("Groceries", "2024-01-10T09:00:00Z")).unwrap();
    let created_at = repo.get(id).unwrap().created_at;
    let key = repo.get(id).unwrap().occurrence_key();
    assert!(repo.mark_notified(id, key));

    let mut edit = draft("Groceries and pharmacy", "2024-01-11T09:00:00Z");
    edit.id = Some(id);
    assert_eq!(repo.upsert(edit), Some(id));

    let task = repo.get(id).unwrap();
    assert_eq!(task.created_at, created_at);
    assert_eq!(task.notified_at, None);
    assert_eq!(task.title, "Groceries and pharmacy");
    assert_eq!(repo.all().len(), 1);
}

#[test]
fn toggle_twice_returns_task_to_open_state() {
    let store = MemoryStore::new();
    let mut repo = TaskRepository::load(&store);
    let id = repo.upsert(draft("One-off", "2024-01-10T09:00:00Z")).unwrap();

    assert!(repo.toggle_completion(id));
    let completed = repo.get(id).unwrap();
    assert!(completed.completed);
    assert!(completed.completed_at.is_some());

    assert!(repo.toggle_completion(id));
    let reopened = repo.get(id).unwrap();
    assert!(!reopened.completed);
    assert_eq!(reopened.completed_at, None);
}

#[test]
fn completing_weekly_task_advances_instead_of_completing() {
    let store = MemoryStore::new();
    let mut repo = TaskRepository::load(&store);

    let mut weekly = draft("Team sync", "2024-01-10T09:00:00Z");
    weekly.repeat = Repeat::Weekly;
    weekly.priority = Priority::High;
    let id = repo.upsert(weekly).unwrap();

    assert!(repo.toggle_completion(id));
    let task = repo.get(id).unwrap();
    assert_eq!(task.when, ts("2024-01-17T09:00:00Z"));
    assert!(!task.completed);
    assert_eq!(task.notified_at, None);
}

#[test]
fn repeating_task_never_reaches_completed_state() {
    let store = MemoryStore::new();
    let mut repo = TaskRepository::load(&store);

    let mut daily = draft("Stretch", "2024-01-10T07:00:00Z");
    daily.repeat = Repeat::Daily;
    let id = repo.upsert(daily).unwrap();

    for _ in 0..5 {
        assert!(repo.toggle_completion(id));
        assert!(!repo.get(id).unwrap().completed);
    }
    assert_eq!(repo.get(id).unwrap().when, ts("2024-01-15T07:00:00Z"));
}

#[test]
fn soft_delete_then_restore_roundtrips() {
    let store = MemoryStore::new();
    let mut repo = TaskRepository::load(&store);
    let id = repo.upsert(draft("Call bank", "2024-01-10T09:00:00Z")).unwrap();
    let before = repo.get(id).cloned().unwrap();

    assert!(repo.soft_delete(id));
    let trashed = repo.get(id).unwrap();
    assert!(trashed.deleted);
    assert!(trashed.deleted_at.is_some());

    assert!(repo.restore(id));
    assert_eq!(repo.get(id).unwrap(), &before);
}

#[test]
fn purge_is_irreversible() {
    let store = MemoryStore::new();
    let mut repo = TaskRepository::load(&store);
    let id = repo.upsert(draft("Shred papers", "2024-01-10T09:00:00Z")).unwrap();

    assert!(repo.soft_delete(id));
    assert!(repo.purge(id));
    assert_eq!(repo.get(id), None);
    assert!(!repo.restore(id));
    assert!(repo.all().is_empty());
}

#[test]
fn unknown_id_operations_are_no_ops() {
    let store = MemoryStore::new();
    let mut repo = TaskRepository::load(&store);
    let ghost = uuid::Uuid::new_v4();

    assert!(!repo.toggle_completion(ghost));
    assert!(!repo.soft_delete(ghost));
    assert!(!repo.restore(ghost));
    assert!(!repo.purge(ghost));
}

#[test]
fn mutations_write_through_and_survive_reload() {
    let store = MemoryStore::new();
    let mut repo = TaskRepository::load(&store);
    let id = repo.upsert(draft("Water plants", "2024-01-10T09:00:00Z")).unwrap();
    repo.toggle_completion(id);

    let reloaded = TaskRepository::load(&store);
    assert_eq!(reloaded.all(), repo.all());
    assert!(reloaded.get(id).unwrap().completed);
}
