use daybook_core::{BlobStore, MemoryStore, SqliteStore, TaskDraft, TaskRepository};

#[test]
fn sqlite_in_memory_roundtrips_blobs() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.set("tags", &vec!["home".to_string(), "work".to_string()]);

    let value: Vec<String> = store.get("tags", Vec::new());
    assert_eq!(value, vec!["home".to_string(), "work".to_string()]);

    let missing: Vec<String> = store.get("absent", vec!["fallback".to_string()]);
    assert_eq!(missing, vec!["fallback".to_string()]);
}

#[test]
fn sqlite_file_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("daybook.db");

    {
        let store = SqliteStore::open(&path).unwrap();
        let mut repo = TaskRepository::load(&store);
        repo.upsert(TaskDraft {
            title: "Durable".to_string(),
            when: Some("2024-01-10T09:00:00Z".parse().unwrap()),
            ..TaskDraft::default()
        })
        .unwrap();
    }

    let reopened = SqliteStore::open(&path).unwrap();
    let repo = TaskRepository::load(&reopened);
    assert_eq!(repo.all().len(), 1);
    assert_eq!(repo.all()[0].title, "Durable");
}

#[test]
fn sqlite_overwrites_existing_keys() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.set("counter", &1u32);
    store.set("counter", &2u32);
    assert_eq!(store.get("counter", 0u32), 2);
}

#[test]
fn memory_store_is_isolated_per_instance() {
    let first = MemoryStore::new();
    let second = MemoryStore::new();
    first.set("only-here", &true);

    assert!(first.get("only-here", false));
    assert!(!second.get("only-here", false));
}
