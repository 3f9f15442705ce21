use chrono::{TimeZone, Utc};
use letsdoit::storage::{snapshot, LocalStorage, MemoryStorage};
use letsdoit::tasks::{Priority, SnapshotKey, Task, TaskStore, Theme};

#[tokio::test]
async fn test_empty_storage_loads_defaults() {
    let storage = MemoryStorage::new();
    let store = snapshot::load(&storage, Theme::Light).await;

    assert!(store.tasks().is_empty());
    assert!(store.completed_tasks().is_empty());
    assert_eq!(store.theme(), Theme::Light);
}

#[tokio::test]
async fn test_corrupt_key_does_not_affect_others() {
    let storage = MemoryStorage::with_entries([
        ("tasks", "{not json"),
        (
            "completedTasks",
            r#"[{"id":1,"text":"done","priority":"low","completedAt":"2025-03-07T21:05:03Z"}]"#,
        ),
        ("theme", "navy"),
    ]);

    let store = snapshot::load(&storage, Theme::Dark).await;
    assert!(store.tasks().is_empty());
    assert_eq!(store.completed_tasks().len(), 1);
    assert_eq!(store.completed_tasks()[0].priority, Priority::Low);
    assert_eq!(store.theme(), Theme::Navy);
}

#[tokio::test]
async fn test_unknown_theme_falls_back_to_default() {
    let storage = MemoryStorage::with_entries([("theme", "sepia"), ("tasks", "[]")]);
    let store = snapshot::load(&storage, Theme::Light).await;
    assert_eq!(store.theme(), Theme::Light);
}

#[tokio::test]
async fn test_persist_writes_only_requested_keys() {
    let storage = MemoryStorage::new();
    let mut store = TaskStore::new();
    store.add_task("Buy milk", Utc.timestamp_millis_opt(1_700_000_000_000).unwrap());

    snapshot::persist(&storage, &store, &[SnapshotKey::Tasks]).await.unwrap();

    assert_eq!(
        storage.raw("tasks").unwrap().as_deref(),
        Some(r#"[{"id":1700000000000,"text":"Buy milk","priority":"normal"}]"#)
    );
    assert_eq!(storage.raw("completedTasks").unwrap(), None);
    assert_eq!(storage.raw("theme").unwrap(), None);
}

#[tokio::test]
async fn test_sqlite_snapshot_round_trip() {
    let storage = LocalStorage::in_memory().await.unwrap();
    let now = Utc.with_ymd_and_hms(2025, 3, 7, 9, 0, 0).unwrap();

    let mut store = TaskStore::new();
    store.add_task("first", now);
    store.add_task("second", now);
    let first = store.tasks()[0].id;
    store.cycle_priority(first);
    store.complete_task(first, now);
    store.set_theme(Theme::Light);

    snapshot::persist(&storage, &store, &SnapshotKey::ALL).await.unwrap();
    let loaded = snapshot::load(&storage, Theme::Dark).await;
    assert_eq!(loaded, store);
}

#[tokio::test]
async fn test_repeated_active_id_falls_back_to_empty_list() {
    let storage = MemoryStorage::with_entries([
        (
            "tasks",
            r#"[{"id":5,"text":"a","priority":"normal"},{"id":5,"text":"b","priority":"normal"}]"#,
        ),
        (
            "completedTasks",
            r#"[{"id":1,"text":"done","priority":"low","completedAt":"2025-03-07T21:05:03Z"}]"#,
        ),
        ("theme", "light"),
    ]);

    let mut store = snapshot::load(&storage, Theme::Dark).await;
    assert!(store.tasks().is_empty());
    assert_eq!(store.completed_tasks().len(), 1);
    assert_eq!(store.theme(), Theme::Light);

    // Nothing left to complete, so nothing can be lost
    assert!(store.complete_task(5, Utc::now()).is_empty());
    assert_eq!(store.completed_tasks().len(), 1);
}

#[tokio::test]
async fn test_blank_or_overlong_text_marks_list_corrupt() {
    let overlong = format!(r#"[{{"id":2,"text":"{}","priority":"normal"}}]"#, "x".repeat(301));
    for raw in [r#"[{"id":2,"text":"   ","priority":"normal"}]"#.to_string(), overlong] {
        let storage = MemoryStorage::with_entries([("tasks", raw.as_str())]);
        let store = snapshot::load(&storage, Theme::Dark).await;
        assert!(store.tasks().is_empty(), "accepted {raw}");
    }

    let storage = MemoryStorage::with_entries([(
        "completedTasks",
        r#"[{"id":3,"text":"","priority":"low","completedAt":"2025-03-07T21:05:03Z"}]"#,
    )]);
    assert!(snapshot::load(&storage, Theme::Dark).await.completed_tasks().is_empty());
}

#[tokio::test]
async fn test_id_beyond_timestamp_range_is_rejected() {
    let raw = format!(r#"[{{"id":{},"text":"far future","priority":"normal"}}]"#, i64::MAX);
    let storage = MemoryStorage::with_entries([("tasks", raw.as_str())]);

    let mut store = snapshot::load(&storage, Theme::Dark).await;
    assert!(store.tasks().is_empty());

    let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
    assert_eq!(store.add_task("next", now), vec![SnapshotKey::Tasks]);
    assert_eq!(store.tasks()[0].id, 1_700_000_000_000);
}

#[test]
fn test_add_is_a_no_op_when_ids_are_exhausted() {
    let last = chrono::DateTime::<Utc>::MAX_UTC.timestamp_millis();
    let mut store = TaskStore::from_parts(
        vec![Task {
            id: last,
            text: "last".to_string(),
            priority: Priority::Normal,
        }],
        Vec::new(),
        Theme::Dark,
    );

    assert!(store.add_task("one more", Utc::now()).is_empty());
    assert_eq!(store.tasks().len(), 1);
}

#[tokio::test]
async fn test_id_in_both_lists_keeps_completed_copy() {
    let storage = MemoryStorage::with_entries([
        (
            "tasks",
            r#"[{"id":7,"text":"walk dog","priority":"high"},{"id":8,"text":"water plants","priority":"normal"}]"#,
        ),
        (
            "completedTasks",
            r#"[{"id":7,"text":"walk dog","priority":"high","completedAt":"2025-03-07T21:05:03Z"}]"#,
        ),
    ]);

    let mut store = snapshot::load(&storage, Theme::Dark).await;
    let active: Vec<i64> = store.tasks().iter().map(|t| t.id).collect();
    assert_eq!(active, vec![8]);
    assert_eq!(store.completed_tasks().len(), 1);

    store.complete_task(8, Utc::now());
    assert!(store.tasks().is_empty());
    assert_eq!(store.completed_tasks().len(), 2);
}
