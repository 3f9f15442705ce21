use letsdoit::storage::{MemoryStorage, SnapshotStorage, StorageError};

#[tokio::test]
async fn test_memory_storage_round_trip() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get("tasks").await.unwrap(), None);

    storage.set("tasks", "[]").await.unwrap();
    assert_eq!(storage.get("tasks").await.unwrap().as_deref(), Some("[]"));
}

#[tokio::test]
async fn test_read_only_rejects_writes() {
    let storage = MemoryStorage::with_entries([("theme", "dark")]);
    storage.set_read_only(true);

    let err = storage.set("theme", "navy").await.unwrap_err();
    assert!(matches!(err, StorageError::ReadOnly));
    assert_eq!(storage.raw("theme").unwrap().as_deref(), Some("dark"));
}
