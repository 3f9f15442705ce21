use letsdoit::storage::db::StorageLocation;
use letsdoit::storage::{LocalStorage, SnapshotStorage};

#[tokio::test]
async fn test_local_storage_creation() {
    // Use an in-memory database for tests
    let storage = LocalStorage::in_memory().await.unwrap();
    assert_eq!(storage.location(), &StorageLocation::Memory);
    assert_eq!(storage.get("tasks").await.unwrap(), None);
}

#[tokio::test]
async fn test_set_overwrites_previous_value() {
    let storage = LocalStorage::in_memory().await.unwrap();
    storage.set("theme", "light").await.unwrap();
    storage.set("theme", "navy").await.unwrap();

    assert_eq!(storage.get("theme").await.unwrap().as_deref(), Some("navy"));
}

#[tokio::test]
async fn test_keys_are_independent() {
    let storage = LocalStorage::in_memory().await.unwrap();
    storage.set("tasks", "[]").await.unwrap();
    storage.set("completedTasks", r#"[{"id":1}]"#).await.unwrap();

    assert_eq!(storage.get("tasks").await.unwrap().as_deref(), Some("[]"));
    assert_eq!(storage.get("completedTasks").await.unwrap().as_deref(), Some(r#"[{"id":1}]"#));
    assert_eq!(storage.get("theme").await.unwrap(), None);
}

#[tokio::test]
async fn test_file_database_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("letsdoit.db");

    {
        let storage = LocalStorage::open(&path).await.unwrap();
        storage.set("theme", "light").await.unwrap();
    }
    assert!(path.exists());

    let reopened = LocalStorage::open(&path).await.unwrap();
    assert_eq!(reopened.get("theme").await.unwrap().as_deref(), Some("light"));
    assert!(reopened.describe().contains("letsdoit.db"));
}
