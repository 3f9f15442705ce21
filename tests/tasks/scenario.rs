use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use letsdoit::storage::{LocalStorage, MemoryStorage, SnapshotStorage};
use letsdoit::tasks::{Priority, Theme};
use letsdoit::TaskService;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 7, 21, 5, 3).unwrap()
}

#[tokio::test]
async fn test_buy_milk_round_trip() {
    let storage = Arc::new(MemoryStorage::new());
    let mut service = TaskService::open(storage.clone(), Theme::Dark)
        .await
        .with_clock(fixed_now);

    assert!(service.add_task("Buy milk").await.unwrap());
    let id = service.store().tasks()[0].id;
    assert_eq!(id, fixed_now().timestamp_millis());

    assert!(service.cycle_priority(id).await.unwrap());
    assert_eq!(service.store().tasks()[0].priority, Priority::High);

    assert!(service.complete_task(id).await.unwrap());
    assert!(service.store().tasks().is_empty());
    assert_eq!(service.store().completed_tasks()[0].text, "Buy milk");

    service.set_theme(Theme::Navy).await.unwrap();

    // A fresh session sees exactly what the first one left behind
    let shared: Arc<dyn SnapshotStorage> = storage.clone();
    let reopened = TaskService::open(shared, Theme::Dark).await;
    assert_eq!(reopened.store(), service.store());
    assert_eq!(reopened.store().theme(), Theme::Navy);
    assert_eq!(reopened.store().completed_tasks()[0].priority, Priority::High);

    assert_eq!(storage.raw("tasks").unwrap().as_deref(), Some("[]"));
    assert_eq!(storage.raw("theme").unwrap().as_deref(), Some("navy"));
}

/// Two active tasks and a navy theme, then a fresh service over the same storage.
async fn assert_reload_reproduces_session(storage: Arc<dyn SnapshotStorage>) -> Arc<dyn SnapshotStorage> {
    let mut service = TaskService::open(storage.clone(), Theme::Dark)
        .await
        .with_clock(fixed_now);
    assert!(service.add_task("Buy milk").await.unwrap());
    assert!(service.add_task("Call mom").await.unwrap());
    service.set_theme(Theme::Navy).await.unwrap();

    let reopened = TaskService::open(storage.clone(), Theme::Dark).await;
    let texts: Vec<&str> = reopened.store().tasks().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["Buy milk", "Call mom"]);
    assert_eq!(reopened.store().tasks(), service.store().tasks());
    assert!(reopened.store().completed_tasks().is_empty());
    assert_eq!(reopened.store().theme(), Theme::Navy);
    storage
}

#[tokio::test]
async fn test_reload_restores_tasks_and_theme_from_memory() {
    assert_reload_reproduces_session(Arc::new(MemoryStorage::new())).await;
}

#[tokio::test]
async fn test_reload_restores_tasks_and_theme_from_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("letsdoit.db");

    let first = LocalStorage::open(&path).await.unwrap();
    drop(assert_reload_reproduces_session(Arc::new(first)).await);

    let reopened: Arc<dyn SnapshotStorage> = Arc::new(LocalStorage::open(&path).await.unwrap());
    let service = TaskService::open(reopened, Theme::Light).await;
    let texts: Vec<&str> = service.store().tasks().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["Buy milk", "Call mom"]);
    assert_eq!(service.store().theme(), Theme::Navy);
}
