use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use letsdoit::config::Config;
use letsdoit::logger::Logger;
use letsdoit::storage::{MemoryStorage, SnapshotStorage};
use letsdoit::tasks::{Priority, Theme};
use letsdoit::ui::core::{EventType, Focus};
use letsdoit::ui::AppComponent;
use letsdoit::TaskService;

async fn app_with(storage: Arc<MemoryStorage>) -> AppComponent {
    let storage: Arc<dyn SnapshotStorage> = storage;
    let service = TaskService::open(storage, Theme::Dark).await;
    AppComponent::new(service, &Config::default(), Logger::new())
}

fn key(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

async fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        app.handle_event(key(KeyCode::Char(c))).await.unwrap();
    }
}

#[tokio::test]
async fn test_typing_and_enter_adds_task() {
    let storage = Arc::new(MemoryStorage::new());
    let mut app = app_with(storage.clone()).await;

    type_text(&mut app, "Buy milk").await;
    app.handle_event(key(KeyCode::Enter)).await.unwrap();

    let tasks = app.service().store().tasks();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].text, "Buy milk");
    assert!(storage.raw("tasks").unwrap().unwrap().contains("Buy milk"));
    assert!(app.status_message().is_some());
}

#[tokio::test]
async fn test_task_list_keys_drive_the_store() {
    let mut app = app_with(Arc::new(MemoryStorage::new())).await;
    type_text(&mut app, "one").await;
    app.handle_event(key(KeyCode::Enter)).await.unwrap();

    app.handle_event(key(KeyCode::Tab)).await.unwrap();
    assert_eq!(app.focus(), Focus::TaskList);

    app.handle_event(key(KeyCode::Char('p'))).await.unwrap();
    assert_eq!(app.service().store().tasks()[0].priority, Priority::High);

    app.handle_event(key(KeyCode::Char(' '))).await.unwrap();
    assert!(app.service().store().tasks().is_empty());
    assert_eq!(app.service().store().completed_tasks().len(), 1);

    app.handle_event(key(KeyCode::Char('C'))).await.unwrap();
    assert!(app.service().store().completed_tasks().is_empty());
}

#[tokio::test]
async fn test_theme_keys() {
    let storage = Arc::new(MemoryStorage::new());
    let mut app = app_with(storage.clone()).await;
    app.handle_event(key(KeyCode::Tab)).await.unwrap();

    app.handle_event(key(KeyCode::Char('3'))).await.unwrap();
    assert_eq!(app.service().store().theme(), Theme::Navy);

    app.handle_event(key(KeyCode::Char('t'))).await.unwrap();
    assert_eq!(app.service().store().theme(), Theme::Dark);
    assert_eq!(storage.raw("theme").unwrap().as_deref(), Some("dark"));
}

#[tokio::test]
async fn test_esc_closes_dialog_before_quitting() {
    let mut app = app_with(Arc::new(MemoryStorage::new())).await;
    app.handle_event(key(KeyCode::Tab)).await.unwrap();

    app.handle_event(key(KeyCode::Char('?'))).await.unwrap();
    app.handle_event(key(KeyCode::Esc)).await.unwrap();
    assert!(!app.should_quit());

    app.handle_event(key(KeyCode::Esc)).await.unwrap();
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_ctrl_c_quits_while_typing() {
    let mut app = app_with(Arc::new(MemoryStorage::new())).await;
    type_text(&mut app, "half").await;
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)))
        .await
        .unwrap();
    assert!(app.should_quit());
    assert!(app.service().store().tasks().is_empty());
}

#[tokio::test]
async fn test_failed_save_is_reported() {
    let storage = Arc::new(MemoryStorage::new());
    let mut app = app_with(storage.clone()).await;
    storage.set_read_only(true);

    type_text(&mut app, "kept").await;
    app.handle_event(key(KeyCode::Enter)).await.unwrap();

    assert_eq!(app.service().store().tasks().len(), 1);
    assert_eq!(app.status_message(), Some(letsdoit::constants::ERROR_SAVE_FAILED));
}
