use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use letsdoit::config::Config;
use letsdoit::logger::Logger;
use letsdoit::storage::{MemoryStorage, SnapshotStorage};
use letsdoit::tasks::Theme;
use letsdoit::ui::core::EventType;
use letsdoit::ui::AppComponent;
use letsdoit::TaskService;
use ratatui::{backend::TestBackend, Terminal};

async fn app_with(entries: Vec<(&str, &str)>) -> AppComponent {
    let storage: Arc<dyn SnapshotStorage> = Arc::new(MemoryStorage::with_entries(entries));
    let service = TaskService::open(storage, Theme::Dark).await;
    AppComponent::new(service, &Config::default(), Logger::new())
}

fn screen(app: &mut AppComponent, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..height {
        for x in 0..width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[tokio::test]
async fn test_empty_screen() {
    let mut app = app_with(Vec::new()).await;
    let text = screen(&mut app, 80, 24);
    assert!(text.contains("LET'S DO IT"));
    assert!(text.contains("Add a task."));
    assert!(text.contains("Your tasks will appear here"));
    assert!(!text.contains("Show completed"));
}

#[tokio::test]
async fn test_tasks_and_completed_toggle_render() {
    let mut app = app_with(vec![
        ("tasks", r#"[{"id":1,"text":"Buy milk","priority":"high"}]"#),
        (
            "completedTasks",
            r#"[{"id":0,"text":"Old chore","priority":"normal","completedAt":"2025-03-07T21:05:03Z"}]"#,
        ),
    ])
    .await;

    let text = screen(&mut app, 80, 24);
    assert!(text.contains("Buy milk"));
    assert!(text.contains("High Priority"));
    assert!(text.contains("Show completed (1) ▼"));
    assert!(!text.contains("Old chore"));

    // Focus the list, then expand the completed section
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)))
        .await
        .unwrap();
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)))
        .await
        .unwrap();

    let text = screen(&mut app, 80, 24);
    assert!(text.contains("Hide completed (1) ▲"));
    assert!(text.contains("Old chore"));
}

#[tokio::test]
async fn test_help_overlay_renders() {
    let mut app = app_with(Vec::new()).await;
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)))
        .await
        .unwrap();
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE)))
        .await
        .unwrap();

    let text = screen(&mut app, 100, 40);
    assert!(text.contains("Cycle priority"));
}

#[tokio::test]
async fn test_tiny_terminal_does_not_panic() {
    let mut app = app_with(vec![("tasks", r#"[{"id":1,"text":"x","priority":"low"}]"#)]).await;
    screen(&mut app, 10, 5);
}
