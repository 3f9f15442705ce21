use chrono::{DateTime, Duration, TimeZone, Utc};
use letsdoit::tasks::{Priority, SnapshotKey, TaskStore, Theme, MAX_TASK_TEXT_CHARS};

fn at(ms: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(ms).unwrap()
}

#[test]
fn test_add_appends_normal_priority_task() {
    let mut store = TaskStore::new();
    let changes = store.add_task("Buy milk", at(1_000));

    assert_eq!(changes, vec![SnapshotKey::Tasks]);
    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.tasks()[0].id, 1_000);
    assert_eq!(store.tasks()[0].text, "Buy milk");
    assert_eq!(store.tasks()[0].priority, Priority::Normal);
}

#[test]
fn test_blank_text_is_ignored() {
    let mut store = TaskStore::new();
    for text in ["", "   ", "\t\n"] {
        assert!(store.add_task(text, at(1_000)).is_empty());
    }
    assert!(store.tasks().is_empty());
}

#[test]
fn test_text_is_kept_verbatim_and_truncated() {
    let mut store = TaskStore::new();
    store.add_task("  padded  ", at(1));
    assert_eq!(store.tasks()[0].text, "  padded  ");

    let long = "é".repeat(MAX_TASK_TEXT_CHARS + 20);
    store.add_task(&long, at(2));
    assert_eq!(store.tasks()[1].text.chars().count(), MAX_TASK_TEXT_CHARS);
}

#[test]
fn test_ids_are_unique_within_the_same_millisecond() {
    let mut store = TaskStore::new();
    let now = at(5_000);
    for i in 0..5 {
        store.add_task(&format!("task {i}"), now);
    }
    let ids: Vec<i64> = store.tasks().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![5_000, 5_001, 5_002, 5_003, 5_004]);
}

#[test]
fn test_ids_stay_unique_after_completion_and_clock_rollback() {
    let mut store = TaskStore::new();
    store.add_task("a", at(10_000));
    store.complete_task(10_000, at(10_500));

    // Clock stepped backwards: the new id still beats the completed one
    store.add_task("b", at(9_000));
    assert_eq!(store.tasks()[0].id, 10_001);
}

#[test]
fn test_complete_moves_task_to_completed() {
    let mut store = TaskStore::new();
    store.add_task("a", at(1));
    store.add_task("b", at(2));

    let changes = store.complete_task(1, at(60_000));
    assert_eq!(changes, vec![SnapshotKey::CompletedTasks, SnapshotKey::Tasks]);

    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.tasks()[0].id, 2);
    assert_eq!(store.completed_tasks().len(), 1);
    let done = &store.completed_tasks()[0];
    assert_eq!(done.id, 1);
    assert_eq!(done.text, "a");
    assert_eq!(done.completed_at, at(60_000));
}

#[test]
fn test_completion_time_never_precedes_creation() {
    let mut store = TaskStore::new();
    store.add_task("a", at(50_000));
    store.complete_task(50_000, at(10_000));
    assert_eq!(store.completed_tasks()[0].completed_at, at(50_000));
}

#[test]
fn test_unknown_ids_are_no_ops() {
    let mut store = TaskStore::new();
    store.add_task("a", at(1));
    let before = store.clone();

    assert!(store.complete_task(42, at(2)).is_empty());
    assert!(store.cycle_priority(42).is_empty());
    assert_eq!(store, before);

    // Completing twice is the same as completing once
    store.complete_task(1, at(3));
    let after_first = store.clone();
    assert!(store.complete_task(1, at(4)).is_empty());
    assert_eq!(store, after_first);
}

#[test]
fn test_priority_cycles_through_three_levels() {
    let mut store = TaskStore::new();
    store.add_task("a", at(1));
    store.add_task("b", at(2));

    let mut seen = Vec::new();
    for _ in 0..3 {
        store.cycle_priority(1);
        seen.push(store.find_task(1).unwrap().priority);
    }
    assert_eq!(seen, vec![Priority::High, Priority::Low, Priority::Normal]);
    // Other tasks untouched
    assert_eq!(store.find_task(2).unwrap().priority, Priority::Normal);
}

#[test]
fn test_clear_operations_are_unconditional() {
    let mut store = TaskStore::new();
    assert_eq!(store.clear_active(), vec![SnapshotKey::Tasks]);
    assert_eq!(store.clear_completed(), vec![SnapshotKey::CompletedTasks]);

    store.add_task("a", at(1));
    store.add_task("b", at(2));
    store.complete_task(1, at(3));

    store.clear_active();
    assert!(store.tasks().is_empty());
    assert_eq!(store.completed_tasks().len(), 1);

    store.clear_completed();
    assert!(store.completed_tasks().is_empty());
}

#[test]
fn test_tasks_are_in_exactly_one_list() {
    let mut store = TaskStore::new();
    let start = at(1_000);
    for i in 0..6 {
        store.add_task(&format!("t{i}"), start + Duration::milliseconds(i));
    }
    for id in [1_001, 1_003, 1_005] {
        store.complete_task(id, start + Duration::seconds(10));
    }

    let active: Vec<i64> = store.tasks().iter().map(|t| t.id).collect();
    let done: Vec<i64> = store.completed_tasks().iter().map(|t| t.id).collect();
    assert_eq!(active, vec![1_000, 1_002, 1_004]);
    assert_eq!(done, vec![1_001, 1_003, 1_005]);
}

#[test]
fn test_set_theme() {
    let mut store = TaskStore::new();
    assert_eq!(store.theme(), Theme::Dark);
    assert_eq!(store.set_theme(Theme::Light), vec![SnapshotKey::Theme]);
    assert_eq!(store.theme(), Theme::Light);
}
