//! Pure list transitions.
//!
//! Each function takes the current list by reference and returns a freshly
//! built replacement, or `None` when the operation does not apply. The store
//! swaps whole lists in; nothing here mutates its input.

use chrono::{DateTime, Utc};

use super::model::{is_valid_task_id, CompletedTask, Priority, Task, TaskId, MAX_TASK_TEXT_CHARS};

/// Allocate an id no smaller than `now_ms` and strictly greater than every id
/// already handed out. `None` once no representable id is left.
#[must_use]
pub fn next_task_id(now_ms: i64, largest_known: Option<TaskId>) -> Option<TaskId> {
    let id = match largest_known {
        Some(largest) if largest >= now_ms => largest.checked_add(1)?,
        _ => now_ms,
    };
    is_valid_task_id(id).then_some(id)
}

/// Text as it will be stored, or `None` if it is blank.
#[must_use]
pub fn normalize_text(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }
    Some(text.chars().take(MAX_TASK_TEXT_CHARS).collect())
}

/// Append a new normal-priority task.
#[must_use]
pub fn append_task(tasks: &[Task], text: &str, id: TaskId) -> Option<Vec<Task>> {
    let text = normalize_text(text)?;
    let mut next = tasks.to_vec();
    next.push(Task {
        id,
        text,
        priority: Priority::Normal,
    });
    Some(next)
}

/// Move the task with `id` from `tasks` to the end of `completed`.
#[must_use]
pub fn move_to_completed(
    tasks: &[Task],
    completed: &[CompletedTask],
    id: TaskId,
    now: DateTime<Utc>,
) -> Option<(Vec<Task>, Vec<CompletedTask>)> {
    let task = tasks.iter().find(|t| t.id == id)?.clone();
    let remaining = tasks.iter().filter(|t| t.id != id).cloned().collect();

    let mut done = completed.to_vec();
    done.push(CompletedTask::from_task(task, now));
    Some((remaining, done))
}

/// Advance the priority of the task with `id`, leaving the others untouched.
#[must_use]
pub fn cycle_priority(tasks: &[Task], id: TaskId) -> Option<Vec<Task>> {
    if !tasks.iter().any(|t| t.id == id) {
        return None;
    }
    Some(
        tasks
            .iter()
            .map(|t| {
                if t.id == id {
                    Task {
                        priority: t.priority.next(),
                        ..t.clone()
                    }
                } else {
                    t.clone()
                }
            })
            .collect(),
    )
}
