use chrono::{DateTime, Utc};

use super::model::{CompletedTask, Task, TaskId, Theme};
use super::ops;

/// The independently persisted parts of a [`TaskStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapshotKey {
    Tasks,
    CompletedTasks,
    Theme,
}

impl SnapshotKey {
    pub const ALL: [SnapshotKey; 3] = [SnapshotKey::Tasks, SnapshotKey::CompletedTasks, SnapshotKey::Theme];

    /// Storage key under which this part is written.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tasks => "tasks",
            Self::CompletedTasks => "completedTasks",
            Self::Theme => "theme",
        }
    }
}

/// Snapshot keys touched by a store operation. Empty means nothing changed.
pub type Changes = Vec<SnapshotKey>;

/// Active tasks, completed tasks and the theme preference.
///
/// Every operation replaces the affected list wholesale and reports which
/// snapshot keys it touched, so the caller knows what to persist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
    completed: Vec<CompletedTask>,
    theme: Theme,
}

impl TaskStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from previously persisted parts.
    #[must_use]
    pub fn from_parts(tasks: Vec<Task>, completed: Vec<CompletedTask>, theme: Theme) -> Self {
        Self { tasks, completed, theme }
    }

    /// Active tasks, oldest first.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Completed tasks in completion order.
    #[must_use]
    pub fn completed_tasks(&self) -> &[CompletedTask] {
        &self.completed
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn find_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn largest_id(&self) -> Option<TaskId> {
        self.tasks
            .iter()
            .map(|t| t.id)
            .chain(self.completed.iter().map(|t| t.id))
            .max()
    }

    /// Append a task unless `text` is blank.
    pub fn add_task(&mut self, text: &str, now: DateTime<Utc>) -> Changes {
        let Some(id) = ops::next_task_id(now.timestamp_millis(), self.largest_id()) else {
            return Vec::new();
        };
        match ops::append_task(&self.tasks, text, id) {
            Some(tasks) => {
                self.tasks = tasks;
                vec![SnapshotKey::Tasks]
            }
            None => Vec::new(),
        }
    }

    /// Move an active task to the completed list. Unknown ids are ignored.
    ///
    /// The completed list is reported first so it is saved before the
    /// shortened active list.
    pub fn complete_task(&mut self, id: TaskId, now: DateTime<Utc>) -> Changes {
        match ops::move_to_completed(&self.tasks, &self.completed, id, now) {
            Some((tasks, completed)) => {
                self.tasks = tasks;
                self.completed = completed;
                vec![SnapshotKey::CompletedTasks, SnapshotKey::Tasks]
            }
            None => Vec::new(),
        }
    }

    /// Advance an active task's priority. Unknown ids are ignored.
    pub fn cycle_priority(&mut self, id: TaskId) -> Changes {
        match ops::cycle_priority(&self.tasks, id) {
            Some(tasks) => {
                self.tasks = tasks;
                vec![SnapshotKey::Tasks]
            }
            None => Vec::new(),
        }
    }

    pub fn clear_active(&mut self) -> Changes {
        self.tasks = Vec::new();
        vec![SnapshotKey::Tasks]
    }

    pub fn clear_completed(&mut self) -> Changes {
        self.completed = Vec::new();
        vec![SnapshotKey::CompletedTasks]
    }

    pub fn set_theme(&mut self, theme: Theme) -> Changes {
        self.theme = theme;
        vec![SnapshotKey::Theme]
    }
}
