//! Data model for the task list: tasks, completed tasks, priorities and themes.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum number of characters kept for a task's text.
pub const MAX_TASK_TEXT_CHARS: usize = 300;

/// Task identifier: the creation time in milliseconds since the Unix epoch.
pub type TaskId = i64;

/// Whether `id` decodes to a representable creation timestamp.
#[must_use]
pub fn is_valid_task_id(id: TaskId) -> bool {
    DateTime::from_timestamp_millis(id).is_some()
}

/// Whether `text` may be stored as a task: not blank, at most
/// [`MAX_TASK_TEXT_CHARS`] characters.
#[must_use]
pub fn is_valid_task_text(text: &str) -> bool {
    !text.trim().is_empty() && text.chars().count() <= MAX_TASK_TEXT_CHARS
}

/// Task priority, advanced one step at a time by [`Priority::next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Normal,
    High,
    Low,
}

impl Priority {
    /// The next priority in the fixed cycle normal → high → low → normal.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Normal => Self::High,
            Self::High => Self::Low,
            Self::Low => Self::Normal,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::High => "high",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An active task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub priority: Priority,
}

impl Task {
    /// Creation time, recovered from the id.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.id).single().unwrap_or_default()
    }
}

/// A task moved out of the active list, stamped with its completion time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedTask {
    pub id: TaskId,
    pub text: String,
    pub priority: Priority,
    pub completed_at: DateTime<Utc>,
}

impl CompletedTask {
    /// Complete `task` at `now`. The completion time never precedes the
    /// creation time encoded in the id.
    #[must_use]
    pub fn from_task(task: Task, now: DateTime<Utc>) -> Self {
        let created = task.created_at();
        Self {
            id: task.id,
            text: task.text,
            priority: task.priority,
            completed_at: now.max(created),
        }
    }
}

/// Visual preset for the whole interface. Has no effect on task data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Navy,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Navy => "navy",
        }
    }

    /// Next theme in switcher order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Navy,
            Self::Navy => Self::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a theme name is not one of `dark`, `light`, `navy`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}' (expected dark, light or navy)")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            "navy" => Ok(Self::Navy),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}
