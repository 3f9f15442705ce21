//! The task list core.
//!
//! Holds the active and completed lists plus the theme preference and the
//! transitions between them. Nothing in here knows about storage, timers or
//! the terminal; callers pass the current time in.

pub mod model;
pub mod ops;
pub mod store;

pub use model::{
    is_valid_task_id, is_valid_task_text, CompletedTask, Priority, Task, TaskId, Theme, UnknownTheme,
    MAX_TASK_TEXT_CHARS,
};
pub use store::{Changes, SnapshotKey, TaskStore};
