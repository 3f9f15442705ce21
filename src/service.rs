//! Task service: the owned store plus its persistence mirror.
//!
//! The UI holds exactly one [`TaskService`] and routes every mutation through
//! it. Each successful mutation writes the affected snapshots in full before
//! returning.

use anyhow::Result;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::storage::{snapshot, SnapshotStorage};
use crate::tasks::{Changes, TaskId, TaskStore, Theme};

/// Source of the current time.
pub type Clock = fn() -> DateTime<Utc>;

pub struct TaskService {
    store: TaskStore,
    storage: Arc<dyn SnapshotStorage>,
    clock: Clock,
}

impl TaskService {
    /// Load the saved snapshot from `storage`, or start empty.
    pub async fn open(storage: Arc<dyn SnapshotStorage>, default_theme: Theme) -> Self {
        let store = snapshot::load(storage.as_ref(), default_theme).await;
        Self {
            store,
            storage,
            clock: Utc::now,
        }
    }

    /// Replace the wall clock, e.g. with a fixed time in tests.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    #[must_use]
    pub fn storage(&self) -> &Arc<dyn SnapshotStorage> {
        &self.storage
    }

    /// Add a task. Returns `false` for blank text.
    pub async fn add_task(&mut self, text: &str) -> Result<bool> {
        let changes = self.store.add_task(text, (self.clock)());
        if let Some(task) = self.store.tasks().last().filter(|_| !changes.is_empty()) {
            log::info!("Task: added {} '{}'", task.id, task.text);
        }
        self.commit(changes).await
    }

    /// Complete an active task. Returns `false` if `id` is not active.
    pub async fn complete_task(&mut self, id: TaskId) -> Result<bool> {
        let changes = self.store.complete_task(id, (self.clock)());
        if changes.is_empty() {
            log::debug!("Task: cannot complete - task {} not found", id);
        } else {
            log::info!("Task: completed {}", id);
        }
        self.commit(changes).await
    }

    /// Advance a task's priority. Returns `false` if `id` is not active.
    pub async fn cycle_priority(&mut self, id: TaskId) -> Result<bool> {
        let changes = self.store.cycle_priority(id);
        match self.store.find_task(id).filter(|_| !changes.is_empty()) {
            Some(task) => log::info!("Task: priority of {} is now {}", id, task.priority),
            None => log::debug!("Task: cannot cycle priority - task {} not found", id),
        }
        self.commit(changes).await
    }

    pub async fn clear_active(&mut self) -> Result<bool> {
        log::info!("Task: clearing {} active tasks", self.store.tasks().len());
        let changes = self.store.clear_active();
        self.commit(changes).await
    }

    pub async fn clear_completed(&mut self) -> Result<bool> {
        log::info!("Task: clearing {} completed tasks", self.store.completed_tasks().len());
        let changes = self.store.clear_completed();
        self.commit(changes).await
    }

    pub async fn set_theme(&mut self, theme: Theme) -> Result<bool> {
        log::info!("Theme: switching to {}", theme);
        let changes = self.store.set_theme(theme);
        self.commit(changes).await
    }

    /// Persist `changes`. The in-memory state is kept even if the write fails.
    async fn commit(&self, changes: Changes) -> Result<bool> {
        if changes.is_empty() {
            return Ok(false);
        }
        if let Err(e) = snapshot::persist(self.storage.as_ref(), &self.store, &changes).await {
            log::error!("Storage: {:#}", e);
            return Err(e);
        }
        Ok(true)
    }
}
