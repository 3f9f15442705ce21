//! Encoding and decoding of store snapshots.
//!
//! Each [`SnapshotKey`] is read and written on its own. A key that is
//! missing, unreadable or unparsable falls back to its default without
//! affecting the others. A list is corrupt when any entry has blank or
//! overlong text, an id outside the timestamp range, or an id repeated
//! within the list.

use anyhow::{bail, Context, Result};
use std::collections::HashSet;

use super::SnapshotStorage;
use crate::tasks::{
    is_valid_task_id, is_valid_task_text, CompletedTask, SnapshotKey, Task, TaskId, TaskStore, Theme,
};

/// Serialize the part of `store` held under `key`.
pub fn encode(store: &TaskStore, key: SnapshotKey) -> Result<String> {
    let value = match key {
        SnapshotKey::Tasks => serde_json::to_string(store.tasks())?,
        SnapshotKey::CompletedTasks => serde_json::to_string(store.completed_tasks())?,
        SnapshotKey::Theme => store.theme().as_str().to_string(),
    };
    Ok(value)
}

fn check_entries<'a>(entries: impl Iterator<Item = (TaskId, &'a str)>) -> Result<()> {
    let mut seen = HashSet::new();
    for (id, text) in entries {
        if !is_valid_task_id(id) {
            bail!("task id {id} is not a valid timestamp");
        }
        if !is_valid_task_text(text) {
            bail!("task {id} has blank or overlong text");
        }
        if !seen.insert(id) {
            bail!("task id {id} appears more than once");
        }
    }
    Ok(())
}

pub fn decode_tasks(raw: &str) -> Result<Vec<Task>> {
    let tasks: Vec<Task> = serde_json::from_str(raw).context("invalid active task snapshot")?;
    check_entries(tasks.iter().map(|t| (t.id, t.text.as_str()))).context("invalid active task snapshot")?;
    Ok(tasks)
}

pub fn decode_completed(raw: &str) -> Result<Vec<CompletedTask>> {
    let completed: Vec<CompletedTask> = serde_json::from_str(raw).context("invalid completed task snapshot")?;
    check_entries(completed.iter().map(|t| (t.id, t.text.as_str())))
        .context("invalid completed task snapshot")?;
    Ok(completed)
}

/// Drop active tasks whose id is already completed. A save interrupted
/// between the completed and active keys leaves a task in both lists.
fn drop_completed_from_active(tasks: Vec<Task>, completed: &[CompletedTask]) -> Vec<Task> {
    let done: HashSet<TaskId> = completed.iter().map(|t| t.id).collect();
    let (kept, dropped): (Vec<Task>, Vec<Task>) = tasks.into_iter().partition(|t| !done.contains(&t.id));
    for task in &dropped {
        log::warn!("Snapshot: task {} is both active and completed, keeping the completed copy", task.id);
    }
    kept
}

pub fn decode_theme(raw: &str) -> Result<Theme> {
    Ok(raw.parse::<Theme>()?)
}

/// Read one key, degrading every failure to `None`.
async fn read_key<T>(
    storage: &dyn SnapshotStorage,
    key: SnapshotKey,
    decode: impl FnOnce(&str) -> Result<T>,
) -> Option<T> {
    let raw = match storage.get(key.as_str()).await {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            log::debug!("Snapshot: no saved '{}'", key.as_str());
            return None;
        }
        Err(e) => {
            log::warn!("Snapshot: failed to read '{}': {}", key.as_str(), e);
            return None;
        }
    };

    match decode(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Snapshot: ignoring corrupt '{}': {:#}", key.as_str(), e);
            None
        }
    }
}

/// Rebuild a store from `storage`. Never fails: absent or corrupt parts
/// yield empty lists and `default_theme`.
pub async fn load(storage: &dyn SnapshotStorage, default_theme: Theme) -> TaskStore {
    let tasks = read_key(storage, SnapshotKey::Tasks, decode_tasks).await.unwrap_or_default();
    let completed = read_key(storage, SnapshotKey::CompletedTasks, decode_completed)
        .await
        .unwrap_or_default();
    let theme = read_key(storage, SnapshotKey::Theme, decode_theme)
        .await
        .unwrap_or(default_theme);
    let tasks = drop_completed_from_active(tasks, &completed);

    log::info!(
        "Snapshot: loaded {} active, {} completed, theme {} from {}",
        tasks.len(),
        completed.len(),
        theme,
        storage.describe()
    );
    TaskStore::from_parts(tasks, completed, theme)
}

/// Overwrite every key in `keys` with the current state of `store`.
pub async fn persist(storage: &dyn SnapshotStorage, store: &TaskStore, keys: &[SnapshotKey]) -> Result<()> {
    for key in keys {
        let value = encode(store, *key)?;
        storage
            .set(key.as_str(), &value)
            .await
            .with_context(|| format!("Failed to save '{}'", key.as_str()))?;
    }
    Ok(())
}
