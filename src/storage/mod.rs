//! Local persistence for the task list.
//!
//! Snapshots are stored as plain key-value pairs, one key per independently
//! persisted part of the store:
//! - `tasks` - JSON array of active tasks
//! - `completedTasks` - JSON array of completed tasks
//! - `theme` - theme name as plain text
//!
//! [`LocalStorage`] keeps them in SQLite through SeaORM; [`MemoryStorage`]
//! keeps them in a map for tests and throwaway sessions.

pub mod db;
pub mod memory;
pub mod snapshot;

use async_trait::async_trait;
use std::path::PathBuf;

pub use db::LocalStorage;
pub use memory::MemoryStorage;

/// Errors raised by storage backends.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
    #[error("failed to prepare storage directory {}: {source}", path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not determine a data directory for this platform")]
    NoDataDir,
    #[error("storage is read-only")]
    ReadOnly,
    #[error("storage lock poisoned")]
    Poisoned,
}

/// Key-value store holding serialized snapshots.
///
/// Writes overwrite the previous value in full.
#[async_trait]
pub trait SnapshotStorage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Human-readable location, used in logs.
    fn describe(&self) -> String;
}
