use async_trait::async_trait;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::{SnapshotStorage, StorageError};
use crate::entities::snapshot_entry;
use crate::repositories::SnapshotRepository;

const DATABASE_FILE: &str = "letsdoit.db";

/// Where a [`LocalStorage`] keeps its data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageLocation {
    File(PathBuf),
    Memory,
}

/// SQLite-backed snapshot storage
pub struct LocalStorage {
    conn: DatabaseConnection,
    location: StorageLocation,
}

impl LocalStorage {
    /// Open (creating if needed) the database at `path`.
    pub async fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StorageError::Directory {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let url = format!("sqlite://{}?mode=rwc", path.display());
        Self::connect(url, StorageLocation::File(path.to_path_buf())).await
    }

    /// Open a private in-memory database. Contents vanish when dropped.
    pub async fn in_memory() -> Result<Self, StorageError> {
        Self::connect("sqlite::memory:".to_string(), StorageLocation::Memory).await
    }

    /// Default database path under the platform data directory.
    pub fn default_path() -> Result<PathBuf, StorageError> {
        dirs::data_dir()
            .map(|dir| dir.join("letsdoit").join(DATABASE_FILE))
            .ok_or(StorageError::NoDataDir)
    }

    async fn connect(url: String, location: StorageLocation) -> Result<Self, StorageError> {
        // A single long-lived connection: an in-memory database only lives as
        // long as the connection that created it.
        let mut options = ConnectOptions::new(url);
        options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(Duration::from_secs(24 * 60 * 60))
            .max_lifetime(Duration::from_secs(24 * 60 * 60))
            .sqlx_logging(false);

        let conn = Database::connect(options).await?;
        let storage = Self { conn, location };
        storage.init_schema().await?;
        log::debug!("Storage: opened {}", storage.describe());
        Ok(storage)
    }

    /// Create the snapshot table if it does not exist yet.
    async fn init_schema(&self) -> Result<(), StorageError> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);
        let mut create = schema.create_table_from_entity(snapshot_entry::Entity);
        create.if_not_exists();
        self.conn.execute(backend.build(&create)).await?;
        Ok(())
    }

    #[must_use]
    pub fn location(&self) -> &StorageLocation {
        &self.location
    }
}

#[async_trait]
impl SnapshotStorage for LocalStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(SnapshotRepository::get(&self.conn, key).await?.map(|entry| entry.value))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        SnapshotRepository::upsert(&self.conn, key, value).await
    }

    fn describe(&self) -> String {
        match &self.location {
            StorageLocation::File(path) => format!("sqlite database {}", path.display()),
            StorageLocation::Memory => "in-memory sqlite database".to_string(),
        }
    }
}
