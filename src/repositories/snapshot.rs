//! Snapshot repository for key-value reads and full overwrites.

use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, EntityTrait};

use crate::entities::snapshot_entry;
use crate::storage::StorageError;

/// Repository for snapshot entries.
pub struct SnapshotRepository;

impl SnapshotRepository {
    /// Get the entry stored under `key`.
    pub async fn get<C>(conn: &C, key: &str) -> Result<Option<snapshot_entry::Model>, StorageError>
    where
        C: ConnectionTrait,
    {
        Ok(snapshot_entry::Entity::find_by_id(key.to_string()).one(conn).await?)
    }

    /// Insert or fully replace the value stored under `key`.
    pub async fn upsert<C>(conn: &C, key: &str, value: &str) -> Result<(), StorageError>
    where
        C: ConnectionTrait,
    {
        let entry = snapshot_entry::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value.to_string()),
            updated_at: ActiveValue::Set(Utc::now().to_rfc3339()),
        };

        snapshot_entry::Entity::insert(entry)
            .on_conflict(
                OnConflict::column(snapshot_entry::Column::Key)
                    .update_columns([snapshot_entry::Column::Value, snapshot_entry::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(conn)
            .await?;
        Ok(())
    }
}
