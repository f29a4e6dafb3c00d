//! Table-backed implementations of the core status-cache and
//! status-source traits.

use async_trait::async_trait;
use sqlx::SqlitePool;

use smartopolis_core::error::CoreError;
use smartopolis_core::reconcile::StatusSource;
use smartopolis_core::store::StatusStore;
use smartopolis_core::types::DbId;

fn transient(err: sqlx::Error) -> CoreError {
    CoreError::Transient(err.to_string())
}

/// Durable [`StatusStore`] over the `status_cache` table. Upsert on
/// conflict: last write wins.
#[derive(Debug, Clone)]
pub struct DbStatusStore {
    pool: SqlitePool,
}

impl DbStatusStore {
    pub fn new(pool: SqlitePool) -> Self {
        DbStatusStore { pool }
    }
}

#[async_trait]
impl StatusStore for DbStatusStore {
    async fn save(&self, complaint_id: DbId, status: &str) -> Result<(), CoreError> {
        sqlx::query(
            "INSERT INTO status_cache (complaint_id, status, updated_at)
             VALUES (?, ?, CURRENT_TIMESTAMP)
             ON CONFLICT (complaint_id)
             DO UPDATE SET status = excluded.status, updated_at = CURRENT_TIMESTAMP",
        )
        .bind(complaint_id)
        .bind(status)
        .execute(&self.pool)
        .await
        .map_err(transient)?;
        Ok(())
    }

    async fn load(&self, complaint_id: DbId) -> Result<Option<String>, CoreError> {
        sqlx::query_scalar::<_, String>("SELECT status FROM status_cache WHERE complaint_id = ?")
            .bind(complaint_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(transient)
    }

    async fn clear(&self, complaint_id: DbId) -> Result<(), CoreError> {
        sqlx::query("DELETE FROM status_cache WHERE complaint_id = ?")
            .bind(complaint_id)
            .execute(&self.pool)
            .await
            .map_err(transient)?;
        Ok(())
    }
}

/// [`StatusSource`] over the `complaints` table status column.
#[derive(Debug, Clone)]
pub struct ComplaintStatusSource {
    pool: SqlitePool,
}

impl ComplaintStatusSource {
    pub fn new(pool: SqlitePool) -> Self {
        ComplaintStatusSource { pool }
    }
}

#[async_trait]
impl StatusSource for ComplaintStatusSource {
    async fn read_status(&self, complaint_id: DbId) -> Result<Option<String>, CoreError> {
        let row = crate::repositories::ComplaintRepo::read_status(&self.pool, complaint_id)
            .await
            .map_err(transient)?;
        match row {
            None => Err(CoreError::NotFound {
                entity: "Complaint",
                id: complaint_id,
            }),
            // A NULL or blank column reads as "no status on record".
            Some(status) => Ok(status.filter(|s| !s.trim().is_empty())),
        }
    }

    async fn write_status(&self, complaint_id: DbId, status: &str) -> Result<(), CoreError> {
        crate::repositories::ComplaintRepo::write_status(&self.pool, complaint_id, status)
            .await
            .map_err(transient)
    }
}
