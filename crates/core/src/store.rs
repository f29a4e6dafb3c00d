//! The "last known status" cache.
//!
//! A client-local durable key-value cache mapping complaint id to the
//! last status that was legitimately observed or written. It may lag
//! behind the repository; all merge/precedence logic lives in the
//! reconciler, never here. Last-write-wins under concurrent use -- this
//! is a convenience cache, not a source of truth.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

use crate::error::CoreError;
use crate::types::DbId;

/// Durable key-value store for last-known statuses.
#[async_trait]
pub trait StatusStore: Send + Sync {
    async fn save(&self, complaint_id: DbId, status: &str) -> Result<(), CoreError>;
    async fn load(&self, complaint_id: DbId) -> Result<Option<String>, CoreError>;
    async fn clear(&self, complaint_id: DbId) -> Result<(), CoreError>;
}

/// In-memory store. Backs reconciler tests and ephemeral deployments;
/// production uses the table-backed store in the db crate.
#[derive(Debug, Default)]
pub struct MemoryStatusStore {
    entries: Mutex<HashMap<DbId, String>>,
}

impl MemoryStatusStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StatusStore for MemoryStatusStore {
    async fn save(&self, complaint_id: DbId, status: &str) -> Result<(), CoreError> {
        self.entries
            .lock()
            .await
            .insert(complaint_id, status.to_string());
        Ok(())
    }

    async fn load(&self, complaint_id: DbId) -> Result<Option<String>, CoreError> {
        Ok(self.entries.lock().await.get(&complaint_id).cloned())
    }

    async fn clear(&self, complaint_id: DbId) -> Result<(), CoreError> {
        self.entries.lock().await.remove(&complaint_id);
        Ok(())
    }
}
