//! Status reconciliation.
//!
//! Up to three sources can disagree about a complaint's status after a
//! network race or a stale cache: the persisted record, the durable
//! status cache, and the session's in-memory last-applied value. The
//! reconciler collapses them into one authoritative status using fixed
//! precedence rules, writing back to the cache (and, after a write, to
//! the repository) as needed.
//!
//! Failures here are never fatal to the caller: on any repository or
//! store error the reconciler degrades to the best available local
//! value and logs the condition.

use async_trait::async_trait;
use std::time::Duration;

use crate::error::CoreError;
use crate::session::WorkflowSession;
use crate::status::{same_status, Status};
use crate::store::StatusStore;
use crate::types::DbId;

/// Read/write access to the persisted record's status field. The db
/// crate implements this over the complaints table.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Current status of the record, `None` if the column is NULL or
    /// empty. Fails with `Transient` when the store is unreachable and
    /// `NotFound` when the id is unknown.
    async fn read_status(&self, complaint_id: DbId) -> Result<Option<String>, CoreError>;

    /// Overwrite the record's status.
    async fn write_status(&self, complaint_id: DbId, status: &str) -> Result<(), CoreError>;
}

/// Delay before the single read-after-write retry.
pub const RETRY_DELAY: Duration = Duration::from_millis(300);

/// Resolves disagreement between the repository, the status cache, and
/// the session into one authoritative status.
pub struct StatusReconciler<R, S> {
    repo: R,
    store: S,
    retry_delay: Duration,
}

impl<R: StatusSource, S: StatusStore> StatusReconciler<R, S> {
    pub fn new(repo: R, store: S) -> Self {
        StatusReconciler {
            repo,
            store,
            retry_delay: RETRY_DELAY,
        }
    }

    /// Override the read-after-write retry delay (tests).
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Authoritative status on page load.
    ///
    /// Precedence: cached value, else repository value (written back to
    /// the cache for future loads), else the default "New" (also cached).
    /// A status a human already confirmed through the cache is trusted
    /// over a possibly-lagging repository read.
    pub async fn resolve_on_load(&self, session: &mut WorkflowSession) -> String {
        let id = session.complaint_id;

        match self.store.load(id).await {
            Ok(Some(cached)) => {
                tracing::debug!(complaint_id = id, status = %cached, "Resolved status from cache");
                session.last_applied = Some(cached.clone());
                return cached;
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(complaint_id = id, error = %err, "Status cache read failed");
            }
        }

        match self.repo.read_status(id).await {
            Ok(Some(status)) if !status.trim().is_empty() => {
                self.save_to_store(id, &status).await;
                tracing::debug!(complaint_id = id, status = %status, "Resolved status from repository");
                session.last_applied = Some(status.clone());
                status
            }
            Ok(_) => {
                // No status on record: the complaint counts as new.
                let status = Status::New.as_str().to_string();
                self.save_to_store(id, &status).await;
                session.last_applied = Some(status.clone());
                status
            }
            Err(err) => {
                tracing::warn!(complaint_id = id, error = %err, "Repository read failed, using local fallback");
                self.local_fallback(session).await
            }
        }
    }

    /// Authoritative status after committing a transition.
    ///
    /// Re-reads the repository to verify the write landed. A matching
    /// re-read confirms `just_written`. A differing re-read (read-after-
    /// write lag or an external writer) triggers one corrective write and
    /// one delayed retry; if the disagreement persists, the locally
    /// computed transition still wins -- it is never silently discarded.
    pub async fn resolve_after_write(
        &self,
        session: &mut WorkflowSession,
        just_written: &str,
    ) -> String {
        let id = session.complaint_id;

        match self.repo.read_status(id).await {
            Ok(Some(seen)) if same_status(&seen, just_written) => {
                tracing::debug!(complaint_id = id, status = %just_written, "Write confirmed by re-read");
            }
            Ok(Some(seen)) => {
                tracing::warn!(
                    complaint_id = id,
                    expected = %just_written,
                    actual = %seen,
                    "Re-read disagrees with written status, issuing corrective write"
                );
                if let Err(err) = self.repo.write_status(id, just_written).await {
                    tracing::warn!(complaint_id = id, error = %err, "Corrective write failed");
                }
                tokio::time::sleep(self.retry_delay).await;
                match self.repo.read_status(id).await {
                    Ok(Some(retried)) if same_status(&retried, just_written) => {
                        tracing::debug!(complaint_id = id, "Corrective write confirmed on retry");
                    }
                    Ok(other) => {
                        tracing::warn!(
                            complaint_id = id,
                            actual = ?other,
                            "Repository still disagrees after retry, keeping local transition"
                        );
                    }
                    Err(err) => {
                        tracing::warn!(complaint_id = id, error = %err, "Retry read failed, keeping local transition");
                    }
                }
            }
            Ok(None) => {
                tracing::warn!(complaint_id = id, "Repository has no status after write, re-writing");
                if let Err(err) = self.repo.write_status(id, just_written).await {
                    tracing::warn!(complaint_id = id, error = %err, "Re-write failed");
                }
            }
            Err(err) => {
                tracing::warn!(complaint_id = id, error = %err, "Repository unreachable after write, keeping local transition");
            }
        }

        // Whatever happened above, the just-written value is the
        // authoritative one; persist it for the next page load.
        self.save_to_store(id, just_written).await;
        session.last_applied = Some(just_written.to_string());
        just_written.to_string()
    }

    /// Best available local value when the repository cannot be read:
    /// session value, else cached value, else "New".
    async fn local_fallback(&self, session: &mut WorkflowSession) -> String {
        if let Some(last) = session.last_applied.clone() {
            return last;
        }
        if let Ok(Some(cached)) = self.store.load(session.complaint_id).await {
            session.last_applied = Some(cached.clone());
            return cached;
        }
        let status = Status::New.as_str().to_string();
        session.last_applied = Some(status.clone());
        status
    }

    async fn save_to_store(&self, id: DbId, status: &str) {
        if let Err(err) = self.store.save(id, status).await {
            tracing::warn!(complaint_id = id, error = %err, "Status cache write failed");
        }
    }
}
