//! Registry of per-complaint workflow sessions.
//!
//! One [`WorkflowSession`] per complaint id, checked out for the
//! duration of a resolve/transition sequence and checked back in when
//! it completes. Checking a session out removes it from the map, so two
//! overlapping requests for the same complaint each get a coherent
//! session rather than racing on shared state; the later check-in wins,
//! mirroring the last-write-wins posture of the status cache.

use std::collections::HashMap;

use tokio::sync::Mutex;

use smartopolis_core::session::WorkflowSession;
use smartopolis_core::types::DbId;

/// Owns every live workflow session. Sessions vanish on process
/// restart; a fresh load simply rebuilds them through the reconciler.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<DbId, WorkflowSession>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check out the session for a complaint, creating one on first use.
    pub async fn take(&self, complaint_id: DbId) -> WorkflowSession {
        self.sessions
            .lock()
            .await
            .remove(&complaint_id)
            .unwrap_or_else(|| WorkflowSession::new(complaint_id))
    }

    /// Check a session back in.
    pub async fn put(&self, session: WorkflowSession) {
        self.sessions
            .lock()
            .await
            .insert(session.complaint_id, session);
    }

    /// Drop the session for a complaint (e.g. after deletion).
    pub async fn forget(&self, complaint_id: DbId) {
        self.sessions.lock().await.remove(&complaint_id);
    }
}
