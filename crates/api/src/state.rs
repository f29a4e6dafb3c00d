use std::sync::Arc;

use smartopolis_core::reconcile::StatusReconciler;
use smartopolis_db::status_store::{ComplaintStatusSource, DbStatusStore};

use crate::config::ServerConfig;
use crate::sessions::SessionRegistry;

/// The concrete reconciler wired to the database-backed source and cache.
pub type Reconciler = StatusReconciler<ComplaintStatusSource, DbStatusStore>;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: smartopolis_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Status reconciler over the complaints table and status cache.
    pub reconciler: Arc<Reconciler>,
    /// Per-complaint workflow sessions.
    pub sessions: Arc<SessionRegistry>,
}

impl AppState {
    /// Wire up state from a pool and config.
    pub fn new(pool: smartopolis_db::DbPool, config: ServerConfig) -> Self {
        let reconciler = StatusReconciler::new(
            ComplaintStatusSource::new(pool.clone()),
            DbStatusStore::new(pool.clone()),
        );
        AppState {
            pool,
            config: Arc::new(config),
            reconciler: Arc::new(reconciler),
            sessions: Arc::new(SessionRegistry::new()),
        }
    }
}
