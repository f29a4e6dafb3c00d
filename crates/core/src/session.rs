//! Per-complaint workflow session state.

use crate::types::DbId;

/// In-memory editing context for one complaint.
///
/// Owns the "last applied status" that the previous implementation kept
/// in an ambient global; passed by `&mut` into every reconciler call so
/// the value has an explicit owner and lifetime.
#[derive(Debug, Clone)]
pub struct WorkflowSession {
    pub complaint_id: DbId,
    /// Last status this session observed or wrote. `None` until the
    /// first resolve.
    pub last_applied: Option<String>,
}

impl WorkflowSession {
    pub fn new(complaint_id: DbId) -> Self {
        WorkflowSession {
            complaint_id,
            last_applied: None,
        }
    }
}
