//! History row model and append DTO.

use serde::{Deserialize, Serialize};
use smartopolis_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the append-only `history` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HistoryEntry {
    pub id: DbId,
    pub complaint_id: DbId,
    /// ISO-8601 string supplied by the writer; `created_at` is the
    /// database-side insertion time.
    pub change_date: String,
    pub author: String,
    pub field_name: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for appending a history entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHistoryEntry {
    pub complaint_id: DbId,
    pub change_date: String,
    pub author: String,
    pub field_name: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}
