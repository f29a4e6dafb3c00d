//! Repository for the append-only `history` table.

use sqlx::SqlitePool;

use smartopolis_core::types::DbId;

use crate::models::history::{CreateHistoryEntry, HistoryEntry};

/// Column list for history queries.
const COLUMNS: &str =
    "id, complaint_id, change_date, author, field_name, old_value, new_value, created_at";

/// Provides append and list operations for change history. No update or
/// delete exists on purpose.
pub struct HistoryRepo;

impl HistoryRepo {
    /// Append a history entry, returning the created row.
    pub async fn append(
        pool: &SqlitePool,
        input: &CreateHistoryEntry,
    ) -> Result<HistoryEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO history
                (complaint_id, change_date, author, field_name, old_value, new_value)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HistoryEntry>(&query)
            .bind(input.complaint_id)
            .bind(&input.change_date)
            .bind(&input.author)
            .bind(&input.field_name)
            .bind(&input.old_value)
            .bind(&input.new_value)
            .fetch_one(pool)
            .await
    }

    /// List all history entries for a complaint, newest first.
    pub async fn list_for_complaint(
        pool: &SqlitePool,
        complaint_id: DbId,
    ) -> Result<Vec<HistoryEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM history
             WHERE complaint_id = ?
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, HistoryEntry>(&query)
            .bind(complaint_id)
            .fetch_all(pool)
            .await
    }
}
