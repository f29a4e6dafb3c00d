//! Repository for the `processing` table.

use sqlx::SqlitePool;

use smartopolis_core::types::DbId;

use crate::models::processing::{CreateProcessing, ProcessingRecord};

/// Column list for processing queries.
const COLUMNS: &str = "id, complaint_id, action, publish_result, visible_to_all, \
    rating, assigned_to, result_images, official_response, return_reason, \
    return_photos, sms_text, author_phone, sms_sent_date, attached_documents, \
    deadline, created_at, updated_at";

/// Provides create and list operations for processing submissions.
pub struct ProcessingRepo;

impl ProcessingRepo {
    /// Record a processing submission, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateProcessing,
    ) -> Result<ProcessingRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO processing
                (complaint_id, action, publish_result, visible_to_all, rating,
                 assigned_to, result_images, official_response, return_reason,
                 return_photos, sms_text, author_phone, sms_sent_date,
                 attached_documents, deadline)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProcessingRecord>(&query)
            .bind(input.complaint_id)
            .bind(&input.action)
            .bind(input.publish_result)
            .bind(input.visible_to_all)
            .bind(input.rating)
            .bind(&input.assigned_to)
            .bind(&input.result_images)
            .bind(&input.official_response)
            .bind(&input.return_reason)
            .bind(&input.return_photos)
            .bind(&input.sms_text)
            .bind(&input.author_phone)
            .bind(&input.sms_sent_date)
            .bind(&input.attached_documents)
            .bind(&input.deadline)
            .fetch_one(pool)
            .await
    }

    /// List all processing submissions for a complaint, newest first.
    pub async fn list_for_complaint(
        pool: &SqlitePool,
        complaint_id: DbId,
    ) -> Result<Vec<ProcessingRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM processing
             WHERE complaint_id = ?
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ProcessingRecord>(&query)
            .bind(complaint_id)
            .fetch_all(pool)
            .await
    }
}
