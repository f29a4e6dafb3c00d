//! Repository for the `complaints` table.

use sqlx::SqlitePool;

use smartopolis_core::types::DbId;

use crate::models::complaint::{Complaint, CreateComplaint, UpdateComplaint};

/// Column list for complaints queries.
const COLUMNS: &str = "id, title, description, problem_type, esia, author, \
    author_email, author_phone, author_address, visible_to_all, \
    publish_result, assigned_to, images, attachments, video, result_images, \
    created_date, deadline, days_remaining, standard_period, \
    external_system, authority, external_id, external_category, link, \
    status, official_response, created_at, updated_at";

/// Provides CRUD operations for complaint records.
pub struct ComplaintRepo;

impl ComplaintRepo {
    /// List all complaints, newest first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Complaint>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM complaints ORDER BY created_at DESC");
        sqlx::query_as::<_, Complaint>(&query).fetch_all(pool).await
    }

    /// Find a complaint by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Complaint>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM complaints WHERE id = ?");
        sqlx::query_as::<_, Complaint>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List complaints filed under an author phone number, newest first.
    pub async fn find_by_phone(
        pool: &SqlitePool,
        phone: &str,
    ) -> Result<Vec<Complaint>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM complaints
             WHERE author_phone = ?
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Complaint>(&query)
            .bind(phone)
            .fetch_all(pool)
            .await
    }

    /// Create a new complaint, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateComplaint,
    ) -> Result<Complaint, sqlx::Error> {
        let query = format!(
            "INSERT INTO complaints
                (title, description, problem_type, esia, author, author_email,
                 author_phone, author_address, visible_to_all, publish_result,
                 assigned_to, images, attachments, video, result_images,
                 created_date, deadline, days_remaining, standard_period,
                 external_system, authority, external_id, external_category,
                 link, status)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?,
                     COALESCE(?, 'New'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Complaint>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.problem_type)
            .bind(&input.esia)
            .bind(&input.author)
            .bind(&input.author_email)
            .bind(&input.author_phone)
            .bind(&input.author_address)
            .bind(&input.visible_to_all)
            .bind(&input.publish_result)
            .bind(&input.assigned_to)
            .bind(&input.images)
            .bind(&input.attachments)
            .bind(&input.video)
            .bind(&input.result_images)
            .bind(&input.created_date)
            .bind(&input.deadline)
            .bind(input.days_remaining)
            .bind(&input.standard_period)
            .bind(&input.external_system)
            .bind(&input.authority)
            .bind(&input.external_id)
            .bind(&input.external_category)
            .bind(&input.link)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Partially update a complaint; `None` fields keep their value.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateComplaint,
    ) -> Result<Complaint, sqlx::Error> {
        let query = format!(
            "UPDATE complaints SET
                title = COALESCE(?, title),
                description = COALESCE(?, description),
                problem_type = COALESCE(?, problem_type),
                esia = COALESCE(?, esia),
                author = COALESCE(?, author),
                author_email = COALESCE(?, author_email),
                author_phone = COALESCE(?, author_phone),
                author_address = COALESCE(?, author_address),
                visible_to_all = COALESCE(?, visible_to_all),
                publish_result = COALESCE(?, publish_result),
                assigned_to = COALESCE(?, assigned_to),
                images = COALESCE(?, images),
                attachments = COALESCE(?, attachments),
                video = COALESCE(?, video),
                result_images = COALESCE(?, result_images),
                deadline = COALESCE(?, deadline),
                days_remaining = COALESCE(?, days_remaining),
                standard_period = COALESCE(?, standard_period),
                external_system = COALESCE(?, external_system),
                authority = COALESCE(?, authority),
                external_id = COALESCE(?, external_id),
                external_category = COALESCE(?, external_category),
                link = COALESCE(?, link),
                status = COALESCE(?, status),
                official_response = COALESCE(?, official_response),
                updated_at = CURRENT_TIMESTAMP
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Complaint>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.problem_type)
            .bind(&input.esia)
            .bind(&input.author)
            .bind(&input.author_email)
            .bind(&input.author_phone)
            .bind(&input.author_address)
            .bind(&input.visible_to_all)
            .bind(&input.publish_result)
            .bind(&input.assigned_to)
            .bind(&input.images)
            .bind(&input.attachments)
            .bind(&input.video)
            .bind(&input.result_images)
            .bind(&input.deadline)
            .bind(input.days_remaining)
            .bind(&input.standard_period)
            .bind(&input.external_system)
            .bind(&input.authority)
            .bind(&input.external_id)
            .bind(&input.external_category)
            .bind(&input.link)
            .bind(&input.status)
            .bind(&input.official_response)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Delete a complaint by its ID. Returns whether a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM complaints WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Read only the status column.
    pub async fn read_status(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<Option<String>>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<String>>("SELECT status FROM complaints WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite only the status column.
    pub async fn write_status(
        pool: &SqlitePool,
        id: DbId,
        status: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE complaints SET status = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
        )
        .bind(status)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(())
    }
}
