//! Processing row model and create DTO.

use serde::{Deserialize, Serialize};
use smartopolis_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `processing` table: one submitted workflow action
/// with its form side effects.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProcessingRecord {
    pub id: DbId,
    pub complaint_id: DbId,
    pub action: Option<String>,
    pub publish_result: bool,
    pub visible_to_all: bool,
    pub rating: Option<i64>,
    pub assigned_to: Option<String>,
    pub result_images: Option<String>,
    pub official_response: Option<String>,
    pub return_reason: Option<String>,
    pub return_photos: Option<String>,
    pub sms_text: Option<String>,
    pub author_phone: Option<String>,
    pub sms_sent_date: Option<String>,
    pub attached_documents: Option<String>,
    pub deadline: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for recording a processing submission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProcessing {
    pub complaint_id: DbId,
    pub action: Option<String>,
    #[serde(default)]
    pub publish_result: bool,
    #[serde(default)]
    pub visible_to_all: bool,
    pub rating: Option<i64>,
    pub assigned_to: Option<String>,
    pub result_images: Option<String>,
    pub official_response: Option<String>,
    pub return_reason: Option<String>,
    pub return_photos: Option<String>,
    pub sms_text: Option<String>,
    pub author_phone: Option<String>,
    pub sms_sent_date: Option<String>,
    pub attached_documents: Option<String>,
    pub deadline: Option<String>,
}
