//! Complaint row model and create/update DTOs.
//!
//! Everything except `status`, `assigned_to`, `deadline`, and
//! `official_response` is opaque payload as far as the workflow is
//! concerned -- the engine never inspects the descriptive fields.

use serde::{Deserialize, Serialize};
use smartopolis_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `complaints` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Complaint {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub problem_type: Option<String>,
    pub esia: Option<String>,
    pub author: Option<String>,
    pub author_email: Option<String>,
    pub author_phone: Option<String>,
    pub author_address: Option<String>,
    pub visible_to_all: Option<String>,
    pub publish_result: Option<String>,
    pub assigned_to: Option<String>,
    pub images: Option<String>,
    pub attachments: Option<String>,
    pub video: Option<String>,
    pub result_images: Option<String>,
    pub created_date: Option<String>,
    pub deadline: Option<String>,
    pub days_remaining: Option<i64>,
    pub standard_period: Option<String>,
    pub external_system: Option<String>,
    pub authority: Option<String>,
    pub external_id: Option<String>,
    pub external_category: Option<String>,
    pub link: Option<String>,
    pub status: Option<String>,
    pub official_response: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a complaint. Status defaults to "New" in the schema
/// when not supplied.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateComplaint {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    pub problem_type: Option<String>,
    pub esia: Option<String>,
    pub author: Option<String>,
    #[validate(email(message = "author_email must be a valid email address"))]
    pub author_email: Option<String>,
    pub author_phone: Option<String>,
    pub author_address: Option<String>,
    pub visible_to_all: Option<String>,
    pub publish_result: Option<String>,
    pub assigned_to: Option<String>,
    pub images: Option<String>,
    pub attachments: Option<String>,
    pub video: Option<String>,
    pub result_images: Option<String>,
    pub created_date: Option<String>,
    pub deadline: Option<String>,
    pub days_remaining: Option<i64>,
    pub standard_period: Option<String>,
    pub external_system: Option<String>,
    pub authority: Option<String>,
    pub external_id: Option<String>,
    pub external_category: Option<String>,
    pub link: Option<String>,
    pub status: Option<String>,
}

/// DTO for partially updating a complaint. `None` fields are left
/// untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateComplaint {
    pub title: Option<String>,
    pub description: Option<String>,
    pub problem_type: Option<String>,
    pub esia: Option<String>,
    pub author: Option<String>,
    pub author_email: Option<String>,
    pub author_phone: Option<String>,
    pub author_address: Option<String>,
    pub visible_to_all: Option<String>,
    pub publish_result: Option<String>,
    pub assigned_to: Option<String>,
    pub images: Option<String>,
    pub attachments: Option<String>,
    pub video: Option<String>,
    pub result_images: Option<String>,
    pub deadline: Option<String>,
    pub days_remaining: Option<i64>,
    pub standard_period: Option<String>,
    pub external_system: Option<String>,
    pub authority: Option<String>,
    pub external_id: Option<String>,
    pub external_category: Option<String>,
    pub link: Option<String>,
    pub status: Option<String>,
    pub official_response: Option<String>,
}
