//! Handlers for complaint CRUD.
//!
//! These are thin wrappers over the repository: the workflow engine
//! never sees the descriptive fields they move around. Status changes
//! submitted through generic update go in verbatim; the workflow
//! endpoints in [`super::workflow`] are the ones that enforce the state
//! machine.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use smartopolis_core::error::CoreError;
use smartopolis_core::store::StatusStore;
use smartopolis_core::types::DbId;
use smartopolis_db::models::complaint::{CreateComplaint, UpdateComplaint};
use smartopolis_db::models::history::CreateHistoryEntry;
use smartopolis_db::repositories::{ComplaintRepo, HistoryRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Author recorded on history entries written by the admin panel.
pub const PANEL_AUTHOR: &str = "[276] City analytics center";

/// Verify that a complaint exists, returning an error if not found.
pub async fn ensure_complaint_exists(pool: &sqlx::SqlitePool, id: DbId) -> AppResult<()> {
    ComplaintRepo::find_by_id(pool, id).await?.ok_or(AppError::Core(CoreError::NotFound {
        entity: "Complaint",
        id,
    }))?;
    Ok(())
}

/// GET /complaints
///
/// List all complaints, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let complaints = ComplaintRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: complaints }))
}

/// GET /complaints/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let complaint = ComplaintRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Complaint",
            id,
        }))?;
    Ok(Json(DataResponse { data: complaint }))
}

/// GET /complaints/by-phone/{phone}
///
/// List complaints filed under an author phone number.
pub async fn get_by_phone(
    State(state): State<AppState>,
    Path(phone): Path<String>,
) -> AppResult<impl IntoResponse> {
    let complaints = ComplaintRepo::find_by_phone(&state.pool, &phone).await?;
    Ok(Json(DataResponse { data: complaints }))
}

/// POST /complaints
///
/// Create a new complaint. Status defaults to "New".
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateComplaint>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let complaint = ComplaintRepo::create(&state.pool, &input).await?;

    tracing::info!(complaint_id = complaint.id, title = %complaint.title, "Complaint created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: complaint })))
}

/// PUT /complaints/{id}
///
/// Partially update a complaint and append a generic "data edited"
/// history entry.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateComplaint>,
) -> AppResult<impl IntoResponse> {
    ensure_complaint_exists(&state.pool, id).await?;

    let complaint = ComplaintRepo::update(&state.pool, id, &input).await?;

    HistoryRepo::append(
        &state.pool,
        &CreateHistoryEntry {
            complaint_id: id,
            change_date: chrono::Utc::now().naive_utc().to_string(),
            author: PANEL_AUTHOR.to_string(),
            field_name: "Complaint data".to_string(),
            old_value: None,
            new_value: Some("Updated".to_string()),
        },
    )
    .await?;

    tracing::info!(complaint_id = id, "Complaint updated");

    Ok(Json(DataResponse { data: complaint }))
}

/// DELETE /complaints/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let removed = ComplaintRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Complaint",
            id,
        }));
    }

    // The cached status and session are meaningless once the record is gone.
    state.reconciler.store().clear(id).await.ok();
    state.sessions.forget(id).await;

    tracing::info!(complaint_id = id, "Complaint deleted");

    Ok(StatusCode::NO_CONTENT)
}
