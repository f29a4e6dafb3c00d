//! Handlers for the append-only change history.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use smartopolis_core::types::DbId;
use smartopolis_db::models::history::CreateHistoryEntry;
use smartopolis_db::repositories::HistoryRepo;

use crate::error::AppResult;
use crate::handlers::complaint::ensure_complaint_exists;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /complaints/{id}/history
///
/// List all history entries for a complaint, newest first.
pub async fn list_for_complaint(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_complaint_exists(&state.pool, id).await?;
    let entries = HistoryRepo::list_for_complaint(&state.pool, id).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// POST /history
///
/// Append a history entry.
pub async fn append(
    State(state): State<AppState>,
    Json(input): Json<CreateHistoryEntry>,
) -> AppResult<impl IntoResponse> {
    ensure_complaint_exists(&state.pool, input.complaint_id).await?;

    let entry = HistoryRepo::append(&state.pool, &input).await?;

    tracing::info!(
        complaint_id = entry.complaint_id,
        field = %entry.field_name,
        "History entry appended"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}
