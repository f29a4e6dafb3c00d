//! Handler for reading processing submissions.
//!
//! Rows are written by the workflow submit handler; this only exposes
//! them for the processing tab.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use smartopolis_core::types::DbId;
use smartopolis_db::repositories::ProcessingRepo;

use crate::error::AppResult;
use crate::handlers::complaint::ensure_complaint_exists;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /complaints/{id}/processing
///
/// List processing submissions for a complaint, newest first.
pub async fn list_for_complaint(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_complaint_exists(&state.pool, id).await?;
    let rows = ProcessingRepo::list_for_complaint(&state.pool, id).await?;
    Ok(Json(DataResponse { data: rows }))
}
