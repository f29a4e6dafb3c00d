//! Handlers for the workflow operations exposed to the UI: loading the
//! authoritative status, listing legal actions, and submitting an
//! action.
//!
//! Each handler checks the complaint's workflow session out of the
//! registry for the duration of its resolve/transition sequence and
//! checks it back in at the end, so a sequence runs to completion
//! (including the reconciler's retry delay) before the next one starts
//! from its result.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use smartopolis_core::error::CoreError;
use smartopolis_core::status::StatusTag;
use smartopolis_core::types::DbId;
use smartopolis_core::workflow::{action_options, check_transition, next_status_label, ActionOption};
use smartopolis_db::models::complaint::UpdateComplaint;
use smartopolis_db::models::history::CreateHistoryEntry;
use smartopolis_db::models::processing::CreateProcessing;
use smartopolis_db::repositories::{ComplaintRepo, HistoryRepo, ProcessingRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::complaint::PANEL_AUTHOR;
use crate::response::DataResponse;
use crate::state::AppState;

/* --------------------------------------------------------------------------
Payloads
-------------------------------------------------------------------------- */

/// Response for the authoritative-status and action-list endpoints.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Response for the action-list endpoint.
#[derive(Debug, Serialize)]
pub struct ActionsResponse {
    pub status: String,
    pub actions: Vec<ActionOption>,
}

/// Request body for submitting a workflow action, carrying the
/// processing-form side effects alongside the action id.
#[derive(Debug, Deserialize)]
pub struct SubmitActionInput {
    pub action: String,
    pub assigned_to: Option<String>,
    pub deadline: Option<String>,
    pub official_response: Option<String>,
    #[serde(default)]
    pub publish_result: bool,
    #[serde(default)]
    pub visible_to_all: bool,
    pub rating: Option<i64>,
    pub return_reason: Option<String>,
    pub sms_text: Option<String>,
    pub author_phone: Option<String>,
}

/// Response after a committed transition.
#[derive(Debug, Serialize)]
pub struct SubmitActionResponse {
    pub new_status: String,
}

/* --------------------------------------------------------------------------
Handlers
-------------------------------------------------------------------------- */

/// GET /complaints/{id}/status
///
/// Resolve the authoritative status for a complaint (page load,
/// tab switch).
pub async fn authoritative_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    super::complaint::ensure_complaint_exists(&state.pool, id).await?;

    let mut session = state.sessions.take(id).await;
    let status = state.reconciler.resolve_on_load(&mut session).await;
    state.sessions.put(session).await;

    Ok(Json(DataResponse {
        data: StatusResponse { status },
    }))
}

/// GET /complaints/{id}/actions
///
/// Resolve the authoritative status and return the ordered legal action
/// list the UI should render for it.
pub async fn legal_actions(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    super::complaint::ensure_complaint_exists(&state.pool, id).await?;

    let mut session = state.sessions.take(id).await;
    let status = state.reconciler.resolve_on_load(&mut session).await;
    state.sessions.put(session).await;

    let actions = action_options(&StatusTag::parse(&status));

    Ok(Json(DataResponse {
        data: ActionsResponse { status, actions },
    }))
}

/// POST /complaints/{id}/actions
///
/// Submit a workflow action: compute the transition, enforce the
/// official-response constraint, persist the record, append the status
/// history entry, record the processing submission, and reconcile.
pub async fn submit_action(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SubmitActionInput>,
) -> AppResult<impl IntoResponse> {
    let complaint = ComplaintRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Complaint",
            id,
        }))?;

    let mut session = state.sessions.take(id).await;
    let current = state.reconciler.resolve_on_load(&mut session).await;
    let current_tag = StatusTag::parse(&current);

    let new_status = next_status_label(&input.action, &current_tag);

    // The response typed into the form counts; an older stored response
    // also satisfies the constraint on re-entry.
    let response = input
        .official_response
        .as_deref()
        .filter(|r| !r.trim().is_empty())
        .or(complaint.official_response.as_deref());

    if let Err(err) = check_transition(&new_status, response) {
        // No state change, no history entry, no persistence.
        state.sessions.put(session).await;
        return Err(AppError::Core(err));
    }

    let old_status = complaint.status.clone().unwrap_or_default();

    let update = UpdateComplaint {
        status: Some(new_status.clone()),
        assigned_to: input.assigned_to.clone().filter(|a| !a.trim().is_empty()),
        deadline: input.deadline.clone().filter(|d| !d.trim().is_empty()),
        official_response: input
            .official_response
            .clone()
            .filter(|r| !r.trim().is_empty()),
        ..Default::default()
    };
    ComplaintRepo::update(&state.pool, id, &update).await?;

    HistoryRepo::append(
        &state.pool,
        &CreateHistoryEntry {
            complaint_id: id,
            change_date: chrono::Utc::now().naive_utc().to_string(),
            author: PANEL_AUTHOR.to_string(),
            field_name: "Status".to_string(),
            old_value: Some(old_status.clone()),
            new_value: Some(new_status.clone()),
        },
    )
    .await?;

    ProcessingRepo::create(
        &state.pool,
        &CreateProcessing {
            complaint_id: id,
            action: Some(new_status.clone()),
            publish_result: input.publish_result,
            visible_to_all: input.visible_to_all,
            rating: input.rating,
            assigned_to: input.assigned_to.clone(),
            official_response: input.official_response.clone(),
            return_reason: input.return_reason.clone(),
            sms_text: input.sms_text.clone(),
            author_phone: input.author_phone.clone(),
            deadline: input.deadline.clone(),
            ..Default::default()
        },
    )
    .await?;

    let final_status = state
        .reconciler
        .resolve_after_write(&mut session, &new_status)
        .await;
    state.sessions.put(session).await;

    tracing::info!(
        complaint_id = id,
        action = %input.action,
        old_status = %old_status,
        new_status = %final_status,
        "Workflow action committed"
    );

    Ok(Json(DataResponse {
        data: SubmitActionResponse {
            new_status: final_status,
        },
    }))
}
