//! Route definitions for complaints and their nested resources.

use axum::routing::get;
use axum::Router;

use crate::handlers::{complaint, history, processing, workflow};
use crate::state::AppState;

/// Routes mounted at `/complaints`.
///
/// ```text
/// GET    /                      list
/// POST   /                      create
/// GET    /by-phone/{phone}      get_by_phone
/// GET    /{id}                  get_by_id
/// PUT    /{id}                  update
/// DELETE /{id}                  delete
/// GET    /{id}/history          history::list_for_complaint
/// GET    /{id}/processing       processing::list_for_complaint
/// GET    /{id}/status           workflow::authoritative_status
/// GET    /{id}/actions          workflow::legal_actions
/// POST   /{id}/actions          workflow::submit_action
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(complaint::list).post(complaint::create))
        .route("/by-phone/{phone}", get(complaint::get_by_phone))
        .route(
            "/{id}",
            get(complaint::get_by_id)
                .put(complaint::update)
                .delete(complaint::delete),
        )
        .route("/{id}/history", get(history::list_for_complaint))
        .route("/{id}/processing", get(processing::list_for_complaint))
        .route("/{id}/status", get(workflow::authoritative_status))
        .route(
            "/{id}/actions",
            get(workflow::legal_actions).post(workflow::submit_action),
        )
}
