pub mod complaint;
pub mod health;
pub mod history;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /complaints                          list, create
/// /complaints/by-phone/{phone}         list for author phone
/// /complaints/{id}                     get, update, delete
/// /complaints/{id}/history             history entries
/// /complaints/{id}/processing          processing submissions
/// /complaints/{id}/status              authoritative status
/// /complaints/{id}/actions             legal actions (GET), submit (POST)
///
/// /history                             append entry (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/complaints", complaint::router())
        .nest("/history", history::router())
}
