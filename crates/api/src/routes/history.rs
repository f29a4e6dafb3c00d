//! Route definitions for direct history appends.
//!
//! Listing lives under the complaint router
//! (`/complaints/{id}/history`); this group only carries the top-level
//! append endpoint.

use axum::routing::post;
use axum::Router;

use crate::handlers::history;
use crate::state::AppState;

/// Routes mounted at `/history`.
///
/// ```text
/// POST   /        append
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(history::append))
}
