//! Domain-level error type shared by the db and api crates.

use crate::types::DbId;

/// Errors produced by domain logic.
///
/// `Transient` covers an unreachable or inconsistent backing store; the
/// reconciler recovers from it locally and never surfaces it to the UI.
/// An unrecognized status string is deliberately NOT an error -- it is a
/// degraded case handled by the conservative fallback action set.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup failed.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A required field for a transition is missing or malformed.
    /// Recoverable: surfaced to the user, no state change happens.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The backing store is unreachable or returned an inconsistent
    /// result. Recovered locally via cached fallback values.
    #[error("Transient store error: {0}")]
    Transient(String),

    /// An unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}
