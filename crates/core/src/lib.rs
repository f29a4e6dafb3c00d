//! Domain logic for the citizen-complaint tracking backend.
//!
//! Holds the status workflow state machine and the reconciliation logic
//! that keeps the "last known status" cache, the persisted record, and
//! the in-memory session value consistent. No HTTP or database code
//! lives here; the db and api crates plug in through the [`store`] and
//! [`reconcile`] traits.

pub mod error;
pub mod reconcile;
pub mod session;
pub mod status;
pub mod store;
pub mod types;
pub mod workflow;
