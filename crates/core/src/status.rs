//! Canonical complaint status enumeration and boundary normalization.
//!
//! The `status` column of a complaint IS the state of the workflow state
//! machine. Records created by older imports carry several spelling
//! variants for the same logical state, so every raw string coming from
//! the record, the cache, or the wire is folded into a [`StatusTag`]
//! before the workflow engine sees it. The translation table lives here,
//! at the boundary, never inside the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed status enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    New,
    PendingModeration,
    Assigned,
    InProgress,
    TentativelyResolved,
    /// Legacy alias kept for records written by the previous system;
    /// behaves like `TentativelyResolved` for action selection.
    UnderReview,
    Rejected,
    Closed,
}

/// All statuses in the closed enumeration.
pub const ALL_STATUSES: &[Status] = &[
    Status::New,
    Status::PendingModeration,
    Status::Assigned,
    Status::InProgress,
    Status::TentativelyResolved,
    Status::UnderReview,
    Status::Rejected,
    Status::Closed,
];

impl Status {
    /// Canonical wire label for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::New => "New",
            Status::PendingModeration => "PendingModeration",
            Status::Assigned => "Assigned",
            Status::InProgress => "InProgress",
            Status::TentativelyResolved => "TentativelyResolved",
            Status::UnderReview => "UnderReview",
            Status::Rejected => "Rejected",
            Status::Closed => "Closed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw status string classified at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusTag {
    /// Empty, whitespace-only, or absent.
    Blank,
    /// A recognized canonical or legacy spelling.
    Known(Status),
    /// A non-empty value outside the enumeration. Not an error: the
    /// engine offers the conservative fallback action set for it.
    Other(String),
}

impl StatusTag {
    /// Classify a raw status string.
    ///
    /// Legacy spellings are folded into their canonical status; anything
    /// non-empty and unrecognized is preserved verbatim as `Other`.
    pub fn parse(raw: &str) -> StatusTag {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return StatusTag::Blank;
        }
        match trimmed {
            "New" => StatusTag::Known(Status::New),
            "PendingModeration" | "Pending moderation" | "On moderation" => {
                StatusTag::Known(Status::PendingModeration)
            }
            // Three spellings of the same logical state exist in old data.
            "Assigned" | "Assigned to responsible" | "Assign to responsible" => {
                StatusTag::Known(Status::Assigned)
            }
            "InProgress" | "In progress" | "Taken into work" => {
                StatusTag::Known(Status::InProgress)
            }
            "TentativelyResolved" | "Tentatively resolved" | "Preliminarily resolved" => {
                StatusTag::Known(Status::TentativelyResolved)
            }
            "UnderReview" | "Under review" => StatusTag::Known(Status::UnderReview),
            "Rejected" => StatusTag::Known(Status::Rejected),
            "Closed" => StatusTag::Known(Status::Closed),
            other => StatusTag::Other(other.to_string()),
        }
    }

    /// Classify an optional raw status (absent counts as blank).
    pub fn parse_opt(raw: Option<&str>) -> StatusTag {
        match raw {
            Some(s) => StatusTag::parse(s),
            None => StatusTag::Blank,
        }
    }

    /// The label this tag renders as. Blank falls back to the safe
    /// default "New" -- an unrecognized blank status is never persisted
    /// or rendered as-is.
    pub fn label(&self) -> &str {
        match self {
            StatusTag::Blank => Status::New.as_str(),
            StatusTag::Known(s) => s.as_str(),
            StatusTag::Other(s) => s,
        }
    }
}

/// Whether two raw status strings name the same logical state.
///
/// Used by the reconciler so a legacy spelling coming back from the
/// repository does not register as a disagreement with the canonical
/// label that was just written.
pub fn same_status(a: &str, b: &str) -> bool {
    StatusTag::parse(a) == StatusTag::parse(b)
}
