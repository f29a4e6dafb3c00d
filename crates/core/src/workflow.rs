//! The status workflow state machine.
//!
//! Two pure operations: [`legal_actions`] computes the action set the UI
//! may offer for a status, and [`next_status`] computes the transition an
//! accepted action produces. Both are total over the closed enumeration
//! plus the blank and unrecognized cases, so no complaint ever strands
//! the operator with zero available actions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;
use crate::status::{Status, StatusTag};

/// A workflow action an operator can take on a complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    SendToModeration,
    Reject,
    Assign,
    TakeInProgress,
    MarkTentativelyResolved,
    Close,
}

impl Action {
    /// Stable wire identifier.
    pub fn id(self) -> &'static str {
        match self {
            Action::SendToModeration => "SendToModeration",
            Action::Reject => "Reject",
            Action::Assign => "Assign",
            Action::TakeInProgress => "TakeInProgress",
            Action::MarkTentativelyResolved => "MarkTentativelyResolved",
            Action::Close => "Close",
        }
    }

    /// Human-readable label for the action select control.
    pub fn label(self) -> &'static str {
        match self {
            Action::SendToModeration => "Send to moderation",
            Action::Reject => "Reject",
            Action::Assign => "Assign to responsible",
            Action::TakeInProgress => "Take into work",
            Action::MarkTentativelyResolved => "Mark tentatively resolved",
            Action::Close => "Close",
        }
    }

    /// Parse a wire identifier back into an action.
    pub fn parse(raw: &str) -> Option<Action> {
        match raw.trim() {
            "SendToModeration" => Some(Action::SendToModeration),
            "Reject" => Some(Action::Reject),
            "Assign" => Some(Action::Assign),
            "TakeInProgress" => Some(Action::TakeInProgress),
            "MarkTentativelyResolved" => Some(Action::MarkTentativelyResolved),
            "Close" => Some(Action::Close),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// One entry of the ordered action list rendered by the UI.
#[derive(Debug, Clone, Serialize)]
pub struct ActionOption {
    pub id: &'static str,
    pub label: &'static str,
}

impl From<Action> for ActionOption {
    fn from(action: Action) -> Self {
        ActionOption {
            id: action.id(),
            label: action.label(),
        }
    }
}

/// Compute the legal action set for a status.
///
/// The final branch is a deliberate safety net: an unrecognized legacy
/// status string (and the terminal Rejected/Closed states) gets the full
/// superset of recovery actions instead of a dead end.
pub fn legal_actions(tag: &StatusTag) -> Vec<Action> {
    match tag {
        StatusTag::Blank | StatusTag::Known(Status::New) => {
            vec![Action::SendToModeration, Action::Reject]
        }
        StatusTag::Known(Status::PendingModeration) => vec![Action::Assign, Action::Reject],
        StatusTag::Known(Status::Assigned) => vec![Action::TakeInProgress],
        StatusTag::Known(Status::InProgress) => {
            vec![Action::SendToModeration, Action::MarkTentativelyResolved]
        }
        StatusTag::Known(Status::TentativelyResolved) | StatusTag::Known(Status::UnderReview) => {
            vec![Action::Assign, Action::Close]
        }
        StatusTag::Known(Status::Rejected)
        | StatusTag::Known(Status::Closed)
        | StatusTag::Other(_) => vec![Action::Assign, Action::Reject, Action::Close],
    }
}

/// The ordered `{id, label}` list for the UI, derived from
/// [`legal_actions`].
pub fn action_options(tag: &StatusTag) -> Vec<ActionOption> {
    legal_actions(tag).into_iter().map(ActionOption::from).collect()
}

/// Deterministic transition function.
///
/// The same action can land in different states depending on where it
/// starts: an in-progress executor sending "to moderation" is finishing
/// their work, so the complaint routes directly to the resolved-pending-
/// review state instead of taking a second moderation hop.
pub fn next_status(action: Action, current: &StatusTag) -> Status {
    match action {
        Action::SendToModeration => {
            if *current == StatusTag::Known(Status::InProgress) {
                Status::TentativelyResolved
            } else {
                Status::PendingModeration
            }
        }
        Action::MarkTentativelyResolved => Status::TentativelyResolved,
        Action::Assign => Status::Assigned,
        Action::TakeInProgress => Status::InProgress,
        Action::Reject => Status::Rejected,
        Action::Close => Status::Closed,
    }
}

/// String-level transition: recognized action ids go through
/// [`next_status`]; anything else passes through as the next status
/// label verbatim (treated as an already-resolved external status).
pub fn next_status_label(action_raw: &str, current: &StatusTag) -> String {
    match Action::parse(action_raw) {
        Some(action) => next_status(action, current).as_str().to_string(),
        None => action_raw.trim().to_string(),
    }
}

/// Enforce the side-constraint on transitions into TentativelyResolved:
/// the official response must be filled in before the complaint can be
/// handed back for review. Checked before any persistence happens.
pub fn check_transition(next: &str, official_response: Option<&str>) -> Result<(), CoreError> {
    if StatusTag::parse(next) == StatusTag::Known(Status::TentativelyResolved)
        && official_response.map_or(true, |r| r.trim().is_empty())
    {
        return Err(CoreError::Validation(
            "An official response is required before marking a complaint tentatively resolved"
                .to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::ALL_STATUSES;
    use assert_matches::assert_matches;

    #[test]
    fn every_status_has_at_least_one_action() {
        for status in ALL_STATUSES {
            assert!(
                !legal_actions(&StatusTag::Known(*status)).is_empty(),
                "{status} offers no actions"
            );
        }
        assert!(!legal_actions(&StatusTag::Blank).is_empty());
        assert!(!legal_actions(&StatusTag::Other("whatever".into())).is_empty());
    }

    #[test]
    fn new_and_blank_offer_moderation_or_rejection() {
        let expected = vec![Action::SendToModeration, Action::Reject];
        assert_eq!(legal_actions(&StatusTag::Blank), expected);
        assert_eq!(legal_actions(&StatusTag::Known(Status::New)), expected);
    }

    #[test]
    fn assigned_only_allows_taking_into_work() {
        assert_eq!(
            legal_actions(&StatusTag::Known(Status::Assigned)),
            vec![Action::TakeInProgress]
        );
    }

    #[test]
    fn legacy_under_review_matches_tentatively_resolved() {
        assert_eq!(
            legal_actions(&StatusTag::Known(Status::UnderReview)),
            legal_actions(&StatusTag::Known(Status::TentativelyResolved)),
        );
    }

    #[test]
    fn terminal_and_unknown_statuses_get_recovery_superset() {
        let expected = vec![Action::Assign, Action::Reject, Action::Close];
        assert_eq!(legal_actions(&StatusTag::Known(Status::Rejected)), expected);
        assert_eq!(legal_actions(&StatusTag::Known(Status::Closed)), expected);
        assert_eq!(
            legal_actions(&StatusTag::Other("Migrated-17".into())),
            expected
        );
    }

    #[test]
    fn send_to_moderation_from_in_progress_resolves_directly() {
        assert_eq!(
            next_status(Action::SendToModeration, &StatusTag::Known(Status::InProgress)),
            Status::TentativelyResolved
        );
    }

    #[test]
    fn send_to_moderation_from_new_goes_to_moderation() {
        assert_eq!(
            next_status(Action::SendToModeration, &StatusTag::Known(Status::New)),
            Status::PendingModeration
        );
        assert_eq!(
            next_status(Action::SendToModeration, &StatusTag::Blank),
            Status::PendingModeration
        );
    }

    #[test]
    fn send_to_moderation_from_other_states_goes_to_moderation() {
        assert_eq!(
            next_status(
                Action::SendToModeration,
                &StatusTag::Known(Status::TentativelyResolved)
            ),
            Status::PendingModeration
        );
        assert_eq!(
            next_status(Action::SendToModeration, &StatusTag::Other("x".into())),
            Status::PendingModeration
        );
    }

    #[test]
    fn unconditional_transitions() {
        let from = StatusTag::Known(Status::New);
        assert_eq!(next_status(Action::Assign, &from), Status::Assigned);
        assert_eq!(next_status(Action::TakeInProgress, &from), Status::InProgress);
        assert_eq!(next_status(Action::Reject, &from), Status::Rejected);
        assert_eq!(next_status(Action::Close, &from), Status::Closed);
        assert_eq!(
            next_status(Action::MarkTentativelyResolved, &from),
            Status::TentativelyResolved
        );
    }

    #[test]
    fn reject_from_new_then_fallback_actions() {
        let next = next_status(Action::Reject, &StatusTag::Known(Status::New));
        assert_eq!(next, Status::Rejected);
        assert_eq!(
            legal_actions(&StatusTag::Known(next)),
            vec![Action::Assign, Action::Reject, Action::Close]
        );
    }

    #[test]
    fn unrecognized_action_passes_through_as_label() {
        assert_eq!(
            next_status_label("Archived by import", &StatusTag::Blank),
            "Archived by import"
        );
    }

    #[test]
    fn recognized_action_label_uses_transition_table() {
        assert_eq!(
            next_status_label("SendToModeration", &StatusTag::Known(Status::InProgress)),
            "TentativelyResolved"
        );
    }

    #[test]
    fn tentatively_resolved_requires_official_response() {
        assert_matches!(
            check_transition("TentativelyResolved", None),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            check_transition("TentativelyResolved", Some("   ")),
            Err(CoreError::Validation(_))
        );
        assert!(check_transition("TentativelyResolved", Some("Pothole fixed")).is_ok());
    }

    #[test]
    fn other_transitions_do_not_require_a_response() {
        assert!(check_transition("Rejected", None).is_ok());
        assert!(check_transition("PendingModeration", None).is_ok());
    }

    #[test]
    fn action_options_carry_ids_and_labels() {
        let options = action_options(&StatusTag::Known(Status::Assigned));
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].id, "TakeInProgress");
        assert_eq!(options[0].label, "Take into work");
    }

    #[test]
    fn action_ids_round_trip() {
        for action in [
            Action::SendToModeration,
            Action::Reject,
            Action::Assign,
            Action::TakeInProgress,
            Action::MarkTentativelyResolved,
            Action::Close,
        ] {
            assert_eq!(Action::parse(action.id()), Some(action));
        }
        assert_eq!(Action::parse("NotAnAction"), None);
    }
}
