//! Completion guard.
//!
//! Decides whether an attempt to finish the interview may go through or must
//! first ask for consent or for a missing field.

use serde::{Deserialize, Serialize};

use super::consent::is_consent_pending;
use super::decision::ConsentState;
use super::state::PhaseState;
use crate::domain::foundation::FieldId;

/// Outcome of the completion guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardAction {
    AskConsent,
    AskMissingField,
    AllowCompletion,
}

/// Consent is checked strictly before any field request, even when some
/// fields are already filled.
pub fn completion_guard_action(
    should_collect_data: bool,
    candidate_field_ids: &[FieldId],
    consent_given: ConsentState,
    data_collection_refused: bool,
    missing_field: Option<&FieldId>,
) -> GuardAction {
    if is_consent_pending(
        should_collect_data,
        candidate_field_ids,
        consent_given,
        data_collection_refused,
    ) {
        return GuardAction::AskConsent;
    }

    if should_collect_data && missing_field.is_some() && !data_collection_refused {
        return GuardAction::AskMissingField;
    }

    GuardAction::AllowCompletion
}

/// Runs the guard over a full phase state.
pub fn guard_action_for(state: &PhaseState) -> GuardAction {
    completion_guard_action(
        state.should_collect_data,
        &state.candidate_field_ids,
        state.consent_given,
        state.data_collection_refused,
        state.missing_field.as_ref(),
    )
}
