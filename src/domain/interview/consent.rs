//! Consent gate.

use super::decision::ConsentState;
use crate::domain::foundation::FieldId;

/// Returns true while personal data may not be collected yet because the
/// user has not explicitly opted in.
///
/// Refusal overrides everything: once the user opted out there is nothing
/// left to ask consent for.
pub fn is_consent_pending(
    should_collect_data: bool,
    candidate_field_ids: &[FieldId],
    consent_given: ConsentState,
    data_collection_refused: bool,
) -> bool {
    if !should_collect_data || candidate_field_ids.is_empty() || data_collection_refused {
        return false;
    }
    !consent_given.is_granted()
}
