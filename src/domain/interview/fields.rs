//! Candidate field bookkeeping and the missing-field resolver.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::FieldId;

/// Default number of times a field may be asked before it is abandoned.
pub const DEFAULT_MAX_FIELD_ATTEMPTS: u32 = 3;

/// Raw value the extraction layer writes when the user declines a field.
pub const SKIP_SENTINEL: &str = "__skipped__";

/// A value recorded against a candidate field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    Collected(String),
    /// The user explicitly declined to give this field.
    Skipped,
}

impl FieldValue {
    /// Interprets a raw extracted string, mapping the skip sentinel to `Skipped`.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.trim() == SKIP_SENTINEL {
            Self::Skipped
        } else {
            Self::Collected(raw)
        }
    }
}

/// Resolution status of a single candidate field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldStatus {
    Collected,
    Skipped,
    /// Asked the maximum number of times without an answer.
    Exhausted,
    Pending,
}

impl FieldStatus {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// Collected values keyed by field id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateProfile(HashMap<FieldId, FieldValue>);

impl CandidateProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a raw extracted value (the skip sentinel marks the field skipped).
    pub fn record(&mut self, field: FieldId, raw: impl Into<String>) {
        self.0.insert(field, FieldValue::from_raw(raw));
    }

    /// Marks a field as explicitly skipped.
    pub fn skip(&mut self, field: FieldId) {
        self.0.insert(field, FieldValue::Skipped);
    }

    pub fn get(&self, field: &FieldId) -> Option<&FieldValue> {
        self.0.get(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(FieldId, FieldValue)> for CandidateProfile {
    fn from_iter<T: IntoIterator<Item = (FieldId, FieldValue)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Number of times each field has been asked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldAttemptCounts(HashMap<FieldId, u32>);

impl FieldAttemptCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts recorded for a field; zero when never asked.
    pub fn get(&self, field: &FieldId) -> u32 {
        self.0.get(field).copied().unwrap_or(0)
    }

    /// Increments the attempt count for a field and returns the new count.
    pub fn record_attempt(&mut self, field: &FieldId) -> u32 {
        let count = self.0.entry(field.clone()).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }
}

impl FromIterator<(FieldId, u32)> for FieldAttemptCounts {
    fn from_iter<T: IntoIterator<Item = (FieldId, u32)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Classifies one field against the profile and attempt counts.
///
/// A collected value counts only when it is non-blank after trimming.
/// Attempt exhaustion is checked last so an answer given on the final
/// attempt still reads as collected.
pub fn field_status(
    field: &FieldId,
    profile: &CandidateProfile,
    attempt_counts: &FieldAttemptCounts,
    max_attempts: u32,
) -> FieldStatus {
    match profile.get(field) {
        Some(FieldValue::Skipped) => return FieldStatus::Skipped,
        Some(FieldValue::Collected(raw)) => {
            let value = raw.trim();
            if value == SKIP_SENTINEL {
                return FieldStatus::Skipped;
            }
            if !value.is_empty() {
                return FieldStatus::Collected;
            }
        }
        None => {}
    }

    if attempt_counts.get(field) >= max_attempts {
        FieldStatus::Exhausted
    } else {
        FieldStatus::Pending
    }
}

/// Returns the first candidate field that is still unresolved, in priority order.
pub fn next_missing_field(
    candidate_field_ids: &[FieldId],
    profile: &CandidateProfile,
    attempt_counts: &FieldAttemptCounts,
    max_attempts: u32,
) -> Option<FieldId> {
    candidate_field_ids
        .iter()
        .find(|field| !field_status(field, profile, attempt_counts, max_attempts).is_resolved())
        .cloned()
}
