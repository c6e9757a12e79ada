//! Per-conversation phase state.

use serde::{Deserialize, Serialize};

use super::decision::{ConsentState, DeepDecision};
use super::phase::InterviewPhase;
use crate::domain::foundation::FieldId;

/// Snapshot of everything the transition engine needs to decide a turn.
///
/// The orchestrator owns one `PhaseState` per conversation and passes it by
/// value into every engine call; the engine hands back the updated copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseState {
    pub phase: InterviewPhase,
    /// Whether this interview collects personal data at all.
    pub should_collect_data: bool,
    /// Ordered by collection priority.
    pub candidate_field_ids: Vec<FieldId>,
    pub deep_accepted: DeepDecision,
    pub consent_given: ConsentState,
    /// Monotone: once set the user has opted out for the rest of the session.
    pub data_collection_refused: bool,
    pub missing_field: Option<FieldId>,
    /// Seconds left in the interview budget. Negative means over time.
    pub remaining_sec: i64,
}

impl PhaseState {
    /// Creates the state for a new interview at the start of the scan.
    pub fn new(
        should_collect_data: bool,
        candidate_field_ids: Vec<FieldId>,
        remaining_sec: i64,
    ) -> Self {
        Self {
            phase: InterviewPhase::Scan,
            should_collect_data,
            candidate_field_ids,
            deep_accepted: DeepDecision::Undecided,
            consent_given: ConsentState::Undecided,
            data_collection_refused: false,
            missing_field: None,
            remaining_sec,
        }
    }

    /// Returns a copy positioned at the given phase.
    pub fn in_phase(mut self, phase: InterviewPhase) -> Self {
        self.phase = phase;
        self
    }

    /// Returns a copy with an updated time budget.
    pub fn with_remaining_sec(mut self, remaining_sec: i64) -> Self {
        self.remaining_sec = remaining_sec;
        self
    }

    /// True once the time budget is used up (zero or negative).
    pub fn is_time_exhausted(&self) -> bool {
        self.remaining_sec <= 0
    }
}

impl Default for PhaseState {
    fn default() -> Self {
        Self::new(false, Vec::new(), 0)
    }
}
