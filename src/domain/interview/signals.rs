//! Per-turn classification results supplied by the orchestrator.
//!
//! These are plain data. Computing them (goodbye detection, intent
//! classification) belongs to an external classifier; the engine only reads
//! the booleans.

use serde::{Deserialize, Serialize};

/// Signals hinting that the assistant is trying to close the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ClosureSignals {
    /// The assistant reply reads as a farewell.
    pub is_goodbye_response: bool,
    /// A farewell that still ends with a question.
    pub is_goodbye_with_question: bool,
    /// The assistant reply contains no question at all.
    pub has_no_question: bool,
    /// Contact details are being requested before the topic phases ended.
    pub is_premature_contact_request: bool,
    /// The reply carries the interview-complete marker.
    pub has_completion_tag: bool,
}

impl ClosureSignals {
    /// No closure signal at all.
    pub const NONE: ClosureSignals = ClosureSignals {
        is_goodbye_response: false,
        is_goodbye_with_question: false,
        has_no_question: false,
        is_premature_contact_request: false,
        has_completion_tag: false,
    };

    /// Bundle carrying only the completion marker.
    pub fn completion_tag() -> Self {
        Self {
            has_completion_tag: true,
            ..Self::NONE
        }
    }

    /// Closure signals relevant in every phase family.
    pub fn any_closure(&self) -> bool {
        self.is_goodbye_response
            || self.is_goodbye_with_question
            || self.has_no_question
            || self.has_completion_tag
    }
}

/// User response to a deep-dive offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserIntent {
    Accept,
    Refuse,
    /// Neither accepted nor refused; the offer must be asked again.
    Neutral,
}

/// User response to the data-collection consent request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConsentResponse {
    Grant,
    Deny,
    Unclear,
}
