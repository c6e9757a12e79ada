//! Directives returned to the orchestrator after every engine call.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::state::PhaseState;

/// Instruction telling the orchestrator what to do next.
///
/// The orchestrator alone turns a directive into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Directive {
    /// Propose (or re-propose) the deep-dive continuation.
    AskDeepOffer,
    /// Keep the conversation on topic with another question.
    AskTopicQuestion,
    /// Ask for explicit consent to collect personal data.
    AskDataConsent,
    /// Ask for the pending candidate field.
    AskMissingField,
    /// Begin the deep-dive segment.
    StartDeep,
    /// Close the interview without collecting personal data.
    CompleteWithoutData,
    /// Close the interview with all gates cleared.
    CompleteInterview,
    /// Nothing to do; the event does not apply in the current phase.
    NoOp,
}

impl Directive {
    /// Returns true for the two directives that end the interview.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::CompleteInterview | Self::CompleteWithoutData)
    }

    /// Returns the wire name of the directive.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AskDeepOffer => "ASK_DEEP_OFFER",
            Self::AskTopicQuestion => "ASK_TOPIC_QUESTION",
            Self::AskDataConsent => "ASK_DATA_CONSENT",
            Self::AskMissingField => "ASK_MISSING_FIELD",
            Self::StartDeep => "START_DEEP",
            Self::CompleteWithoutData => "COMPLETE_WITHOUT_DATA",
            Self::CompleteInterview => "COMPLETE_INTERVIEW",
            Self::NoOp => "NO_OP",
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one engine call: the updated state and what to do next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub state: PhaseState,
    pub action: Directive,
}

impl Transition {
    pub fn new(state: PhaseState, action: Directive) -> Self {
        Self { state, action }
    }

    /// Leaves the state untouched and returns `NO_OP`.
    pub fn no_op(state: PhaseState) -> Self {
        Self::new(state, Directive::NoOp)
    }
}
