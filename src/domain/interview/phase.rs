//! Interview phases.
//!
//! Phases are the macro-stages of an interview. Unlike directives (which tell
//! the orchestrator what to say next), a phase records where in the interview
//! the conversation currently is.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{StateMachine, ValidationError};

/// The macro-stage of an interview.
///
/// Phases flow in a general order but the deep segment can be re-entered:
/// - `Scan` → `Deep` → `DataCollection`
/// - `Scan` → `DeepOffer` → (`Deep` | `DataCollection`)
/// - `Deep` → `DeepOffer` when an over-time exit is converted into an offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterviewPhase {
    /// Broad pass over every topic.
    #[default]
    Scan,

    /// Optional deep dive on the topics gathered during the scan.
    Deep,

    /// Waiting for the user to accept or refuse a deep-dive continuation.
    DeepOffer,

    /// Consent and personal-data fields are being collected.
    DataCollection,
}

impl InterviewPhase {
    /// All phases, in lifecycle order.
    pub const ALL: [InterviewPhase; 4] = [
        InterviewPhase::Scan,
        InterviewPhase::Deep,
        InterviewPhase::DeepOffer,
        InterviewPhase::DataCollection,
    ];

    /// Returns a short label suitable for logs and dashboards.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Scan => "scan",
            Self::Deep => "deep",
            Self::DeepOffer => "deep_offer",
            Self::DataCollection => "data_collection",
        }
    }

    /// Returns true for the topic phases, where questions about the
    /// interview subject are still being asked.
    pub fn is_topic_phase(&self) -> bool {
        matches!(self, Self::Scan | Self::Deep)
    }
}

impl StateMachine for InterviewPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use InterviewPhase::*;
        matches!(
            (self, target),
            (Scan, Deep)
                | (Scan, DeepOffer)
                | (Deep, DeepOffer)
                | (Deep, DataCollection)
                | (DeepOffer, Deep)
                | (DeepOffer, DataCollection)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use InterviewPhase::*;
        match self {
            Scan => vec![Deep, DeepOffer],
            Deep => vec![DeepOffer, DataCollection],
            DeepOffer => vec![Deep, DataCollection],
            DataCollection => vec![],
        }
    }
}

impl fmt::Display for InterviewPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InterviewPhase {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scan" => Ok(Self::Scan),
            "deep" => Ok(Self::Deep),
            "deep_offer" => Ok(Self::DeepOffer),
            "data_collection" => Ok(Self::DataCollection),
            _ => Err(ValidationError::unknown_variant("phase", s)),
        }
    }
}
