//! Tri-state user decisions tracked across turns.

use serde::{Deserialize, Serialize};

/// Whether the user opted into the deep-dive continuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeepDecision {
    #[default]
    Undecided,
    Accepted,
    Declined,
}

impl DeepDecision {
    /// Returns true only for an explicit acceptance.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Whether the user consented to personal-data collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConsentState {
    #[default]
    Undecided,
    Granted,
    Withheld,
}

impl ConsentState {
    /// Returns true only for explicit consent.
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_undecided() {
        assert_eq!(DeepDecision::default(), DeepDecision::Undecided);
        assert_eq!(ConsentState::default(), ConsentState::Undecided);
    }

    #[test]
    fn only_explicit_values_count() {
        assert!(DeepDecision::Accepted.is_accepted());
        assert!(!DeepDecision::Undecided.is_accepted());
        assert!(!DeepDecision::Declined.is_accepted());

        assert!(ConsentState::Granted.is_granted());
        assert!(!ConsentState::Undecided.is_granted());
        assert!(!ConsentState::Withheld.is_granted());
    }

    #[test]
    fn serializes_to_snake_case() {
        assert_eq!(serde_json::to_string(&ConsentState::Withheld).unwrap(), "\"withheld\"");
        assert_eq!(serde_json::to_string(&DeepDecision::Accepted).unwrap(), "\"accepted\"");
    }
}
