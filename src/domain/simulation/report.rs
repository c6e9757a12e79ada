//! Simulation tallies.

use serde::{Deserialize, Serialize};

use crate::domain::interview::{Directive, UserIntent};

/// What happened in one simulated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTrace {
    pub index: usize,
    pub remaining_sec: i64,
    pub closure_action: Directive,
    /// Intents fed to the deep offer, in order. Empty when no offer was made.
    pub intents: Vec<UserIntent>,
    /// Directives returned by the three completion attempts, in order.
    pub completion_actions: Vec<Directive>,
    pub premature_completions: u32,
}

/// Aggregate counts over every simulated session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub seed: u64,
    pub runs: usize,
    pub topic_closures_intercepted: u32,
    pub deep_offers: u32,
    pub deep_offer_reasks: u32,
    pub deep_accepted: u32,
    pub deep_refused: u32,
    pub consent_guard_fired: u32,
    pub missing_field_guard_fired: u32,
    pub completions_allowed: u32,
    /// Terminal directives returned while a gate was still closed. Must stay zero.
    pub premature_completions_allowed: u32,
    pub sessions: Vec<SessionTrace>,
}

impl SimulationReport {
    pub(super) fn new(seed: u64, runs: usize) -> Self {
        Self {
            seed,
            runs,
            sessions: Vec::with_capacity(runs),
            ..Self::default()
        }
    }

    /// True when no session ever completed ahead of its gates.
    pub fn is_clean(&self) -> bool {
        self.premature_completions_allowed == 0
    }
}
