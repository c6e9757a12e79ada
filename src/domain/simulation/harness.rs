//! Seeded simulation harness.
//!
//! Drives many independent sessions through the transition engine and
//! counts how often each guard fires. The harness keeps its own record of
//! consent and of the collected profile, and judges every terminal directive
//! against that record rather than against the guard under test: a
//! completion while consent is pending or a field is still missing is a
//! premature completion. A clean report has none.
//!
//! All draws come from one `StdRng` seeded from a single integer, so a
//! report is reproducible from its seed. Draws within a run are strictly
//! sequential.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use super::report::{SessionTrace, SimulationReport};
use crate::domain::foundation::FieldId;
use crate::domain::interview::{
    is_consent_pending, next_missing_field, CandidateProfile, ClosureSignals, ConsentState,
    Directive, FieldAttemptCounts, InterviewPhase, PhaseState, PhaseTransitionEngine,
    Transition, UserIntent, DEFAULT_MAX_FIELD_ATTEMPTS,
};

/// Lower bound (inclusive) of the drawn time budget, in seconds.
pub const MIN_REMAINING_SEC: i64 = -30;
/// Upper bound (exclusive) of the drawn time budget, in seconds.
pub const MAX_REMAINING_SEC: i64 = 209;

const REFUSE_WEIGHT: f64 = 0.45;
const ACCEPT_WEIGHT: f64 = 0.35;

const SIMULATED_FIELDS: [&str; 2] = ["name", "email"];

/// Handles a completion marker in data collection.
pub type CompletionHandler = fn(PhaseState) -> Transition;

/// Drives `runs` simulated sessions from one seed.
#[derive(Debug, Clone)]
pub struct SimulationHarness {
    seed: u64,
    runs: usize,
    max_field_attempts: u32,
    candidate_field_ids: Vec<FieldId>,
    on_completion: CompletionHandler,
}

/// What the harness itself knows about one simulated candidate.
struct CandidateRecord {
    consent: ConsentState,
    profile: CandidateProfile,
    attempts: FieldAttemptCounts,
}

impl SimulationHarness {
    pub fn new(seed: u64, runs: usize) -> Self {
        Self {
            seed,
            runs,
            max_field_attempts: DEFAULT_MAX_FIELD_ATTEMPTS,
            candidate_field_ids: SIMULATED_FIELDS
                .iter()
                .filter_map(|id| FieldId::new(*id).ok())
                .collect(),
            on_completion: PhaseTransitionEngine::on_completion_tag,
        }
    }

    /// Replaces the completion handler under test.
    ///
    /// Defaults to [`PhaseTransitionEngine::on_completion_tag`].
    pub fn with_completion_handler(mut self, on_completion: CompletionHandler) -> Self {
        self.on_completion = on_completion;
        self
    }

    /// Overrides the per-field attempt limit used when resolving missing fields.
    pub fn with_max_field_attempts(mut self, max_field_attempts: u32) -> Self {
        self.max_field_attempts = max_field_attempts;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn runs(&self) -> usize {
        self.runs
    }

    /// Runs every session and returns the aggregated report.
    pub fn run(&self) -> SimulationReport {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut report = SimulationReport::new(self.seed, self.runs);

        for index in 0..self.runs {
            let trace = self.run_session(index, &mut rng, &mut report);
            if trace.premature_completions > 0 {
                warn!(
                    seed = self.seed,
                    session = index,
                    premature = trace.premature_completions,
                    "Session completed before its gates cleared"
                );
            }
            report.premature_completions_allowed += trace.premature_completions;
            report.sessions.push(trace);
        }

        info!(
            seed = self.seed,
            runs = self.runs,
            consent_guard_fired = report.consent_guard_fired,
            missing_field_guard_fired = report.missing_field_guard_fired,
            premature = report.premature_completions_allowed,
            "Simulation finished"
        );
        report
    }

    fn run_session(
        &self,
        index: usize,
        rng: &mut StdRng,
        report: &mut SimulationReport,
    ) -> SessionTrace {
        let remaining_sec = rng.gen_range(MIN_REMAINING_SEC..MAX_REMAINING_SEC);
        let state = PhaseState::new(true, self.candidate_field_ids.clone(), remaining_sec)
            .in_phase(InterviewPhase::Deep);

        let signals = draw_signals(rng);
        let closure = PhaseTransitionEngine::on_topic_phase_closure_attempt(state, &signals);
        if closure.action != Directive::NoOp {
            report.topic_closures_intercepted += 1;
        }
        let closure_action = closure.action;

        let mut intents = Vec::new();
        let mut state = if closure.action == Directive::AskDeepOffer {
            report.deep_offers += 1;
            self.resolve_deep_offer(closure.state, rng, report, &mut intents)
        } else {
            PhaseTransitionEngine::on_deep_completed(closure.state).state
        };

        state.phase = InterviewPhase::DataCollection;
        let mut premature_completions = 0;
        let mut completion_actions = Vec::with_capacity(3);
        let mut record = CandidateRecord {
            consent: ConsentState::Undecided,
            profile: CandidateProfile::new(),
            attempts: FieldAttemptCounts::new(),
        };

        // Before consent.
        state = self.refresh(state, &record);
        state = self.attempt_completion(
            state,
            &record,
            report,
            &mut premature_completions,
            &mut completion_actions,
        );

        // Consent granted, fields still missing.
        record.consent = ConsentState::Granted;
        state.consent_given = ConsentState::Granted;
        state = self.attempt_completion(
            state,
            &record,
            report,
            &mut premature_completions,
            &mut completion_actions,
        );

        // Every field collected.
        for field in &self.candidate_field_ids {
            record
                .profile
                .record(field.clone(), format!("simulated-{}", field));
        }
        state = self.refresh(state, &record);
        self.attempt_completion(
            state,
            &record,
            report,
            &mut premature_completions,
            &mut completion_actions,
        );

        debug!(
            session = index,
            remaining_sec,
            closure = %closure_action,
            intents = intents.len(),
            "Simulated session"
        );

        SessionTrace {
            index,
            remaining_sec,
            closure_action,
            intents,
            completion_actions,
            premature_completions,
        }
    }

    /// Feeds one intent to the offer; a neutral answer is re-asked once and
    /// the second draw is forced to accept or refuse.
    fn resolve_deep_offer(
        &self,
        state: PhaseState,
        rng: &mut StdRng,
        report: &mut SimulationReport,
        intents: &mut Vec<UserIntent>,
    ) -> PhaseState {
        let mut intent = draw_intent(rng);
        intents.push(intent);
        let mut transition = PhaseTransitionEngine::on_deep_offer_user_intent(state, intent);

        if transition.action == Directive::AskDeepOffer {
            report.deep_offer_reasks += 1;
            intent = draw_decisive_intent(rng);
            intents.push(intent);
            transition = PhaseTransitionEngine::on_deep_offer_user_intent(transition.state, intent);
        }

        match intent {
            UserIntent::Accept => {
                report.deep_accepted += 1;
                PhaseTransitionEngine::on_deep_completed(transition.state).state
            }
            UserIntent::Refuse | UserIntent::Neutral => {
                report.deep_refused += 1;
                transition.state
            }
        }
    }

    fn refresh(&self, state: PhaseState, record: &CandidateRecord) -> PhaseState {
        PhaseTransitionEngine::refresh_missing_field(
            state,
            &record.profile,
            &record.attempts,
            self.max_field_attempts,
        )
    }

    /// True while the harness's own record says the interview may not end yet.
    fn gates_open(&self, record: &CandidateRecord) -> bool {
        let consent_pending =
            is_consent_pending(true, &self.candidate_field_ids, record.consent, false);
        let field_missing = next_missing_field(
            &self.candidate_field_ids,
            &record.profile,
            &record.attempts,
            self.max_field_attempts,
        )
        .is_some();
        consent_pending || field_missing
    }

    fn attempt_completion(
        &self,
        state: PhaseState,
        record: &CandidateRecord,
        report: &mut SimulationReport,
        premature: &mut u32,
        actions: &mut Vec<Directive>,
    ) -> PhaseState {
        let transition = (self.on_completion)(state);

        match transition.action {
            Directive::AskDataConsent => report.consent_guard_fired += 1,
            Directive::AskMissingField => report.missing_field_guard_fired += 1,
            action if action.is_terminal() => {
                if self.gates_open(record) {
                    *premature += 1;
                } else {
                    report.completions_allowed += 1;
                }
            }
            _ => {}
        }

        actions.push(transition.action);
        transition.state
    }
}

fn draw_signals(rng: &mut StdRng) -> ClosureSignals {
    ClosureSignals {
        is_goodbye_response: rng.gen_bool(0.5),
        is_goodbye_with_question: rng.gen_bool(0.2),
        has_no_question: rng.gen_bool(0.3),
        is_premature_contact_request: rng.gen_bool(0.1),
        has_completion_tag: rng.gen_bool(0.3),
    }
}

fn draw_intent(rng: &mut StdRng) -> UserIntent {
    let roll: f64 = rng.gen();
    if roll < REFUSE_WEIGHT {
        UserIntent::Refuse
    } else if roll < REFUSE_WEIGHT + ACCEPT_WEIGHT {
        UserIntent::Accept
    } else {
        UserIntent::Neutral
    }
}

fn draw_decisive_intent(rng: &mut StdRng) -> UserIntent {
    if rng.gen_bool(REFUSE_WEIGHT / (REFUSE_WEIGHT + ACCEPT_WEIGHT)) {
        UserIntent::Refuse
    } else {
        UserIntent::Accept
    }
}
