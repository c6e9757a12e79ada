//! Interview session - single-writer owner of one conversation's phase state.
//!
//! The transition engine is stateless, so something has to remember what it
//! decided. `InterviewSession` is that something: it keeps the phase state,
//! the collected profile and the per-field attempt counts, and it enforces
//! the rules the engine leaves to its caller:
//!
//! - once a terminal directive was returned, every later call fails
//! - neutral answers to the deep offer are re-asked a bounded number of
//!   times, then treated as a refusal
//! - a completion marker during the topic phases or an open offer goes
//!   through the closure interceptor, so data collection is only reached
//!   after the deep segment concluded
//! - a phase change outside the transition table is never committed; the
//!   turn becomes `NO_OP`
//! - personal values are only stored once consent was granted
//!
//! Every method takes `&mut self`; concurrent mutation of one session is
//! ruled out by the borrow checker.

use std::sync::Arc;
use tracing::{debug, info, warn};

use super::errors::SessionError;
use crate::config::GuardConfig;
use crate::domain::foundation::{FieldId, Language, SessionId, StateMachine};
use crate::domain::interview::{
    CandidateProfile, ClosureSignals, ConsentResponse, Directive, FieldAttemptCounts,
    InterviewPhase, PhaseState, PhaseTransitionEngine, Transition, UserIntent,
};
use crate::ports::FieldLabelProvider;

/// The field the orchestrator should ask for next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingField {
    pub id: FieldId,
    pub label: String,
    /// Times this field has been asked, including this one.
    pub attempt: u32,
}

/// What the orchestrator should do after a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub directive: Directive,
    pub phase: InterviewPhase,
    /// Set only for `ASK_MISSING_FIELD`.
    pub field: Option<PendingField>,
}

/// One interview conversation.
pub struct InterviewSession {
    id: SessionId,
    state: PhaseState,
    profile: CandidateProfile,
    attempts: FieldAttemptCounts,
    config: GuardConfig,
    language: Language,
    labels: Arc<dyn FieldLabelProvider>,
    deep_offer_reasks: u32,
    terminal: Option<Directive>,
}

impl InterviewSession {
    /// Starts a session at the beginning of the scan.
    pub fn new(
        config: GuardConfig,
        labels: Arc<dyn FieldLabelProvider>,
        should_collect_data: bool,
        candidate_field_ids: Vec<FieldId>,
        remaining_sec: i64,
    ) -> Self {
        let state = PhaseState::new(should_collect_data, candidate_field_ids, remaining_sec);
        let language = config.default_language;
        let mut session = Self {
            id: SessionId::new(),
            state,
            profile: CandidateProfile::new(),
            attempts: FieldAttemptCounts::new(),
            config,
            language,
            labels,
            deep_offer_reasks: 0,
            terminal: None,
        };
        session.refresh_missing_field();
        session
    }

    /// Overrides the label language for this session.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn state(&self) -> &PhaseState {
        &self.state
    }

    pub fn profile(&self) -> &CandidateProfile {
        &self.profile
    }

    pub fn attempts(&self) -> &FieldAttemptCounts {
        &self.attempts
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// The terminal directive this session ended with, if any.
    pub fn terminal_directive(&self) -> Option<Directive> {
        self.terminal
    }

    pub fn is_terminated(&self) -> bool {
        self.terminal.is_some()
    }

    /// Updates the time budget reported by the orchestrator's timer.
    pub fn tick(&mut self, remaining_sec: i64) -> Result<(), SessionError> {
        self.ensure_active()?;
        self.state.remaining_sec = remaining_sec;
        Ok(())
    }

    pub fn complete_scan(&mut self) -> Result<TurnOutcome, SessionError> {
        self.ensure_active()?;
        if self.state.phase != InterviewPhase::Scan {
            return Ok(self.apply("scan_completed", Transition::no_op(self.state.clone())));
        }
        let transition = PhaseTransitionEngine::on_scan_completed(self.state.clone());
        Ok(self.apply("scan_completed", transition))
    }

    pub fn complete_deep(&mut self) -> Result<TurnOutcome, SessionError> {
        self.ensure_active()?;
        if self.state.phase != InterviewPhase::Deep {
            return Ok(self.apply("deep_completed", Transition::no_op(self.state.clone())));
        }
        let transition = PhaseTransitionEngine::on_deep_completed(self.state.clone());
        Ok(self.apply("deep_completed", transition))
    }

    /// The assistant reply carries closure signals.
    pub fn closure_attempt(&mut self, signals: &ClosureSignals) -> Result<TurnOutcome, SessionError> {
        self.ensure_active()?;
        match self.state.phase {
            InterviewPhase::Scan | InterviewPhase::Deep => {
                let transition = PhaseTransitionEngine::on_topic_phase_closure_attempt(
                    self.state.clone(),
                    signals,
                );
                Ok(self.apply("topic_closure_attempt", transition))
            }
            InterviewPhase::DeepOffer => {
                let transition =
                    PhaseTransitionEngine::on_deep_offer_closure_attempt(self.state.clone(), signals);
                Ok(self.apply("deep_offer_closure_attempt", transition))
            }
            InterviewPhase::DataCollection if signals.has_completion_tag => {
                Ok(self.evaluate_completion())
            }
            InterviewPhase::DataCollection => {
                Ok(self.apply("closure_attempt", Transition::no_op(self.state.clone())))
            }
        }
    }

    /// The assistant reply carries the completion marker.
    pub fn completion_tag(&mut self) -> Result<TurnOutcome, SessionError> {
        self.closure_attempt(&ClosureSignals::completion_tag())
    }

    /// The user answered the deep offer.
    pub fn deep_offer_intent(&mut self, intent: UserIntent) -> Result<TurnOutcome, SessionError> {
        self.ensure_active()?;
        let mut intent = intent;
        if intent == UserIntent::Neutral && self.state.phase == InterviewPhase::DeepOffer {
            if self.deep_offer_reasks >= self.config.max_deep_offer_reasks {
                debug!(
                    session_id = %self.id,
                    reasks = self.deep_offer_reasks,
                    "Deep offer re-ask limit reached, treating neutral answer as refusal"
                );
                intent = UserIntent::Refuse;
            } else {
                self.deep_offer_reasks += 1;
            }
        }
        let transition = PhaseTransitionEngine::on_deep_offer_user_intent(self.state.clone(), intent);
        Ok(self.apply("deep_offer_intent", transition))
    }

    /// The user answered the consent request.
    pub fn consent_response(
        &mut self,
        response: ConsentResponse,
    ) -> Result<TurnOutcome, SessionError> {
        self.ensure_active()?;
        self.refresh_missing_field();
        let transition = PhaseTransitionEngine::on_consent_response(self.state.clone(), response);
        Ok(self.apply("consent_response", transition))
    }

    /// Stores an extracted value and returns the next pending field.
    ///
    /// Fails with [`SessionError::ConsentRequired`] until the candidate
    /// granted consent; nothing is stored in that case.
    pub fn record_field(
        &mut self,
        field: FieldId,
        value: impl Into<String>,
    ) -> Result<Option<FieldId>, SessionError> {
        self.ensure_active()?;
        if !self.state.consent_given.is_granted() {
            return Err(SessionError::ConsentRequired {
                session_id: self.id,
                field,
            });
        }
        self.profile.record(field, value);
        self.refresh_missing_field();
        Ok(self.state.missing_field.clone())
    }

    /// Marks a field as declined by the user and returns the next pending field.
    pub fn skip_field(&mut self, field: FieldId) -> Result<Option<FieldId>, SessionError> {
        self.ensure_active()?;
        self.profile.skip(field);
        self.refresh_missing_field();
        Ok(self.state.missing_field.clone())
    }

    fn evaluate_completion(&mut self) -> TurnOutcome {
        self.refresh_missing_field();
        let transition = PhaseTransitionEngine::on_completion_tag(self.state.clone());
        self.apply("completion_tag", transition)
    }

    fn refresh_missing_field(&mut self) {
        self.state = PhaseTransitionEngine::refresh_missing_field(
            self.state.clone(),
            &self.profile,
            &self.attempts,
            self.config.max_field_attempts,
        );
    }

    fn ensure_active(&self) -> Result<(), SessionError> {
        match self.terminal {
            Some(directive) => Err(SessionError::AlreadyTerminated {
                session_id: self.id,
                directive,
            }),
            None => Ok(()),
        }
    }

    fn apply(&mut self, event: &'static str, transition: Transition) -> TurnOutcome {
        let from = self.state.phase;
        let Transition { state, action } = if transition.state.phase != from
            && !from.can_transition_to(&transition.state.phase)
        {
            warn!(
                session_id = %self.id,
                event,
                from = %from,
                to = %transition.state.phase,
                directive = %transition.action,
                "Phase change outside the transition table, ignoring"
            );
            Transition::no_op(self.state.clone())
        } else {
            transition
        };
        if state.phase == InterviewPhase::DeepOffer && from != InterviewPhase::DeepOffer {
            self.deep_offer_reasks = 0;
        }

        self.state = state;

        let field = if action == Directive::AskMissingField {
            let pending = self.state.missing_field.clone().map(|id| {
                let attempt = self.attempts.record_attempt(&id);
                let label = self.labels.label_or_id(&id, self.language);
                PendingField { id, label, attempt }
            });
            self.refresh_missing_field();
            pending
        } else {
            None
        };

        if action.is_terminal() {
            self.terminal = Some(action);
            info!(
                session_id = %self.id,
                event,
                directive = %action,
                refused = self.state.data_collection_refused,
                "Interview completed"
            );
        } else {
            debug!(
                session_id = %self.id,
                event,
                from = %from,
                phase = %self.state.phase,
                directive = %action,
                "Turn evaluated"
            );
        }

        TurnOutcome {
            directive: action,
            phase: self.state.phase,
            field,
        }
    }
}
