//! Phase transition engine.
//!
//! Every function takes the current [`PhaseState`] by value and returns a
//! [`Transition`] carrying the updated state and the directive for the
//! orchestrator. Functions are total: an event that does not apply in the
//! current phase yields `NO_OP` with the state untouched.
//!
//! The engine keeps nothing between calls. Latching terminal directives and
//! bounding deep-offer re-asks are the caller's job.

use super::closure::{should_intercept_deep_offer_closure, should_intercept_topic_closure};
use super::consent::is_consent_pending;
use super::decision::{ConsentState, DeepDecision};
use super::directive::{Directive, Transition};
use super::fields::{next_missing_field, CandidateProfile, FieldAttemptCounts};
use super::guard::{guard_action_for, GuardAction};
use super::phase::InterviewPhase;
use super::signals::{ClosureSignals, ConsentResponse, UserIntent};
use super::state::PhaseState;

/// Pure transition functions for the interview state machine.
pub struct PhaseTransitionEngine;

impl PhaseTransitionEngine {
    /// The scan is over: go deep while time remains, otherwise offer it.
    pub fn on_scan_completed(mut state: PhaseState) -> Transition {
        if state.remaining_sec > 0 {
            state.phase = InterviewPhase::Deep;
            state.deep_accepted = DeepDecision::Undecided;
            Transition::new(state, Directive::StartDeep)
        } else {
            Self::offer_deep(state)
        }
    }

    /// The deep segment is over: ask consent, or finish when no data is wanted.
    pub fn on_deep_completed(mut state: PhaseState) -> Transition {
        state.phase = InterviewPhase::DataCollection;
        if state.should_collect_data {
            state.consent_given = ConsentState::Withheld;
            Transition::new(state, Directive::AskDataConsent)
        } else {
            Transition::new(state, Directive::CompleteWithoutData)
        }
    }

    /// The assistant tried to close a topic phase.
    ///
    /// An over-time exit from an unaccepted deep segment becomes a
    /// continuation offer; any other intercepted closure keeps asking.
    pub fn on_topic_phase_closure_attempt(
        state: PhaseState,
        signals: &ClosureSignals,
    ) -> Transition {
        if !should_intercept_topic_closure(state.phase, signals) {
            return Transition::no_op(state);
        }

        if state.phase == InterviewPhase::Deep
            && state.is_time_exhausted()
            && !state.deep_accepted.is_accepted()
        {
            return Self::offer_deep(state);
        }

        Transition::new(state, Directive::AskTopicQuestion)
    }

    /// The assistant tried to close while a deep offer is still unanswered.
    pub fn on_deep_offer_closure_attempt(
        state: PhaseState,
        signals: &ClosureSignals,
    ) -> Transition {
        if should_intercept_deep_offer_closure(state.phase, signals) {
            Transition::new(state, Directive::AskDeepOffer)
        } else {
            Transition::no_op(state)
        }
    }

    /// The user answered the deep offer.
    ///
    /// `Neutral` repeats the offer without bound; the caller decides when to
    /// stop re-asking.
    pub fn on_deep_offer_user_intent(mut state: PhaseState, intent: UserIntent) -> Transition {
        if state.phase != InterviewPhase::DeepOffer {
            return Transition::no_op(state);
        }

        match intent {
            UserIntent::Accept => {
                state.phase = InterviewPhase::Deep;
                state.deep_accepted = DeepDecision::Accepted;
                Transition::new(state, Directive::StartDeep)
            }
            UserIntent::Refuse => Self::on_deep_completed(state),
            UserIntent::Neutral => Transition::new(state, Directive::AskDeepOffer),
        }
    }

    /// The assistant emitted the completion marker.
    pub fn on_completion_tag(mut state: PhaseState) -> Transition {
        match guard_action_for(&state) {
            GuardAction::AskConsent => {
                state.phase = InterviewPhase::DataCollection;
                state.consent_given = ConsentState::Withheld;
                Transition::new(state, Directive::AskDataConsent)
            }
            GuardAction::AskMissingField => {
                state.phase = InterviewPhase::DataCollection;
                Transition::new(state, Directive::AskMissingField)
            }
            GuardAction::AllowCompletion => {
                let action = if state.data_collection_refused {
                    Directive::CompleteWithoutData
                } else {
                    Directive::CompleteInterview
                };
                Transition::new(state, action)
            }
        }
    }

    /// The user answered the consent request.
    ///
    /// Only applies in data collection while consent is still pending.
    /// Granting hands over to the completion guard; denying sets the
    /// permanent refusal flag and ends the interview without data.
    pub fn on_consent_response(mut state: PhaseState, response: ConsentResponse) -> Transition {
        let pending = is_consent_pending(
            state.should_collect_data,
            &state.candidate_field_ids,
            state.consent_given,
            state.data_collection_refused,
        );
        if state.phase != InterviewPhase::DataCollection || !pending {
            return Transition::no_op(state);
        }

        match response {
            ConsentResponse::Grant => {
                state.consent_given = ConsentState::Granted;
                Self::on_completion_tag(state)
            }
            ConsentResponse::Deny => {
                state.consent_given = ConsentState::Withheld;
                state.data_collection_refused = true;
                Transition::new(state, Directive::CompleteWithoutData)
            }
            ConsentResponse::Unclear => Transition::new(state, Directive::AskDataConsent),
        }
    }

    /// Recomputes the pending field from the latest profile and attempts.
    pub fn refresh_missing_field(
        mut state: PhaseState,
        profile: &CandidateProfile,
        attempt_counts: &FieldAttemptCounts,
        max_attempts: u32,
    ) -> PhaseState {
        state.missing_field = next_missing_field(
            &state.candidate_field_ids,
            profile,
            attempt_counts,
            max_attempts,
        );
        state
    }

    fn offer_deep(mut state: PhaseState) -> Transition {
        state.phase = InterviewPhase::DeepOffer;
        state.deep_accepted = DeepDecision::Declined;
        Transition::new(state, Directive::AskDeepOffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::FieldId;

    fn field(id: &str) -> FieldId {
        FieldId::new(id).unwrap()
    }

    fn collecting_state(phase: InterviewPhase, remaining_sec: i64) -> PhaseState {
        PhaseState::new(true, vec![field("name"), field("email")], remaining_sec).in_phase(phase)
    }

    fn goodbye() -> ClosureSignals {
        ClosureSignals {
            is_goodbye_response: true,
            ..ClosureSignals::NONE
        }
    }

    mod scan_completed {
        use super::*;

        #[test]
        fn time_left_starts_deep() {
            let result = PhaseTransitionEngine::on_scan_completed(collecting_state(
                InterviewPhase::Scan,
                120,
            ));
            assert_eq!(result.action, Directive::StartDeep);
            assert_eq!(result.state.phase, InterviewPhase::Deep);
            assert_eq!(result.state.deep_accepted, DeepDecision::Undecided);
        }

        #[test]
        fn zero_time_offers_deep() {
            let result =
                PhaseTransitionEngine::on_scan_completed(collecting_state(InterviewPhase::Scan, 0));
            assert_eq!(result.action, Directive::AskDeepOffer);
            assert_eq!(result.state.phase, InterviewPhase::DeepOffer);
            assert_eq!(result.state.deep_accepted, DeepDecision::Declined);
        }

        #[test]
        fn negative_time_is_exhausted_not_invalid() {
            let result = PhaseTransitionEngine::on_scan_completed(collecting_state(
                InterviewPhase::Scan,
                -45,
            ));
            assert_eq!(result.action, Directive::AskDeepOffer);
            assert_eq!(result.state.remaining_sec, -45);
        }
    }

    mod deep_completed {
        use super::*;

        #[test]
        fn collecting_interview_asks_consent() {
            let result =
                PhaseTransitionEngine::on_deep_completed(collecting_state(InterviewPhase::Deep, 50));
            assert_eq!(result.action, Directive::AskDataConsent);
            assert_eq!(result.state.phase, InterviewPhase::DataCollection);
            assert_eq!(result.state.consent_given, ConsentState::Withheld);
        }

        #[test]
        fn non_collecting_interview_completes_without_data() {
            let state = PhaseState::new(false, vec![], 50).in_phase(InterviewPhase::Deep);
            let result = PhaseTransitionEngine::on_deep_completed(state);
            assert_eq!(result.action, Directive::CompleteWithoutData);
            assert_eq!(result.state.phase, InterviewPhase::DataCollection);
            assert_eq!(result.state.consent_given, ConsentState::Undecided);
        }
    }

    mod topic_closure_attempt {
        use super::*;

        #[test]
        fn no_signal_is_no_op() {
            let state = collecting_state(InterviewPhase::Deep, -5);
            let result =
                PhaseTransitionEngine::on_topic_phase_closure_attempt(state.clone(), &ClosureSignals::NONE);
            assert_eq!(result, Transition::no_op(state));
        }

        #[test]
        fn over_time_deep_exit_becomes_offer() {
            let result = PhaseTransitionEngine::on_topic_phase_closure_attempt(
                collecting_state(InterviewPhase::Deep, 0),
                &goodbye(),
            );
            assert_eq!(result.action, Directive::AskDeepOffer);
            assert_eq!(result.state.phase, InterviewPhase::DeepOffer);
            assert_eq!(result.state.deep_accepted, DeepDecision::Declined);
        }

        #[test]
        fn accepted_deep_keeps_asking_even_over_time() {
            let mut state = collecting_state(InterviewPhase::Deep, -30);
            state.deep_accepted = DeepDecision::Accepted;
            let result =
                PhaseTransitionEngine::on_topic_phase_closure_attempt(state.clone(), &goodbye());
            assert_eq!(result, Transition::new(state, Directive::AskTopicQuestion));
        }

        #[test]
        fn deep_with_time_left_keeps_asking() {
            let state = collecting_state(InterviewPhase::Deep, 90);
            let result =
                PhaseTransitionEngine::on_topic_phase_closure_attempt(state.clone(), &goodbye());
            assert_eq!(result, Transition::new(state, Directive::AskTopicQuestion));
        }

        #[test]
        fn scan_never_redirects_to_offer() {
            let state = collecting_state(InterviewPhase::Scan, -30);
            let result = PhaseTransitionEngine::on_topic_phase_closure_attempt(
                state.clone(),
                &ClosureSignals::completion_tag(),
            );
            assert_eq!(result, Transition::new(state, Directive::AskTopicQuestion));
        }

        #[test]
        fn outside_topic_phases_is_no_op() {
            let state = collecting_state(InterviewPhase::DataCollection, 10);
            let result =
                PhaseTransitionEngine::on_topic_phase_closure_attempt(state.clone(), &goodbye());
            assert_eq!(result, Transition::no_op(state));
        }
    }

    mod deep_offer_closure_attempt {
        use super::*;

        #[test]
        fn goodbye_during_offer_reasks() {
            let state = collecting_state(InterviewPhase::DeepOffer, -5);
            let result =
                PhaseTransitionEngine::on_deep_offer_closure_attempt(state.clone(), &goodbye());
            assert_eq!(result, Transition::new(state, Directive::AskDeepOffer));
        }

        #[test]
        fn contact_request_during_offer_passes() {
            let state = collecting_state(InterviewPhase::DeepOffer, -5);
            let signals = ClosureSignals {
                is_premature_contact_request: true,
                ..ClosureSignals::NONE
            };
            let result =
                PhaseTransitionEngine::on_deep_offer_closure_attempt(state.clone(), &signals);
            assert_eq!(result, Transition::no_op(state));
        }
    }

    mod deep_offer_intent {
        use super::*;

        #[test]
        fn accept_resumes_deep_even_over_time() {
            let result = PhaseTransitionEngine::on_deep_offer_user_intent(
                collecting_state(InterviewPhase::DeepOffer, -10),
                UserIntent::Accept,
            );
            assert_eq!(result.action, Directive::StartDeep);
            assert_eq!(result.state.phase, InterviewPhase::Deep);
            assert_eq!(result.state.deep_accepted, DeepDecision::Accepted);
        }

        #[test]
        fn refuse_behaves_like_deep_completed() {
            let state = collecting_state(InterviewPhase::DeepOffer, -10);
            let refused = PhaseTransitionEngine::on_deep_offer_user_intent(
                state.clone(),
                UserIntent::Refuse,
            );
            assert_eq!(refused, PhaseTransitionEngine::on_deep_completed(state));
        }

        #[test]
        fn neutral_reasks_with_state_unchanged() {
            let state = collecting_state(InterviewPhase::DeepOffer, -10);
            let result =
                PhaseTransitionEngine::on_deep_offer_user_intent(state.clone(), UserIntent::Neutral);
            assert_eq!(result, Transition::new(state, Directive::AskDeepOffer));
        }

        #[test]
        fn outside_deep_offer_is_no_op() {
            for phase in [
                InterviewPhase::Scan,
                InterviewPhase::Deep,
                InterviewPhase::DataCollection,
            ] {
                let state = collecting_state(phase, 10);
                let result =
                    PhaseTransitionEngine::on_deep_offer_user_intent(state.clone(), UserIntent::Accept);
                assert_eq!(result, Transition::no_op(state));
            }
        }
    }

    mod completion_tag {
        use super::*;

        #[test]
        fn pending_consent_is_requested_first() {
            let mut state = collecting_state(InterviewPhase::DataCollection, 0);
            state.missing_field = Some(field("name"));
            let result = PhaseTransitionEngine::on_completion_tag(state);
            assert_eq!(result.action, Directive::AskDataConsent);
            assert_eq!(result.state.consent_given, ConsentState::Withheld);
        }

        #[test]
        fn missing_field_is_requested_after_consent() {
            let mut state = collecting_state(InterviewPhase::DataCollection, 0);
            state.consent_given = ConsentState::Granted;
            state.missing_field = Some(field("email"));
            let result = PhaseTransitionEngine::on_completion_tag(state);
            assert_eq!(result.action, Directive::AskMissingField);
            assert_eq!(result.state.phase, InterviewPhase::DataCollection);
        }

        #[test]
        fn cleared_gates_complete_interview() {
            let mut state = collecting_state(InterviewPhase::DataCollection, 0);
            state.consent_given = ConsentState::Granted;
            let result = PhaseTransitionEngine::on_completion_tag(state.clone());
            assert_eq!(result, Transition::new(state, Directive::CompleteInterview));
        }

        #[test]
        fn refusal_completes_without_data() {
            let mut state = collecting_state(InterviewPhase::DataCollection, 0);
            state.data_collection_refused = true;
            state.missing_field = Some(field("email"));
            let result = PhaseTransitionEngine::on_completion_tag(state);
            assert_eq!(result.action, Directive::CompleteWithoutData);
        }
    }

    mod consent_response {
        use super::*;

        fn awaiting_consent() -> PhaseState {
            PhaseTransitionEngine::on_deep_completed(collecting_state(InterviewPhase::Deep, 10))
                .state
        }

        #[test]
        fn grant_with_missing_field_asks_for_it() {
            let mut state = awaiting_consent();
            state.missing_field = Some(field("name"));
            let result = PhaseTransitionEngine::on_consent_response(state, ConsentResponse::Grant);
            assert_eq!(result.action, Directive::AskMissingField);
            assert_eq!(result.state.consent_given, ConsentState::Granted);
        }

        #[test]
        fn grant_with_nothing_missing_completes() {
            let result = PhaseTransitionEngine::on_consent_response(
                awaiting_consent(),
                ConsentResponse::Grant,
            );
            assert_eq!(result.action, Directive::CompleteInterview);
        }

        #[test]
        fn deny_sets_permanent_refusal() {
            let result = PhaseTransitionEngine::on_consent_response(
                awaiting_consent(),
                ConsentResponse::Deny,
            );
            assert_eq!(result.action, Directive::CompleteWithoutData);
            assert!(result.state.data_collection_refused);
            assert_eq!(result.state.consent_given, ConsentState::Withheld);
        }

        #[test]
        fn unclear_reasks_consent() {
            let state = awaiting_consent();
            let result =
                PhaseTransitionEngine::on_consent_response(state.clone(), ConsentResponse::Unclear);
            assert_eq!(result, Transition::new(state, Directive::AskDataConsent));
        }

        #[test]
        fn ignored_when_collection_disabled() {
            let state = PhaseState::new(false, vec![field("email")], 0)
                .in_phase(InterviewPhase::DataCollection);
            let result =
                PhaseTransitionEngine::on_consent_response(state.clone(), ConsentResponse::Grant);
            assert_eq!(result, Transition::no_op(state));
        }

        #[test]
        fn ignored_outside_data_collection() {
            let state = collecting_state(InterviewPhase::Deep, 10);
            let result =
                PhaseTransitionEngine::on_consent_response(state.clone(), ConsentResponse::Grant);
            assert_eq!(result, Transition::no_op(state));
        }
    }

    #[test]
    fn refresh_missing_field_tracks_the_profile() {
        let mut profile = CandidateProfile::new();
        profile.record(field("name"), "Mario");
        let state = PhaseTransitionEngine::refresh_missing_field(
            collecting_state(InterviewPhase::DataCollection, 0),
            &profile,
            &FieldAttemptCounts::new(),
            3,
        );
        assert_eq!(state.missing_field, Some(field("email")));

        profile.record(field("email"), "mario@example.com");
        let state = PhaseTransitionEngine::refresh_missing_field(
            state,
            &profile,
            &FieldAttemptCounts::new(),
            3,
        );
        assert_eq!(state.missing_field, None);
    }
}
