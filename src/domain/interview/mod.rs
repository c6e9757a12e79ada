//! Interview domain module.
//!
//! Guardrails and phase transitions for an AI-led interview. After every
//! turn the engine decides whether the dialogue may advance, must re-ask,
//! must request consent or a missing field, or may terminate.
//!
//! # Components
//!
//! - `fields` - Missing-field resolver over ordered candidate fields
//! - `consent` - Consent gate
//! - `guard` - Completion guard combining the two above
//! - `closure` - Premature-closure interceptor per phase family
//! - `engine` - The transition functions themselves
//!
//! All functions are pure and synchronous.

mod closure;
mod consent;
mod decision;
mod directive;
mod engine;
mod fields;
mod guard;
mod phase;
mod signals;
mod state;

pub use closure::{should_intercept_deep_offer_closure, should_intercept_topic_closure};
pub use consent::is_consent_pending;
pub use decision::{ConsentState, DeepDecision};
pub use directive::{Directive, Transition};
pub use engine::PhaseTransitionEngine;
pub use fields::{
    field_status, next_missing_field, CandidateProfile, FieldAttemptCounts, FieldStatus,
    FieldValue, DEFAULT_MAX_FIELD_ATTEMPTS, SKIP_SENTINEL,
};
pub use guard::{completion_guard_action, guard_action_for, GuardAction};
pub use phase::InterviewPhase;
pub use signals::{ClosureSignals, ConsentResponse, UserIntent};
pub use state::PhaseState;
