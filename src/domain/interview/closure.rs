//! Closure interceptor.
//!
//! Encodes which signal combinations must block the assistant from closing a
//! phase early. Signal computation happens outside the engine.

use super::phase::InterviewPhase;
use super::signals::ClosureSignals;

/// Topic phases (scan and deep) block any closure signal, including an early
/// request for contact details.
pub fn should_intercept_topic_closure(phase: InterviewPhase, signals: &ClosureSignals) -> bool {
    if !phase.is_topic_phase() {
        return false;
    }
    signals.any_closure() || signals.is_premature_contact_request
}

/// While a deep offer is pending, closure signals are blocked too. Asking for
/// contact details is not premature here.
pub fn should_intercept_deep_offer_closure(
    phase: InterviewPhase,
    signals: &ClosureSignals,
) -> bool {
    phase == InterviewPhase::DeepOffer && signals.any_closure()
}
