//! Application layer - orchestrator-facing session management.
//!
//! Wraps the pure transition engine with the per-conversation bookkeeping
//! the engine deliberately leaves out.

mod errors;
mod session;

pub use errors::SessionError;
pub use session::{InterviewSession, PendingField, TurnOutcome};
