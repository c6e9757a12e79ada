//! Simulation module - seeded regression oracle for the transition engine.
//!
//! The harness is a validation tool, not a production component. Its single
//! invariant is that no simulated session ever completes before both the
//! consent gate and the missing-field gate have cleared.

mod harness;
mod report;

pub use harness::{CompletionHandler, SimulationHarness, MAX_REMAINING_SEC, MIN_REMAINING_SEC};
pub use report::{SessionTrace, SimulationReport};
