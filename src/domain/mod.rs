//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, languages, errors, state machine trait)
//! - `interview` - Phases, guards and the phase transition engine
//! - `simulation` - Seeded regression harness driving the engine

pub mod foundation;
pub mod interview;
pub mod simulation;
