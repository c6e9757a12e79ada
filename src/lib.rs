//! Interview Guardrails - phase transition engine for AI-led interviews
//!
//! After every turn of a conversational interview this crate decides whether
//! the dialogue may advance, must re-ask, must request consent or a missing
//! field, or may terminate. Classification of user and assistant messages is
//! done elsewhere; the engine consumes plain boolean signals and returns
//! directives.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
