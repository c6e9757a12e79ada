//! Adapters - Implementations of port interfaces.
//!
//! - `labels` - Field label dictionaries

pub mod labels;

pub use labels::StaticFieldLabels;
