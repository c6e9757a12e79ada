//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `FieldLabelProvider` - Field id to display label dictionary

mod field_labels;

pub use field_labels::FieldLabelProvider;
