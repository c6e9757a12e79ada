//! Field label adapters.

mod static_catalog;

pub use static_catalog::StaticFieldLabels;
