//! Field label port.
//!
//! When the engine asks for a missing field, the orchestrator needs a
//! human-readable name for it in the interview language. This port is the
//! dictionary it looks the id up in.

use crate::domain::foundation::{FieldId, Language};

/// Resolves candidate field ids to display labels.
///
/// Implementations must be thread-safe; one provider is typically shared by
/// every session.
pub trait FieldLabelProvider: Send + Sync {
    /// Returns the label for `field` in `language`, if one is known.
    fn label(&self, field: &FieldId, language: Language) -> Option<String>;

    /// Returns the label, falling back to the raw field id.
    fn label_or_id(&self, field: &FieldId, language: Language) -> String {
        self.label(field, language)
            .unwrap_or_else(|| field.as_str().to_string())
    }
}
