//! Static field label catalog.
//!
//! Ships labels for the common contact fields in every supported language.
//! Deployments with custom fields register extra labels with
//! [`StaticFieldLabels::with_label`]; registered labels take precedence over
//! the built-in ones.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::foundation::{FieldId, Language};
use crate::ports::FieldLabelProvider;

type Catalog = HashMap<&'static str, [&'static str; 5]>;

/// Built-in labels, indexed in `Language::ALL` order (it, en, fr, de, es).
static BUILT_IN: Lazy<Catalog> = Lazy::new(|| {
    HashMap::from([
        ("name", ["nome", "name", "prénom", "Vorname", "nombre"]),
        ("surname", ["cognome", "surname", "nom", "Nachname", "apellido"]),
        ("full_name", ["nome e cognome", "full name", "nom complet", "vollständiger Name", "nombre completo"]),
        ("email", ["email", "email", "e-mail", "E-Mail", "correo electrónico"]),
        ("phone", ["telefono", "phone number", "téléphone", "Telefonnummer", "teléfono"]),
        ("company", ["azienda", "company", "entreprise", "Unternehmen", "empresa"]),
        ("role", ["ruolo", "role", "poste", "Position", "puesto"]),
        ("city", ["città", "city", "ville", "Stadt", "ciudad"]),
        ("age", ["età", "age", "âge", "Alter", "edad"]),
    ])
});

fn language_index(language: Language) -> usize {
    match language {
        Language::It => 0,
        Language::En => 1,
        Language::Fr => 2,
        Language::De => 3,
        Language::Es => 4,
    }
}

/// Field label provider backed by an in-process dictionary.
#[derive(Debug, Clone, Default)]
pub struct StaticFieldLabels {
    custom: HashMap<(FieldId, Language), String>,
}

impl StaticFieldLabels {
    /// Creates a provider with only the built-in labels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or overrides) a label for one field and language.
    pub fn with_label(
        mut self,
        field: FieldId,
        language: Language,
        label: impl Into<String>,
    ) -> Self {
        self.custom.insert((field, language), label.into());
        self
    }

    /// Number of custom labels registered on top of the catalog.
    pub fn custom_label_count(&self) -> usize {
        self.custom.len()
    }
}

impl FieldLabelProvider for StaticFieldLabels {
    fn label(&self, field: &FieldId, language: Language) -> Option<String> {
        if let Some(label) = self.custom.get(&(field.clone(), language)) {
            return Some(label.clone());
        }
        BUILT_IN
            .get(field.as_str())
            .map(|labels| labels[language_index(language)].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(id: &str) -> FieldId {
        FieldId::new(id).unwrap()
    }

    #[test]
    fn built_in_fields_have_a_label_in_every_language() {
        let labels = StaticFieldLabels::new();
        for id in BUILT_IN.keys() {
            for language in Language::ALL {
                let label = labels.label(&field(id), language);
                assert!(
                    label.as_deref().is_some_and(|l| !l.is_empty()),
                    "missing {} label for {}",
                    language,
                    id
                );
            }
        }
    }

    #[test]
    fn translates_by_language() {
        let labels = StaticFieldLabels::new();
        assert_eq!(labels.label(&field("phone"), Language::It).as_deref(), Some("telefono"));
        assert_eq!(labels.label(&field("phone"), Language::De).as_deref(), Some("Telefonnummer"));
    }

    #[test]
    fn custom_label_overrides_catalog() {
        let labels = StaticFieldLabels::new().with_label(field("email"), Language::En, "work email");
        assert_eq!(labels.label(&field("email"), Language::En).as_deref(), Some("work email"));
        assert_eq!(labels.label(&field("email"), Language::It).as_deref(), Some("email"));
        assert_eq!(labels.custom_label_count(), 1);
    }

    #[test]
    fn unknown_field_falls_back_to_id() {
        let labels = StaticFieldLabels::new();
        assert_eq!(labels.label(&field("vat_number"), Language::Fr), None);
        assert_eq!(labels.label_or_id(&field("vat_number"), Language::Fr), "vat_number");
    }
}
