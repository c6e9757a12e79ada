//! Interview languages supported for field labels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Language in which the orchestrator renders field labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    It,
    En,
    Fr,
    De,
    Es,
}

impl Language {
    /// All supported languages, in catalog order.
    pub const ALL: [Language; 5] = [
        Language::It,
        Language::En,
        Language::Fr,
        Language::De,
        Language::Es,
    ];

    /// Returns the ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::It => "it",
            Self::En => "en",
            Self::Fr => "fr",
            Self::De => "de",
            Self::Es => "es",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    /// Accepts bare codes and regional tags (`en-GB`, `de_CH`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "it" => Ok(Self::It),
            "en" => Ok(Self::En),
            "fr" => Ok(Self::Fr),
            "de" => Ok(Self::De),
            "es" => Ok(Self::Es),
            _ => Err(ValidationError::unknown_variant("language", s)),
        }
    }
}
