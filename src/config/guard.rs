//! Guardrail configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::Language;
use crate::domain::interview::DEFAULT_MAX_FIELD_ATTEMPTS;

/// Limits applied by interview sessions
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GuardConfig {
    /// Times a field is asked before it is treated as exhausted
    #[serde(default = "default_max_field_attempts")]
    pub max_field_attempts: u32,

    /// Neutral answers tolerated on the deep offer before it defaults to refuse
    #[serde(default = "default_max_deep_offer_reasks")]
    pub max_deep_offer_reasks: u32,

    /// Language used for field labels when the session does not set one
    #[serde(default)]
    pub default_language: Language,
}

impl GuardConfig {
    /// Validate guard configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_field_attempts == 0 {
            return Err(ValidationError::InvalidMaxFieldAttempts);
        }
        Ok(())
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            max_field_attempts: default_max_field_attempts(),
            max_deep_offer_reasks: default_max_deep_offer_reasks(),
            default_language: Language::default(),
        }
    }
}

fn default_max_field_attempts() -> u32 {
    DEFAULT_MAX_FIELD_ATTEMPTS
}

fn default_max_deep_offer_reasks() -> u32 {
    1
}
