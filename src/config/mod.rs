//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `INTERVIEW_GUARD` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use interview_guardrails::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Max attempts per field: {}", config.guard.max_field_attempts);
//! ```

mod error;
mod guard;
mod logging;
mod simulation;

pub use error::{ConfigError, ValidationError};
pub use guard::GuardConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use simulation::SimulationSettings;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Session guardrail limits
    #[serde(default)]
    pub guard: GuardConfig,

    /// Simulation runner seed and size
    #[serde(default)]
    pub simulation: SimulationSettings,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `INTERVIEW_GUARD` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `INTERVIEW_GUARD__GUARD__MAX_FIELD_ATTEMPTS=5` -> `guard.max_field_attempts = 5`
    /// - `INTERVIEW_GUARD__SIMULATION__SEED=7` -> `simulation.seed = 7`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("INTERVIEW_GUARD")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.guard.validate()?;
        self.simulation.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Language;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "INTERVIEW_GUARD__GUARD__MAX_FIELD_ATTEMPTS",
        "INTERVIEW_GUARD__GUARD__DEFAULT_LANGUAGE",
        "INTERVIEW_GUARD__SIMULATION__SEED",
        "INTERVIEW_GUARD__SIMULATION__RUNS",
        "INTERVIEW_GUARD__LOGGING__FORMAT",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.guard, GuardConfig::default());
        assert_eq!(config.simulation, SimulationSettings::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("INTERVIEW_GUARD__GUARD__MAX_FIELD_ATTEMPTS", "5");
        env::set_var("INTERVIEW_GUARD__GUARD__DEFAULT_LANGUAGE", "de");
        env::set_var("INTERVIEW_GUARD__SIMULATION__SEED", "7");
        env::set_var("INTERVIEW_GUARD__LOGGING__FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.guard.max_field_attempts, 5);
        assert_eq!(config.guard.default_language, Language::De);
        assert_eq!(config.simulation.seed, 7);
        assert_eq!(config.simulation.runs, 50);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_validate_rejects_zero_runs() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("INTERVIEW_GUARD__SIMULATION__RUNS", "0");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.validate(), Err(ValidationError::InvalidSimulationRuns));
    }

    #[test]
    fn test_unparseable_value_is_load_error() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("INTERVIEW_GUARD__GUARD__MAX_FIELD_ATTEMPTS", "many");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
