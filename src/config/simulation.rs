//! Simulation runner configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Seed and session count for the simulation runner
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SimulationSettings {
    #[serde(default = "default_seed")]
    pub seed: u64,

    #[serde(default = "default_runs")]
    pub runs: usize,
}

impl SimulationSettings {
    /// Validate simulation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.runs == 0 {
            return Err(ValidationError::InvalidSimulationRuns);
        }
        Ok(())
    }
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            runs: default_runs(),
        }
    }
}

fn default_seed() -> u64 {
    42
}

fn default_runs() -> usize {
    50
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_defaults() {
        let settings = SimulationSettings::default();
        assert_eq!(settings.seed, 42);
        assert_eq!(settings.runs, 50);
    }

    #[test]
    fn test_zero_runs_rejected() {
        let settings = SimulationSettings { seed: 1, runs: 0 };
        assert_eq!(settings.validate(), Err(ValidationError::InvalidSimulationRuns));
    }
}
