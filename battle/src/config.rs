//! Engine configuration

use crate::BattleError;

/// Rules for a single match
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MatchConfig {
    /// Rounds before the match is decided on remaining HP
    pub max_rounds: u32,

    /// Seed for the variance generator (None = seeded from OS entropy)
    pub seed: Option<u64>,
}

impl MatchConfig {
    pub const DEFAULT_MAX_ROUNDS: u32 = 3;

    /// Default rules with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), BattleError> {
        if self.max_rounds == 0 {
            return Err(BattleError::InvalidConfig(
                "max_rounds must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
            seed: None,
        }
    }
}

/// Settings for the equilibrium predictor
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PredictorConfig {
    /// Fictitious-play iterations
    pub iterations: usize,

    /// Rounds used for the linear HP projection
    pub projection_rounds: u32,
}

impl PredictorConfig {
    pub const DEFAULT_ITERATIONS: usize = 1000;
    pub const DEFAULT_PROJECTION_ROUNDS: u32 = 3;

    pub fn validate(&self) -> Result<(), BattleError> {
        if self.iterations == 0 {
            return Err(BattleError::InvalidConfig(
                "iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            iterations: Self::DEFAULT_ITERATIONS,
            projection_rounds: Self::DEFAULT_PROJECTION_ROUNDS,
        }
    }
}
