//! Arena configuration file

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use typeclash_battle::{MatchConfig, PredictorConfig};

use crate::TeamError;

/// Settings for a match and its predictor
///
/// Missing sections and fields fall back to their defaults:
///
/// ```json
/// { "battle": { "max_rounds": 5, "seed": 42 }, "predictor": { "iterations": 2000 } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub battle: MatchConfig,
    pub predictor: PredictorConfig,
}

impl ArenaConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, TeamError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, TeamError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a config file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::from_json(&json)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            max_rounds = config.battle.max_rounds,
            iterations = config.predictor.iterations,
            "loaded arena config"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), TeamError> {
        self.battle.validate()?;
        self.predictor.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typeclash_battle::BattleError;

    #[test]
    fn test_defaults() {
        let config = ArenaConfig::from_json("{}").unwrap();
        assert_eq!(config, ArenaConfig::default());
        assert_eq!(config.battle.max_rounds, 3);
        assert_eq!(config.battle.seed, None);
        assert_eq!(config.predictor.iterations, 1000);
        assert_eq!(config.predictor.projection_rounds, 3);
    }

    #[test]
    fn test_partial_override() {
        let config =
            ArenaConfig::from_json(r#"{ "battle": { "seed": 42 }, "predictor": { "iterations": 50 } }"#)
                .unwrap();
        assert_eq!(config.battle.seed, Some(42));
        assert_eq!(config.battle.max_rounds, 3);
        assert_eq!(config.predictor.iterations, 50);
        assert_eq!(config.predictor.projection_rounds, 3);
    }

    #[test]
    fn test_round_trip() {
        let config = ArenaConfig {
            battle: MatchConfig::seeded(9),
            predictor: PredictorConfig::default(),
        };
        let json = config.to_json().unwrap();
        assert_eq!(ArenaConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(matches!(
            ArenaConfig::from_json(r#"{ "battle": { "max_rounds": 0 } }"#),
            Err(TeamError::Battle(BattleError::InvalidConfig(_)))
        ));
        assert!(matches!(
            ArenaConfig::from_json(r#"{ "predictor": { "iterations": 0 } }"#),
            Err(TeamError::Battle(BattleError::InvalidConfig(_)))
        ));
        assert!(matches!(
            ArenaConfig::from_json("not json"),
            Err(TeamError::Json(_))
        ));
    }
}
