//! Equilibrium move prediction
//!
//! Frames a matchup as a zero-sum game whose payoff is the damage
//! differential, approximates its mixed-strategy Nash equilibrium with
//! fictitious play, and projects HP over a fixed number of rounds.
//!
//! The prediction is stateless and never touches a running [`Match`].
//!
//! [`Match`]: crate::arena::Match

mod payoff;
mod solver;

pub use payoff::{DamageTable, PayoffMatrix};
pub use solver::{Equilibrium, fictitious_play};

use crate::BattleError;
use crate::config::PredictorConfig;
use crate::types::{Combatant, Side};

/// Who the projection favours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PredictedWinner {
    Winner(Side),
    Tie,
}

/// Output of the predictor
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Prediction {
    /// Probability of each of P1's moves
    pub p1_strategy: Vec<f64>,
    /// Probability of each of P2's moves
    pub p2_strategy: Vec<f64>,
    /// Expected damage P1 deals per round
    pub expected_damage_p1: f64,
    /// Expected damage P2 deals per round
    pub expected_damage_p2: f64,
    /// `max_hp - opponent damage * rounds` (may be negative)
    pub projected_hp_p1: f64,
    pub projected_hp_p2: f64,
    /// Expected payoff to P1 per round under the equilibrium
    pub game_value: f64,
    pub predicted_winner: PredictedWinner,
}

impl Prediction {
    /// Strategy of one side
    pub fn strategy(&self, side: Side) -> &[f64] {
        match side {
            Side::P1 => &self.p1_strategy,
            Side::P2 => &self.p2_strategy,
        }
    }

    /// Most likely move index for one side (first one on ties)
    pub fn favored_move(&self, side: Side) -> usize {
        let strategy = self.strategy(side);
        let mut best = 0;
        for (i, p) in strategy.iter().enumerate() {
            if *p > strategy[best] {
                best = i;
            }
        }
        best
    }

    pub fn projected_hp(&self, side: Side) -> f64 {
        match side {
            Side::P1 => self.projected_hp_p1,
            Side::P2 => self.projected_hp_p2,
        }
    }
}

/// Equilibrium predictor
#[derive(Debug, Clone, Default)]
pub struct Predictor {
    config: PredictorConfig,
}

impl Predictor {
    pub fn new(config: PredictorConfig) -> Result<Self, BattleError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// Predict optimal mixed strategies and the likely winner
    pub fn predict(&self, p1: &Combatant, p2: &Combatant) -> Prediction {
        let damage = DamageTable::build(p1, p2);
        let matrix = PayoffMatrix::from_damage(&damage);
        let equilibrium = fictitious_play(&matrix, self.config.iterations);

        let mut expected_damage_p1 = 0.0;
        let mut expected_damage_p2 = 0.0;
        for (i, d1) in damage.p1.iter().enumerate() {
            for (j, d2) in damage.p2.iter().enumerate() {
                let weight = equilibrium.p1[i] * equilibrium.p2[j];
                expected_damage_p1 += weight * d1;
                expected_damage_p2 += weight * d2;
            }
        }

        let rounds = f64::from(self.config.projection_rounds);
        let projected_hp_p1 = f64::from(p1.max_hp()) - expected_damage_p2 * rounds;
        let projected_hp_p2 = f64::from(p2.max_hp()) - expected_damage_p1 * rounds;

        let predicted_winner = if projected_hp_p1 > projected_hp_p2 {
            PredictedWinner::Winner(Side::P1)
        } else if projected_hp_p2 > projected_hp_p1 {
            PredictedWinner::Winner(Side::P2)
        } else {
            PredictedWinner::Tie
        };

        let game_value = matrix.value(&equilibrium.p1, &equilibrium.p2);
        tracing::debug!(
            p1 = p1.name(),
            p2 = p2.name(),
            game_value,
            projected_hp_p1,
            projected_hp_p2,
            ?predicted_winner,
            "prediction complete"
        );

        Prediction {
            p1_strategy: equilibrium.p1,
            p2_strategy: equilibrium.p2,
            expected_damage_p1,
            expected_damage_p2,
            projected_hp_p1,
            projected_hp_p2,
            game_value,
            predicted_winner,
        }
    }
}

/// Predict with the default settings (1000 iterations, 3 projected rounds)
pub fn predict(p1: &Combatant, p2: &Combatant) -> Prediction {
    Predictor::default().predict(p1, p2)
}
