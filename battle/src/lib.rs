//! Turn-based battle engine with type effectiveness and move prediction.
//!
//! This crate holds the domain types, the damage formula, the match state
//! machine and the equilibrium predictor used by the arena front ends.
//!
//! # Overview
//!
//! ```text
//! typeclash-team (rosters, JSON config)
//!        │
//!        ▼
//! typeclash-battle (domain types + engine) ← THIS CRATE
//!        │
//!        ├─> arena   (Match: start / select / resolve)
//!        └─> predict (fictitious-play move prediction)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`Type`] - Elemental types with the game's effectiveness chart
//! - [`Move`], [`MoveEffect`] - Damaging and healing moves
//! - [`Combatant`] - A fighter's stats, moves and HP
//! - [`Side`] - Player 1 or Player 2
//!
//! ## Engine
//! - [`resolve_move`] - Damage formula with injectable variance ([`Roll`])
//! - [`Match`] - Battle state machine producing [`RoundReport`]s
//! - [`Predictor`] - Nash-equilibrium move prediction
//!
//! # Example Usage
//!
//! ```ignore
//! use typeclash_battle::{Match, MatchConfig, Side};
//!
//! let mut battle = Match::new(MatchConfig::seeded(7))?;
//! battle.start(&pikachu, &blastoise);
//!
//! battle.select_move(Side::P1, 0)?;
//! battle.select_move(Side::P2, 1)?;
//! let report = battle.resolve_round()?;
//!
//! for entry in battle.log() {
//!     println!("[{}] {}", entry.round, entry.text);
//! }
//! ```

use thiserror::Error;

pub mod arena;
pub mod config;
pub mod damage;
pub mod predict;
pub mod query;
pub mod types;

// Re-export main types at crate root for convenience
pub use arena::{
    BattleEvent, History, HpSnapshot, LogCategory, LogEntry, Match, MatchPhase, MatchResult,
    RoundReport,
};
pub use config::{MatchConfig, PredictorConfig};
pub use damage::{
    DamageBreakdown, EffectivenessLabel, Roll, capped_damage, deterministic_damage, resolve_move,
};
pub use predict::{PredictedWinner, Prediction, Predictor, predict};
pub use types::{BaseStats, Combatant, Move, MoveEffect, Side, TYPE_CHART, Type, UnknownType};

/// Errors returned by match operations and validation
///
/// A failed operation never changes the state it was called on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    #[error("Match has not been started")]
    NotStarted,

    #[error("Match is already over")]
    MatchOver,

    #[error("{0} has not selected a move")]
    MissingSelection(Side),

    #[error("{side} selected move {index}, but only {available} are available")]
    InvalidMoveIndex {
        side: Side,
        index: usize,
        available: usize,
    },

    #[error("Invalid combatant: {0}")]
    InvalidCombatant(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
