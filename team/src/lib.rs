//! Roster templates and configuration files for typeclash battles.
//!
//! - [`Roster`] - validated list of combatant templates (built-in or JSON)
//! - [`CombatantTemplate`] - serializable form of a [`Combatant`]
//! - [`ArenaConfig`] - match and predictor settings loaded from JSON
//!
//! [`Combatant`]: typeclash_battle::Combatant

use thiserror::Error;
use typeclash_battle::BattleError;

mod builtin;
mod config;
mod roster;

pub use config::ArenaConfig;
pub use roster::{CombatantTemplate, Roster};

#[derive(Error, Debug)]
pub enum TeamError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error("Duplicate combatant name: {0}")]
    DuplicateName(String),

    #[error("Roster is empty")]
    EmptyRoster,
}
