//! Query helpers for move selection
//!
//! Attacking-type coverage over the game's chart and simple move rankings,
//! useful for presenting hints next to a combatant's moves.

mod matchup;

pub use matchup::{Coverage, best_move, coverage, effectiveness_by_name};
