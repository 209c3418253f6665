//! Domain types for battles

mod combatant;
mod moves;
mod pokemon_type;
mod side;
mod stats;

pub use combatant::{Combatant, MAX_MOVES, MAX_TYPES};
pub use moves::{Move, MoveEffect};
pub use pokemon_type::{Type, TYPE_CHART, UnknownType};
pub use side::Side;
pub use stats::BaseStats;
