//! Combatant state

use crate::BattleError;

use super::moves::{Move, MoveEffect};
use super::pokemon_type::Type;
use super::stats::BaseStats;

/// Most moves a combatant can carry
pub const MAX_MOVES: usize = 4;

/// Most types a combatant can have
pub const MAX_TYPES: usize = 2;

/// A combatant in (or about to enter) a battle
///
/// Everything except `current_hp` is fixed once constructed. A roster
/// template is simply a combatant at full HP; [`Combatant::fresh`] copies it
/// into a battle instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Combatant {
    name: String,
    types: Vec<Type>,
    stats: BaseStats,
    max_hp: u32,
    current_hp: u32,
    moves: Vec<Move>,
}

impl Combatant {
    /// Create a combatant at full HP, validating the template
    pub fn new(
        name: impl Into<String>,
        types: Vec<Type>,
        max_hp: u32,
        stats: BaseStats,
        moves: Vec<Move>,
    ) -> Result<Self, BattleError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BattleError::InvalidCombatant(
                "name cannot be empty".to_string(),
            ));
        }
        if types.is_empty() || types.len() > MAX_TYPES {
            return Err(BattleError::InvalidCombatant(format!(
                "{name} must have 1 to {MAX_TYPES} types, got {}",
                types.len()
            )));
        }
        if types.len() == 2 && types[0] == types[1] {
            return Err(BattleError::InvalidCombatant(format!(
                "{name} lists {} twice",
                types[0]
            )));
        }
        if max_hp == 0 {
            return Err(BattleError::InvalidCombatant(format!(
                "{name} must have positive max HP"
            )));
        }
        if moves.is_empty() || moves.len() > MAX_MOVES {
            return Err(BattleError::InvalidCombatant(format!(
                "{name} must have 1 to {MAX_MOVES} moves, got {}",
                moves.len()
            )));
        }
        for mv in &moves {
            if let MoveEffect::Heal { fraction } = mv.effect {
                if !(fraction > 0.0 && fraction <= 1.0) {
                    return Err(BattleError::InvalidCombatant(format!(
                        "{}'s {} heal fraction {fraction} is outside (0, 1]",
                        name, mv.name
                    )));
                }
            }
        }

        Ok(Self {
            name,
            types,
            stats,
            max_hp,
            current_hp: max_hp,
            moves,
        })
    }

    /// Copy of this combatant restored to full HP
    pub fn fresh(&self) -> Self {
        Self {
            current_hp: self.max_hp,
            ..self.clone()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Types in declaration order
    pub fn types(&self) -> &[Type] {
        &self.types
    }

    /// Check if this combatant has a specific type
    pub fn has_type(&self, t: Type) -> bool {
        self.types.contains(&t)
    }

    pub fn stats(&self) -> &BaseStats {
        &self.stats
    }

    pub fn speed(&self) -> u32 {
        self.stats.speed
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Get a move by index
    pub fn get_move(&self, index: usize) -> Option<&Move> {
        self.moves.get(index)
    }

    /// HP as a percentage of max (0-100)
    pub fn hp_percent(&self) -> u32 {
        (u64::from(self.current_hp) * 100 / u64::from(self.max_hp)) as u32
    }

    /// Check if this combatant has been knocked out
    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    /// Remove up to `amount` HP, returns the HP actually removed
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let applied = amount.min(self.current_hp);
        self.current_hp -= applied;
        applied
    }

    /// Restore up to `amount` HP without exceeding max, returns the HP actually restored
    pub fn restore(&mut self, amount: u32) -> u32 {
        let applied = amount.min(self.max_hp - self.current_hp);
        self.current_hp += applied;
        applied
    }
}
