//! Moves and their effects

use super::pokemon_type::Type;

/// What a move does when used
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum MoveEffect {
    /// Deals damage scaled by variance, effectiveness and STAB
    Damage { base_power: u32 },
    /// Restores a fraction of the user's max HP
    Heal { fraction: f32 },
}

/// A move (pure configuration, stateless across uses)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub name: String,

    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub move_type: Type,

    pub effect: MoveEffect,
}

impl Move {
    /// Fraction of max HP restored by the roster's heal moves
    pub const DEFAULT_HEAL_FRACTION: f32 = 0.5;

    /// Create a damaging move
    pub fn damage(name: impl Into<String>, move_type: Type, base_power: u32) -> Self {
        Self {
            name: name.into(),
            move_type,
            effect: MoveEffect::Damage { base_power },
        }
    }

    /// Create a healing move
    pub fn heal(name: impl Into<String>, move_type: Type, fraction: f32) -> Self {
        Self {
            name: name.into(),
            move_type,
            effect: MoveEffect::Heal { fraction },
        }
    }

    /// Base power, 0 for non-damaging moves
    pub fn base_power(&self) -> u32 {
        match self.effect {
            MoveEffect::Damage { base_power } => base_power,
            MoveEffect::Heal { .. } => 0,
        }
    }

    /// Check if this is a healing move
    pub fn is_heal(&self) -> bool {
        matches!(self.effect, MoveEffect::Heal { .. })
    }
}
