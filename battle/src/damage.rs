//! Damage formula
//!
//! A single move resolves to a [`DamageBreakdown`]:
//!
//! ```text
//! base_after_variance = max(1, base_power + delta)     delta in -5..=5
//! final_damage        = floor(base_after_variance * effectiveness * stab)
//! ```
//!
//! Heal moves bypass the formula entirely. The variance source is injected
//! through [`Roll`] so battles can be replayed from a seed and the predictor
//! can ask for noise-free numbers.

use rand::{Rng, RngCore};

use crate::types::{Combatant, Move, MoveEffect};

/// Largest variance delta in either direction
pub const VARIANCE_SPREAD: i32 = 5;

/// Same-type attack bonus
pub const STAB_MULTIPLIER: f32 = 1.5;

/// Source of the variance delta for one move
pub enum Roll<'a> {
    /// Always 0
    Deterministic,
    /// A pre-drawn delta, clamped to the variance range
    Fixed(i32),
    /// Drawn uniformly from `-VARIANCE_SPREAD..=VARIANCE_SPREAD`
    Random(&'a mut dyn RngCore),
}

impl Roll<'_> {
    fn delta(&mut self) -> i32 {
        match self {
            Roll::Deterministic => 0,
            Roll::Fixed(delta) => (*delta).clamp(-VARIANCE_SPREAD, VARIANCE_SPREAD),
            Roll::Random(rng) => rng.gen_range(-VARIANCE_SPREAD..=VARIANCE_SPREAD),
        }
    }
}

impl std::fmt::Debug for Roll<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Roll::Deterministic => write!(f, "Deterministic"),
            Roll::Fixed(delta) => f.debug_tuple("Fixed").field(delta).finish(),
            Roll::Random(_) => write!(f, "Random(..)"),
        }
    }
}

/// How effective a hit was, as shown to players
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectivenessLabel {
    NoEffect,
    NotVeryEffective,
    Effective,
    SuperEffective,
    ExtremelyEffective,
}

impl EffectivenessLabel {
    /// Classify a composed multiplier
    pub fn from_multiplier(multiplier: f32) -> Self {
        if multiplier == 0.0 {
            EffectivenessLabel::NoEffect
        } else if multiplier < 1.0 {
            EffectivenessLabel::NotVeryEffective
        } else if multiplier == 1.0 {
            EffectivenessLabel::Effective
        } else if multiplier == 2.0 {
            EffectivenessLabel::SuperEffective
        } else {
            EffectivenessLabel::ExtremelyEffective
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EffectivenessLabel::NoEffect => "No Effect",
            EffectivenessLabel::NotVeryEffective => "Not Very Effective",
            EffectivenessLabel::Effective => "Effective",
            EffectivenessLabel::SuperEffective => "Super Effective",
            EffectivenessLabel::ExtremelyEffective => "Extremely Effective",
        }
    }
}

impl std::fmt::Display for EffectivenessLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Every intermediate value of one move resolution
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageBreakdown {
    /// Move base power (0 for heals)
    pub base_power: u32,
    /// Variance delta that was applied
    pub variance_delta: i32,
    /// `max(1, base_power + delta)` (0 for heals)
    pub base_after_variance: u32,
    pub effectiveness: f32,
    pub label: EffectivenessLabel,
    /// 1.5 with a type match, otherwise 1.0
    pub stab: f32,
    /// Formula output before any HP caps
    pub final_damage: u32,
    /// HP the attacker restores (already capped at its max HP)
    pub heal: u32,
}

impl DamageBreakdown {
    fn heal(amount: u32) -> Self {
        Self {
            base_power: 0,
            variance_delta: 0,
            base_after_variance: 0,
            effectiveness: 1.0,
            label: EffectivenessLabel::Effective,
            stab: 1.0,
            final_damage: 0,
            heal: amount,
        }
    }
}

/// Resolve `mv` used by `attacker` against `defender`
pub fn resolve_move(
    attacker: &Combatant,
    defender: &Combatant,
    mv: &Move,
    mut roll: Roll<'_>,
) -> DamageBreakdown {
    let base_power = match mv.effect {
        MoveEffect::Heal { fraction } => {
            let amount = (attacker.max_hp() as f32 * fraction).floor() as u32;
            let headroom = attacker.max_hp() - attacker.current_hp();
            return DamageBreakdown::heal(amount.min(headroom));
        }
        MoveEffect::Damage { base_power } => base_power,
    };

    let variance_delta = roll.delta();
    let base_after_variance = base_power.saturating_add_signed(variance_delta).max(1);
    let effectiveness = mv.move_type.effectiveness_multi(defender.types());
    let stab = if attacker.has_type(mv.move_type) {
        STAB_MULTIPLIER
    } else {
        1.0
    };
    let final_damage = (base_after_variance as f32 * effectiveness * stab).floor() as u32;

    tracing::trace!(
        attacker = attacker.name(),
        defender = defender.name(),
        mv = %mv.name,
        variance_delta,
        effectiveness,
        stab,
        final_damage,
        "resolved move"
    );

    DamageBreakdown {
        base_power,
        variance_delta,
        base_after_variance,
        effectiveness,
        label: EffectivenessLabel::from_multiplier(effectiveness),
        stab,
        final_damage,
        heal: 0,
    }
}

/// Noise-free damage of `mv` against `defender`
pub fn deterministic_damage(attacker: &Combatant, defender: &Combatant, mv: &Move) -> u32 {
    resolve_move(attacker, defender, mv, Roll::Deterministic).final_damage
}

/// Apply the self-HP cap: a move never deals more than the attacker's current HP
pub fn capped_damage(final_damage: u32, attacker: &Combatant) -> u32 {
    final_damage.min(attacker.current_hp())
}
