//! Type matchup helpers for decision making

use crate::damage::deterministic_damage;
use crate::types::{Combatant, Type};

/// Defending types grouped by how one attacking type hits them
///
/// Types the attack hits neutrally appear in none of the lists.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coverage {
    /// Multiplier of 2 or more
    pub super_effective: Vec<Type>,
    /// Multiplier in (0, 0.5]
    pub not_very_effective: Vec<Type>,
    pub no_effect: Vec<Type>,
}

/// Single-type coverage of an attacking type, in chart order
pub fn coverage(attack: Type) -> Coverage {
    let mut out = Coverage::default();
    for &defender in Type::all() {
        let eff = attack.effectiveness(defender);
        if eff >= 2.0 {
            out.super_effective.push(defender);
        } else if eff > 0.0 && eff <= 0.5 {
            out.not_very_effective.push(defender);
        } else if eff == 0.0 {
            out.no_effect.push(defender);
        }
    }
    out
}

/// Effectiveness of an attacking type against defending types, by name
///
/// Unknown names count as neutral: an unknown attacking type yields 1.0 and
/// unknown defending types contribute 1.0 to the product.
pub fn effectiveness_by_name(attacking: &str, defending: &[&str]) -> f32 {
    let Some(attack) = Type::from_name(attacking) else {
        return 1.0;
    };
    defending
        .iter()
        .filter_map(|name| Type::from_name(name))
        .map(|defender| attack.effectiveness(defender))
        .product()
}

/// Index of the attacker's highest noise-free damage move against defender
///
/// Heal moves score 0. Ties go to the earlier move.
pub fn best_move(attacker: &Combatant, defender: &Combatant) -> usize {
    let mut best = 0;
    let mut best_damage = 0;
    for (i, mv) in attacker.moves().iter().enumerate() {
        let damage = deterministic_damage(attacker, defender, mv);
        if damage > best_damage {
            best = i;
            best_damage = damage;
        }
    }
    best
}
