//! Structured events emitted while a round resolves
//!
//! Events are returned in the order they happened so a presentation layer
//! can stage them (first actor, then second actor, then the round summary)
//! without the engine owning any timers.

use crate::damage::DamageBreakdown;
use crate::types::Side;

use super::battle::MatchResult;
use super::history::{HpSnapshot, LogCategory};

/// Something that happened during a round
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    /// Who acts first this round
    TurnOrder { first: Side, speed_tie: bool },

    /// A damaging move landed (`damage` is the HP actually removed)
    Hit {
        attacker: Side,
        move_name: String,
        breakdown: DamageBreakdown,
        damage: u32,
    },

    /// A heal move restored HP
    Healed {
        side: Side,
        move_name: String,
        amount: u32,
    },

    Fainted { side: Side },

    /// HP at the end of the round
    RoundEnded { snapshot: HpSnapshot },

    MatchEnded { result: MatchResult },
}

impl BattleEvent {
    /// Log line for this event, if it has one
    ///
    /// `names` are the P1 and P2 combatant names.
    pub fn narrate(&self, names: [&str; 2]) -> Option<(String, LogCategory)> {
        let name = |side: Side| names[side.index()];

        match self {
            // Same wording on a speed tie
            BattleEvent::TurnOrder { first, .. } => Some((
                format!("{} is faster and moves first!", name(*first)),
                LogCategory::Info,
            )),
            BattleEvent::Hit {
                attacker,
                move_name,
                breakdown,
                damage,
            } => {
                if breakdown.effectiveness == 0.0 {
                    Some((
                        format!(
                            "{}'s {} had no effect on {}!",
                            name(*attacker),
                            move_name,
                            name(attacker.opponent())
                        ),
                        LogCategory::Info,
                    ))
                } else {
                    Some((
                        format!("{}'s {} dealt {} damage!", name(*attacker), move_name, damage),
                        LogCategory::Damage,
                    ))
                }
            }
            BattleEvent::Healed { amount: 0, .. } => None,
            BattleEvent::Healed {
                side,
                move_name,
                amount,
            } => Some((
                format!("{}'s {} recovered {} HP!", name(*side), move_name, amount),
                LogCategory::Heal,
            )),
            BattleEvent::Fainted { side } => {
                Some((format!("{} fainted!", name(*side)), LogCategory::Info))
            }
            BattleEvent::RoundEnded { .. } => None,
            BattleEvent::MatchEnded { result } => Some((result.describe(), LogCategory::Result)),
        }
    }
}

/// Everything that happened in one resolved round
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundReport {
    pub round: u32,
    /// Side that acted first
    pub first: Side,
    /// Events in the order they happened
    pub events: Vec<BattleEvent>,
    /// Set when this round ended the match
    pub result: Option<MatchResult>,
}

impl RoundReport {
    /// Sides that actually acted, in order (one on a first-action knockout)
    pub fn actors(&self) -> Vec<Side> {
        self.events
            .iter()
            .filter_map(|e| match e {
                BattleEvent::Hit { attacker, .. } => Some(*attacker),
                BattleEvent::Healed { side, .. } => Some(*side),
                _ => None,
            })
            .collect()
    }
}
