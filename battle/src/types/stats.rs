//! Base stats

/// Base stats of a combatant (fixed for the whole battle)
///
/// Only speed feeds the engine (turn order). Attack and defense are roster
/// data kept for display and future formulas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
}

impl BaseStats {
    /// Create a new stat block
    pub fn new(attack: u32, defense: u32, speed: u32) -> Self {
        Self {
            attack,
            defense,
            speed,
        }
    }

    /// Whether these stats strictly outspeed `other`
    pub fn outspeeds(&self, other: &BaseStats) -> bool {
        self.speed > other.speed
    }
}
