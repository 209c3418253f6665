//! Roster of combatant templates

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use typeclash_battle::{BaseStats, BattleError, Combatant, Move, Type};

use crate::TeamError;

/// Serializable combatant template
///
/// ```json
/// {
///   "name": "Pikachu",
///   "types": ["Electric"],
///   "max_hp": 120,
///   "stats": { "attack": 55, "defense": 40, "speed": 90 },
///   "moves": [
///     { "name": "Thunderbolt", "type": "Electric",
///       "effect": { "kind": "damage", "base_power": 40 } }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantTemplate {
    pub name: String,
    pub types: Vec<Type>,
    pub max_hp: u32,
    pub stats: BaseStats,
    pub moves: Vec<Move>,
}

impl TryFrom<CombatantTemplate> for Combatant {
    type Error = BattleError;

    fn try_from(t: CombatantTemplate) -> Result<Self, Self::Error> {
        Combatant::new(t.name, t.types, t.max_hp, t.stats, t.moves)
    }
}

impl From<&Combatant> for CombatantTemplate {
    fn from(c: &Combatant) -> Self {
        Self {
            name: c.name().to_string(),
            types: c.types().to_vec(),
            max_hp: c.max_hp(),
            stats: *c.stats(),
            moves: c.moves().to_vec(),
        }
    }
}

/// Validated, non-empty list of combatant templates with unique names
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    combatants: Vec<Combatant>,
}

impl Roster {
    /// Build a roster, validating every template
    ///
    /// Names are compared case-insensitively.
    pub fn new(combatants: Vec<Combatant>) -> Result<Self, TeamError> {
        if combatants.is_empty() {
            return Err(TeamError::EmptyRoster);
        }
        for (i, c) in combatants.iter().enumerate() {
            if combatants[..i]
                .iter()
                .any(|other| other.name().eq_ignore_ascii_case(c.name()))
            {
                return Err(TeamError::DuplicateName(c.name().to_string()));
            }
        }
        Ok(Self { combatants })
    }

    /// Build a roster from serialized templates
    pub fn from_templates(templates: Vec<CombatantTemplate>) -> Result<Self, TeamError> {
        let combatants = templates
            .into_iter()
            .map(Combatant::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(combatants)
    }

    /// The seven combatants shipped with the game
    pub fn builtin() -> Result<Self, TeamError> {
        Self::from_templates(crate::builtin::templates())
    }

    /// Parse a JSON array of templates
    pub fn from_json(json: &str) -> Result<Self, TeamError> {
        let templates: Vec<CombatantTemplate> = serde_json::from_str(json)?;
        let roster = Self::from_templates(templates)?;
        tracing::debug!(count = roster.len(), "parsed roster");
        Ok(roster)
    }

    /// Serialize as a pretty-printed JSON array of templates
    pub fn to_json(&self) -> Result<String, TeamError> {
        Ok(serde_json::to_string_pretty(&self.templates())?)
    }

    /// Load a roster from a JSON file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read roster {}", path.display()))?;
        let roster = Self::from_json(&json)
            .with_context(|| format!("Failed to parse roster {}", path.display()))?;
        tracing::info!(path = %path.display(), count = roster.len(), "loaded roster");
        Ok(roster)
    }

    /// Find a combatant by name (case-insensitive)
    pub fn find(&self, name: &str) -> Option<&Combatant> {
        let name = name.trim();
        self.combatants
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    pub fn get(&self, index: usize) -> Option<&Combatant> {
        self.combatants.get(index)
    }

    /// Combatant names in roster order
    pub fn names(&self) -> Vec<&str> {
        self.combatants.iter().map(Combatant::name).collect()
    }

    pub fn combatants(&self) -> &[Combatant] {
        &self.combatants
    }

    pub fn templates(&self) -> Vec<CombatantTemplate> {
        self.combatants.iter().map(CombatantTemplate::from).collect()
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }
}
