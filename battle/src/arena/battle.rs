//! Match - the battle state machine

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::BattleError;
use crate::config::MatchConfig;
use crate::types::{Combatant, Side};

use super::history::{History, HpSnapshot, LogCategory, LogEntry};

/// How a finished match was decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchResult {
    /// The loser's HP reached 0
    Knockout { winner: Side },
    /// Max rounds reached, winner had more HP
    HpDecision { winner: Side },
    /// Max rounds reached with equal HP
    Tie,
}

impl MatchResult {
    /// Winning side, None for a tie
    pub fn winner(&self) -> Option<Side> {
        match self {
            MatchResult::Knockout { winner } | MatchResult::HpDecision { winner } => Some(*winner),
            MatchResult::Tie => None,
        }
    }

    /// Result line for the battle log
    pub fn describe(&self) -> String {
        match self {
            MatchResult::Knockout { winner } => format!("{winner} wins by knockout!"),
            MatchResult::HpDecision { winner } => format!("{winner} wins with more HP!"),
            MatchResult::Tie => "It's a tie!".to_string(),
        }
    }
}

/// Where the match is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchPhase {
    NotStarted,
    /// Waiting for both sides to pick a move
    AwaitingSelections,
    Terminal(MatchResult),
}

/// A two-player match
///
/// The match exclusively owns both combatants for its lifetime. Every
/// operation either succeeds or returns an error leaving the match exactly
/// as it was.
#[derive(Debug, Clone)]
pub struct Match {
    pub(crate) config: MatchConfig,
    pub(crate) phase: MatchPhase,

    /// Current round (0 = not started)
    pub(crate) round: u32,

    pub(crate) combatants: Option<[Combatant; 2]>,

    /// Selected move index per side, cleared after each round
    pub(crate) selections: [Option<usize>; 2],

    pub(crate) history: History,

    /// Variance source for every damaging move
    pub(crate) rng: ChaCha8Rng,
}

impl Match {
    /// Create a match with the given rules
    pub fn new(config: MatchConfig) -> Result<Self, BattleError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(Self::with_rng(config, rng))
    }

    /// Create a match driven by an explicit generator
    pub fn with_rng(config: MatchConfig, rng: ChaCha8Rng) -> Self {
        Self {
            config,
            phase: MatchPhase::NotStarted,
            round: 0,
            combatants: None,
            selections: [None, None],
            history: History::new(),
            rng,
        }
    }

    /// Start a new battle between copies of two templates
    ///
    /// Any previous battle on this match is discarded.
    pub fn start(&mut self, p1: &Combatant, p2: &Combatant) {
        let combatants = [p1.fresh(), p2.fresh()];

        self.history = History::new();
        self.history.push_hp(HpSnapshot {
            round: 0,
            p1_hp: combatants[0].max_hp(),
            p2_hp: combatants[1].max_hp(),
            p1_name: combatants[0].name().to_string(),
            p2_name: combatants[1].name().to_string(),
        });
        self.history
            .push_log(1, "Battle started! Select your moves.", LogCategory::Info);

        tracing::info!(
            p1 = combatants[0].name(),
            p2 = combatants[1].name(),
            max_rounds = self.config.max_rounds,
            "battle started"
        );

        self.combatants = Some(combatants);
        self.selections = [None, None];
        self.round = 1;
        self.phase = MatchPhase::AwaitingSelections;
    }

    /// Select a move for one side
    ///
    /// Selecting again before the round resolves replaces the earlier choice.
    pub fn select_move(&mut self, side: Side, index: usize) -> Result<(), BattleError> {
        self.ensure_in_progress()?;
        let combatant = self.combatant(side).ok_or(BattleError::NotStarted)?;

        let available = combatant.moves().len();
        if index >= available {
            tracing::debug!(%side, index, available, "rejected move selection");
            return Err(BattleError::InvalidMoveIndex {
                side,
                index,
                available,
            });
        }

        self.selections[side.index()] = Some(index);
        Ok(())
    }

    /// Discard all match state and return to `NotStarted`
    pub fn reset(&mut self) {
        self.phase = MatchPhase::NotStarted;
        self.round = 0;
        self.combatants = None;
        self.selections = [None, None];
        self.history = History::new();
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Current round (0 before start)
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Result once the match is over
    pub fn result(&self) -> Option<MatchResult> {
        match self.phase {
            MatchPhase::Terminal(result) => Some(result),
            _ => None,
        }
    }

    /// Check if the match is accepting moves
    pub fn is_active(&self) -> bool {
        self.phase == MatchPhase::AwaitingSelections
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, MatchPhase::Terminal(_))
    }

    /// Get a side's combatant
    pub fn combatant(&self, side: Side) -> Option<&Combatant> {
        self.combatants.as_ref().map(|c| &c[side.index()])
    }

    /// Current HP of a side
    pub fn hp(&self, side: Side) -> Option<u32> {
        self.combatant(side).map(Combatant::current_hp)
    }

    /// Move index a side has selected this round
    pub fn selection(&self, side: Side) -> Option<usize> {
        self.selections[side.index()]
    }

    /// Check if both sides have selected
    pub fn ready(&self) -> bool {
        self.selections.iter().all(Option::is_some)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn log(&self) -> &[LogEntry] {
        self.history.log()
    }

    pub fn hp_history(&self) -> &[HpSnapshot] {
        self.history.hp_history()
    }

    pub(crate) fn ensure_in_progress(&self) -> Result<(), BattleError> {
        match self.phase {
            MatchPhase::AwaitingSelections => Ok(()),
            MatchPhase::NotStarted => Err(BattleError::NotStarted),
            MatchPhase::Terminal(_) => Err(BattleError::MatchOver),
        }
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::with_rng(MatchConfig::default(), ChaCha8Rng::from_entropy())
    }
}
