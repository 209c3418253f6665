//! Append-only battle history (text log and HP snapshots)

use crate::types::Side;

/// Kind of log line, used by presentation for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LogCategory {
    Info,
    Damage,
    Heal,
    Result,
}

/// One line of the battle log
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    pub round: u32,
    pub text: String,
    pub category: LogCategory,
}

/// HP of both sides at the end of a round (round 0 = battle start)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HpSnapshot {
    pub round: u32,
    pub p1_hp: u32,
    pub p2_hp: u32,
    pub p1_name: String,
    pub p2_name: String,
}

impl HpSnapshot {
    /// HP recorded for one side
    pub fn hp(&self, side: Side) -> u32 {
        match side {
            Side::P1 => self.p1_hp,
            Side::P2 => self.p2_hp,
        }
    }
}

/// Log and HP history of one match
///
/// Entries are only ever appended, and round numbers never go backwards.
#[derive(Debug, Clone, Default)]
pub struct History {
    log: Vec<LogEntry>,
    hp: Vec<HpSnapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    pub fn hp_history(&self) -> &[HpSnapshot] {
        &self.hp
    }

    /// Log lines written during `round`
    pub fn entries_for_round(&self, round: u32) -> impl Iterator<Item = &LogEntry> {
        self.log.iter().filter(move |e| e.round == round)
    }

    /// Highest HP recorded for either side (chart scale)
    pub fn peak_hp(&self) -> Option<u32> {
        self.hp.iter().map(|s| s.p1_hp.max(s.p2_hp)).max()
    }

    /// `(round, hp)` points for one side
    pub fn hp_series(&self, side: Side) -> Vec<(u32, u32)> {
        self.hp.iter().map(|s| (s.round, s.hp(side))).collect()
    }

    pub(crate) fn push_log(&mut self, round: u32, text: impl Into<String>, category: LogCategory) {
        debug_assert!(self.log.last().is_none_or(|last| last.round <= round));
        self.log.push(LogEntry {
            round,
            text: text.into(),
            category,
        });
    }

    pub(crate) fn push_hp(&mut self, snapshot: HpSnapshot) {
        debug_assert!(self.hp.last().is_none_or(|last| last.round <= snapshot.round));
        self.hp.push(snapshot);
    }
}
