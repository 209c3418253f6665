//! Match state machine
//!
//! A [`Match`] moves through `NotStarted -> AwaitingSelections -> Terminal`.
//! Each round waits for both selections, resolves both actions in speed
//! order, records history and checks for the end of the match.

mod battle;
mod event;
mod history;
mod resolver;

pub use battle::{Match, MatchPhase, MatchResult};
pub use event::{BattleEvent, RoundReport};
pub use history::{History, HpSnapshot, LogCategory, LogEntry};
