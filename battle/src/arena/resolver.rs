//! Round resolution

use rand_chacha::ChaCha8Rng;

use crate::BattleError;
use crate::damage::{Roll, capped_damage, resolve_move};
use crate::types::{Combatant, Move, Side};

use super::battle::{Match, MatchPhase, MatchResult};
use super::event::{BattleEvent, RoundReport};
use super::history::HpSnapshot;

impl Match {
    /// Resolve the current round
    ///
    /// Resolution is speed-sequential: the strictly faster side acts first
    /// and P1 acts first on a speed tie. The second actor sees the HP left
    /// by the first action, and a knockout ends the round immediately.
    pub fn resolve_round(&mut self) -> Result<RoundReport, BattleError> {
        self.ensure_in_progress()?;
        let combatants = self.combatants.as_ref().ok_or(BattleError::NotStarted)?;

        let mut chosen: [Option<Move>; 2] = [None, None];
        for side in Side::BOTH {
            let Some(index) = self.selections[side.index()] else {
                tracing::warn!(%side, round = self.round, "resolve requested before selection");
                return Err(BattleError::MissingSelection(side));
            };
            let combatant = &combatants[side.index()];
            let mv = combatant
                .get_move(index)
                .ok_or(BattleError::InvalidMoveIndex {
                    side,
                    index,
                    available: combatant.moves().len(),
                })?;
            chosen[side.index()] = Some(mv.clone());
        }
        let [Some(p1_move), Some(p2_move)] = chosen else {
            return Err(BattleError::MissingSelection(Side::P1));
        };
        let moves = [p1_move, p2_move];

        let round = self.round;
        let (p1, p2) = (&combatants[0], &combatants[1]);
        let speed_tie = p1.speed() == p2.speed();
        let first = if p2.stats().outspeeds(p1.stats()) {
            Side::P2
        } else {
            Side::P1
        };

        let mut events = Vec::new();
        self.record(round, &mut events, BattleEvent::TurnOrder { first, speed_tie });

        let mut knocked_out = None;
        for attacker in [first, first.opponent()] {
            let Some(combatants) = self.combatants.as_mut() else {
                break;
            };
            let action = act(combatants, attacker, &moves[attacker.index()], &mut self.rng);
            for event in action {
                if let BattleEvent::Fainted { side } = &event {
                    knocked_out = Some(*side);
                }
                self.record(round, &mut events, event);
            }
            if knocked_out.is_some() {
                break;
            }
        }

        let snapshot = self.snapshot(round)?;
        self.history.push_hp(snapshot.clone());
        self.record(round, &mut events, BattleEvent::RoundEnded { snapshot: snapshot.clone() });

        let result = match knocked_out {
            Some(loser) => Some(MatchResult::Knockout {
                winner: loser.opponent(),
            }),
            None if round >= self.config.max_rounds => Some(decide_on_hp(&snapshot)),
            None => None,
        };

        match result {
            Some(result) => {
                tracing::info!(round, ?result, "match over");
                self.phase = MatchPhase::Terminal(result);
                self.record(round, &mut events, BattleEvent::MatchEnded { result });
            }
            None => {
                tracing::debug!(
                    round,
                    p1_hp = snapshot.p1_hp,
                    p2_hp = snapshot.p2_hp,
                    "round complete"
                );
                self.round += 1;
            }
        }
        self.selections = [None, None];

        Ok(RoundReport {
            round,
            first,
            events,
            result,
        })
    }

    /// Append an event and its log line
    fn record(&mut self, round: u32, events: &mut Vec<BattleEvent>, event: BattleEvent) {
        if let Some(combatants) = self.combatants.as_ref() {
            let names = [combatants[0].name(), combatants[1].name()];
            if let Some((text, category)) = event.narrate(names) {
                self.history.push_log(round, text, category);
            }
        }
        events.push(event);
    }

    fn snapshot(&self, round: u32) -> Result<HpSnapshot, BattleError> {
        let [p1, p2] = self.combatants.as_ref().ok_or(BattleError::NotStarted)?;
        Ok(HpSnapshot {
            round,
            p1_hp: p1.current_hp(),
            p2_hp: p2.current_hp(),
            p1_name: p1.name().to_string(),
            p2_name: p2.name().to_string(),
        })
    }
}

/// One side uses its move on the other, returns what happened
fn act(
    combatants: &mut [Combatant; 2],
    attacker_side: Side,
    mv: &Move,
    rng: &mut ChaCha8Rng,
) -> Vec<BattleEvent> {
    let (attacker, defender) = pair_mut(combatants, attacker_side);
    let breakdown = resolve_move(attacker, defender, mv, Roll::Random(rng));

    let mut events = Vec::with_capacity(2);
    if mv.is_heal() {
        let amount = attacker.restore(breakdown.heal);
        events.push(BattleEvent::Healed {
            side: attacker_side,
            move_name: mv.name.clone(),
            amount,
        });
        return events;
    }

    let damage = defender.take_damage(capped_damage(breakdown.final_damage, attacker));
    tracing::debug!(
        attacker = attacker.name(),
        mv = %mv.name,
        damage,
        defender_hp = defender.current_hp(),
        "move landed"
    );
    events.push(BattleEvent::Hit {
        attacker: attacker_side,
        move_name: mv.name.clone(),
        breakdown,
        damage,
    });

    if defender.is_fainted() {
        events.push(BattleEvent::Fainted {
            side: attacker_side.opponent(),
        });
    }
    events
}

/// Split the pair into (attacker, defender)
fn pair_mut(combatants: &mut [Combatant; 2], attacker: Side) -> (&mut Combatant, &mut Combatant) {
    let (left, right) = combatants.split_at_mut(1);
    match attacker {
        Side::P1 => (&mut left[0], &mut right[0]),
        Side::P2 => (&mut right[0], &mut left[0]),
    }
}

fn decide_on_hp(snapshot: &HpSnapshot) -> MatchResult {
    use std::cmp::Ordering;

    match snapshot.p1_hp.cmp(&snapshot.p2_hp) {
        Ordering::Greater => MatchResult::HpDecision { winner: Side::P1 },
        Ordering::Less => MatchResult::HpDecision { winner: Side::P2 },
        Ordering::Equal => MatchResult::Tie,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::LogCategory;
    use crate::config::MatchConfig;
    use crate::types::{BaseStats, Type};

    fn combatant(name: &str, types: Vec<Type>, hp: u32, speed: u32, moves: Vec<Move>) -> Combatant {
        Combatant::new(name, types, hp, BaseStats::new(50, 50, speed), moves).unwrap()
    }

    fn pikachu() -> Combatant {
        combatant(
            "Pikachu",
            vec![Type::Electric],
            120,
            90,
            vec![
                Move::damage("Thunderbolt", Type::Electric, 40),
                Move::damage("Quick Attack", Type::Normal, 20),
            ],
        )
    }

    fn blastoise() -> Combatant {
        combatant(
            "Blastoise",
            vec![Type::Water],
            160,
            58,
            vec![
                Move::damage("Water Pulse", Type::Water, 30),
                Move::damage("Bite", Type::Dark, 30),
            ],
        )
    }

    /// Weak neutral hitter, never knocks anything out in three rounds
    fn sparring(name: &str, speed: u32) -> Combatant {
        combatant(
            name,
            vec![Type::Normal],
            200,
            speed,
            vec![
                Move::damage("Tackle", Type::Fighting, 10),
                Move::heal("Recover", Type::Normal, 0.5),
            ],
        )
    }

    fn started(p1: &Combatant, p2: &Combatant) -> Match {
        let mut battle = Match::new(MatchConfig::seeded(42)).unwrap();
        battle.start(p1, p2);
        battle
    }

    fn play_round(battle: &mut Match, p1: usize, p2: usize) -> RoundReport {
        battle.select_move(Side::P1, p1).unwrap();
        battle.select_move(Side::P2, p2).unwrap();
        battle.resolve_round().unwrap()
    }

    #[test]
    fn test_resolve_requires_both_selections() {
        let mut battle = started(&pikachu(), &blastoise());
        assert_eq!(
            battle.resolve_round(),
            Err(BattleError::MissingSelection(Side::P1))
        );

        battle.select_move(Side::P1, 0).unwrap();
        assert_eq!(
            battle.resolve_round(),
            Err(BattleError::MissingSelection(Side::P2))
        );

        // Nothing changed
        assert_eq!(battle.hp(Side::P1), Some(120));
        assert_eq!(battle.hp(Side::P2), Some(160));
        assert_eq!(battle.round(), 1);
        assert_eq!(battle.log().len(), 1);
        assert_eq!(battle.hp_history().len(), 1);
        assert_eq!(battle.selection(Side::P1), Some(0));
    }

    #[test]
    fn test_resolve_before_start() {
        let mut battle = Match::new(MatchConfig::seeded(1)).unwrap();
        assert_eq!(battle.resolve_round(), Err(BattleError::NotStarted));
    }

    #[test]
    fn test_faster_side_acts_first() {
        let mut battle = started(&blastoise(), &pikachu());
        let report = play_round(&mut battle, 0, 1);

        assert_eq!(report.first, Side::P2);
        assert_eq!(report.actors(), vec![Side::P2, Side::P1]);
        assert_eq!(battle.log()[1].text, "Pikachu is faster and moves first!");
    }

    #[test]
    fn test_speed_tie_goes_to_p1() {
        let mut battle = started(&sparring("Left", 50), &sparring("Right", 50));
        let report = play_round(&mut battle, 0, 0);

        assert_eq!(report.first, Side::P1);
        assert_eq!(
            report.events[0],
            BattleEvent::TurnOrder {
                first: Side::P1,
                speed_tie: true
            }
        );
    }

    #[test]
    fn test_knockout_short_circuits() {
        // Thunderbolt does 105..=135 against Water, Blastoise only has 100 HP
        let frail = combatant(
            "Blastoise",
            vec![Type::Water],
            100,
            58,
            vec![Move::damage("Hydro Cannon", Type::Water, 45)],
        );
        let mut battle = started(&pikachu(), &frail);
        let report = play_round(&mut battle, 0, 0);

        assert_eq!(report.result, Some(MatchResult::Knockout { winner: Side::P1 }));
        assert_eq!(report.actors(), vec![Side::P1]);
        assert_eq!(battle.hp(Side::P2), Some(0));
        assert_eq!(battle.hp(Side::P1), Some(120));
        assert_eq!(battle.result(), Some(MatchResult::Knockout { winner: Side::P1 }));
        assert!(battle.is_over());

        // Knockout round is still recorded
        let last = battle.hp_history().last().unwrap();
        assert_eq!((last.round, last.p1_hp, last.p2_hp), (1, 120, 0));

        let result_line = battle.log().last().unwrap();
        assert_eq!(result_line.text, "Player 1 wins by knockout!");
        assert_eq!(result_line.category, LogCategory::Result);
    }

    /// Fast 10 HP attacker that cannot knock out `slow_hitter`
    fn fragile() -> Combatant {
        combatant(
            "Fragile",
            vec![Type::Normal],
            10,
            100,
            vec![Move::damage("Tackle", Type::Normal, 1)],
        )
    }

    /// Slow attacker whose hit (70+ against Normal) always knocks out `fragile`
    fn slow_hitter() -> Combatant {
        combatant(
            "Slowpoke",
            vec![Type::Normal],
            200,
            10,
            vec![Move::damage("Slam", Type::Fighting, 40)],
        )
    }

    #[test]
    fn test_second_actor_knockout() {
        let mut battle = started(&fragile(), &slow_hitter());
        let report = play_round(&mut battle, 0, 0);

        assert_eq!(report.first, Side::P1);
        assert_eq!(report.actors(), vec![Side::P1, Side::P2]);
        assert_eq!(report.result, Some(MatchResult::Knockout { winner: Side::P2 }));
        assert_eq!(
            report.events.iter().find(|e| matches!(e, BattleEvent::Fainted { .. })),
            Some(&BattleEvent::Fainted { side: Side::P1 })
        );
        assert_eq!(battle.hp(Side::P1), Some(0));
        assert!(battle.hp(Side::P2).unwrap() >= 191);
        assert!(battle.hp(Side::P2).unwrap() < 200);
        assert_eq!(battle.log().last().unwrap().text, "Player 2 wins by knockout!");
    }

    #[test]
    fn test_knockout_on_last_round_beats_hp_decision() {
        let config = MatchConfig {
            max_rounds: 1,
            seed: Some(42),
        };
        let mut battle = Match::new(config).unwrap();
        battle.start(&fragile(), &slow_hitter());
        let report = play_round(&mut battle, 0, 0);

        assert_eq!(report.round, 1);
        assert_eq!(report.result, Some(MatchResult::Knockout { winner: Side::P2 }));
        assert_eq!(battle.result(), Some(MatchResult::Knockout { winner: Side::P2 }));
        assert_eq!(battle.hp_history().len(), 2);
        let results: Vec<_> = battle
            .log()
            .iter()
            .filter(|e| e.category == LogCategory::Result)
            .collect();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].text, "Player 2 wins by knockout!");
    }

    #[test]
    fn test_self_hp_cap_in_battle() {
        // A 1 HP attacker can deal at most 1 damage
        let glass = combatant(
            "Glass",
            vec![Type::Electric],
            1,
            100,
            vec![Move::damage("Thunderbolt", Type::Electric, 40)],
        );
        let mut battle = started(&glass, &blastoise());
        let report = play_round(&mut battle, 0, 0);

        let BattleEvent::Hit { damage, breakdown, .. } = &report.events[1] else {
            panic!("expected a hit, got {:?}", report.events[1]);
        };
        assert!(breakdown.final_damage > 1);
        assert_eq!(*damage, 1);
        assert_eq!(battle.hp(Side::P2), Some(159));
    }

    #[test]
    fn test_three_rounds_end_by_hp() {
        let mut battle = started(&sparring("Left", 60), &sparring("Right", 50));
        for _ in 0..2 {
            let report = play_round(&mut battle, 0, 0);
            assert!(report.result.is_none());
            assert!(battle.is_active());
        }
        assert_eq!(battle.round(), 3);

        let report = play_round(&mut battle, 0, 0);
        let result = report.result.unwrap();
        assert!(matches!(
            result,
            MatchResult::HpDecision { .. } | MatchResult::Tie
        ));
        assert_eq!(battle.result(), Some(result));
        assert_eq!(battle.round(), 3);
        assert_eq!(battle.hp_history().len(), 4);

        let p1 = battle.hp(Side::P1).unwrap();
        let p2 = battle.hp(Side::P2).unwrap();
        match result {
            MatchResult::HpDecision { winner: Side::P1 } => assert!(p1 > p2),
            MatchResult::HpDecision { winner: Side::P2 } => assert!(p2 > p1),
            MatchResult::Tie => assert_eq!(p1, p2),
            MatchResult::Knockout { .. } => unreachable!(),
        }
    }

    #[test]
    fn test_heal_caps_at_max() {
        let mut battle = started(&sparring("Left", 60), &sparring("Right", 50));
        // Left heals at full HP, Right hits for 10 +/- 5
        let report = play_round(&mut battle, 1, 0);

        assert_eq!(
            report.events[1],
            BattleEvent::Healed {
                side: Side::P1,
                move_name: "Recover".to_string(),
                amount: 0
            }
        );
        assert!(battle.hp(Side::P1).unwrap() < 200);
        // Healing nothing leaves no log line
        assert!(battle.log().iter().all(|e| e.category != LogCategory::Heal));

        // Second round: heal restores what was lost, capped at max
        play_round(&mut battle, 1, 1);
        assert_eq!(battle.hp(Side::P1), Some(200));
        assert_eq!(battle.hp(Side::P2), Some(200));
        let heal_lines = battle
            .log()
            .iter()
            .filter(|e| e.category == LogCategory::Heal)
            .count();
        // Only Left actually restored HP
        assert_eq!(heal_lines, 1);
    }

    #[test]
    fn test_tie_when_nobody_takes_damage() {
        let mut battle = started(&sparring("Left", 60), &sparring("Right", 50));
        for _ in 0..3 {
            play_round(&mut battle, 1, 1);
        }
        assert_eq!(battle.result(), Some(MatchResult::Tie));
        assert_eq!(battle.log().last().unwrap().text, "It's a tie!");
    }

    #[test]
    fn test_immune_target_logs_no_effect() {
        let ghost = combatant(
            "Gengar",
            vec![Type::Ghost],
            120,
            10,
            vec![Move::damage("Shadow Ball", Type::Ghost, 35)],
        );
        let mut battle = started(&sparring("Left", 60), &ghost);
        play_round(&mut battle, 0, 0);

        assert_eq!(battle.hp(Side::P2), Some(120));
        assert!(
            battle
                .log()
                .iter()
                .any(|e| e.text == "Left's Tackle had no effect on Gengar!")
        );
    }

    #[test]
    fn test_terminal_rejects_everything() {
        let frail = combatant(
            "Frail",
            vec![Type::Water],
            10,
            1,
            vec![Move::damage("Splash", Type::Water, 1)],
        );
        let mut battle = started(&pikachu(), &frail);
        play_round(&mut battle, 0, 0);
        assert!(battle.is_over());

        let log_len = battle.log().len();
        assert_eq!(battle.select_move(Side::P1, 0), Err(BattleError::MatchOver));
        assert_eq!(battle.resolve_round(), Err(BattleError::MatchOver));
        assert_eq!(battle.log().len(), log_len);
    }

    #[test]
    fn test_selections_cleared_after_round() {
        let mut battle = started(&sparring("Left", 60), &sparring("Right", 50));
        play_round(&mut battle, 0, 0);
        assert_eq!(battle.selection(Side::P1), None);
        assert_eq!(battle.selection(Side::P2), None);
        assert_eq!(battle.round(), 2);
    }

    #[test]
    fn test_same_seed_same_battle() {
        let run = || {
            let mut battle = started(&sparring("Left", 60), &sparring("Right", 50));
            for _ in 0..3 {
                play_round(&mut battle, 0, 0);
            }
            battle.log().to_vec()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_history_rounds_monotonic() {
        let mut battle = started(&sparring("Left", 60), &sparring("Right", 50));
        for _ in 0..3 {
            play_round(&mut battle, 0, 0);
        }
        let rounds: Vec<u32> = battle.log().iter().map(|e| e.round).collect();
        assert!(rounds.windows(2).all(|w| w[0] <= w[1]));
        let hp_rounds: Vec<u32> = battle.hp_history().iter().map(|s| s.round).collect();
        assert_eq!(hp_rounds, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_restart_discards_history() {
        let mut battle = started(&sparring("Left", 60), &sparring("Right", 50));
        play_round(&mut battle, 0, 0);

        battle.start(&pikachu(), &blastoise());
        assert_eq!(battle.round(), 1);
        assert_eq!(battle.hp_history().len(), 1);
        assert_eq!(battle.log().len(), 1);
        assert_eq!(battle.hp(Side::P1), Some(120));
    }
}
