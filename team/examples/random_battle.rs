//! Random Battle Example
//!
//! Picks two combatants from the roster, prints the predicted equilibrium,
//! then plays a match where both sides choose random moves.
//!
//! Usage: cargo run -p typeclash-team --example random_battle [roster.json] [config.json]
//! Set RUST_LOG=typeclash_battle=debug to see engine tracing.

use anyhow::Result;
use rand::seq::SliceRandom;
use tracing_subscriber::EnvFilter;
use typeclash_battle::query::{best_move, coverage};
use typeclash_battle::{
    BattleEvent, Combatant, LogCategory, Match, PredictedWinner, Predictor, Side, Type,
};
use typeclash_team::{ArenaConfig, Roster};

fn join(types: &[Type]) -> String {
    if types.is_empty() {
        return "-".to_string();
    }
    types.iter().map(Type::as_str).collect::<Vec<_>>().join(", ")
}

fn print_matchup(attacker: &Combatant, defender: &Combatant) {
    println!("{} vs {}:", attacker.name(), defender.name());
    for mv in attacker.moves() {
        let c = coverage(mv.move_type);
        println!(
            "  {:<16} strong: {} | weak: {} | none: {}",
            mv.name,
            join(&c.super_effective),
            join(&c.not_very_effective),
            join(&c.no_effect)
        );
    }
    if let Some(hint) = attacker.get_move(best_move(attacker, defender)) {
        println!("  hint: {}", hint.name);
    }
}

fn print_prediction(predictor: &Predictor, p1: &Combatant, p2: &Combatant) {
    let prediction = predictor.predict(p1, p2);

    println!("=== Prediction ===");
    for (side, combatant) in [(Side::P1, p1), (Side::P2, p2)] {
        println!("{} ({}):", combatant.name(), side);
        for (mv, p) in combatant.moves().iter().zip(prediction.strategy(side)) {
            println!("  {:<16} {:>5.1}%", mv.name, p * 100.0);
        }
        println!(
            "  projected HP after {} rounds: {:.1}",
            predictor.config().projection_rounds,
            prediction.projected_hp(side)
        );
    }
    match prediction.predicted_winner {
        PredictedWinner::Winner(side) => println!("Predicted winner: {}", side),
        PredictedWinner::Tie => println!("Predicted winner: tie"),
    }
    println!();
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let roster = match args.next() {
        Some(path) => Roster::load(path)?,
        None => Roster::builtin()?,
    };
    let config = match args.next() {
        Some(path) => ArenaConfig::load(path)?,
        None => ArenaConfig::default(),
    };

    let mut rng = rand::thread_rng();
    let picks: Vec<&Combatant> = roster.combatants().choose_multiple(&mut rng, 2).collect();
    let (p1, p2) = match picks.as_slice() {
        [a, b] => (*a, *b),
        // Single-entry roster: mirror match
        _ => (&roster.combatants()[0], &roster.combatants()[0]),
    };

    println!("{} vs {}\n", p1.name(), p2.name());
    print_matchup(p1, p2);
    print_matchup(p2, p1);
    println!();
    print_prediction(&Predictor::new(config.predictor.clone())?, p1, p2);

    let mut battle = Match::new(config.battle.clone())?;
    battle.start(p1, p2);

    while battle.is_active() {
        for side in Side::BOTH {
            let available = battle.combatant(side).map_or(1, |c| c.moves().len());
            let choice = (0..available).collect::<Vec<_>>();
            if let Some(index) = choice.choose(&mut rng) {
                battle.select_move(side, *index)?;
            }
        }

        let report = battle.resolve_round()?;
        println!("=== Round {} ===", report.round);
        for event in &report.events {
            if let BattleEvent::Hit { breakdown, .. } = event {
                println!(
                    "  (base {} {:+}, x{} {}, STAB x{})",
                    breakdown.base_power,
                    breakdown.variance_delta,
                    breakdown.effectiveness,
                    breakdown.label,
                    breakdown.stab
                );
            }
        }
        for entry in battle.history().entries_for_round(report.round) {
            let tag = match entry.category {
                LogCategory::Info => "info",
                LogCategory::Damage => "dmg ",
                LogCategory::Heal => "heal",
                LogCategory::Result => "end ",
            };
            println!("[{}] {}", tag, entry.text);
        }
    }

    println!("\n=== HP history ===");
    for snapshot in battle.hp_history() {
        println!(
            "round {}: {} {} / {} {}",
            snapshot.round, snapshot.p1_name, snapshot.p1_hp, snapshot.p2_name, snapshot.p2_hp
        );
    }

    Ok(())
}
