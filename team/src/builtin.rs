//! Built-in roster data

use typeclash_battle::{BaseStats, Move, Type};

use crate::roster::CombatantTemplate;

fn template(
    name: &str,
    types: &[Type],
    max_hp: u32,
    (attack, defense, speed): (u32, u32, u32),
    moves: Vec<Move>,
) -> CombatantTemplate {
    CombatantTemplate {
        name: name.to_string(),
        types: types.to_vec(),
        max_hp,
        stats: BaseStats::new(attack, defense, speed),
        moves,
    }
}

pub(crate) fn templates() -> Vec<CombatantTemplate> {
    let heal = Move::DEFAULT_HEAL_FRACTION;
    vec![
        template(
            "Pikachu",
            &[Type::Electric],
            120,
            (55, 40, 90),
            vec![
                Move::damage("Thunderbolt", Type::Electric, 40),
                Move::damage("Electro Ball", Type::Electric, 30),
                Move::damage("Quick Attack", Type::Normal, 20),
                Move::damage("Iron Tail", Type::Steel, 30),
            ],
        ),
        template(
            "Charizard",
            &[Type::Fire, Type::Flying],
            150,
            (84, 78, 80),
            vec![
                Move::damage("Flamethrower", Type::Fire, 40),
                Move::damage("Fire Blast", Type::Fire, 45),
                Move::damage("Fly", Type::Flying, 35),
                Move::damage("Dragon Claw", Type::Dragon, 35),
            ],
        ),
        template(
            "Venusaur",
            &[Type::Grass, Type::Poison],
            160,
            (82, 83, 60),
            vec![
                Move::damage("Razor Leaf", Type::Grass, 35),
                Move::damage("Solar Beam", Type::Grass, 45),
                Move::damage("Sludge Bomb", Type::Poison, 35),
                Move::damage("Earthquake", Type::Ground, 40),
            ],
        ),
        template(
            "Blastoise",
            &[Type::Water],
            160,
            (83, 100, 58),
            vec![
                Move::damage("Water Pulse", Type::Water, 30),
                Move::damage("Hydro Cannon", Type::Water, 45),
                Move::damage("Ice Beam", Type::Ice, 35),
                Move::damage("Bite", Type::Dark, 30),
            ],
        ),
        template(
            "Greninja",
            &[Type::Water, Type::Dark],
            140,
            (103, 71, 95),
            vec![
                Move::damage("Water Shuriken", Type::Water, 30),
                Move::damage("Hydro Pump", Type::Water, 45),
                Move::heal("Double Team", Type::Normal, heal),
                Move::damage("Night Slash", Type::Dark, 35),
            ],
        ),
        template(
            "Lucario",
            &[Type::Fighting, Type::Steel],
            140,
            (130, 95, 70),
            vec![
                Move::damage("Aura Sphere", Type::Fighting, 40),
                Move::damage("Close Combat", Type::Fighting, 45),
                Move::damage("Extreme Speed", Type::Normal, 30),
                Move::damage("Metal Claw", Type::Steel, 25),
            ],
        ),
        template(
            "Mewtwo",
            &[Type::Psychic],
            180,
            (150, 70, 85),
            vec![
                Move::damage("Psystrike", Type::Psychic, 45),
                Move::damage("Psychic", Type::Psychic, 40),
                Move::damage("Shadow Ball", Type::Ghost, 35),
                Move::heal("Recover", Type::Normal, heal),
            ],
        ),
    ]
}
