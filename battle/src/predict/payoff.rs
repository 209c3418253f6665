//! Payoff matrix over every move pair

use crate::damage::deterministic_damage;
use crate::types::Combatant;

/// Noise-free damage of every move of each side against the other
///
/// Each value is capped at the attacker's max HP, the self-HP cap for an
/// attacker at full health.
#[derive(Debug, Clone, PartialEq)]
pub struct DamageTable {
    pub p1: Vec<f64>,
    pub p2: Vec<f64>,
}

impl DamageTable {
    pub fn build(p1: &Combatant, p2: &Combatant) -> Self {
        Self {
            p1: move_damage(p1, p2),
            p2: move_damage(p2, p1),
        }
    }
}

fn move_damage(attacker: &Combatant, defender: &Combatant) -> Vec<f64> {
    attacker
        .moves()
        .iter()
        .map(|mv| deterministic_damage(attacker, defender, mv).min(attacker.max_hp()) as f64)
        .collect()
}

/// Zero-sum payoff matrix, from P1's point of view
///
/// Row `i` is P1's move `i`, column `j` is P2's move `j`. P1 maximizes, P2
/// minimizes.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoffMatrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl PayoffMatrix {
    /// `payoff[i][j] = p1_damage[i] - p2_damage[j]`
    pub fn from_damage(table: &DamageTable) -> Self {
        let values = table
            .p1
            .iter()
            .flat_map(|d1| table.p2.iter().map(move |d2| d1 - d2))
            .collect();
        Self {
            rows: table.p1.len(),
            cols: table.p2.len(),
            values,
        }
    }

    /// Build from explicit rows; None if empty or ragged
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let cols = rows.first()?.len();
        if cols == 0 || rows.iter().any(|r| r.len() != cols) {
            return None;
        }
        Some(Self {
            rows: rows.len(),
            cols,
            values: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }

    /// Expected payoff of each row against a column mix
    pub fn row_payoffs(&self, col_strategy: &[f64]) -> Vec<f64> {
        (0..self.rows)
            .map(|i| {
                (0..self.cols)
                    .map(|j| col_strategy[j] * self.get(i, j))
                    .sum()
            })
            .collect()
    }

    /// Expected payoff of each column against a row mix
    pub fn col_payoffs(&self, row_strategy: &[f64]) -> Vec<f64> {
        (0..self.cols)
            .map(|j| {
                (0..self.rows)
                    .map(|i| row_strategy[i] * self.get(i, j))
                    .sum()
            })
            .collect()
    }

    /// Expected payoff to P1 when both sides play the given mixes
    pub fn value(&self, row_strategy: &[f64], col_strategy: &[f64]) -> f64 {
        self.row_payoffs(col_strategy)
            .iter()
            .zip(row_strategy)
            .map(|(payoff, p)| payoff * p)
            .sum()
    }
}
