//! Fictitious play for two-player zero-sum games

use super::payoff::PayoffMatrix;

/// Approximate mixed-strategy equilibrium
#[derive(Debug, Clone, PartialEq)]
pub struct Equilibrium {
    /// Row player's (P1) move probabilities
    pub p1: Vec<f64>,
    /// Column player's (P2) move probabilities
    pub p2: Vec<f64>,
}

/// Run `iterations` rounds of fictitious play on `matrix`
///
/// Both strategies start uniform. Each iteration computes both pure best
/// responses against the current mixes (P1 maximizes, P2 minimizes, ties go
/// to the lowest index) and then moves each mix toward its best response by
/// `2 / (iter + 2)`.
pub fn fictitious_play(matrix: &PayoffMatrix, iterations: usize) -> Equilibrium {
    let (m, n) = (matrix.rows(), matrix.cols());
    let mut p1 = vec![1.0 / m as f64; m];
    let mut p2 = vec![1.0 / n as f64; n];

    for iter in 0..iterations {
        let best_col = argmin(&matrix.col_payoffs(&p1));
        let best_row = argmax(&matrix.row_payoffs(&p2));

        let lr = 2.0 / (iter as f64 + 2.0);
        blend_toward(&mut p1, best_row, lr);
        blend_toward(&mut p2, best_col, lr);
    }

    Equilibrium { p1, p2 }
}

fn blend_toward(strategy: &mut [f64], target: usize, lr: f64) {
    for (i, p) in strategy.iter_mut().enumerate() {
        *p = *p * (1.0 - lr) + if i == target { lr } else { 0.0 };
    }
}

/// Index of the first maximum
fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, v) in values.iter().enumerate() {
        if *v > values[best] {
            best = i;
        }
    }
    best
}

/// Index of the first minimum
fn argmin(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, v) in values.iter().enumerate() {
        if *v < values[best] {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f64], expected: &[f64], tolerance: f64) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() <= tolerance, "{actual:?} vs {expected:?}");
        }
    }

    #[test]
    fn test_argmax_argmin_first_index() {
        assert_eq!(argmax(&[1.0, 3.0, 3.0]), 1);
        assert_eq!(argmin(&[2.0, 0.0, 0.0]), 1);
        assert_eq!(argmax(&[5.0]), 0);
    }

    #[test]
    fn test_single_cell() {
        let matrix = PayoffMatrix::from_rows(vec![vec![5.0]]).unwrap();
        let eq = fictitious_play(&matrix, 1000);
        assert_close(&eq.p1, &[1.0], 1e-9);
        assert_close(&eq.p2, &[1.0], 1e-9);
    }

    #[test]
    fn test_dominant_strategies() {
        // Row 1 dominates, column 0 dominates for the minimizer
        let matrix =
            PayoffMatrix::from_rows(vec![vec![1.0, 4.0], vec![2.0, 6.0], vec![0.0, 3.0]]).unwrap();
        let eq = fictitious_play(&matrix, 1000);
        assert_close(&eq.p1, &[0.0, 1.0, 0.0], 1e-9);
        assert_close(&eq.p2, &[1.0, 0.0], 1e-9);
    }

    #[test]
    fn test_matching_pennies() {
        let matrix = PayoffMatrix::from_rows(vec![vec![1.0, -1.0], vec![-1.0, 1.0]]).unwrap();
        let eq = fictitious_play(&matrix, 1000);
        assert_close(&eq.p1, &[0.5, 0.5], 0.05);
        assert_close(&eq.p2, &[0.5, 0.5], 0.05);
    }

    #[test]
    fn test_rock_paper_scissors() {
        let matrix = PayoffMatrix::from_rows(vec![
            vec![0.0, -1.0, 1.0],
            vec![1.0, 0.0, -1.0],
            vec![-1.0, 1.0, 0.0],
        ])
        .unwrap();
        let eq = fictitious_play(&matrix, 1000);
        let third = 1.0 / 3.0;
        assert_close(&eq.p1, &[third, third, third], 0.05);
        assert_close(&eq.p2, &[third, third, third], 0.05);
    }

    #[test]
    fn test_mixed_equilibrium() {
        // Equilibrium: P1 (1/2, 1/2), P2 (1/4, 3/4), value 1.5
        let matrix = PayoffMatrix::from_rows(vec![vec![3.0, 1.0], vec![0.0, 2.0]]).unwrap();
        let eq = fictitious_play(&matrix, 1000);
        assert_close(&eq.p1, &[0.5, 0.5], 0.05);
        assert_close(&eq.p2, &[0.25, 0.75], 0.05);
        assert!((matrix.value(&eq.p1, &eq.p2) - 1.5).abs() < 0.1);
    }

    #[test]
    fn test_strategies_are_distributions() {
        let matrix = PayoffMatrix::from_rows(vec![
            vec![2.0, -3.0, 1.0, 0.0],
            vec![-1.0, 4.0, -2.0, 1.0],
        ])
        .unwrap();
        let eq = fictitious_play(&matrix, 250);
        for strategy in [&eq.p1, &eq.p2] {
            let total: f64 = strategy.iter().sum();
            assert!((total - 1.0).abs() < 1e-9);
            assert!(strategy.iter().all(|p| *p >= 0.0));
        }
    }
}
