use std::collections::BTreeMap;

use super::enumerate::StateSpace;
use super::error::Error;
use super::moves::{MoveRates, elementary_moves};
use crate::model::matrix::TransitionMatrix;

/// Builds the generator matrix over `space` for hopping rate `h` and
/// end-reaction rate `c`.
///
/// Each row is assembled from that state's candidate neighbors only (the
/// states reachable by one elementary move), never from all `N²` pairs.
/// Every candidate must already be indexed by the enumerator; a missing
/// candidate aborts with [`Error::StateSpaceMismatch`]. After the
/// off-diagonal rates of a row are accumulated, the diagonal is set to
/// their negated sum, so every row sums to zero.
///
/// Construction is deterministic: row and column order follow the space's
/// index order, and rebuilding with identical inputs yields a bit-for-bit
/// identical matrix.
pub fn build_matrix(space: &StateSpace, h: f64, c: f64) -> Result<TransitionMatrix, Error> {
    let rates = MoveRates::new(h, c)?;

    let mut rows = Vec::with_capacity(space.len());
    for (i, state) in space.iter().enumerate() {
        // BTreeMap keeps the row sorted by column while duplicate
        // candidates accumulate their rates.
        let mut row: BTreeMap<usize, f64> = BTreeMap::new();

        for (target, kind) in elementary_moves(state) {
            let j = space
                .index_of(&target)
                .ok_or_else(|| Error::state_space_mismatch(i, target.to_string()))?;
            let rate = rates.rate_of(kind);
            if rate > 0.0 {
                *row.entry(j).or_insert(0.0) += rate;
            }
        }

        let total: f64 = row.values().sum();
        if total > 0.0 {
            row.insert(i, -total);
        }

        rows.push(row.into_iter().collect());
    }

    Ok(TransitionMatrix::from_rows(space.len(), rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::enumerate::enumerate_states;
    use crate::engine::moves::{MoveKind, transition_rate};
    use crate::model::polymer::Polymer;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn connecting_kinds(from: &Polymer, to: &Polymer) -> Vec<MoveKind> {
        elementary_moves(from)
            .into_iter()
            .filter(|(target, _)| target == to)
            .map(|(_, kind)| kind)
            .collect()
    }

    #[test]
    fn rows_sum_to_zero() {
        let space = enumerate_states(3).unwrap();
        let matrix = build_matrix(&space, 1.3, 0.7).unwrap();
        for i in 0..matrix.size() {
            assert!(approx_eq(matrix.row_sum(i), 0.0, 1e-12), "row {i}");
        }
    }

    #[test]
    fn off_diagonals_are_connected_non_negative_rates() {
        let space = enumerate_states(2).unwrap();
        let matrix = build_matrix(&space, 1.0, 0.5).unwrap();
        let rates = MoveRates::new(1.0, 0.5).unwrap();

        for (i, j, rate) in matrix.entries() {
            if i == j {
                continue;
            }
            assert!(rate > 0.0);
            let from = space.get(i).unwrap();
            let to = space.get(j).unwrap();
            assert!(!connecting_kinds(from, to).is_empty());
            assert!(approx_eq(rate, transition_rate(from, to, &rates), 1e-12));
        }
    }

    #[test]
    fn zero_hop_rate_leaves_only_end_edges() {
        let space = enumerate_states(2).unwrap();
        let matrix = build_matrix(&space, 0.0, 1.0).unwrap();

        for (i, j, _) in matrix.entries() {
            if i == j {
                continue;
            }
            let kinds = connecting_kinds(space.get(i).unwrap(), space.get(j).unwrap());
            assert!(kinds.iter().any(|k| k.is_end_move()));
        }
    }

    #[test]
    fn zero_end_rate_leaves_only_interior_edges() {
        let space = enumerate_states(2).unwrap();
        let matrix = build_matrix(&space, 1.0, 0.0).unwrap();

        for (i, j, _) in matrix.entries() {
            if i == j {
                continue;
            }
            let kinds = connecting_kinds(space.get(i).unwrap(), space.get(j).unwrap());
            assert!(kinds.iter().any(|k| !k.is_end_move()));
        }
    }

    #[test]
    fn two_link_scenario_has_expected_rates() {
        let space = enumerate_states(2).unwrap();
        let matrix = build_matrix(&space, 1.0, 0.5).unwrap();
        assert_eq!(space.len(), 25);
        assert_eq!(matrix.size(), 25);

        let ss = space.index_of(&"SS".parse().unwrap()).unwrap();
        let ud = space.index_of(&"UD".parse().unwrap()).unwrap();
        let us = space.index_of(&"US".parse().unwrap()).unwrap();
        let su = space.index_of(&"SU".parse().unwrap()).unwrap();

        // Hernia creation out of the curled-up state carries the hop rate,
        // end extension the end rate; four hernias plus eight one-taut
        // extensions give the diagonal.
        assert!(approx_eq(matrix.get(ss, ud), 1.0, 1e-12));
        assert!(approx_eq(matrix.get(ss, us), 0.5, 1e-12));
        assert!(approx_eq(matrix.get(ss, su), 0.5, 1e-12));
        assert!(approx_eq(matrix.get(ss, ss), -(4.0 + 8.0 * 0.5), 1e-12));
    }

    #[test]
    fn rebuilding_is_bit_for_bit_identical() {
        let space = enumerate_states(3).unwrap();
        let first = build_matrix(&space, 0.9, 0.3).unwrap();
        let second = build_matrix(&space, 0.9, 0.3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn negative_rates_are_rejected() {
        let space = enumerate_states(1).unwrap();
        assert!(build_matrix(&space, -1.0, 0.5).is_err());
        assert!(build_matrix(&space, 1.0, -0.5).is_err());
    }

    #[test]
    fn truncated_space_fails_with_mismatch() {
        let space = enumerate_states(2).unwrap();
        let truncated: Vec<Polymer> = space.iter().take(24).cloned().collect();
        let truncated = StateSpace::from_sequences(truncated).unwrap();

        let err = build_matrix(&truncated, 1.0, 0.5).unwrap_err();
        assert!(matches!(err, Error::StateSpaceMismatch { .. }));
    }

    #[test]
    fn all_zero_rates_yield_an_empty_generator() {
        let space = enumerate_states(2).unwrap();
        let matrix = build_matrix(&space, 0.0, 0.0).unwrap();
        assert_eq!(matrix.stored_entry_count(), 0);
        for i in 0..matrix.size() {
            assert_eq!(matrix.row_sum(i), 0.0);
        }
    }
}
