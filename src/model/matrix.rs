/// The continuous-time Markov generator matrix over an enumerated state
/// space.
///
/// Off-diagonal entries are non-negative transition rates between states
/// connected by at least one elementary move; each diagonal entry is the
/// negated sum of its row's off-diagonal entries, so every row sums to
/// zero. Only nonzero entries are stored, per row, sorted by column.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix {
    size: usize,
    rows: Vec<Vec<(usize, f64)>>,
}

impl TransitionMatrix {
    /// Builds a matrix from per-row `(column, rate)` lists. Rows must
    /// already be sorted by column; only the builder and the matrix reader
    /// construct matrices.
    pub(crate) fn from_rows(size: usize, rows: Vec<Vec<(usize, f64)>>) -> Self {
        debug_assert_eq!(rows.len(), size);
        debug_assert!(
            rows.iter()
                .all(|row| row.windows(2).all(|w| w[0].0 < w[1].0))
        );
        Self { size, rows }
    }

    /// Number of rows (= number of states).
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.rows[i]
            .binary_search_by_key(&j, |&(col, _)| col)
            .map(|pos| self.rows[i][pos].1)
            .unwrap_or(0.0)
    }

    /// The stored entries of row `i`, sorted by column.
    #[inline]
    pub fn row(&self, i: usize) -> &[(usize, f64)] {
        &self.rows[i]
    }

    /// All stored entries as `(row, column, rate)` triples, in row-major
    /// order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter().map(move |&(j, rate)| (i, j, rate)))
    }

    pub fn stored_entry_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn row_sum(&self, i: usize) -> f64 {
        self.rows[i].iter().map(|&(_, rate)| rate).sum()
    }

    /// Largest absolute rate in the matrix, 0.0 when empty.
    pub fn max_abs_rate(&self) -> f64 {
        self.entries()
            .map(|(_, _, rate)| rate.abs())
            .fold(0.0, f64::max)
    }

    /// Dense row-major copy, `size * size` values. Exporters consume the
    /// matrix through this view.
    pub fn to_dense(&self) -> Vec<f64> {
        let mut dense = vec![0.0; self.size * self.size];
        for (i, j, rate) in self.entries() {
            dense[i * self.size + j] = rate;
        }
        dense
    }
}
