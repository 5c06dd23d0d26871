use crate::error::LcsError;
use std::ops::Deref;
use tracing::trace;

/// Returns a `rows` by `cols` matrix with every cell set to `fill`.
pub fn make_matrix<T: Clone>(rows: usize, cols: usize, fill: T) -> Vec<Vec<T>> {
    vec![vec![fill; cols]; rows]
}

/// The dynamic-programming length table for two sequences of lengths `n` and `m`.
///
/// Cell `(i, j)` holds the length of the LCS of the first `i` elements of the
/// original sequence and the first `j` elements of the modified sequence, so
/// the table always has `n + 1` rows of `m + 1` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable(Vec<Vec<usize>>);

impl Deref for LcsTable {
    type Target = Vec<Vec<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl LcsTable {
    /// Wraps rows built elsewhere. The shape is not checked here, see
    /// [`LcsTable::check_shape`].
    pub fn from_rows(rows: Vec<Vec<usize>>) -> Self {
        Self(rows)
    }

    /// Number of rows, `n + 1` for a table built from a sequence of length `n`.
    pub fn rows(&self) -> usize {
        self.0.len()
    }

    /// Width of the first row, 0 for a table with no rows.
    pub fn cols(&self) -> usize {
        self.0.first().map_or(0, |row| row.len())
    }

    /// Cell `(i, j)`, or `None` when it lies outside the table.
    pub fn get(&self, i: usize, j: usize) -> Option<usize> {
        self.0.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Length of the LCS of the full sequences, i.e. the bottom-right cell.
    pub fn lcs_len(&self) -> usize {
        self.0
            .last()
            .and_then(|row| row.last())
            .copied()
            .unwrap_or(0)
    }

    /// Unwraps the table into its rows.
    pub fn into_inner(self) -> Vec<Vec<usize>> {
        self.0
    }

    /// Checks that the table fits sequences of lengths `n` and `m`.
    pub fn check_shape(&self, n: usize, m: usize) -> Result<(), LcsError> {
        let expected_rows = n + 1;
        let expected_cols = m + 1;
        if self.rows() != expected_rows || self.cols() != expected_cols {
            return Err(LcsError::DimensionMismatch {
                expected_rows,
                expected_cols,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        for (row, cells) in self.0.iter().enumerate() {
            if cells.len() != expected_cols {
                return Err(LcsError::RaggedTable {
                    row,
                    expected: expected_cols,
                    found: cells.len(),
                });
            }
        }
        Ok(())
    }
}

/// Builds the LCS length table of `original` against `modified`.
pub fn compute_lcs_matrix<T, F>(original: &[T], modified: &[T], is_equal: F) -> LcsTable
where
    F: Fn(&T, &T) -> bool,
{
    let n = original.len();
    let m = modified.len();
    let mut dp = make_matrix(n + 1, m + 1, 0usize);

    for (i, v0) in original.iter().enumerate() {
        for (j, v1) in modified.iter().enumerate() {
            if is_equal(v0, v1) {
                dp[i + 1][j + 1] = dp[i][j] + 1;
            } else {
                dp[i + 1][j + 1] = dp[i + 1][j].max(dp[i][j + 1]);
            }
        }
    }

    let table = LcsTable(dp);
    trace!(
        rows = table.rows(),
        cols = table.cols(),
        lcs_len = table.lcs_len(),
        "built lcs table"
    );
    table
}
