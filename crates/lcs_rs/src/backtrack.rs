use crate::error::LcsError;
use crate::matrix::LcsTable;
use crate::pair::MatchedPair;
use tracing::{trace, warn};

/// Walks `table` from `(n, m)` back to the origin and returns the positions of
/// the matched elements, in increasing order on both sides.
///
/// When a cell equals the one above it the walk moves up before considering
/// the cell to the left, so among several LCS of the same length the one
/// selected is always the same.
pub fn backtrack_lcs_indices<T, F>(
    original: &[T],
    modified: &[T],
    table: &LcsTable,
    is_equal: F,
) -> Vec<(usize, usize)>
where
    F: Fn(&T, &T) -> bool,
{
    let mut i = original.len();
    let mut j = modified.len();
    let mut res = Vec::with_capacity(i.min(j));
    while i > 0 && j > 0 {
        if table[i][j] == table[i - 1][j] {
            i -= 1;
        } else if table[i][j] == table[i][j - 1] {
            j -= 1;
        } else {
            if is_equal(&original[i - 1], &modified[j - 1]) {
                res.push((i - 1, j - 1));
            } else {
                warn!(i, j, "diagonal step not confirmed by predicate, skipping pair");
            }
            i -= 1;
            j -= 1;
        }
    }

    res.reverse();
    trace!(pairs = res.len(), "backtracked lcs");
    res
}

/// Reconstructs one LCS of `original` and `modified` from a table built by
/// [`compute_lcs_matrix`](crate::compute_lcs_matrix) over the same sequences.
///
/// The table shape is trusted; a table for other sequences may panic.
pub fn backtrack_lcs<'a, T, F>(
    original: &'a [T],
    modified: &'a [T],
    table: &LcsTable,
    is_equal: F,
) -> Vec<MatchedPair<&'a T>>
where
    F: Fn(&T, &T) -> bool,
{
    backtrack_lcs_indices(original, modified, table, is_equal)
        .into_iter()
        .map(|(i, j)| MatchedPair::new(&original[i], &modified[j]))
        .collect()
}

/// Like [`backtrack_lcs`], but rejects a table whose shape does not fit the
/// sequences.
pub fn try_backtrack_lcs<'a, T, F>(
    original: &'a [T],
    modified: &'a [T],
    table: &LcsTable,
    is_equal: F,
) -> Result<Vec<MatchedPair<&'a T>>, LcsError>
where
    F: Fn(&T, &T) -> bool,
{
    table.check_shape(original.len(), modified.len())?;
    Ok(backtrack_lcs(original, modified, table, is_equal))
}
