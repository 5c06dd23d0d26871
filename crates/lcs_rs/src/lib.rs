//! Longest Common Subsequence over arbitrary sequences.
//!
//! The computation is split in two steps: [`compute_lcs_matrix`] builds the
//! dynamic-programming length table, and [`backtrack_lcs`] walks it back from
//! the bottom-right cell to recover the matched elements. [`compute_lcs`] runs
//! both. Elements are compared with a caller-supplied predicate, so the
//! sequences only need to be slices.
//!
//! ```
//! use lcs_rs::{compute_lcs, MatchedPair};
//!
//! let original = [1, 2, 3];
//! let modified = [0, 2, 3, 4];
//! let pairs = compute_lcs(&original, &modified, |a, b| a == b);
//! assert_eq!(pairs, vec![MatchedPair::new(&2, &2), MatchedPair::new(&3, &3)]);
//! ```

mod backtrack;
pub mod error;
mod matrix;
mod pair;

pub use backtrack::{backtrack_lcs, backtrack_lcs_indices, try_backtrack_lcs};
pub use error::LcsError;
pub use matrix::{compute_lcs_matrix, make_matrix, LcsTable};
pub use pair::MatchedPair;

/// Computes one longest common subsequence of `original` and `modified`,
/// returned as pairs of references into both inputs in increasing order.
pub fn compute_lcs<'a, T, F>(
    original: &'a [T],
    modified: &'a [T],
    is_equal: F,
) -> Vec<MatchedPair<&'a T>>
where
    F: Fn(&T, &T) -> bool,
{
    let table = compute_lcs_matrix(original, modified, &is_equal);
    backtrack_lcs(original, modified, &table, &is_equal)
}

/// Same selection as [`compute_lcs`], returned as `(original_idx, modified_idx)`.
pub fn lcs_indices<T, F>(original: &[T], modified: &[T], is_equal: F) -> Vec<(usize, usize)>
where
    F: Fn(&T, &T) -> bool,
{
    let table = compute_lcs_matrix(original, modified, &is_equal);
    backtrack_lcs_indices(original, modified, &table, &is_equal)
}

/// [`compute_lcs`] matching elements with `==`.
pub fn lcs<'a, T: PartialEq>(original: &'a [T], modified: &'a [T]) -> Vec<MatchedPair<&'a T>> {
    compute_lcs(original, modified, |a, b| a == b)
}
