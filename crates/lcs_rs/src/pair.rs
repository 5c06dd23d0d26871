use serde::{Deserialize, Serialize};

/// One element of the common subsequence, as seen on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchedPair<T> {
    pub original: T,
    pub modified: T,
}

impl<T> MatchedPair<T> {
    pub fn new(original: T, modified: T) -> Self {
        Self { original, modified }
    }
}

impl<T: Clone> MatchedPair<&T> {
    /// Clones the referenced elements into an owned pair.
    pub fn cloned(&self) -> MatchedPair<T> {
        MatchedPair {
            original: self.original.clone(),
            modified: self.modified.clone(),
        }
    }
}

impl<T> From<(T, T)> for MatchedPair<T> {
    fn from((original, modified): (T, T)) -> Self {
        Self { original, modified }
    }
}
