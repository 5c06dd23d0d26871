use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Original,
    Modified,
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Original => write!(f, "original"),
            Side::Modified => write!(f, "modified"),
        }
    }
}

#[derive(Error, Debug)]
pub enum JsonLcsError {
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{side} document must be a JSON array, found {found}")]
    NotAnArray { side: Side, found: &'static str },
}
