use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LcsError {
    #[error(
        "LCS table has shape {rows}x{cols}, expected {expected_rows}x{expected_cols} for the given sequences"
    )]
    DimensionMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    #[error("LCS table row {row} has {found} cells, expected {expected}")]
    RaggedTable {
        row: usize,
        expected: usize,
        found: usize,
    },
}
