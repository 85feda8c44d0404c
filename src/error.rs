//! Errors returned when constructing a [`PageRanker`](crate::ranker::PageRanker).

use thiserror::Error;

/// The ways a damping factor and web matrix can fail to describe a valid engine.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PageRankError {
    #[error("damping factor must lie within [0, 1], got {0}")]
    InvalidDamping(f64),

    #[error("web matrix must be square, got {rows}x{cols}")]
    NonSquareMatrix { rows: usize, cols: usize },

    #[error("web matrix must contain at least one node")]
    EmptyMatrix,

    #[error("web matrix entry ({row}, {col}) must be finite and non-negative, got {value}")]
    InvalidWeight { row: usize, col: usize, value: f64 },

    /// A node without outgoing weight makes the out-degree matrix singular.
    #[error("row {row} of the web matrix sums to zero, every node needs an outgoing edge")]
    SingularMatrix { row: usize },

    #[error("row {row} of the web matrix sums past the largest finite weight")]
    RowSumOverflow { row: usize },
}

pub type Result<T> = std::result::Result<T, PageRankError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            PageRankError::InvalidDamping(1.5).to_string(),
            "damping factor must lie within [0, 1], got 1.5"
        );
        assert_eq!(
            PageRankError::NonSquareMatrix { rows: 2, cols: 3 }.to_string(),
            "web matrix must be square, got 2x3"
        );
        assert_eq!(
            PageRankError::SingularMatrix { row: 1 }.to_string(),
            "row 1 of the web matrix sums to zero, every node needs an outgoing edge"
        );
        assert_eq!(
            PageRankError::RowSumOverflow { row: 0 }.to_string(),
            "row 0 of the web matrix sums past the largest finite weight"
        );
    }
}
