use thiserror::Error;

// Unified error type for exact_linalg

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    #[error("{op}: incompatible shapes {lhs:?} and {rhs:?}")]
    DimensionMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    #[error("{op} must take a square matrix, got {rows}x{cols}")]
    NotSquare {
        op: &'static str,
        rows: usize,
        cols: usize,
    },
    #[error("{op}: degenerate matrix")]
    Degenerate { op: &'static str },
    #[error("invalid permutation: {0}")]
    InvalidPermutation(String),
    #[error("parse error: {0}")]
    Parse(String),
}

impl LinalgError {
    /// `NotSquare` is the square-shape special case of a dimension mismatch.
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(
            self,
            LinalgError::DimensionMismatch { .. } | LinalgError::NotSquare { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, LinalgError>;

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_square_is_dimension_mismatch() {
        let e = LinalgError::NotSquare {
            op: "inverse",
            rows: 2,
            cols: 3,
        };
        assert!(e.is_dimension_mismatch());
        assert_eq!(e.to_string(), "inverse must take a square matrix, got 2x3");

        let e = LinalgError::DimensionMismatch {
            op: "add",
            lhs: (1, 2),
            rhs: (2, 1),
        };
        assert!(e.is_dimension_mismatch());
        assert_eq!(e.to_string(), "add: incompatible shapes (1, 2) and (2, 1)");

        assert!(!LinalgError::Degenerate { op: "inverse" }.is_dimension_mismatch());
    }
}
