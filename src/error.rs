//! Error types for matrix construction, algebra and rational parsing.

use thiserror::Error;

/// Errors raised by fallible [`Matrix`](crate::Matrix) operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    /// Construction input whose rows differ in length.
    #[error("all rows must have the same length: row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Two operands that must share a shape (or one side of it) do not.
    #[error(
        "cannot {operation} a {left_rows}x{left_cols} matrix with a {right_rows}x{right_cols} matrix"
    )]
    DimensionMismatch {
        operation: &'static str,
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// Left column count differs from right row count in a product.
    #[error("incompatible dimensions for multiplication: {left_cols} columns against {right_rows} rows")]
    IncompatibleDimensions { left_cols: usize, right_rows: usize },

    #[error("cannot {operation} a non-square {rows}x{cols} matrix")]
    NotSquare {
        operation: &'static str,
        rows: usize,
        cols: usize,
    },

    #[error("cannot compute the inverse of a singular matrix")]
    Singular,

    #[error("cannot raise a matrix to the non-integer exponent {exponent}")]
    NonIntegerExponent { exponent: f64 },

    #[error("position ({row}, {col}) is outside a {rows}x{cols} matrix")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

impl MatrixError {
    pub fn dimension_mismatch(
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    ) -> Self {
        Self::DimensionMismatch {
            operation,
            left_rows: left.0,
            left_cols: left.1,
            right_rows: right.0,
            right_cols: right.1,
        }
    }

    pub fn not_square(operation: &'static str, shape: (usize, usize)) -> Self {
        Self::NotSquare {
            operation,
            rows: shape.0,
            cols: shape.1,
        }
    }

    pub fn out_of_bounds(position: (usize, usize), shape: (usize, usize)) -> Self {
        Self::OutOfBounds {
            row: position.0,
            col: position.1,
            rows: shape.0,
            cols: shape.1,
        }
    }
}

/// Errors raised while building a [`Fraction`](crate::Fraction).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FractionError {
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("denominator cannot be zero")]
    ZeroDenominator,
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MatrixError::dimension_mismatch("add", (2, 2), (3, 1)).to_string(),
            "cannot add a 2x2 matrix with a 3x1 matrix"
        );
        assert_eq!(
            MatrixError::not_square("invert", (2, 3)).to_string(),
            "cannot invert a non-square 2x3 matrix"
        );
        assert_eq!(
            MatrixError::NonIntegerExponent { exponent: 2.5 }.to_string(),
            "cannot raise a matrix to the non-integer exponent 2.5"
        );
        assert_eq!(
            FractionError::InvalidNumber("x".into()).to_string(),
            "invalid number: \"x\""
        );
    }
}
