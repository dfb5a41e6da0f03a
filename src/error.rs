//! Domain errors for binary matrix operations.
//!
//! These are the only recoverable failures in the crate: every one of them is
//! detected before a single element of any operand or result is written, so a
//! caller that receives an error holds exactly the matrices it started with.

use thiserror::Error;

use crate::matrix::Shape;

/// A binary operation was handed operands whose shapes don't fit together.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// Elementwise operations need both operands to have the same shape.
    #[error("shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Shape of the left operand, which the result would have taken.
        expected: Shape,
        /// Shape of the right operand.
        actual: Shape,
    },

    /// Matrix multiplication needs the left operand's column count to equal
    /// the right operand's row count.
    #[error("incompatible dimensions for multiplication: {left} * {right}")]
    IncompatibleDimensions {
        /// Shape of the left operand.
        left: Shape,
        /// Shape of the right operand.
        right: Shape,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_message_carries_both_shapes() {
        let err = ShapeError::ShapeMismatch {
            expected: Shape { rows: 2, cols: 3 },
            actual: Shape { rows: 3, cols: 2 },
        };
        assert_eq!(err.to_string(), "shape mismatch: expected 2x3, got 3x2");
    }

    #[test]
    fn incompatible_message_carries_both_shapes() {
        let err = ShapeError::IncompatibleDimensions {
            left: Shape { rows: 2, cols: 3 },
            right: Shape { rows: 2, cols: 2 },
        };
        assert_eq!(
            err.to_string(),
            "incompatible dimensions for multiplication: 2x3 * 2x2"
        );
    }
}
