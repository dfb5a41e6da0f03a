//! Elementwise operations: scalar scaling, addition, subtraction.
//!
//! All three walk the flat row-major buffer linearly. The binary operations
//! validate shapes up front and allocate the result before writing anything,
//! so a failure leaves both operands exactly as they were.

use crate::error::ShapeError;
use crate::matrix::Matrix;

impl Matrix {
    /// Multiply every element by `scalar`, in place.
    ///
    /// Touches exactly `rows * cols` elements. No allocation, no error
    /// conditions.
    ///
    /// # Example
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let mut m = Matrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    /// m.scale_in_place(2.0);
    /// assert_eq!(m.as_slice(), &[2.0, 4.0, 6.0, 8.0, 10.0, 12.0]);
    /// ```
    pub fn scale_in_place(&mut self, scalar: f64) {
        for v in self.as_mut_slice() {
            *v *= scalar;
        }
    }

    /// Elementwise sum: `result[i] = self[i] + other[i]`.
    ///
    /// Fails with [`ShapeError::ShapeMismatch`] if the shapes differ.
    /// Neither operand is modified.
    ///
    /// # Example
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let a = Matrix::from_rows(&[&[1.0, 2.0]]);
    /// let b = Matrix::from_rows(&[&[10.0, 20.0]]);
    /// let sum = a.add(&b).unwrap();
    /// assert_eq!(sum.as_slice(), &[11.0, 22.0]);
    /// ```
    pub fn add(&self, other: &Matrix) -> Result<Matrix, ShapeError> {
        self.combine(other, false)
    }

    /// Elementwise difference: `result[i] = self[i] - other[i]`.
    ///
    /// Fails with [`ShapeError::ShapeMismatch`] if the shapes differ. The
    /// subtrahend is read, never negated in place: both operands are left
    /// untouched and can be reused afterwards.
    ///
    /// # Example
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let a = Matrix::from_rows(&[&[5.0, 7.0]]);
    /// let b = Matrix::from_rows(&[&[1.0, 2.0]]);
    /// let diff = a.sub(&b).unwrap();
    /// assert_eq!(diff.as_slice(), &[4.0, 5.0]);
    /// assert_eq!(b.as_slice(), &[1.0, 2.0]);
    /// ```
    pub fn sub(&self, other: &Matrix) -> Result<Matrix, ShapeError> {
        self.combine(other, true)
    }

    /// Shared core for [`add`](Matrix::add) and [`sub`](Matrix::sub).
    ///
    /// The sign is applied per element while writing the result, so the
    /// right-hand operand is never mutated.
    fn combine(&self, other: &Matrix, subtract: bool) -> Result<Matrix, ShapeError> {
        if !self.same_shape(other) {
            return Err(ShapeError::ShapeMismatch {
                expected: self.shape(),
                actual: other.shape(),
            });
        }
        let sign = if subtract { -1.0 } else { 1.0 };
        let data = self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(&a, &b)| a + sign * b)
            .collect();
        Ok(Matrix::from_vec(self.rows(), self.cols(), data))
    }
}
