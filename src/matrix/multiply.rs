//! Matrix product.

use crate::error::ShapeError;
use crate::matrix::Matrix;

impl Matrix {
    /// Matrix product: `result = self * other`.
    ///
    /// Requires `self.cols() == other.rows()`; the result is
    /// `self.rows() × other.cols()`, with
    /// `result[r][c] = Σ self[r][k] * other[k][c]` accumulated in `f64`.
    ///
    /// The triple loop runs in i-k-j order so the innermost loop walks both
    /// `other` and the result sequentially (stride 1) instead of striding
    /// down a column of `other` on every step.
    ///
    /// Fails with [`ShapeError::IncompatibleDimensions`] if the inner
    /// dimensions disagree. The result is always a fresh allocation; it
    /// never aliases either input.
    ///
    /// # Example
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let a = Matrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    /// let b = Matrix::from_rows(&[&[7.0, 8.0], &[9.0, 10.0], &[11.0, 12.0]]);
    /// let c = a.multiply(&b).unwrap();
    /// assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
    /// ```
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, ShapeError> {
        if self.cols() != other.rows() {
            return Err(ShapeError::IncompatibleDimensions {
                left: self.shape(),
                right: other.shape(),
            });
        }

        let (m, k, n) = (self.rows(), self.cols(), other.cols());
        let mut result = Matrix::zeros(m, n);

        let a = self.as_slice();
        let b = other.as_slice();
        let c = result.as_mut_slice();
        for i in 0..m {
            for p in 0..k {
                for j in 0..n {
                    c[i * n + j] += a[i * k + p] * b[p * n + j];
                }
            }
        }

        Ok(result)
    }
}
