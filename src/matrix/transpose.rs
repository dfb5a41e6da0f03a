//! Transpose, with the in-place/allocated distinction made explicit.

use std::ops::Deref;

use crate::matrix::Matrix;

/// The result of [`Matrix::transpose`].
///
/// A square matrix is transposed in place, so the result is a borrow of the
/// input's own storage; a rectangular matrix needs a buffer of a different
/// row length, so the result is a freshly allocated value. The two cases
/// have different aliasing behavior, and callers that care (for example to
/// know whether the input was mutated) can tell them apart with
/// [`is_aliased`](Transposed::is_aliased) or by matching.
///
/// Both variants deref to [`Matrix`], so code that only reads the result
/// does not need to match.
#[derive(Debug)]
pub enum Transposed<'a> {
    /// The input was square: it has been transposed in place, and this
    /// borrows its storage. Dropping this does not free anything.
    Aliased(&'a mut Matrix),
    /// The input was rectangular: this is a new `cols × rows` matrix with
    /// its own storage, and the input is unmodified.
    Owned(Matrix),
}

impl Transposed<'_> {
    /// True iff the result shares storage with the transposed input.
    pub fn is_aliased(&self) -> bool {
        matches!(self, Transposed::Aliased(_))
    }

    /// The result as a plain matrix reference, whichever variant it is.
    pub fn as_matrix(&self) -> &Matrix {
        match self {
            Transposed::Aliased(m) => m,
            Transposed::Owned(m) => m,
        }
    }

    /// Convert into an independently owned matrix, cloning the buffer only
    /// in the aliased case.
    pub fn into_owned(self) -> Matrix {
        match self {
            Transposed::Aliased(m) => m.clone(),
            Transposed::Owned(m) => m,
        }
    }
}

impl Deref for Transposed<'_> {
    type Target = Matrix;

    fn deref(&self) -> &Matrix {
        self.as_matrix()
    }
}

impl Matrix {
    /// Transpose the matrix.
    ///
    /// A square matrix is transposed in place by swapping `(i, j)` with
    /// `(j, i)` for every `i < j` (the diagonal stays put); the returned
    /// [`Transposed::Aliased`] borrows `self`, whose elements now hold the
    /// transposed values. A rectangular matrix cannot be transposed within
    /// its own row-major buffer, so a fresh `cols × rows` matrix is filled
    /// with `result[c][r] = self[r][c]` and returned as
    /// [`Transposed::Owned`], leaving `self` untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let mut square = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]);
    /// let t = square.transpose();
    /// assert!(t.is_aliased());
    /// assert_eq!(t.as_slice(), &[1.0, 3.0, 2.0, 4.0]);
    ///
    /// let mut wide = Matrix::from_rows(&[&[1.0, 2.0, 3.0]]);
    /// let t = wide.transpose();
    /// assert!(!t.is_aliased());
    /// assert_eq!(t.shape().rows, 3);
    /// ```
    pub fn transpose(&mut self) -> Transposed<'_> {
        if self.is_square() {
            let n = self.rows;
            for i in 0..n {
                for j in (i + 1)..n {
                    self.data.swap(i * n + j, j * n + i);
                }
            }
            Transposed::Aliased(self)
        } else {
            let (rows, cols) = (self.rows, self.cols);
            let mut out = Matrix::zeros(cols, rows);
            for r in 0..rows {
                for c in 0..cols {
                    out.data[c * rows + r] = self.data[r * cols + c];
                }
            }
            Transposed::Owned(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_transpose_is_aliased_and_in_place() {
        let mut m = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let t = m.transpose();
        assert!(t.is_aliased());
        assert_eq!(t.as_slice(), &[1.0, 3.0, 2.0, 4.0]);
        // The input itself was mutated.
        assert_eq!(m.as_slice(), &[1.0, 3.0, 2.0, 4.0]);
    }

    #[test]
    fn aliased_result_writes_through_to_the_input() {
        let mut m = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]);
        if let Transposed::Aliased(view) = m.transpose() {
            view[(0, 1)] = 99.0;
        } else {
            panic!("square transpose must alias");
        }
        assert_eq!(m[(0, 1)], 99.0);
    }

    #[test]
    fn rectangular_transpose_owns_and_leaves_input_alone() {
        let mut m = Matrix::from_rows(&[&[1.1, 2.2, 3.3]]);
        let t = m.transpose().into_owned();
        assert_eq!(t.shape().rows, 3);
        assert_eq!(t.shape().cols, 1);
        assert_eq!(t.as_slice(), &[1.1, 2.2, 3.3]);
        assert_eq!(m.as_slice(), &[1.1, 2.2, 3.3]);
        assert_eq!(m.shape().rows, 1);
    }

    #[test]
    fn rectangular_transpose_reorders_row_major() {
        let mut m = Matrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let t = m.transpose().into_owned();
        assert_eq!(t.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn double_transpose_restores_square_values() {
        let original = Matrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0]]);
        let mut m = original.clone();
        m.transpose();
        m.transpose();
        assert_eq!(m, original);
    }

    #[test]
    fn double_transpose_restores_rectangular_values() {
        let mut m = Matrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let original = m.clone();
        let mut once = m.transpose().into_owned();
        let twice = once.transpose().into_owned();
        assert_eq!(twice, original);
    }
}
