//! The dense matrix value type and its arithmetic.
//!
//! A [`Matrix`] is a `rows × cols` grid of `f64` values backed by one flat
//! row-major buffer. The buffer is sized exactly once at construction and
//! never grows or shrinks, so `data.len() == rows * cols` holds for the
//! lifetime of the value.

mod elementwise;
mod multiply;
mod transpose;

pub use transpose::Transposed;

use std::fmt;
use std::ops::{Index, IndexMut};

/// The `(rows, cols)` pair identifying a matrix's dimensions.
///
/// Carried by error values so a failed operation can report both operand
/// shapes. Displays as `RxC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// A dense matrix of `f64` values in row-major order.
///
/// Element `(r, c)` lives at linear offset `r * cols + c`. The matrix owns
/// its buffer; the only way to get a result that shares storage with an
/// input is the in-place branch of [`Matrix::transpose`], which hands back a
/// borrow rather than a second owner.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Create a `rows × cols` matrix filled with zeros.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let m = Matrix::zeros(2, 3);
    /// assert_eq!(m.as_slice(), &[0.0; 6]);
    /// ```
    pub fn zeros(rows: usize, cols: usize) -> Self {
        assert!(
            rows > 0 && cols > 0,
            "matrix dimensions must be positive, got {}x{}",
            rows,
            cols
        );
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Create a matrix from an existing flat row-major buffer.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or if the buffer length is not
    /// exactly `rows * cols`.
    ///
    /// # Example
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m[(1, 0)], 3.0);
    /// ```
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        assert!(
            rows > 0 && cols > 0,
            "matrix dimensions must be positive, got {}x{}",
            rows,
            cols
        );
        assert_eq!(
            data.len(),
            rows * cols,
            "buffer: expected {}x{}={} elements, got {}",
            rows,
            cols,
            rows * cols,
            data.len()
        );
        Self { rows, cols, data }
    }

    /// Create a matrix from a slice of equally sized rows.
    ///
    /// Convenient for writing small matrices out literally in tests and
    /// demos.
    ///
    /// # Panics
    ///
    /// Panics if there are no rows, a row is empty, or the rows have
    /// differing lengths.
    ///
    /// # Example
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let m = Matrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    /// assert_eq!(m.shape().rows, 2);
    /// assert_eq!(m.shape().cols, 3);
    /// ```
    pub fn from_rows(rows: &[&[f64]]) -> Self {
        assert!(!rows.is_empty(), "matrix must have at least one row");
        let cols = rows[0].len();
        assert!(cols > 0, "matrix rows must not be empty");
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(
                row.len(),
                cols,
                "row {}: expected {} columns, got {}",
                i,
                cols,
                row.len()
            );
            data.extend_from_slice(row);
        }
        Self {
            rows: rows.len(),
            cols,
            data,
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The `(rows, cols)` pair as a [`Shape`].
    pub fn shape(&self) -> Shape {
        Shape {
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// True iff `self` and `other` have the same row and column counts.
    ///
    /// This is the sole gate for the elementwise binary operations.
    pub fn same_shape(&self, other: &Matrix) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// True iff the matrix has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Element at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Mutable element at `(row, col)`, or `None` if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut f64> {
        if row < self.rows && col < self.cols {
            Some(&mut self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// The flat row-major buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// The flat row-major buffer, mutably. The length cannot change through
    /// this view.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Row `r` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `r` is out of bounds.
    pub fn row(&self, r: usize) -> &[f64] {
        let start = r * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Format every element, row by row.
    ///
    /// Pure formatting collaborator for demo output and test inspection; the
    /// [`Display`](fmt::Display) impl is built on it.
    ///
    /// # Example
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let m = Matrix::from_rows(&[&[1.0, 2.5]]);
    /// assert_eq!(m.render(), vec![vec!["1".to_string(), "2.5".to_string()]]);
    /// ```
    pub fn render(&self) -> Vec<Vec<String>> {
        (0..self.rows)
            .map(|r| self.row(r).iter().map(|v| v.to_string()).collect())
            .collect()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {} matrix",
            row,
            col,
            self.shape()
        );
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {} matrix",
            row,
            col,
            self.shape()
        );
        &mut self.data[row * self.cols + col]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.render() {
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_fills_the_whole_buffer() {
        let m = Matrix::zeros(3, 4);
        assert_eq!(m.as_slice().len(), 12);
        assert!(m.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn from_rows_lays_out_row_major() {
        let m = Matrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], 4.0);
    }

    #[test]
    #[should_panic(expected = "expected 2x2=4 elements")]
    fn from_vec_rejects_wrong_buffer_length() {
        Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    #[should_panic(expected = "dimensions must be positive")]
    fn zero_dimension_is_rejected() {
        Matrix::zeros(0, 3);
    }

    #[test]
    fn shape_predicates() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 3);
        let c = Matrix::zeros(3, 2);
        assert!(a.same_shape(&b));
        assert!(!a.same_shape(&c));
        assert!(!a.is_square());
        assert!(Matrix::zeros(4, 4).is_square());
    }

    #[test]
    fn get_is_bounds_checked() {
        let m = Matrix::from_rows(&[&[1.0, 2.0]]);
        assert_eq!(m.get(0, 1), Some(2.0));
        assert_eq!(m.get(1, 0), None);
        assert_eq!(m.get(0, 2), None);
    }

    #[test]
    fn render_formats_rows_independently() {
        let m = Matrix::from_rows(&[&[1.1, 2.2], &[3.3, 4.4]]);
        let rows = m.render();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["1.1", "2.2"]);
        assert_eq!(rows[1], vec!["3.3", "4.4"]);
    }
}
