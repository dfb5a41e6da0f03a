//! Dense matrix arithmetic over flat `f64` buffers, built from scratch.
//!
//! A [`Matrix`] is a row-major `rows × cols` grid of doubles. The crate
//! covers the basics and nothing else: scalar scaling, elementwise addition
//! and subtraction, the textbook matrix product, and transpose. Binary
//! operations validate operand shapes up front and return typed errors
//! instead of panicking or producing partial results.
//!
//! ## Usage
//!
//! ```
//! use densemat::Matrix;
//!
//! let a = Matrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
//! let b = Matrix::from_rows(&[&[7.0, 8.0], &[9.0, 10.0], &[11.0, 12.0]]);
//!
//! let product = a.multiply(&b)?;
//! assert_eq!(product.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
//! # Ok::<(), densemat::ShapeError>(())
//! ```
//!
//! Transpose is the one operation whose result can share storage with its
//! input: a square matrix is flipped in place and the result borrows it,
//! while a rectangular one gets a fresh buffer. The [`Transposed`] enum
//! makes the difference explicit:
//!
//! ```
//! use densemat::Matrix;
//!
//! let mut square = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]);
//! assert!(square.transpose().is_aliased());
//!
//! let mut wide = Matrix::from_rows(&[&[1.0, 2.0, 3.0]]);
//! assert!(!wide.transpose().is_aliased());
//! ```
//!
//! ## What's inside
//!
//! - One owned, never-resized buffer per matrix; element `(r, c)` at
//!   `r * cols + c`
//! - Shape checks as the sole gate for every binary operation
//! - i-k-j loop order for the product (sequential inner-loop access)
//! - No sparse storage, no broadcasting, no SIMD, no generic element types

pub mod error;
pub mod matrix;

pub use error::ShapeError;
pub use matrix::{Matrix, Shape, Transposed};
