//! Demonstration of the matrix operations on small fixed inputs.

use densemat::{Matrix, ShapeError};

fn main() -> Result<(), ShapeError> {
    let a = Matrix::from_rows(&[&[1.1, 2.2, 3.3], &[4.3, 5.2, 6.1]]);
    let b = Matrix::from_rows(&[&[0.4, 3.7, 8.9], &[4.5, 2.7, 6.9]]);

    println!("Matrix A ({}):", a.shape());
    print!("{}", a);
    println!("Matrix B ({}):", b.shape());
    print!("{}", b);

    let sum = a.add(&b)?;
    println!("Sum of matrices:");
    print!("{}", sum);

    let difference = a.sub(&b)?;
    println!("Subtraction of matrices:");
    print!("{}", difference);

    let mut scaled = a.clone();
    scaled.scale_in_place(2.0);
    println!("A scaled by 2:");
    print!("{}", scaled);

    // A is 2x3 and B is 2x3, so multiply A by B transposed (3x2).
    let mut b_for_transpose = b.clone();
    let bt = b_for_transpose.transpose().into_owned();
    let product = a.multiply(&bt)?;
    println!("A * B^T ({}):", product.shape());
    print!("{}", product);

    Ok(())
}
