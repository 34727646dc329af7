//! Matrix Operations Demo
//!
//! Walks through construction, arithmetic, reductions and the LU-based
//! operations.
//!
//! Run with: cargo run --example matrix_operations

use densegrid::{Axis, Matrix, MatrixError};

fn main() -> Result<(), MatrixError> {
    println!("Matrix Construction");
    println!("-------------------\n");

    let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])?;
    println!("A (2×3):\n{a}");

    let identity = Matrix::<f64>::identity(3)?;
    println!("I₃:\n{identity}");

    println!("Arithmetic");
    println!("----------\n");

    let b = Matrix::new(2, 3, 0.5)?;
    println!("A + 0.5:\n{}", a.add(&b)?);
    println!("A ∘ A:\n{}", a.elementwise_multiply(&a)?);
    println!("2·A:\n{}", 2.0 * &a);
    println!("Aᵀ:\n{}", a.transpose());

    println!("Reductions");
    println!("----------\n");

    println!("Row sums:\n{}", a.sum(Axis::Row));
    println!("Column sums:\n{}", a.sum(Axis::Column));

    println!("Linear Algebra");
    println!("--------------\n");

    let c = a.multiply(&a.transpose())?;
    println!("A·Aᵀ:\n{c}");

    let c_inv = c.inverse()?;
    println!("(A·Aᵀ)⁻¹:\n{c_inv}");
    println!("det(A·Aᵀ) = {}\n", c.determinant()?);

    let rhs = Matrix::from_rows(&[[1.0], [2.0]])?;
    println!("Solution of (A·Aᵀ)·x = [1, 2]ᵀ:\n{}", c.solve(&rhs)?);

    let singular = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]])?;
    match singular.inverse() {
        Ok(_) => println!("unexpected inverse"),
        Err(e) => println!("Inverting [[1, 2], [2, 4]]: {e}"),
    }

    Ok(())
}
