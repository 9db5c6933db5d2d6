//! Matrix-vector products against the [`Matrix`] trait.
//!
//! `multiply` is the entry point most callers want: it checks the vector length
//! and lets the representation pick its own kernel, so a CSR matrix only touches
//! its stored entries. `multiply_generic` always walks every `(i, j)` pair
//! through the element accessor and therefore works for any implementor,
//! including ones that provide nothing but `element`.

use num_traits::Float;

use crate::config::options::MatvecStrategy;
use crate::core::traits::{MatShape, MatTransVec, MatVec, Matrix, check_len};
use crate::error::MatError;

/// `A x` using the representation's preferred kernel.
///
/// Fails with `DimensionMismatch` if `x.len() != a.ncols()`.
pub fn multiply<M, T>(a: &M, x: &[T]) -> Result<Vec<T>, MatError>
where
    M: Matrix<T> + ?Sized,
    T: Float,
{
    check_len(a.ncols(), x.len())?;
    a.mul_vec(x)
}

/// `A x` as `result[i] = Σ_j a.element(i, j) * x[j]`.
///
/// Performs `nrows * ncols` accessor calls regardless of sparsity.
pub fn multiply_generic<M, T>(a: &M, x: &[T]) -> Result<Vec<T>, MatError>
where
    M: Matrix<T> + ?Sized,
    T: Float,
{
    check_len(a.ncols(), x.len())?;
    let mut y = vec![T::zero(); a.nrows()];
    for (i, yi) in y.iter_mut().enumerate() {
        let mut sum = T::zero();
        for (j, &xj) in x.iter().enumerate() {
            sum = sum + a.element(i, j)? * xj;
        }
        *yi = sum;
    }
    Ok(y)
}

/// `A x` with an explicit strategy.
pub fn multiply_with<M, T>(a: &M, x: &[T], strategy: MatvecStrategy) -> Result<Vec<T>, MatError>
where
    M: Matrix<T> + MatVec<T> + ?Sized,
    T: Float,
{
    tracing::trace!(?strategy, nrows = a.nrows(), ncols = a.ncols(), "matrix-vector product");
    match strategy {
        MatvecStrategy::Auto => multiply(a, x),
        MatvecStrategy::Generic => multiply_generic(a, x),
        MatvecStrategy::Structured => {
            let mut y = vec![T::zero(); a.nrows()];
            a.matvec(x, &mut y)?;
            Ok(y)
        }
    }
}

/// `Aᵀ x` into a new vector of length `a.ncols()`.
pub fn multiply_transpose<M, T>(a: &M, x: &[T]) -> Result<Vec<T>, MatError>
where
    M: MatTransVec<T> + MatShape + ?Sized,
    T: Float,
{
    let mut y = vec![T::zero(); a.ncols()];
    a.mattransvec(x, &mut y)?;
    Ok(y)
}
