//! Closed set of storage representations.
//!
//! `AnyMatrix` lets callers hold either representation by value and dispatch
//! with a `match` instead of a `dyn Matrix<T>` trait object.

use num_traits::Float;

use crate::core::traits::{MatShape, MatTransVec, MatVec, Matrix, MatrixCaps};
use crate::error::MatError;
use crate::matrix::{CsrMatrix, DenseRowMatrix};

/// Dense or CSR matrix.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyMatrix<T = f64> {
    /// Row-major dense storage, O(1) element access.
    Dense(DenseRowMatrix<T>),
    /// Compressed sparse row storage, O(row nnz) element access.
    Csr(CsrMatrix<T>),
}

impl<T: Float> AnyMatrix<T> {
    pub fn is_sparse(&self) -> bool {
        matches!(self, AnyMatrix::Csr(_))
    }

    /// Stored entry count; `nrows * ncols` for dense storage.
    pub fn stored_len(&self) -> usize {
        match self {
            AnyMatrix::Dense(d) => d.as_slice().len(),
            AnyMatrix::Csr(s) => s.nnz(),
        }
    }
}

impl<T> From<DenseRowMatrix<T>> for AnyMatrix<T> {
    fn from(m: DenseRowMatrix<T>) -> Self {
        AnyMatrix::Dense(m)
    }
}

impl<T> From<CsrMatrix<T>> for AnyMatrix<T> {
    fn from(m: CsrMatrix<T>) -> Self {
        AnyMatrix::Csr(m)
    }
}

impl<T> MatShape for AnyMatrix<T> {
    fn nrows(&self) -> usize {
        match self {
            AnyMatrix::Dense(d) => d.nrows(),
            AnyMatrix::Csr(s) => s.nrows(),
        }
    }
    fn ncols(&self) -> usize {
        match self {
            AnyMatrix::Dense(d) => d.ncols(),
            AnyMatrix::Csr(s) => s.ncols(),
        }
    }
}

impl<T: Float> Matrix<T> for AnyMatrix<T> {
    fn element(&self, row: usize, column: usize) -> Result<T, MatError> {
        match self {
            AnyMatrix::Dense(d) => d.element(row, column),
            AnyMatrix::Csr(s) => s.element(row, column),
        }
    }

    fn element_mut(&mut self, row: usize, column: usize) -> Result<&mut T, MatError> {
        match self {
            AnyMatrix::Dense(d) => d.element_mut(row, column),
            AnyMatrix::Csr(s) => s.element_mut(row, column),
        }
    }

    fn capabilities(&self) -> MatrixCaps {
        match self {
            AnyMatrix::Dense(d) => d.capabilities(),
            AnyMatrix::Csr(s) => s.capabilities(),
        }
    }

    fn mul_vec(&self, x: &[T]) -> Result<Vec<T>, MatError> {
        match self {
            AnyMatrix::Dense(d) => d.mul_vec(x),
            AnyMatrix::Csr(s) => s.mul_vec(x),
        }
    }
}

impl<T: Float> MatVec<T> for AnyMatrix<T> {
    fn matvec(&self, x: &[T], y: &mut [T]) -> Result<(), MatError> {
        match self {
            AnyMatrix::Dense(d) => d.matvec(x, y),
            AnyMatrix::Csr(s) => s.matvec(x, y),
        }
    }
}

impl<T: Float> MatTransVec<T> for AnyMatrix<T> {
    fn mattransvec(&self, x: &[T], y: &mut [T]) -> Result<(), MatError> {
        match self {
            AnyMatrix::Dense(d) => d.mattransvec(x, y),
            AnyMatrix::Csr(s) => s.mattransvec(x, y),
        }
    }
}
