//! Read-only transposed view over any [`Matrix`].

use std::marker::PhantomData;

use num_traits::Float;

use crate::core::traits::{MatShape, Matrix, MatrixCaps};
use crate::error::MatError;

/// Borrowing view with rows and columns swapped.
///
/// The view never hands out mutable references; `element_mut` keeps the
/// trait's default and reports `Unimplemented`.
pub struct Transpose<'a, M: ?Sized, T> {
    inner: &'a M,
    _phantom: PhantomData<T>,
}

impl<'a, M: Matrix<T> + ?Sized, T: Float> Transpose<'a, M, T> {
    pub fn new(inner: &'a M) -> Self {
        Self { inner, _phantom: PhantomData }
    }

    pub fn inner(&self) -> &'a M {
        self.inner
    }
}

impl<M: MatShape + ?Sized, T> MatShape for Transpose<'_, M, T> {
    fn nrows(&self) -> usize {
        self.inner.ncols()
    }
    fn ncols(&self) -> usize {
        self.inner.nrows()
    }
}

impl<M: Matrix<T> + ?Sized, T: Float> Matrix<T> for Transpose<'_, M, T> {
    fn element(&self, row: usize, column: usize) -> Result<T, MatError> {
        self.inner.element(column, row).map_err(|e| match e {
            MatError::IndexOutOfRange { row: r, column: c, nrows, ncols } => {
                MatError::IndexOutOfRange { row: c, column: r, nrows: ncols, ncols: nrows }
            }
            other => other,
        })
    }

    fn capabilities(&self) -> MatrixCaps {
        self.inner.capabilities() & (MatrixCaps::SHAPE | MatrixCaps::READ)
    }
}
