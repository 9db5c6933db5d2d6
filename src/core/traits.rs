//! Core linear-algebra traits for spmat.

use bitflags::bitflags;
use num_traits::Float;

use crate::error::MatError;

bitflags! {
    /// What a matrix representation can do beyond reporting its shape.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct MatrixCaps: u32 {
        const SHAPE       = 0b0001;
        const READ        = 0b0010;
        const WRITE       = 0b0100; // in-place update of existing entries
        const SPARSE_ROWS = 0b1000; // direct access to stored row segments
        const READ_WRITE  = Self::SHAPE.bits() | Self::READ.bits() | Self::WRITE.bits();
    }
}

/// Fixed shape of a matrix.
pub trait MatShape {
    /// Number of rows.
    fn nrows(&self) -> usize;
    /// Number of columns.
    fn ncols(&self) -> usize;
}

/// Indexed element access over any storage representation.
pub trait Matrix<T: Float>: MatShape {
    /// Value at zero-based `(row, column)`.
    fn element(&self, row: usize, column: usize) -> Result<T, MatError>;

    /// Mutable reference to the entry at `(row, column)`.
    ///
    /// Only representations that support in-place mutation override this.
    fn element_mut(&mut self, _row: usize, _column: usize) -> Result<&mut T, MatError> {
        Err(MatError::Unimplemented("element_mut"))
    }

    /// Capability set of this representation; read-only unless overridden.
    fn capabilities(&self) -> MatrixCaps {
        MatrixCaps::SHAPE | MatrixCaps::READ
    }

    /// Compute `A x` into a new vector.
    ///
    /// The default goes through [`Matrix::element`] for every `(i, j)` pair;
    /// representations with a cheaper kernel override it.
    fn mul_vec(&self, x: &[T]) -> Result<Vec<T>, MatError> {
        crate::ops::multiply_generic(self, x)
    }
}

/// Matrix–vector product: y ← A x.
pub trait MatVec<T> {
    /// Compute y = A · x.  `x.len() == ncols()`, `y.len() == nrows()`.
    fn matvec(&self, x: &[T], y: &mut [T]) -> Result<(), MatError>;
}

/// Matrix-transpose–vector product: y ← Aᵀ x.
pub trait MatTransVec<T> {
    /// Compute y = Aᵀ · x.  `x.len() == nrows()`, `y.len() == ncols()`.
    fn mattransvec(&self, x: &[T], y: &mut [T]) -> Result<(), MatError>;
}

#[inline]
pub(crate) fn check_len(expected: usize, found: usize) -> Result<(), MatError> {
    if expected != found {
        return Err(MatError::DimensionMismatch { expected, found });
    }
    Ok(())
}

#[inline]
pub(crate) fn check_index<M: MatShape + ?Sized>(
    a: &M,
    row: usize,
    column: usize,
) -> Result<(), MatError> {
    if row >= a.nrows() || column >= a.ncols() {
        return Err(MatError::IndexOutOfRange {
            row,
            column,
            nrows: a.nrows(),
            ncols: a.ncols(),
        });
    }
    Ok(())
}
