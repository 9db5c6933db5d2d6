//! Dense row-major matrix.
//!
//! `DenseRowMatrix` owns exactly `nrows * ncols` values laid out row by row, so
//! logical entry `(i, j)` lives at offset `i * ncols + j`. Storage is always
//! zero-filled on construction. Interop with `faer::Mat` (column-major) is
//! provided through `from_faer` / `to_faer`.

use std::ops::{Index, IndexMut};

use faer::Mat;
use num_traits::Float;

use crate::core::traits::{
    MatShape, MatTransVec, MatVec, Matrix, MatrixCaps, check_index, check_len,
};
use crate::error::MatError;

#[derive(Debug, Clone, PartialEq)]
pub struct DenseRowMatrix<T = f64> {
    nrows: usize,
    ncols: usize,
    data: Vec<T>,
}

impl<T: Float> DenseRowMatrix<T> {
    /// `nrows x ncols` matrix of zeros.
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self::zeros(nrows, ncols)
    }

    /// # Panics
    ///
    /// Panics if `nrows * ncols` overflows `usize`, like `Vec::with_capacity`.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        tracing::debug!(nrows, ncols, "allocating dense row-major matrix");
        Self { nrows, ncols, data: vec![T::zero(); storage_len(nrows, ncols)] }
    }

    /// Take ownership of row-major `data`.
    ///
    /// Fails with `DimensionMismatch` unless `data.len() == nrows * ncols`,
    /// including when that product overflows `usize`.
    pub fn from_row_major(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self, MatError> {
        let len = nrows.checked_mul(ncols).ok_or(MatError::DimensionMismatch {
            expected: usize::MAX,
            found: data.len(),
        })?;
        check_len(len, data.len())?;
        tracing::debug!(nrows, ncols, "dense matrix from row-major buffer");
        Ok(Self { nrows, ncols, data })
    }

    /// Build from `f(i, j)` evaluated for every entry, row by row.
    ///
    /// # Panics
    ///
    /// Panics if `nrows * ncols` overflows `usize`.
    pub fn from_fn<F>(nrows: usize, ncols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(storage_len(nrows, ncols));
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { nrows, ncols, data }
    }

    /// Copy a faer (column-major) matrix into row-major storage.
    pub fn from_faer(m: &Mat<T>) -> Self {
        Self::from_fn(m.nrows(), m.ncols(), |i, j| m[(i, j)])
    }

    pub fn to_faer(&self) -> Mat<T> {
        Mat::from_fn(self.nrows, self.ncols, |i, j| self.data[i * self.ncols + j])
    }

    /// Write `value` at `(row, column)`.
    pub fn set(&mut self, row: usize, column: usize, value: T) -> Result<(), MatError> {
        *self.element_mut(row, column)? = value;
        Ok(())
    }

    /// Row `i` as a contiguous slice.
    pub fn row(&self, i: usize) -> Option<&[T]> {
        if i >= self.nrows {
            return None;
        }
        Some(&self.data[i * self.ncols..(i + 1) * self.ncols])
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    #[inline]
    fn offset(&self, row: usize, column: usize) -> usize {
        row * self.ncols + column
    }
}

#[inline]
fn storage_len(nrows: usize, ncols: usize) -> usize {
    match nrows.checked_mul(ncols) {
        Some(len) => len,
        None => panic!("capacity overflow: {nrows}x{ncols} dense matrix"),
    }
}

impl<T> MatShape for DenseRowMatrix<T> {
    fn nrows(&self) -> usize {
        self.nrows
    }
    fn ncols(&self) -> usize {
        self.ncols
    }
}

impl<T: Float> Matrix<T> for DenseRowMatrix<T> {
    fn element(&self, row: usize, column: usize) -> Result<T, MatError> {
        check_index(self, row, column)?;
        Ok(self.data[self.offset(row, column)])
    }

    fn element_mut(&mut self, row: usize, column: usize) -> Result<&mut T, MatError> {
        check_index(self, row, column)?;
        let k = self.offset(row, column);
        Ok(&mut self.data[k])
    }

    fn capabilities(&self) -> MatrixCaps {
        MatrixCaps::READ_WRITE
    }

    fn mul_vec(&self, x: &[T]) -> Result<Vec<T>, MatError> {
        let mut y = vec![T::zero(); self.nrows];
        self.matvec(x, &mut y)?;
        Ok(y)
    }
}

/// Computes `y = A * x` one contiguous row at a time.
impl<T: Float> MatVec<T> for DenseRowMatrix<T> {
    fn matvec(&self, x: &[T], y: &mut [T]) -> Result<(), MatError> {
        check_len(self.ncols, x.len())?;
        check_len(self.nrows, y.len())?;
        if self.ncols == 0 {
            y.iter_mut().for_each(|yi| *yi = T::zero());
            return Ok(());
        }
        for (yi, row) in y.iter_mut().zip(self.data.chunks_exact(self.ncols)) {
            *yi = row
                .iter()
                .zip(x.iter())
                .fold(T::zero(), |acc, (&a, &b)| acc + a * b);
        }
        Ok(())
    }
}

/// Computes `y = A^T * x` by accumulating scaled rows.
impl<T: Float> MatTransVec<T> for DenseRowMatrix<T> {
    fn mattransvec(&self, x: &[T], y: &mut [T]) -> Result<(), MatError> {
        check_len(self.nrows, x.len())?;
        check_len(self.ncols, y.len())?;
        y.iter_mut().for_each(|yj| *yj = T::zero());
        if self.ncols == 0 {
            return Ok(());
        }
        for (&xi, row) in x.iter().zip(self.data.chunks_exact(self.ncols)) {
            for (yj, &a) in y.iter_mut().zip(row.iter()) {
                *yj = *yj + a * xi;
            }
        }
        Ok(())
    }
}

/// Unchecked-style indexing; panics when `(i, j)` is outside the shape.
impl<T: Float> Index<(usize, usize)> for DenseRowMatrix<T> {
    type Output = T;
    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(i < self.nrows && j < self.ncols, "index ({i}, {j}) out of range");
        &self.data[i * self.ncols + j]
    }
}

impl<T: Float> IndexMut<(usize, usize)> for DenseRowMatrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(i < self.nrows && j < self.ncols, "index ({i}, {j}) out of range");
        &mut self.data[i * self.ncols + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_filled_on_construction() {
        let a = DenseRowMatrix::<f64>::new(2, 3);
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(a.element(i, j).unwrap(), 0.0);
            }
        }
    }

    #[test]
    fn row_major_offsets() {
        // [[1,2,3],[4,5,6]]
        let a = DenseRowMatrix::from_row_major(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(a.element(0, 2).unwrap(), 3.0);
        assert_eq!(a.element(1, 0).unwrap(), 4.0);
        assert_eq!(a[(1, 2)], 6.0);
        assert_eq!(a.row(1).unwrap(), &[4.0, 5.0, 6.0]);
        assert!(a.row(2).is_none());
    }

    #[test]
    fn write_then_read() {
        let mut a = DenseRowMatrix::<f64>::new(3, 2);
        a.set(2, 1, 4.5).unwrap();
        *a.element_mut(0, 0).unwrap() = -1.0;
        assert_eq!(a.as_slice()[2 * 2 + 1], 4.5);
        assert_eq!(a.element(0, 0).unwrap(), -1.0);
        assert_eq!(a.capabilities(), MatrixCaps::READ_WRITE);
        assert!(!a.capabilities().contains(MatrixCaps::SPARSE_ROWS));
    }

    #[test]
    fn out_of_range_is_an_error() {
        let mut a = DenseRowMatrix::<f64>::new(2, 2);
        assert_eq!(
            a.element(2, 0),
            Err(MatError::IndexOutOfRange { row: 2, column: 0, nrows: 2, ncols: 2 })
        );
        assert!(a.element_mut(0, 5).is_err());
    }

    #[test]
    fn wrong_buffer_length() {
        let err = DenseRowMatrix::from_row_major(2, 2, vec![1.0; 3]).unwrap_err();
        assert_eq!(err, MatError::DimensionMismatch { expected: 4, found: 3 });
    }

    #[test]
    fn oversized_shape_is_rejected() {
        let big = 1usize << (usize::BITS / 2);
        let err = DenseRowMatrix::<f64>::from_row_major(big, big, vec![]).unwrap_err();
        assert_eq!(err, MatError::DimensionMismatch { expected: usize::MAX, found: 0 });
        assert!(DenseRowMatrix::<f64>::from_row_major(usize::MAX, 2, vec![0.0; 2]).is_err());
        // a zero dimension never overflows
        let empty = DenseRowMatrix::<f64>::from_row_major(usize::MAX, 0, vec![]).unwrap();
        assert_eq!(empty.nrows(), usize::MAX);
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn oversized_zeros_panics_before_allocating() {
        let _ = DenseRowMatrix::<f64>::zeros(usize::MAX, 2);
    }

    #[test]
    fn transpose_product() {
        let a = DenseRowMatrix::from_row_major(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let mut y = vec![0.0; 3];
        a.mattransvec(&[1.0, 1.0], &mut y).unwrap();
        assert_eq!(y, vec![5.0, 7.0, 9.0]);
    }

    #[test]
    fn faer_round_trip() {
        let a = DenseRowMatrix::from_fn(3, 2, |i, j| (i * 10 + j) as f64);
        let m = a.to_faer();
        assert_eq!(m[(2, 1)], 21.0);
        assert_eq!(DenseRowMatrix::from_faer(&m), a);
    }
}
