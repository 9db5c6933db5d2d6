// SparseMatrix trait and the compressed sparse row (CSR) representation

use faer::sparse::{
    SparseRowMat,         // owning numeric CSR alias
    SymbolicSparseRowMat, // owning symbolic CSR alias
};
use faer::traits::ComplexField;
use num_traits::Float;

use crate::config::options::AssemblyOptions;
use crate::core::traits::{
    MatShape, MatTransVec, MatVec, Matrix, MatrixCaps, check_index, check_len,
};
use crate::error::{CsrFormatError, MatError};
use crate::matrix::dense::DenseRowMatrix;

/// Read-only structural access to a row-compressed sparse matrix.
pub trait SparseMatrix<T>: MatShape {
    /// Number of stored entries.
    fn nnz(&self) -> usize;
    /// Row pointers, length `nrows() + 1`.
    fn row_ptr(&self) -> &[usize];
    /// Column index of each stored entry.
    fn col_idx(&self) -> &[usize];
    /// Stored values, parallel to `col_idx()`.
    fn values(&self) -> &[T];
}

/// Sparse matrix in Compressed Sparse Row (CSR) format.
///
/// To build the 2 x 3 matrix
/// ```text
/// A = [5.  0.  3.]
///     [0.  7.  0.]
/// ```
///
/// ```
/// use spmat::{CsrMatrix, Matrix};
///
/// let a = CsrMatrix::from_csr(
///     2,                     // nrows
///     3,                     // ncols
///     vec![0, 2, 3],         // row_ptr
///     vec![0, 2, 1],         // col_idx
///     vec![5.0, 3.0, 7.0],   // values
/// ).unwrap();
/// assert_eq!(a.element(1, 1).unwrap(), 7.0);
/// assert_eq!(a.element(1, 2).unwrap(), 0.0);
/// ```
///
/// Entries of a row live in `values[row_ptr[i]..row_ptr[i + 1]]`, with their
/// columns at the same positions of `col_idx`. Columns within a row need not be
/// sorted. Anything not stored is an implicit zero. The structure never changes
/// after assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix<T = f64> {
    nrows: usize,
    ncols: usize,
    row_ptr: Vec<usize>,
    col_idx: Vec<usize>,
    values: Vec<T>,
}

impl<T: Float> CsrMatrix<T> {
    /// Build a CSR from owned row-ptr, col-idx, and values, checking the format.
    pub fn from_csr(
        nrows: usize,
        ncols: usize,
        row_ptr: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self, MatError> {
        Self::from_csr_with(AssemblyOptions::default(), nrows, ncols, row_ptr, col_idx, values)
    }

    /// Build a CSR with explicit assembly options.
    ///
    /// The array lengths are always checked. With `check_format` off, the
    /// remaining invariants become the caller's responsibility; accessors then
    /// report `MalformedCsr` instead of panicking if they trip over bad data.
    pub fn from_csr_with(
        options: AssemblyOptions,
        nrows: usize,
        ncols: usize,
        row_ptr: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self, MatError> {
        let m = Self { nrows, ncols, row_ptr, col_idx, values };
        let checked = if options.check_format {
            m.check_format_inner(options.require_sorted)
        } else {
            m.check_lengths()
        };
        if let Err(e) = checked {
            tracing::warn!(nrows, ncols, error = %e, "rejected CSR input");
            return Err(e.into());
        }
        tracing::debug!(nrows, ncols, nnz = m.nnz(), "assembled CSR matrix");
        Ok(m)
    }

    /// Copy caller-owned arrays holding `nnz` stored entries.
    ///
    /// `row_ptr` must have `nrows + 1` entries and both `col_idx` and `values`
    /// exactly `nnz`.
    pub fn from_raw(
        nrows: usize,
        ncols: usize,
        nnz: usize,
        row_ptr: &[usize],
        col_idx: &[usize],
        values: &[T],
    ) -> Result<Self, MatError> {
        if Some(row_ptr.len()) != nrows.checked_add(1)
            || col_idx.len() != nnz
            || values.len() != nnz
        {
            return Err(CsrFormatError::IncompatibleDimension.into());
        }
        Self::from_csr(nrows, ncols, row_ptr.to_vec(), col_idx.to_vec(), values.to_vec())
    }

    /// Build from `(row, col, value)` triplets. Duplicates are summed and each
    /// row ends up sorted by column.
    pub fn from_triplets(
        nrows: usize,
        ncols: usize,
        mut triplets: Vec<(usize, usize, T)>,
    ) -> Result<Self, MatError> {
        if let Some(&(row, column, _)) = triplets.iter().find(|t| t.0 >= nrows || t.1 >= ncols) {
            return Err(MatError::IndexOutOfRange { row, column, nrows, ncols });
        }
        let ptr_len = nrows.checked_add(1).ok_or(CsrFormatError::IncompatibleDimension)?;
        triplets.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

        let mut row_ptr = vec![0usize; ptr_len];
        let mut col_idx: Vec<usize> = Vec::with_capacity(triplets.len());
        let mut values: Vec<T> = Vec::with_capacity(triplets.len());
        let mut prev: Option<(usize, usize)> = None;
        for (row, col, val) in triplets {
            if prev == Some((row, col)) {
                if let Some(last) = values.last_mut() {
                    *last = *last + val;
                }
                continue;
            }
            col_idx.push(col);
            values.push(val);
            row_ptr[row + 1] += 1;
            prev = Some((row, col));
        }
        for i in 0..nrows {
            row_ptr[i + 1] += row_ptr[i];
        }
        Self::from_csr_with(AssemblyOptions::strict(), nrows, ncols, row_ptr, col_idx, values)
    }

    /// Compress a dense matrix, storing every entry that is not exactly zero.
    ///
    /// # Panics
    ///
    /// Panics if the dense matrix has `usize::MAX` rows, since the row pointer
    /// array cannot be allocated.
    pub fn from_dense(dense: &DenseRowMatrix<T>) -> Self {
        let (nrows, ncols) = (dense.nrows(), dense.ncols());
        let ptr_len = match nrows.checked_add(1) {
            Some(len) => len,
            None => panic!("capacity overflow: {nrows} row pointers"),
        };
        let mut row_ptr = Vec::with_capacity(ptr_len);
        let mut col_idx = Vec::new();
        let mut values = Vec::new();
        row_ptr.push(0);
        for i in 0..nrows {
            for (j, &v) in dense.row(i).unwrap_or(&[]).iter().enumerate() {
                if v != T::zero() {
                    col_idx.push(j);
                    values.push(v);
                }
            }
            row_ptr.push(col_idx.len());
        }
        Self { nrows, ncols, row_ptr, col_idx, values }
    }

    /// Expand into a dense row-major matrix.
    ///
    /// Fails with `DimensionMismatch` if `nrows * ncols` overflows `usize`.
    pub fn to_dense(&self) -> Result<DenseRowMatrix<T>, MatError> {
        if self.nrows.checked_mul(self.ncols).is_none() {
            return Err(MatError::DimensionMismatch { expected: usize::MAX, found: 0 });
        }
        let mut dense = DenseRowMatrix::zeros(self.nrows, self.ncols);
        for i in 0..self.nrows {
            for (j, v) in self.row(i)? {
                *dense.element_mut(i, j)? = v;
            }
        }
        Ok(dense)
    }

    /// Check every CSR invariant in O(nnz + ncols).
    ///
    /// Duplicate columns within a row are rejected; unsorted rows are accepted.
    pub fn check_format(&self) -> Result<(), CsrFormatError> {
        self.check_format_inner(false)
    }

    /// Like [`check_format`](Self::check_format) but also requires strictly
    /// increasing columns in every row.
    pub fn check_format_sorted(&self) -> Result<(), CsrFormatError> {
        self.check_format_inner(true)
    }

    fn check_lengths(&self) -> Result<(), CsrFormatError> {
        if self.col_idx.len() != self.values.len()
            || Some(self.row_ptr.len()) != self.nrows.checked_add(1)
            || self.row_ptr[self.nrows] != self.values.len()
        {
            return Err(CsrFormatError::IncompatibleDimension);
        }
        Ok(())
    }

    fn check_format_inner(&self, require_sorted: bool) -> Result<(), CsrFormatError> {
        self.check_lengths()?;

        if self.row_ptr[0] != 0 || self.row_ptr.windows(2).any(|r| r[0] > r[1]) {
            return Err(CsrFormatError::BadRowPtr);
        }
        if self.col_idx.iter().any(|&j| j >= self.ncols) {
            return Err(CsrFormatError::BadColIndex);
        }

        // marker[j] holds 1 + the last row that stored column j
        let mut marker = vec![0usize; self.ncols];
        for (i, r) in self.row_ptr.windows(2).enumerate() {
            let cols = &self.col_idx[r[0]..r[1]];
            if require_sorted && cols.windows(2).any(|c| c[0] >= c[1]) {
                return Err(CsrFormatError::BadColumnOrdering);
            }
            for &j in cols {
                if marker[j] == i + 1 {
                    return Err(CsrFormatError::BadColumnOrdering);
                }
                marker[j] = i + 1;
            }
        }
        Ok(())
    }

    /// Bounds of row `i`'s segment in `col_idx` / `values`.
    #[inline]
    fn segment(&self, i: usize) -> Result<(usize, usize), MatError> {
        let (start, end) = (self.row_ptr[i], self.row_ptr[i + 1]);
        if start > end || end > self.values.len() {
            return Err(CsrFormatError::BadRowPtr.into());
        }
        Ok((start, end))
    }

    /// Position in `values` of the stored entry `(row, column)`, if any.
    fn find(&self, row: usize, column: usize) -> Result<Option<usize>, MatError> {
        check_index(self, row, column)?;
        let (start, end) = self.segment(row)?;
        Ok(self.col_idx[start..end]
            .iter()
            .position(|&j| j == column)
            .map(|p| start + p))
    }

    /// Stored `(column, value)` pairs of row `i`, in storage order.
    pub fn row(&self, i: usize) -> Result<impl Iterator<Item = (usize, T)> + '_, MatError> {
        if i >= self.nrows {
            return Err(MatError::IndexOutOfRange {
                row: i,
                column: 0,
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        let (start, end) = self.segment(i)?;
        Ok(self.col_idx[start..end]
            .iter()
            .copied()
            .zip(self.values[start..end].iter().copied()))
    }

    /// Number of stored entries in row `i`.
    pub fn row_nnz(&self, i: usize) -> Option<usize> {
        (i < self.nrows).then(|| self.row_ptr[i + 1].saturating_sub(self.row_ptr[i]))
    }

    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    pub fn row_ptr(&self) -> &[usize] {
        &self.row_ptr
    }

    pub fn col_idx(&self) -> &[usize] {
        &self.col_idx
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Give back the owned `(row_ptr, col_idx, values)` arrays.
    pub fn into_raw_parts(self) -> (Vec<usize>, Vec<usize>, Vec<T>) {
        (self.row_ptr, self.col_idx, self.values)
    }
}

impl<T: Float + ComplexField> CsrMatrix<T> {
    /// Convert into a faer `SparseRowMat`, sorting each row by column.
    ///
    /// Runs [`check_format`](Self::check_format) first, so a matrix assembled
    /// with trusted options reports `MalformedCsr` instead of tripping faer's
    /// structural assertions.
    pub fn to_faer(&self) -> Result<SparseRowMat<usize, T>, MatError> {
        self.check_format()?;
        let mut col_idx = Vec::with_capacity(self.nnz());
        let mut values = Vec::with_capacity(self.nnz());
        let mut entries: Vec<(usize, T)> = Vec::new();
        for i in 0..self.nrows {
            entries.clear();
            entries.extend(self.row(i)?);
            entries.sort_by_key(|&(j, _)| j);
            for &(j, v) in &entries {
                col_idx.push(j);
                values.push(v);
            }
        }
        // Second argument `None` means no separate row_nnz.
        let symbolic = SymbolicSparseRowMat::new_checked(
            self.nrows,
            self.ncols,
            self.row_ptr.clone(),
            None,
            col_idx,
        );
        Ok(SparseRowMat::new(symbolic, values))
    }
}

impl<T> MatShape for CsrMatrix<T> {
    fn nrows(&self) -> usize {
        self.nrows
    }
    fn ncols(&self) -> usize {
        self.ncols
    }
}

impl<T: Float> SparseMatrix<T> for CsrMatrix<T> {
    fn nnz(&self) -> usize {
        self.values.len()
    }
    fn row_ptr(&self) -> &[usize] {
        &self.row_ptr
    }
    fn col_idx(&self) -> &[usize] {
        &self.col_idx
    }
    fn values(&self) -> &[T] {
        &self.values
    }
}

impl<T: Float> Matrix<T> for CsrMatrix<T> {
    /// Linear scan of the row's segment; implicit zeros read as `T::zero()`.
    fn element(&self, row: usize, column: usize) -> Result<T, MatError> {
        Ok(self
            .find(row, column)?
            .map_or_else(T::zero, |k| self.values[k]))
    }

    /// Only entries already stored can be written; implicit zeros would need
    /// a structural insertion.
    fn element_mut(&mut self, row: usize, column: usize) -> Result<&mut T, MatError> {
        match self.find(row, column)? {
            Some(k) => Ok(&mut self.values[k]),
            None => Err(MatError::Unsupported(
                "element_mut on an implicit zero of a CSR matrix",
            )),
        }
    }

    fn capabilities(&self) -> MatrixCaps {
        MatrixCaps::READ_WRITE | MatrixCaps::SPARSE_ROWS
    }

    fn mul_vec(&self, x: &[T]) -> Result<Vec<T>, MatError> {
        let mut y = vec![T::zero(); self.nrows];
        self.matvec(x, &mut y)?;
        Ok(y)
    }
}

/// Row-wise `y = A * x` over stored entries only, O(nnz).
impl<T: Float> MatVec<T> for CsrMatrix<T> {
    fn matvec(&self, x: &[T], y: &mut [T]) -> Result<(), MatError> {
        check_len(self.ncols, x.len())?;
        check_len(self.nrows, y.len())?;
        for (i, yi) in y.iter_mut().enumerate() {
            let (start, end) = self.segment(i)?;
            let mut sum = T::zero();
            for (&j, &v) in self.col_idx[start..end].iter().zip(&self.values[start..end]) {
                let xj = x.get(j).ok_or(CsrFormatError::BadColIndex)?;
                sum = sum + v * *xj;
            }
            *yi = sum;
        }
        Ok(())
    }
}

/// Scatter form of `y = A^T * x`, O(nnz).
impl<T: Float> MatTransVec<T> for CsrMatrix<T> {
    fn mattransvec(&self, x: &[T], y: &mut [T]) -> Result<(), MatError> {
        check_len(self.nrows, x.len())?;
        check_len(self.ncols, y.len())?;
        y.iter_mut().for_each(|yj| *yj = T::zero());
        for (i, &xi) in x.iter().enumerate() {
            let (start, end) = self.segment(i)?;
            for (&j, &v) in self.col_idx[start..end].iter().zip(&self.values[start..end]) {
                let yj = y.get_mut(j).ok_or(CsrFormatError::BadColIndex)?;
                *yj = *yj + v * xi;
            }
        }
        Ok(())
    }
}
