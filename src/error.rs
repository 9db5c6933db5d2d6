use thiserror::Error;

// Unified error type for spmat

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatError {
    #[error("operation not implemented for this matrix: {0}")]
    Unimplemented(&'static str),
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("index ({row}, {column}) out of range for {nrows}x{ncols} matrix")]
    IndexOutOfRange {
        row: usize,
        column: usize,
        nrows: usize,
        ncols: usize,
    },
    #[error("malformed CSR input: {0}")]
    MalformedCsr(#[from] CsrFormatError),
}

/// Error type returned by CSR assembly and format checks.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsrFormatError {
    /// Shape fields and/or array lengths are incompatible
    #[error("shape fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    /// Row pointer does not start at zero or decreases
    #[error("bad row pointer values")]
    BadRowPtr,
    /// Column index exceeds the matrix column dimension
    #[error("column index exceeds the matrix column dimension")]
    BadColIndex,
    /// Columns are unsorted or duplicated within a row
    #[error("columns are not strictly increasing within each row")]
    BadColumnOrdering,
}
