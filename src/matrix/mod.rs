//! Matrix module: dense and sparse matrix types and traits.

pub mod any;
pub mod dense;
pub mod sparse;
pub mod transpose;

pub use any::AnyMatrix;
pub use dense::DenseRowMatrix;
pub use sparse::{CsrMatrix, SparseMatrix};
pub use transpose::Transpose;
