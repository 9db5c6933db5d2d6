//! spmat: dense row-major and CSR matrices behind one matrix trait
//!
//! This crate provides a small linear-algebra layer: the [`Matrix`] trait with
//! shape queries and indexed element access, two storage representations
//! ([`DenseRowMatrix`] and [`CsrMatrix`]), and matrix-vector products written
//! against the trait.
//!
//! ```
//! use spmat::{CsrMatrix, multiply};
//!
//! let a = CsrMatrix::from_csr(2, 3, vec![0, 2, 3], vec![0, 2, 1], vec![5.0, 3.0, 7.0]).unwrap();
//! assert_eq!(multiply(&a, &[1.0, 1.0, 1.0]).unwrap(), vec![8.0, 7.0]);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod ops;

// Re-exports for convenience
pub use crate::config::*;
pub use crate::core::*;
pub use crate::error::*;
pub use crate::matrix::*;
pub use crate::ops::*;
