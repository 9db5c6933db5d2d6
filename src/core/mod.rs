//! Core traits shared by every matrix representation.

pub mod traits;
pub use traits::{MatShape, MatTransVec, MatVec, Matrix, MatrixCaps};
