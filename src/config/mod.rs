//! Assembly and multiply options.

pub mod options;
pub use options::{AssemblyOptions, MatvecStrategy};
