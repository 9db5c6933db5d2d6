//! API options for matrix assembly and matrix-vector products.
//!
//! This module provides the `AssemblyOptions` struct, which controls how much
//! checking a CSR matrix receives when it is built from caller-supplied arrays,
//! and the `MatvecStrategy` enum, which selects between the element-accessor
//! product and a representation's own kernel.

/// CSR assembly checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblyOptions {
    /// Run the O(nnz) format check before accepting the arrays.
    pub check_format: bool,

    /// Additionally reject rows whose column indices are not strictly increasing.
    pub require_sorted: bool,
}

impl AssemblyOptions {
    /// Accept the arrays as given. Only the cheap length checks still run.
    pub fn trusted() -> Self {
        Self { check_format: false, require_sorted: false }
    }

    /// Full check, including sorted and duplicate-free columns.
    pub fn strict() -> Self {
        Self { check_format: true, require_sorted: true }
    }
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self { check_format: true, require_sorted: false }
    }
}

/// How `multiply_with` computes `A x`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatvecStrategy {
    /// Use whatever the representation provides.
    #[default]
    Auto,
    /// Always go through the element accessor, `nrows * ncols` calls.
    Generic,
    /// Use the representation's own kernel (O(nnz) for CSR).
    Structured,
}
