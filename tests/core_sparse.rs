//! Tests for the CSR matrix: element access, format checks, and matrix-vector products.
//!
//! Random sparse matrices are generated through `from_triplets`, expanded to dense storage,
//! and the CSR kernels are compared against the dense results and against the generic
//! element-accessor multiply.

use approx::assert_abs_diff_eq;
use rand::Rng;
use spmat::{
    AnyMatrix, AssemblyOptions, CsrFormatError, CsrMatrix, DenseRowMatrix, MatError, MatShape,
    MatvecStrategy, Matrix, SparseMatrix, Transpose, multiply, multiply_generic,
    multiply_transpose, multiply_with,
};

/// Helper generating a random `m x n` CSR matrix with roughly `density * m * n` entries.
fn random_csr(m: usize, n: usize, density: f64) -> CsrMatrix<f64> {
    let mut rng = rand::thread_rng();
    let mut triplets = Vec::new();
    for i in 0..m {
        for j in 0..n {
            if rng.r#gen::<f64>() < density {
                triplets.push((i, j, rng.gen_range(-1.0..1.0)));
            }
        }
    }
    CsrMatrix::from_triplets(m, n, triplets).unwrap()
}

/// The 2x3 example [[5,0,3],[0,7,0]] read back entry by entry.
#[test]
fn round_trip_small_example() {
    let a = CsrMatrix::from_csr(2, 3, vec![0, 2, 3], vec![0, 2, 1], vec![5.0, 3.0, 7.0]).unwrap();
    let expected =
        DenseRowMatrix::from_row_major(2, 3, vec![5.0, 0.0, 3.0, 0.0, 7.0, 0.0]).unwrap();
    for i in 0..2 {
        for j in 0..3 {
            assert_eq!(a.element(i, j).unwrap(), expected.element(i, j).unwrap());
        }
    }
    assert_eq!(multiply(&a, &[1.0, 1.0, 1.0]).unwrap(), vec![8.0, 7.0]);
}

/// CSR and dense products agree on random data, for every strategy.
#[test]
fn random_csr_matches_dense() {
    let (m, n) = (20, 15);
    let a = random_csr(m, n, 0.2);
    let d = a.to_dense().unwrap();
    let mut rng = rand::thread_rng();
    let x: Vec<f64> = (0..n).map(|_| rng.r#gen()).collect();

    let y_dense = multiply(&d, &x).unwrap();
    for strategy in [MatvecStrategy::Auto, MatvecStrategy::Generic, MatvecStrategy::Structured] {
        let y = multiply_with(&a, &x, strategy).unwrap();
        for i in 0..m {
            assert_abs_diff_eq!(y[i], y_dense[i], epsilon = 1e-12);
        }
    }

    let xt: Vec<f64> = (0..m).map(|_| rng.r#gen()).collect();
    let yt = multiply_transpose(&a, &xt).unwrap();
    let yt_view = multiply(&Transpose::<_, f64>::new(&d), &xt).unwrap();
    for j in 0..n {
        assert_abs_diff_eq!(yt[j], yt_view[j], epsilon = 1e-12);
    }
}

/// Every absent entry reads as zero and every stored entry reads back its value.
#[test]
fn implicit_zero_policy() {
    let a = random_csr(10, 10, 0.3);
    for i in 0..10 {
        let stored: Vec<(usize, f64)> = a.row(i).unwrap().collect();
        for j in 0..10 {
            let expected = stored.iter().find(|e| e.0 == j).map_or(0.0, |e| e.1);
            assert_eq!(a.element(i, j).unwrap(), expected);
        }
    }
}

/// Structural accessors expose consistent arrays.
#[test]
fn structural_access() {
    let a = random_csr(8, 5, 0.4);
    let s: &dyn SparseMatrix<f64> = &a;
    assert_eq!(s.row_ptr().len(), s.nrows() + 1);
    assert_eq!(s.row_ptr()[s.nrows()], s.nnz());
    assert_eq!(s.col_idx().len(), s.values().len());
    assert!(s.col_idx().iter().all(|&j| j < s.ncols()));
    assert!(a.check_format_sorted().is_ok());
}

#[test]
fn out_of_range_access() {
    let a = random_csr(3, 3, 0.5);
    assert!(matches!(a.element(3, 0), Err(MatError::IndexOutOfRange { .. })));
    assert!(matches!(a.element(0, 3), Err(MatError::IndexOutOfRange { .. })));
}

#[test]
fn strict_options_reject_unsorted_rows() {
    let unsorted = || (vec![0, 2], vec![1, 0], vec![1.0, 2.0]);
    let (rp, ci, v) = unsorted();
    assert!(CsrMatrix::from_csr(1, 2, rp, ci, v).is_ok());
    let (rp, ci, v) = unsorted();
    assert_eq!(
        CsrMatrix::from_csr_with(AssemblyOptions::strict(), 1, 2, rp, ci, v).unwrap_err(),
        MatError::MalformedCsr(CsrFormatError::BadColumnOrdering)
    );
}

#[test]
fn generic_multiply_mismatch() {
    let a: AnyMatrix = random_csr(4, 6, 0.5).into();
    assert_eq!(
        multiply_generic(&a, &[1.0; 5]).unwrap_err(),
        MatError::DimensionMismatch { expected: 6, found: 5 }
    );
}
