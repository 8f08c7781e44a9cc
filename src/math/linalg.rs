//! Linear algebra backend for the closed-form least-squares solver.
//!
//! ## Purpose
//!
//! This module bridges generic `Float` types to nalgebra for solving the
//! weighted normal equations `X'WX * beta = X'Wy`.
//!
//! ## Design notes
//!
//! * Uses QR decomposition (Householder reflections) instead of Cholesky for better
//!   numerical stability with ill-conditioned systems.
//! * Falls back to SVD for rank-deficient matrices.
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to nalgebra.

use core::fmt::Debug;
use num_traits::Float;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + Debug + Send + Sync + 'static {
    /// Solve the column-major `n x n` system `a * beta = b`.
    fn solve_normal(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn solve_normal(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_normal_equations_f64(a, b, n)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn solve_normal(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_normal_equations_f32(a, b, n)
    }
}

// ============================================================================
// Normal Equations Assembly
// ============================================================================

/// Accumulate `X'WX` (column-major) and `X'Wy` for a design with a trailing
/// intercept column.
///
/// `features` is row-major with `dimensions` columns; the intercept column is
/// implicit. Returns `(xtwx, xtwy)` of sizes `(d+1)^2` and `d+1`.
pub fn weighted_normal_equations<T: Float>(
    features: &[T],
    dimensions: usize,
    targets: &[T],
    weights: &[T],
) -> (Vec<T>, Vec<T>) {
    let p = dimensions + 1;
    let mut xtwx = vec![T::zero(); p * p];
    let mut xtwy = vec![T::zero(); p];
    let mut design = vec![T::one(); p];

    for ((row, &y), &w) in features.chunks_exact(dimensions).zip(targets).zip(weights) {
        design[..dimensions].copy_from_slice(row);
        for j in 0..p {
            let wxj = w * design[j];
            xtwy[j] = xtwy[j] + wxj * y;
            // Symmetric: fill the lower triangle, mirror afterwards.
            for k in j..p {
                xtwx[j * p + k] = xtwx[j * p + k] + wxj * design[k];
            }
        }
    }

    for j in 0..p {
        for k in (j + 1)..p {
            xtwx[k * p + j] = xtwx[j * p + k];
        }
    }

    (xtwx, xtwy)
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use nalgebra::{DMatrix, DVector};

    /// Solve normal equations X'WX * beta = X'Wy using f64 precision.
    pub fn solve_normal_equations_f64(
        xtw_x: &[f64],
        xtw_y: &[f64],
        n_coeffs: usize,
    ) -> Option<Vec<f64>> {
        let matrix = DMatrix::from_column_slice(n_coeffs, n_coeffs, xtw_x);
        let rhs = DVector::from_column_slice(xtw_y);

        let qr = matrix.clone().qr();
        if let Some(solution) = qr.solve(&rhs) {
            return Some(solution.as_slice().to_vec());
        }

        matrix
            .svd(true, true)
            .solve(&rhs, f64::EPSILON * 100.0)
            .ok()
            .map(|s: DVector<f64>| s.as_slice().to_vec())
    }

    /// Solve normal equations X'WX * beta = X'Wy using f32 precision.
    pub fn solve_normal_equations_f32(
        xtw_x: &[f32],
        xtw_y: &[f32],
        n_coeffs: usize,
    ) -> Option<Vec<f32>> {
        let matrix = DMatrix::from_column_slice(n_coeffs, n_coeffs, xtw_x);
        let rhs = DVector::from_column_slice(xtw_y);

        let qr = matrix.clone().qr();
        if let Some(solution) = qr.solve(&rhs) {
            return Some(solution.as_slice().to_vec());
        }

        matrix
            .svd(true, true)
            .solve(&rhs, f32::EPSILON * 100.0)
            .ok()
            .map(|s: DVector<f32>| s.as_slice().to_vec())
    }
}
