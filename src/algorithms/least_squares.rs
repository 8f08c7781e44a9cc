//! Closed-form weighted ordinary least squares.
//!
//! Solves `X'WX * beta = X'Wy` for a design with an intercept column, using
//! QR with an SVD fallback from the nalgebra backend.

use crate::algorithms::regressor::LinearModel;
use crate::math::linalg::{FloatLinalg, weighted_normal_equations};
use crate::primitives::dataset::Dataset;
use crate::primitives::errors::RegressError;

/// Fit a weighted least-squares line with intercept.
pub fn fit_weighted_least_squares<T: FloatLinalg>(
    train: &Dataset<T>,
    sample_weights: &[T],
) -> Result<LinearModel<T>, RegressError> {
    if train.is_empty() {
        return Err(RegressError::EmptyInput);
    }
    if sample_weights.len() != train.len() {
        return Err(RegressError::DimensionMismatch {
            expected: train.len(),
            got: sample_weights.len(),
        });
    }

    let d = train.dimensions();
    let (xtwx, xtwy) = weighted_normal_equations(
        train.features().as_slice(),
        d,
        &train.targets(),
        sample_weights,
    );

    let beta = T::solve_normal(&xtwx, &xtwy, d + 1).ok_or(RegressError::SingularSystem)?;
    if beta.iter().any(|b| !b.is_finite()) {
        return Err(RegressError::SingularSystem);
    }

    Ok(LinearModel::from_params(&beta))
}
