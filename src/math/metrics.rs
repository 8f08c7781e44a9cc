//! Regression error metrics.
//!
//! ## Purpose
//!
//! This module computes the error summaries reported by cross-validation and
//! model comparison: MAE, (weighted) MSE and RMSE.
//!
//! ## Design notes
//!
//! * **Slices in, scalar out**: No allocation.
//! * **Weighted MSE** is normalised by the weight sum, `Σ w r² / Σ w`.
//!
//! ## Invariants
//!
//! * Empty inputs yield zero.
//! * Callers pass slices of equal length; extra elements are ignored.

use num_traits::Float;

/// Mean absolute error `mean(|y - p|)`.
pub fn mean_absolute_error<T: Float>(actual: &[T], predicted: &[T]) -> T {
    let n = actual.len().min(predicted.len());
    if n == 0 {
        return T::zero();
    }
    let sum = actual
        .iter()
        .zip(predicted)
        .fold(T::zero(), |acc, (&y, &p)| acc + (y - p).abs());
    sum / T::from(n).unwrap_or_else(T::one)
}

/// Mean squared error `mean((y - p)^2)`.
pub fn mean_squared_error<T: Float>(actual: &[T], predicted: &[T]) -> T {
    let n = actual.len().min(predicted.len());
    if n == 0 {
        return T::zero();
    }
    let sum = actual.iter().zip(predicted).fold(T::zero(), |acc, (&y, &p)| {
        let r = y - p;
        acc + r * r
    });
    sum / T::from(n).unwrap_or_else(T::one)
}

/// Root mean squared error.
#[inline]
pub fn root_mean_squared_error<T: Float>(actual: &[T], predicted: &[T]) -> T {
    mean_squared_error(actual, predicted).sqrt()
}

/// Weighted mean squared error `Σ w (y - p)^2 / Σ w`.
///
/// Returns zero when the weights sum to zero.
pub fn weighted_mean_squared_error<T: Float>(actual: &[T], predicted: &[T], weights: &[T]) -> T {
    let mut num = T::zero();
    let mut den = T::zero();
    for ((&y, &p), &w) in actual.iter().zip(predicted).zip(weights) {
        let r = y - p;
        num = num + w * r * r;
        den = den + w;
    }
    if den > T::zero() { num / den } else { T::zero() }
}

/// Arithmetic mean.
pub fn mean<T: Float>(values: &[T]) -> T {
    if values.is_empty() {
        return T::zero();
    }
    let sum = values.iter().copied().fold(T::zero(), |a, b| a + b);
    sum / T::from(values.len()).unwrap_or_else(T::one)
}
