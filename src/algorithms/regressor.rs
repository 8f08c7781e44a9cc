//! Weighted linear regressor trained by Adam.
//!
//! ## Purpose
//!
//! This module implements the iterative regressor at the core of the crate:
//! a single parameter vector `M` (one coefficient per feature plus a trailing
//! bias) fitted by repeated gradient steps on a weighted squared-error loss.
//!
//! ## Design notes
//!
//! * **Explicit bias**: Predictions are `dot([x, 1], M)`; the bias column is never stored.
//! * **Full batch**: Each [`fit_step`](WeightedLinearRegressor::fit_step) uses every training row.
//! * **Owned state**: Parameters and Adam moments belong to one instance and are
//!   never shared across folds.
//! * **Snapshots by value**: The best model is recovered by copying the
//!   parameter vector, not the regressor.
//!
//! ## Key concepts
//!
//! * **Training loss**: `mean(w * (y - p)^2)` at the pre-update parameters.
//! * **Evaluation loss**: `Σ w (y - p)^2 / Σ w`.
//! * **Lifecycle**: Uninitialized (zero parameters) → Training; the caller
//!   chooses when to stop.
//!
//! ## Invariants
//!
//! * `params.len() == dimensions + 1`.
//! * `evaluate` and `predict` never mutate state.
//! * After a successful step every parameter is finite.
//!
//! ## Non-goals
//!
//! * This module does not detect convergence or schedule the learning rate.
//! * This module does not compute class weights (see `weights`).

use num_traits::Float;

use crate::math::adam::Adam;
use crate::math::metrics::weighted_mean_squared_error;
use crate::primitives::dataset::{Dataset, FeatureMatrix};
use crate::primitives::errors::RegressError;

// ============================================================================
// Linear Model
// ============================================================================

/// A fitted linear model `p = coefficients · x + intercept`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearModel<T> {
    /// One coefficient per feature.
    pub coefficients: Vec<T>,
    /// Constant term.
    pub intercept: T,
}

impl<T: Float> LinearModel<T> {
    /// Split a bias-last parameter vector into coefficients and intercept.
    pub fn from_params(params: &[T]) -> Self {
        match params.split_last() {
            Some((&intercept, coefficients)) => Self {
                coefficients: coefficients.to_vec(),
                intercept,
            },
            None => Self {
                coefficients: Vec::new(),
                intercept: T::zero(),
            },
        }
    }

    /// Bias-last parameter vector.
    pub fn params(&self) -> Vec<T> {
        let mut params = self.coefficients.clone();
        params.push(self.intercept);
        params
    }

    /// Predict one score per row of `features`.
    pub fn predict(&self, features: &FeatureMatrix<T>) -> Result<Vec<T>, RegressError> {
        if features.dimensions() != self.coefficients.len() {
            return Err(RegressError::DimensionMismatch {
                expected: self.coefficients.len(),
                got: features.dimensions(),
            });
        }
        Ok(features
            .iter_rows()
            .map(|row| dot_with_bias(row, &self.coefficients, self.intercept))
            .collect())
    }
}

// ============================================================================
// Parameter Snapshot
// ============================================================================

/// Value copy of a regressor's parameters taken at a given epoch.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterSnapshot<T> {
    /// Zero-based epoch after which the snapshot was taken.
    pub epoch: usize,
    /// Validation loss at that epoch.
    pub val_loss: T,
    /// Bias-last parameter vector.
    pub params: Vec<T>,
}

// ============================================================================
// Weighted Linear Regressor
// ============================================================================

/// Linear regressor fitted by Adam on a sample-weighted squared-error loss.
#[derive(Debug, Clone)]
pub struct WeightedLinearRegressor<T> {
    params: Vec<T>,
    optimizer: Adam<T>,
    fitted: bool,
}

impl<T: Float> WeightedLinearRegressor<T> {
    /// Create a regressor over `dimensions` features with all parameters at zero.
    pub fn new(dimensions: usize, learning_rate: T) -> Result<Self, RegressError> {
        if dimensions == 0 {
            return Err(RegressError::DimensionMismatch {
                expected: 1,
                got: 0,
            });
        }
        check_learning_rate(learning_rate)?;

        let len = dimensions + 1;
        Ok(Self {
            params: vec![T::zero(); len],
            optimizer: Adam::new(len, learning_rate),
            fitted: false,
        })
    }

    /// Create a regressor starting from an explicit bias-last parameter vector.
    ///
    /// The regressor counts as fitted: it can predict before any training step.
    pub fn with_params(params: Vec<T>, learning_rate: T) -> Result<Self, RegressError> {
        if params.len() < 2 {
            return Err(RegressError::DimensionMismatch {
                expected: 2,
                got: params.len(),
            });
        }
        check_learning_rate(learning_rate)?;
        check_finite_params(&params, 0, T::zero())?;

        let len = params.len();
        Ok(Self {
            params,
            optimizer: Adam::new(len, learning_rate),
            fitted: true,
        })
    }

    /// Number of input features (parameters minus bias).
    pub fn dimensions(&self) -> usize {
        self.params.len() - 1
    }

    /// Current bias-last parameter vector.
    pub fn params(&self) -> &[T] {
        &self.params
    }

    /// Number of training steps taken.
    pub fn steps(&self) -> usize {
        self.optimizer.step_count()
    }

    /// Whether the regressor may be used for prediction.
    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    /// Perform one Adam update on the full training set and return the loss
    /// measured before the update.
    pub fn fit_step(&mut self, train: &Dataset<T>, sample_weights: &[T]) -> Result<T, RegressError> {
        self.check_inputs(train.features(), sample_weights.len(), train.len())?;

        let d = self.dimensions();
        let n = T::from(train.len()).unwrap_or_else(T::nan);
        let two = T::one() + T::one();
        let (coefficients, bias) = self.params.split_at(d);
        let bias = bias[0];

        let mut grads = vec![T::zero(); d + 1];
        let mut loss = T::zero();

        for ((row, &label), &w) in train
            .features()
            .iter_rows()
            .zip(train.labels())
            .zip(sample_weights)
        {
            let y = T::from(label).unwrap_or_else(T::nan);
            let r = y - dot_with_bias(row, coefficients, bias);
            loss = loss + w * r * r;

            // d/dM of w * r^2 is -2 w r x
            let g = -two * w * r;
            for (gj, &xj) in grads.iter_mut().zip(row) {
                *gj = *gj + g * xj;
            }
            grads[d] = grads[d] + g;
        }

        let loss = loss / n;
        let step = self.steps() + 1;
        if !loss.is_finite() {
            return Err(RegressError::NumericDivergence {
                step,
                loss: loss.to_f64().unwrap_or(f64::NAN),
            });
        }

        for g in grads.iter_mut() {
            *g = *g / n;
        }

        self.optimizer.step(&mut self.params, &grads);
        check_finite_params(&self.params, step, loss)?;
        self.fitted = true;

        Ok(loss)
    }

    /// Weighted mean squared error on `data`, normalised by the weight sum.
    pub fn evaluate(&self, data: &Dataset<T>, sample_weights: &[T]) -> Result<T, RegressError> {
        if !self.fitted {
            return Err(RegressError::NotFitted);
        }
        self.check_inputs(data.features(), sample_weights.len(), data.len())?;

        let predictions = self.forward(data.features());
        Ok(weighted_mean_squared_error(
            &data.targets(),
            &predictions,
            sample_weights,
        ))
    }

    /// Predict one score per row of `features`.
    pub fn predict(&self, features: &FeatureMatrix<T>) -> Result<Vec<T>, RegressError> {
        if !self.fitted {
            return Err(RegressError::NotFitted);
        }
        self.check_columns(features)?;
        Ok(self.forward(features))
    }

    /// Copy the current parameters into a snapshot.
    pub fn snapshot(&self, epoch: usize, val_loss: T) -> ParameterSnapshot<T> {
        ParameterSnapshot {
            epoch,
            val_loss,
            params: self.params.clone(),
        }
    }

    /// Overwrite the parameters with a snapshot's values.
    ///
    /// Adam moments are left untouched.
    pub fn restore(&mut self, snapshot: &ParameterSnapshot<T>) -> Result<(), RegressError> {
        if snapshot.params.len() != self.params.len() {
            return Err(RegressError::DimensionMismatch {
                expected: self.params.len(),
                got: snapshot.params.len(),
            });
        }
        self.params.copy_from_slice(&snapshot.params);
        self.fitted = true;
        Ok(())
    }

    /// Current parameters as a [`LinearModel`].
    pub fn to_model(&self) -> LinearModel<T> {
        LinearModel::from_params(&self.params)
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    fn forward(&self, features: &FeatureMatrix<T>) -> Vec<T> {
        let (coefficients, bias) = self.params.split_at(self.dimensions());
        features
            .iter_rows()
            .map(|row| dot_with_bias(row, coefficients, bias[0]))
            .collect()
    }

    fn check_columns(&self, features: &FeatureMatrix<T>) -> Result<(), RegressError> {
        // The bias column is implicit, so the matrix has one column fewer than M.
        if features.dimensions() + 1 != self.params.len() {
            return Err(RegressError::DimensionMismatch {
                expected: self.dimensions(),
                got: features.dimensions(),
            });
        }
        Ok(())
    }

    fn check_inputs(
        &self,
        features: &FeatureMatrix<T>,
        weights: usize,
        rows: usize,
    ) -> Result<(), RegressError> {
        if rows == 0 {
            return Err(RegressError::EmptyInput);
        }
        self.check_columns(features)?;
        if weights != rows {
            return Err(RegressError::DimensionMismatch {
                expected: rows,
                got: weights,
            });
        }
        Ok(())
    }
}

// ============================================================================
// Free Helpers
// ============================================================================

#[inline]
fn dot_with_bias<T: Float>(row: &[T], coefficients: &[T], bias: T) -> T {
    row.iter()
        .zip(coefficients)
        .fold(bias, |acc, (&x, &m)| acc + x * m)
}

fn check_learning_rate<T: Float>(learning_rate: T) -> Result<(), RegressError> {
    if !learning_rate.is_finite() || learning_rate <= T::zero() {
        return Err(RegressError::InvalidLearningRate(
            learning_rate.to_f64().unwrap_or(f64::NAN),
        ));
    }
    Ok(())
}

fn check_finite_params<T: Float>(params: &[T], step: usize, loss: T) -> Result<(), RegressError> {
    if params.iter().any(|p| !p.is_finite()) {
        if step == 0 {
            return Err(RegressError::InvalidNumericValue(
                "initial parameters must be finite".to_string(),
            ));
        }
        return Err(RegressError::NumericDivergence {
            step,
            loss: loss.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(())
}
