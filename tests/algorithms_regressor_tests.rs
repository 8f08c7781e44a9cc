#![cfg(feature = "dev")]
//! Tests for the Adam-trained weighted linear regressor.
//!
//! These tests verify:
//! - Convergence to the weighted least-squares solution
//! - Purity of evaluation and prediction
//! - Lifecycle and shape errors
//! - Divergence reporting
//! - Parameter snapshots

use approx::assert_relative_eq;

use balanced_regress::internals::algorithms::regressor::{
    LinearModel, ParameterSnapshot, WeightedLinearRegressor,
};
use balanced_regress::internals::algorithms::weights::compute_sample_weights;
use balanced_regress::internals::primitives::dataset::{Dataset, FeatureMatrix};
use balanced_regress::internals::primitives::errors::RegressError;

fn line_data() -> Dataset<f64> {
    Dataset::from_rows(&[vec![1.0], vec![2.0], vec![3.0], vec![4.0]], vec![0, 0, 1, 1]).unwrap()
}

fn imbalanced_data() -> Dataset<f64> {
    Dataset::from_rows(
        &[
            vec![0.0, 1.0],
            vec![1.0, 0.5],
            vec![2.0, 2.0],
            vec![3.0, 1.5],
            vec![4.0, 3.0],
            vec![5.0, 2.5],
        ],
        vec![0, 0, 0, 0, 1, 2],
    )
    .unwrap()
}

// ============================================================================
// Construction
// ============================================================================

/// Test that a new regressor starts at zero and is not fitted.
#[test]
fn test_new_regressor_state() {
    let reg = WeightedLinearRegressor::<f64>::new(3, 0.1).unwrap();

    assert_eq!(reg.dimensions(), 3);
    assert_eq!(reg.params(), &[0.0, 0.0, 0.0, 0.0]);
    assert_eq!(reg.steps(), 0);
    assert!(!reg.is_fitted());
}

/// Test construction errors.
#[test]
fn test_new_regressor_errors() {
    assert_eq!(
        WeightedLinearRegressor::<f64>::new(0, 0.1).unwrap_err(),
        RegressError::DimensionMismatch {
            expected: 1,
            got: 0
        }
    );
    assert_eq!(
        WeightedLinearRegressor::<f64>::new(2, 0.0).unwrap_err(),
        RegressError::InvalidLearningRate(0.0)
    );
    assert!(matches!(
        WeightedLinearRegressor::<f64>::new(2, f64::NAN).unwrap_err(),
        RegressError::InvalidLearningRate(_)
    ));
}

/// Test starting from explicit parameters.
#[test]
fn test_with_params() {
    let reg = WeightedLinearRegressor::with_params(vec![2.0, -1.0, 0.5], 0.1).unwrap();
    assert!(reg.is_fitted());
    assert_eq!(reg.dimensions(), 2);

    let x = FeatureMatrix::from_rows(&[vec![1.0, 1.0], vec![0.0, 2.0]]).unwrap();
    let p = reg.predict(&x).unwrap();
    assert_relative_eq!(p[0], 1.5, epsilon = 1e-12);
    assert_relative_eq!(p[1], -1.5, epsilon = 1e-12);

    assert_eq!(
        WeightedLinearRegressor::with_params(vec![1.0], 0.1).unwrap_err(),
        RegressError::DimensionMismatch {
            expected: 2,
            got: 1
        }
    );
    assert!(matches!(
        WeightedLinearRegressor::with_params(vec![1.0, f64::INFINITY], 0.1).unwrap_err(),
        RegressError::InvalidNumericValue(_)
    ));
}

// ============================================================================
// Training
// ============================================================================

/// Test that the reported loss is measured before the update.
#[test]
fn test_first_step_loss_at_zero_params() {
    let data = line_data();
    let weights = vec![1.0; 4];
    let mut reg = WeightedLinearRegressor::new(1, 0.1).unwrap();

    // mean(w * y^2) with all parameters at zero.
    let loss = reg.fit_step(&data, &weights).unwrap();
    assert_relative_eq!(loss, 0.5, epsilon = 1e-12);
    assert_eq!(reg.steps(), 1);
    assert!(reg.is_fitted());
    assert!(reg.params().iter().all(|p| *p != 0.0));
}

/// Test convergence to the least-squares line on 1D data.
#[test]
fn test_converges_to_least_squares_line() {
    let data = line_data();
    let weights = vec![1.0; 4];
    let mut reg = WeightedLinearRegressor::new(1, 0.01).unwrap();

    let mut last = f64::INFINITY;
    for _ in 0..5000 {
        last = reg.fit_step(&data, &weights).unwrap();
    }

    assert_relative_eq!(reg.params()[0], 0.4, epsilon = 1e-3);
    assert_relative_eq!(reg.params()[1], -0.5, epsilon = 1e-3);
    assert_relative_eq!(last, 0.05, epsilon = 1e-4);
}

/// Test convergence to the weighted solution on imbalanced 2D data.
#[test]
fn test_converges_to_weighted_solution() {
    let data = imbalanced_data();
    let weights: Vec<f64> = compute_sample_weights(data.labels(), 3).unwrap();
    let mut reg = WeightedLinearRegressor::new(2, 0.01).unwrap();

    for _ in 0..5000 {
        reg.fit_step(&data, &weights).unwrap();
    }

    // Closed-form weighted least squares with weights [0.5 x4, 2, 2].
    assert_relative_eq!(reg.params()[0], 23.0 / 42.0, epsilon = 1e-3);
    assert_relative_eq!(reg.params()[1], -5.0 / 21.0, epsilon = 1e-3);
    assert_relative_eq!(reg.params()[2], -8.0 / 21.0, epsilon = 1e-3);
}

/// Test that a runaway learning rate is reported as divergence.
#[test]
fn test_divergence_reported() {
    let data = line_data();
    let weights = vec![1.0; 4];
    let mut reg = WeightedLinearRegressor::new(1, 1e300).unwrap();

    reg.fit_step(&data, &weights).unwrap();
    let err = reg.fit_step(&data, &weights).unwrap_err();
    assert!(matches!(err, RegressError::NumericDivergence { step: 2, .. }));
}

/// Test shape errors in training.
#[test]
fn test_fit_step_shape_errors() {
    let data = line_data();
    let mut reg = WeightedLinearRegressor::new(2, 0.1).unwrap();
    assert_eq!(
        reg.fit_step(&data, &[1.0; 4]).unwrap_err(),
        RegressError::DimensionMismatch {
            expected: 2,
            got: 1
        }
    );

    let mut reg = WeightedLinearRegressor::new(1, 0.1).unwrap();
    assert_eq!(
        reg.fit_step(&data, &[1.0; 3]).unwrap_err(),
        RegressError::DimensionMismatch {
            expected: 4,
            got: 3
        }
    );

    let empty = data.subset(&[]);
    assert_eq!(
        reg.fit_step(&empty, &[]).unwrap_err(),
        RegressError::EmptyInput
    );
    assert_eq!(reg.steps(), 0);
}

// ============================================================================
// Evaluation
// ============================================================================

/// Test that evaluation and prediction require a fitted model.
#[test]
fn test_not_fitted() {
    let data = line_data();
    let reg = WeightedLinearRegressor::<f64>::new(1, 0.1).unwrap();

    assert_eq!(
        reg.evaluate(&data, &[1.0; 4]).unwrap_err(),
        RegressError::NotFitted
    );
    assert_eq!(
        reg.predict(data.features()).unwrap_err(),
        RegressError::NotFitted
    );
}

/// Test that evaluation normalises by the weight sum.
#[test]
fn test_evaluate_weighted_mean() {
    let data =
        Dataset::from_rows(&[vec![1.0], vec![2.0], vec![3.0], vec![4.0]], vec![0, 0, 0, 1])
            .unwrap();
    let reg = WeightedLinearRegressor::with_params(vec![0.0, 0.0], 0.1).unwrap();

    let loss = reg.evaluate(&data, &[1.0, 1.0, 1.0, 3.0]).unwrap();
    assert_relative_eq!(loss, 0.5, epsilon = 1e-12);
}

/// Test that evaluation leaves the regressor untouched.
#[test]
fn test_evaluate_is_pure() {
    let data = line_data();
    let weights = vec![1.0; 4];
    let mut reg = WeightedLinearRegressor::new(1, 0.1).unwrap();
    for _ in 0..10 {
        reg.fit_step(&data, &weights).unwrap();
    }

    let before = reg.params().to_vec();
    let a = reg.evaluate(&data, &weights).unwrap();
    let b = reg.evaluate(&data, &weights).unwrap();
    let _ = reg.predict(data.features()).unwrap();

    assert_eq!(a, b);
    assert_eq!(reg.params(), before.as_slice());
    assert_eq!(reg.steps(), 10);
}

// ============================================================================
// Snapshots
// ============================================================================

/// Test that restoring a snapshot recovers earlier parameters.
#[test]
fn test_snapshot_restore() {
    let data = line_data();
    let weights = vec![1.0; 4];
    let mut reg = WeightedLinearRegressor::new(1, 0.1).unwrap();

    for _ in 0..5 {
        reg.fit_step(&data, &weights).unwrap();
    }
    let snap = reg.snapshot(4, 0.25);
    assert_eq!(snap.epoch, 4);
    assert_eq!(snap.params, reg.params());

    for _ in 0..5 {
        reg.fit_step(&data, &weights).unwrap();
    }
    assert_ne!(reg.params(), snap.params.as_slice());

    reg.restore(&snap).unwrap();
    assert_eq!(reg.params(), snap.params.as_slice());
    assert_eq!(reg.steps(), 10);
}

/// Test that a snapshot of the wrong size is rejected.
#[test]
fn test_restore_wrong_size() {
    let mut reg = WeightedLinearRegressor::<f64>::new(1, 0.1).unwrap();
    let snap = ParameterSnapshot {
        epoch: 0,
        val_loss: 0.0,
        params: vec![1.0, 2.0, 3.0],
    };
    assert_eq!(
        reg.restore(&snap).unwrap_err(),
        RegressError::DimensionMismatch {
            expected: 2,
            got: 3
        }
    );
}

// ============================================================================
// Linear Model
// ============================================================================

/// Test splitting bias-last parameters and predicting.
#[test]
fn test_linear_model() {
    let model = LinearModel::from_params(&[3.0, -2.0, 1.0]);
    assert_eq!(model.coefficients, vec![3.0, -2.0]);
    assert_eq!(model.intercept, 1.0);
    assert_eq!(model.params(), vec![3.0, -2.0, 1.0]);

    let x = FeatureMatrix::from_rows(&[vec![1.0, 1.0], vec![2.0, 0.0]]).unwrap();
    assert_eq!(model.predict(&x).unwrap(), vec![2.0, 7.0]);

    let wrong = FeatureMatrix::from_rows(&[vec![1.0]]).unwrap();
    assert_eq!(
        model.predict(&wrong).unwrap_err(),
        RegressError::DimensionMismatch {
            expected: 2,
            got: 1
        }
    );
}

/// Test that the regressor exports its parameters as a model.
#[test]
fn test_to_model() {
    let reg = WeightedLinearRegressor::with_params(vec![0.5, 0.25], 0.1).unwrap();
    let model = reg.to_model();
    assert_eq!(model.coefficients, vec![0.5]);
    assert_eq!(model.intercept, 0.25);
}
