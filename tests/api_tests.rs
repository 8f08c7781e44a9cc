//! Tests for the public builder and experiment API.
//!
//! These tests use only the prelude, the way downstream users would.

use balanced_regress::prelude::*;

fn grid(copies: usize) -> Dataset<f64> {
    let mut rows = Vec::new();
    let mut labels = Vec::new();
    for _ in 0..copies {
        for a in 0..3 {
            for b in 0..3 {
                rows.push(vec![a as f64, b as f64]);
                labels.push(a + b);
            }
        }
    }
    Dataset::from_rows(&rows, labels).unwrap()
}

// ============================================================================
// Builder
// ============================================================================

/// Test default configuration.
#[test]
fn test_builder_defaults() {
    let experiment = Regression::<f64>::new().build().unwrap();

    assert_eq!(experiment.config().num_classes, 5);
    assert_eq!(experiment.config().learning_rate, 0.1);
    assert_eq!(experiment.config().epochs, 2000);
    assert!(!experiment.config().restore_best);
    assert_eq!(experiment.num_folds(), 5);
    assert_eq!(
        experiment.strategies(),
        vec![Iterative, OrdinaryLeastSquares, DenseLayer]
    );
}

/// Test that setters reach the configuration.
#[test]
fn test_builder_setters() {
    let experiment = Regression::new()
        .num_classes(3)
        .learning_rate(0.01)
        .epochs(42)
        .num_folds(4)
        .seed(9)
        .restore_best()
        .strategies(&[DenseLayer, OrdinaryLeastSquares])
        .preview_rows(10)
        .build()
        .unwrap();

    let config: &TrainingConfig<f64> = experiment.config();
    assert_eq!(config.num_classes, 3);
    assert_eq!(config.learning_rate, 0.01);
    assert_eq!(config.epochs, 42);
    assert_eq!(config.seed, 9);
    assert!(config.restore_best);
    assert_eq!(experiment.num_folds(), 4);
    assert_eq!(experiment.strategies(), vec![DenseLayer, OrdinaryLeastSquares]);
}

/// Test duplicate parameter detection.
#[test]
fn test_builder_duplicate_parameter() {
    let err = Regression::<f64>::new().epochs(10).epochs(20).build().unwrap_err();
    assert_eq!(err, RegressError::DuplicateParameter { parameter: "epochs" });
}

/// Test validation at build time.
#[test]
fn test_builder_validation() {
    assert_eq!(
        Regression::<f64>::new().learning_rate(0.0).build().unwrap_err(),
        RegressError::InvalidLearningRate(0.0)
    );
    assert_eq!(
        Regression::<f64>::new().epochs(0).build().unwrap_err(),
        RegressError::InvalidEpochs(0)
    );
    assert_eq!(
        Regression::<f64>::new().num_classes(0).build().unwrap_err(),
        RegressError::InvalidClassCount(0)
    );
    assert!(matches!(
        Regression::<f64>::new().num_folds(1).build().unwrap_err(),
        RegressError::InvalidFolds { folds: 1, .. }
    ));
}

// ============================================================================
// Experiment
// ============================================================================

/// Test cross-validation of every strategy.
#[test]
fn test_cross_validate() {
    let data = grid(2);
    let result = Regression::new()
        .learning_rate(0.05)
        .epochs(500)
        .num_folds(2)
        .seed(3)
        .build()
        .unwrap()
        .cross_validate(&data)
        .unwrap();

    assert_eq!(result.len(), 3);
    for strategy in RegressionStrategy::ALL {
        let (loss, _elapsed) = result.summary(strategy.name()).unwrap();
        assert!(loss.is_finite());
        assert_eq!(result.report(strategy.name()).unwrap().folds.len(), 2);
    }
    assert!(result.summary("ordinary_least_squares").unwrap().0 < 1e-10);
}

/// Test cross-validation input checks.
#[test]
fn test_cross_validate_errors() {
    let experiment = Regression::new().num_folds(4).build().unwrap();

    let small = Dataset::from_rows(
        &[vec![0.0], vec![1.0], vec![2.0], vec![3.0], vec![4.0]],
        vec![0, 1, 2, 3, 4],
    )
    .unwrap();
    let tiny = small.subset(&[0, 1, 2]);
    assert!(matches!(
        experiment.cross_validate(&tiny).unwrap_err(),
        RegressError::InvalidFolds { folds: 4, samples: 3 }
    ));

    let out_of_range = Dataset::from_rows(&[vec![0.0], vec![1.0]], vec![0, 7]).unwrap();
    assert_eq!(
        experiment.cross_validate(&out_of_range).unwrap_err(),
        RegressError::LabelOutOfRange {
            label: 7,
            num_classes: 5
        }
    );
}

/// Test the train/test comparison through a feature source.
#[test]
fn test_compare_from_source() {
    let train = grid(2);
    let test = grid(1);
    let source = InMemorySource::new(train.clone(), test.clone());

    let experiment = Regression::new()
        .learning_rate(0.05)
        .epochs(1000)
        .preview_rows(4)
        .build()
        .unwrap();

    let report = experiment.compare_from(&source).unwrap();
    assert_eq!(report.entries().len(), 3);
    assert_eq!(report.preview().len(), 4);

    let ols = report.get("ordinary_least_squares").unwrap();
    assert!(ols.mae < 1e-9);
    assert!(ols.rmse < 1e-9);

    let direct = experiment.compare(&train, &test).unwrap();
    assert_eq!(
        direct.get("ordinary_least_squares").unwrap().predictions.len(),
        test.len()
    );
}

/// Test fitting a single strategy.
#[test]
fn test_single_fit() {
    let data = grid(1);
    let experiment = Regression::new().epochs(50).build().unwrap();

    let report = experiment.fit(Iterative, &data, Some(&data)).unwrap();
    assert_eq!(report.history.len(), 50);
    assert!(report.best.is_some());

    let report = experiment.fit(OrdinaryLeastSquares, &data, None).unwrap();
    assert!((report.model.coefficients[0] - 1.0).abs() < 1e-9);
    assert!((report.model.coefficients[1] - 1.0).abs() < 1e-9);
}

/// Test that a source failure stops the comparison.
#[test]
fn test_compare_from_failing_source() {
    let source = ExtractorSource::for_version(
        1,
        |_: &DiscriminatorConfig, split: Split| -> Result<Dataset<f64>, RegressError> {
            match split {
                Split::Train => Ok(grid(2)),
                Split::Test => Err(RegressError::EmptyInput),
            }
        },
    )
    .unwrap();

    let experiment = Regression::<f64>::new().epochs(10).build().unwrap();
    assert_eq!(
        experiment.compare_from(&source).unwrap_err(),
        RegressError::EmptyInput
    );
}

/// Test the standalone weight helpers exposed in the prelude.
#[test]
fn test_prelude_weight_helpers() {
    let weights: ClassWeights<f64> = compute_class_weights(&[0, 0, 0, 1], 2).unwrap();
    assert!((weights.weight(1) - 2.0).abs() < 1e-12);

    let sample: Vec<f64> = compute_sample_weights(&[0, 1], 2).unwrap();
    assert_eq!(sample, vec![1.0, 1.0]);
}
