#![cfg(feature = "dev")]

use balanced_regress::internals::primitives::errors::RegressError;

#[test]
fn test_regress_error_display() {
    // EmptyInput
    let err = RegressError::EmptyInput;
    assert_eq!(format!("{}", err), "Input contains no samples");

    // DimensionMismatch
    let err = RegressError::DimensionMismatch {
        expected: 4,
        got: 3,
    };
    assert_eq!(format!("{}", err), "Dimension mismatch: expected 4, got 3");

    // InvalidNumericValue
    let err = RegressError::InvalidNumericValue("features[0][1]=NaN".to_string());
    assert_eq!(
        format!("{}", err),
        "Invalid numeric value: features[0][1]=NaN"
    );

    // InvalidLabelDistribution
    let err = RegressError::InvalidLabelDistribution {
        class: 3,
        num_classes: 5,
    };
    assert_eq!(
        format!("{}", err),
        "Invalid label distribution: class 3 of 5 has no samples"
    );

    // LabelOutOfRange
    let err = RegressError::LabelOutOfRange {
        label: 7,
        num_classes: 5,
    };
    assert_eq!(
        format!("{}", err),
        "Label out of range: 7 (must be in [0, 5))"
    );

    // InvalidClassCount
    let err = RegressError::InvalidClassCount(0);
    assert_eq!(
        format!("{}", err),
        "Invalid class count: 0 (must be at least 1)"
    );

    // NotFitted
    let err = RegressError::NotFitted;
    assert_eq!(format!("{}", err), "Regressor has not been fitted");

    // NumericDivergence
    let err = RegressError::NumericDivergence {
        step: 2,
        loss: f64::INFINITY,
    };
    assert_eq!(
        format!("{}", err),
        "Numeric divergence at step 2: loss inf is not finite"
    );

    // InvalidLearningRate
    let err = RegressError::InvalidLearningRate(-0.5);
    assert_eq!(
        format!("{}", err),
        "Invalid learning rate: -0.5 (must be > 0 and finite)"
    );

    // InvalidEpochs
    let err = RegressError::InvalidEpochs(0);
    assert_eq!(
        format!("{}", err),
        "Invalid epochs: 0 (must be at least 1)"
    );

    // InvalidFolds
    let err = RegressError::InvalidFolds {
        folds: 6,
        samples: 4,
    };
    assert_eq!(format!("{}", err), "Invalid folds: 6 (must be in [2, 4])");

    // SingularSystem
    let err = RegressError::SingularSystem;
    assert_eq!(format!("{}", err), "Weighted normal equations are singular");

    // DuplicateParameter
    let err = RegressError::DuplicateParameter {
        parameter: "epochs",
    };
    assert_eq!(
        format!("{}", err),
        "Parameter 'epochs' was set multiple times. Each parameter can only be configured once."
    );

    // UnknownExtractorVersion
    let err = RegressError::UnknownExtractorVersion(3);
    assert_eq!(
        format!("{}", err),
        "Unknown extractor version: 3 (known versions are 1 and 2)"
    );
}

#[test]
fn test_regress_error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}

    let err = RegressError::SingularSystem;
    assert_error(&err);

    let boxed: Box<dyn std::error::Error> = Box::new(RegressError::NotFitted);
    assert_eq!(boxed.to_string(), "Regressor has not been fitted");
}

#[test]
fn test_regress_error_clone_and_eq() {
    let err = RegressError::LabelOutOfRange {
        label: 9,
        num_classes: 5,
    };
    assert_eq!(err.clone(), err);
    assert_ne!(err, RegressError::EmptyInput);
}
