#![cfg(feature = "dev")]
//! Tests for feature sources and discriminator configurations.

use std::cell::Cell;

use balanced_regress::internals::adapters::source::{
    DiscriminatorConfig, ExtractorSource, FeatureSource, InMemorySource, Split,
};
use balanced_regress::internals::primitives::dataset::Dataset;
use balanced_regress::internals::primitives::errors::RegressError;

/// Test the two known discriminator variants.
#[test]
fn test_known_versions() {
    let v1 = DiscriminatorConfig::for_version(1).unwrap();
    assert_eq!(v1.early_stride, (1, 1));
    assert_eq!(v1.late_stride, (2, 2));
    assert_eq!(v1.learning_rate, 1e-4);
    assert_eq!(v1.checkpoint_dir, "normal_gan_ckpts");

    let v2 = DiscriminatorConfig::for_version(2).unwrap();
    assert_eq!(v2.early_stride, (2, 2));
    assert_eq!(v2.late_stride, (1, 1));
    assert_eq!(v2.learning_rate, 1e-5);
    assert_eq!(v2.checkpoint_dir, "deep_aug_dims_ckpts");
}

/// Test that other versions are rejected.
#[test]
fn test_unknown_version() {
    assert_eq!(
        DiscriminatorConfig::for_version(0).unwrap_err(),
        RegressError::UnknownExtractorVersion(0)
    );
    assert_eq!(
        DiscriminatorConfig::for_version(3).unwrap_err(),
        RegressError::UnknownExtractorVersion(3)
    );
}

/// Test that the in-memory source returns the matching split.
#[test]
fn test_in_memory_source() {
    let train = Dataset::from_rows(&[vec![1.0], vec![2.0]], vec![0, 1]).unwrap();
    let test = Dataset::from_rows(&[vec![3.0]], vec![1]).unwrap();
    let source = InMemorySource::new(train.clone(), test.clone());

    assert_eq!(source.extract(Split::Train).unwrap(), train);
    assert_eq!(source.extract(Split::Test).unwrap(), test);
    assert_eq!(Split::Train.to_string(), "train");
    assert_eq!(Split::Test.to_string(), "test");
}

/// Test that closure sources receive their configuration and split.
#[test]
fn test_extractor_source() {
    let calls = Cell::new(0);
    let source = ExtractorSource::for_version(2, |config: &DiscriminatorConfig, split: Split| {
        calls.set(calls.get() + 1);
        let value = match split {
            Split::Train => 0.0,
            Split::Test => 1.0,
        };
        Dataset::from_rows(&[vec![value, config.version as f64]], vec![0])
    })
    .unwrap();

    assert_eq!(source.config().version, 2);
    let train: Dataset<f64> = source.extract(Split::Train).unwrap();
    let test: Dataset<f64> = source.extract(Split::Test).unwrap();
    assert_eq!(train.features().row(0), &[0.0, 2.0]);
    assert_eq!(test.features().row(0), &[1.0, 2.0]);
    assert_eq!(calls.get(), 2);

    assert!(format!("{:?}", source).contains("ExtractorSource"));
}

/// Test that extraction errors propagate.
#[test]
fn test_extractor_errors_propagate() {
    let source = ExtractorSource::new(
        DiscriminatorConfig::for_version(1).unwrap(),
        |_: &DiscriminatorConfig, _: Split| -> Result<Dataset<f64>, RegressError> {
            Err(RegressError::EmptyInput)
        },
    );
    assert_eq!(
        source.extract(Split::Test).unwrap_err(),
        RegressError::EmptyInput
    );

    let missing = ExtractorSource::for_version(
        7,
        |_: &DiscriminatorConfig, _: Split| -> Result<Dataset<f64>, RegressError> {
            Err(RegressError::EmptyInput)
        },
    );
    assert_eq!(
        missing.unwrap_err(),
        RegressError::UnknownExtractorVersion(7)
    );
}
