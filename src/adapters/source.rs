//! Feature sources for the train/test comparison.
//!
//! ## Purpose
//!
//! This module defines how labelled feature matrices reach an experiment.
//! Features are produced upstream by a convolutional discriminator; this
//! crate only consumes them through the [`FeatureSource`] trait.
//!
//! ## Design notes
//!
//! * **Explicit injection**: Callers construct a source and pass it in. There is
//!   no process-wide extractor or cache.
//! * **Versioned extractors**: [`DiscriminatorConfig`] records the two known
//!   discriminator variants so a source can report which one produced its data.
//! * **Closure sources**: [`ExtractorSource`] wraps any extraction function,
//!   keeping model-loading code outside this crate.
//!
//! ## Non-goals
//!
//! * This module does not load checkpoints or run the discriminator.

use core::fmt;

use crate::primitives::dataset::Dataset;
use crate::primitives::errors::RegressError;

// ============================================================================
// Split
// ============================================================================

/// Which partition of the image collection to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Split {
    /// Training images.
    Train,
    /// Held-out test images.
    Test,
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Split::Train => write!(f, "train"),
            Split::Test => write!(f, "test"),
        }
    }
}

// ============================================================================
// Discriminator Configuration
// ============================================================================

/// Hyperparameters of a feature-extracting discriminator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscriminatorConfig {
    /// Extractor version (1 or 2).
    pub version: u32,
    /// Stride of the first convolution block.
    pub early_stride: (u32, u32),
    /// Stride of the last convolution block.
    pub late_stride: (u32, u32),
    /// Learning rate the discriminator was trained with.
    pub learning_rate: f64,
    /// Directory holding the trained checkpoints.
    pub checkpoint_dir: String,
}

impl DiscriminatorConfig {
    /// Configuration of a known extractor version.
    ///
    /// Version 1 downsamples late; version 2 downsamples early and was trained
    /// with a smaller learning rate.
    pub fn for_version(version: u32) -> Result<Self, RegressError> {
        match version {
            1 => Ok(Self {
                version,
                early_stride: (1, 1),
                late_stride: (2, 2),
                learning_rate: 1e-4,
                checkpoint_dir: "normal_gan_ckpts".to_string(),
            }),
            2 => Ok(Self {
                version,
                early_stride: (2, 2),
                late_stride: (1, 1),
                learning_rate: 1e-5,
                checkpoint_dir: "deep_aug_dims_ckpts".to_string(),
            }),
            other => Err(RegressError::UnknownExtractorVersion(other)),
        }
    }
}

// ============================================================================
// Sources
// ============================================================================

/// Produces labelled feature matrices for a split.
pub trait FeatureSource<T> {
    /// Extract the features and labels of `split`.
    fn extract(&self, split: Split) -> Result<Dataset<T>, RegressError>;
}

/// Precomputed train and test datasets.
#[derive(Debug, Clone, PartialEq)]
pub struct InMemorySource<T> {
    train: Dataset<T>,
    test: Dataset<T>,
}

impl<T> InMemorySource<T> {
    /// Hold `train` and `test` for later extraction.
    pub fn new(train: Dataset<T>, test: Dataset<T>) -> Self {
        Self { train, test }
    }
}

impl<T: Clone> FeatureSource<T> for InMemorySource<T> {
    fn extract(&self, split: Split) -> Result<Dataset<T>, RegressError> {
        match split {
            Split::Train => Ok(self.train.clone()),
            Split::Test => Ok(self.test.clone()),
        }
    }
}

/// Source backed by an extraction function and the discriminator it uses.
pub struct ExtractorSource<F> {
    config: DiscriminatorConfig,
    extract: F,
}

impl<F> ExtractorSource<F> {
    /// Wrap `extract`, which receives the discriminator configuration and split.
    pub fn new(config: DiscriminatorConfig, extract: F) -> Self {
        Self { config, extract }
    }

    /// Wrap `extract` for a known extractor version.
    pub fn for_version(version: u32, extract: F) -> Result<Self, RegressError> {
        Ok(Self::new(DiscriminatorConfig::for_version(version)?, extract))
    }

    /// Discriminator this source extracts with.
    pub fn config(&self) -> &DiscriminatorConfig {
        &self.config
    }
}

impl<F> fmt::Debug for ExtractorSource<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractorSource")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<T, F> FeatureSource<T> for ExtractorSource<F>
where
    F: Fn(&DiscriminatorConfig, Split) -> Result<Dataset<T>, RegressError>,
{
    fn extract(&self, split: Split) -> Result<Dataset<T>, RegressError> {
        (self.extract)(&self.config, split)
    }
}
