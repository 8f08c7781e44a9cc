//! Error types for weighting, training and evaluation.
//!
//! ## Purpose
//!
//! This module defines [`RegressError`], the single error type returned by
//! every fallible operation in the crate.
//!
//! ## Design notes
//!
//! * **Flat**: One enum with structured variants; no nested error sources.
//! * **Comparable**: Implements `Clone` and `PartialEq` so tests can match exact errors.
//! * **Displayable**: Messages name the offending value and the accepted range.
//!
//! ## Invariants
//!
//! * Errors are raised at construction or fit time, never deferred to a later call.
//!
//! ## Non-goals
//!
//! * This module does not log errors (callers decide).

use std::fmt;

/// Errors raised while weighting labels, training regressors or evaluating them.
#[derive(Debug, Clone, PartialEq)]
pub enum RegressError {
    /// Input contains no samples.
    EmptyInput,

    /// Two related lengths disagree (rows vs labels, columns vs parameters, weights vs rows).
    DimensionMismatch {
        /// Length implied by the reference input.
        expected: usize,
        /// Length actually supplied.
        got: usize,
    },

    /// A value is NaN or infinite where a finite value is required.
    InvalidNumericValue(String),

    /// A class has no samples in the subset being weighted.
    InvalidLabelDistribution {
        /// The empty class.
        class: usize,
        /// Number of classes the labels were checked against.
        num_classes: usize,
    },

    /// A label lies outside `[0, num_classes)`.
    LabelOutOfRange {
        /// The offending label.
        label: usize,
        /// Number of classes the labels were checked against.
        num_classes: usize,
    },

    /// The number of classes is zero.
    InvalidClassCount(usize),

    /// `predict` or `evaluate` was called before any training step.
    NotFitted,

    /// Training produced a non-finite loss or parameter.
    NumericDivergence {
        /// Optimizer step at which divergence was detected (1-based).
        step: usize,
        /// Loss observed at that step.
        loss: f64,
    },

    /// Learning rate is not finite and strictly positive.
    InvalidLearningRate(f64),

    /// Epoch count is zero.
    InvalidEpochs(usize),

    /// Fold count is below 2 or exceeds the number of samples.
    InvalidFolds {
        /// Requested number of folds.
        folds: usize,
        /// Number of samples available.
        samples: usize,
    },

    /// The weighted normal equations could not be solved.
    SingularSystem,

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },

    /// No discriminator variant exists for this version number.
    UnknownExtractorVersion(u32),
}

impl fmt::Display for RegressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Input contains no samples"),
            Self::DimensionMismatch { expected, got } => {
                write!(f, "Dimension mismatch: expected {}, got {}", expected, got)
            }
            Self::InvalidNumericValue(detail) => write!(f, "Invalid numeric value: {}", detail),
            Self::InvalidLabelDistribution { class, num_classes } => write!(
                f,
                "Invalid label distribution: class {} of {} has no samples",
                class, num_classes
            ),
            Self::LabelOutOfRange { label, num_classes } => write!(
                f,
                "Label out of range: {} (must be in [0, {}))",
                label, num_classes
            ),
            Self::InvalidClassCount(k) => {
                write!(f, "Invalid class count: {} (must be at least 1)", k)
            }
            Self::NotFitted => write!(f, "Regressor has not been fitted"),
            Self::NumericDivergence { step, loss } => write!(
                f,
                "Numeric divergence at step {}: loss {} is not finite",
                step, loss
            ),
            Self::InvalidLearningRate(lr) => write!(
                f,
                "Invalid learning rate: {} (must be > 0 and finite)",
                lr
            ),
            Self::InvalidEpochs(epochs) => {
                write!(f, "Invalid epochs: {} (must be at least 1)", epochs)
            }
            Self::InvalidFolds { folds, samples } => write!(
                f,
                "Invalid folds: {} (must be in [2, {}])",
                folds, samples
            ),
            Self::SingularSystem => write!(f, "Weighted normal equations are singular"),
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
            Self::UnknownExtractorVersion(version) => write!(
                f,
                "Unknown extractor version: {} (known versions are 1 and 2)",
                version
            ),
        }
    }
}

impl std::error::Error for RegressError {}
