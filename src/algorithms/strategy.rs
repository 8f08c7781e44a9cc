//! Regression strategy interface.
//!
//! ## Purpose
//!
//! This module defines the seam between the evaluation layer (folds,
//! comparison) and the concrete ways of fitting a linear model. Anything that
//! can turn a labelled training set into a [`LinearModel`] implements
//! [`FitStrategy`].
//!
//! ## Design notes
//!
//! * **Single output type**: Every strategy produces a `LinearModel`, so
//!   evaluation code scores all of them identically.
//! * **Optional monitoring set**: Iterative strategies may record a per-epoch
//!   validation loss when one is supplied.
//!
//! ## Invariants
//!
//! * `FitReport::class_weights` are derived from the training subset only.
//!
//! ## Non-goals
//!
//! * This module does not time or score fits (see `evaluation`).

use crate::algorithms::regressor::{LinearModel, ParameterSnapshot};
use crate::algorithms::weights::ClassWeights;
use crate::primitives::dataset::Dataset;
use crate::primitives::errors::RegressError;

/// Losses observed after one training epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EpochRecord<T> {
    /// Zero-based epoch index.
    pub epoch: usize,
    /// Training loss before the epoch's update.
    pub train_loss: T,
    /// Validation loss after the update, if a validation set was supplied.
    pub val_loss: Option<T>,
}

/// Outcome of fitting one strategy on one training set.
#[derive(Debug, Clone, PartialEq)]
pub struct FitReport<T> {
    /// The fitted model.
    pub model: LinearModel<T>,
    /// Class weights computed from the training labels.
    pub class_weights: ClassWeights<T>,
    /// Per-epoch losses (empty for closed-form strategies).
    pub history: Vec<EpochRecord<T>>,
    /// Lowest-validation-loss parameters seen during training.
    pub best: Option<ParameterSnapshot<T>>,
}

/// A way of fitting a linear model to class-weighted training data.
pub trait FitStrategy<T> {
    /// Display name used as the key in evaluation results.
    fn name(&self) -> &str;

    /// Fit on `train`, optionally monitoring `validation` per epoch.
    fn fit(
        &self,
        train: &Dataset<T>,
        validation: Option<&Dataset<T>>,
    ) -> Result<FitReport<T>, RegressError>;
}
