//! Epoch loop for iterative regressors.
//!
//! ## Purpose
//!
//! This module drives a [`WeightedLinearRegressor`] through a fixed number of
//! full-batch epochs, computing the class weights of the training subset,
//! recording train/validation losses and keeping a by-value snapshot of the
//! parameters with the lowest validation loss.
//!
//! ## Design notes
//!
//! * **Caller-controlled length**: Exactly `epochs` steps; no early stopping.
//! * **Snapshot, not clone**: Only the parameter vector is copied on improvement.
//! * **Optional restore**: With `restore_best`, the best snapshot is written
//!   back before returning.
//!
//! ## Key concepts
//!
//! * **Training weights**: Derived from the training labels for every call.
//! * **Validation weights**: The training class weights looked up on the
//!   validation labels.
//!
//! ## Invariants
//!
//! * `history.len() == epochs` on success.
//! * `best`, when present, has the strictly lowest validation loss seen
//!   (earliest epoch wins ties).
//!
//! ## Non-goals
//!
//! * This module does not split data or time the run (see `evaluation`).

use num_traits::Float;
use tracing::{debug, trace};

use crate::algorithms::regressor::{ParameterSnapshot, WeightedLinearRegressor};
use crate::algorithms::strategy::EpochRecord;
use crate::algorithms::weights::ClassWeights;
use crate::engine::validator::Validator;
use crate::primitives::dataset::Dataset;
use crate::primitives::errors::RegressError;

// ============================================================================
// Defaults
// ============================================================================

/// Number of severity grades.
pub const DEFAULT_NUM_CLASSES: usize = 5;

/// Adam learning rate.
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

/// Full-batch training epochs.
pub const DEFAULT_EPOCHS: usize = 2000;

/// Folds for cross-validation.
pub const DEFAULT_NUM_FOLDS: usize = 5;

// ============================================================================
// Training Configuration
// ============================================================================

/// Hyperparameters shared by all strategies.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainingConfig<T> {
    /// Number of label classes.
    pub num_classes: usize,
    /// Adam learning rate.
    pub learning_rate: T,
    /// Number of training epochs.
    pub epochs: usize,
    /// Seed for randomly initialised strategies.
    pub seed: u64,
    /// Write the best validation snapshot back after training.
    pub restore_best: bool,
}

impl<T: Float> Default for TrainingConfig<T> {
    fn default() -> Self {
        Self {
            num_classes: DEFAULT_NUM_CLASSES,
            learning_rate: T::from(DEFAULT_LEARNING_RATE).unwrap_or_else(T::one),
            epochs: DEFAULT_EPOCHS,
            seed: 0,
            restore_best: false,
        }
    }
}

impl<T: Float> TrainingConfig<T> {
    /// Check every field.
    pub fn validate(&self) -> Result<(), RegressError> {
        Validator::validate_num_classes(self.num_classes)?;
        Validator::validate_learning_rate(self.learning_rate)?;
        Validator::validate_epochs(self.epochs)
    }
}

// ============================================================================
// Trainer
// ============================================================================

/// Result of a full training run.
#[derive(Debug, Clone)]
pub struct TrainingOutcome<T> {
    /// The trained regressor (best snapshot restored if requested).
    pub regressor: WeightedLinearRegressor<T>,
    /// Class weights of the training subset.
    pub class_weights: ClassWeights<T>,
    /// One record per epoch.
    pub history: Vec<EpochRecord<T>>,
    /// Lowest-validation-loss snapshot, if a validation set was given.
    pub best: Option<ParameterSnapshot<T>>,
}

/// Runs the epoch loop for one regressor.
#[derive(Debug, Clone, Copy)]
pub struct Trainer<'a, T> {
    config: &'a TrainingConfig<T>,
}

impl<'a, T: Float> Trainer<'a, T> {
    /// Create a trainer for `config`.
    pub fn new(config: &'a TrainingConfig<T>) -> Self {
        Self { config }
    }

    /// Train `regressor` on `train`, monitoring `validation` if given.
    pub fn train(
        &self,
        mut regressor: WeightedLinearRegressor<T>,
        train: &Dataset<T>,
        validation: Option<&Dataset<T>>,
    ) -> Result<TrainingOutcome<T>, RegressError> {
        let class_weights = ClassWeights::balanced(train.labels(), self.config.num_classes)?;
        let train_weights = class_weights.lookup(train.labels())?;
        let val_weights = validation
            .map(|v| class_weights.lookup(v.labels()))
            .transpose()?;

        let mut history = Vec::with_capacity(self.config.epochs);
        let mut best: Option<ParameterSnapshot<T>> = None;

        for epoch in 0..self.config.epochs {
            let train_loss = regressor.fit_step(train, &train_weights)?;

            let val_loss = match (validation, &val_weights) {
                (Some(v), Some(w)) => Some(regressor.evaluate(v, w)?),
                _ => None,
            };

            if let Some(loss) = val_loss {
                if best.as_ref().is_none_or(|b| loss < b.val_loss) {
                    best = Some(regressor.snapshot(epoch, loss));
                }
            }

            trace!(
                epoch = epoch + 1,
                train_loss = train_loss.to_f64().unwrap_or(f64::NAN),
                val_loss = val_loss.and_then(|l| l.to_f64()).unwrap_or(f64::NAN),
                "epoch"
            );

            history.push(EpochRecord {
                epoch,
                train_loss,
                val_loss,
            });
        }

        if self.config.restore_best {
            if let Some(snapshot) = &best {
                regressor.restore(snapshot)?;
                debug!(
                    epoch = snapshot.epoch + 1,
                    val_loss = snapshot.val_loss.to_f64().unwrap_or(f64::NAN),
                    "restored best snapshot"
                );
            }
        }

        debug!(
            epochs = history.len(),
            final_train_loss = history
                .last()
                .and_then(|r| r.train_loss.to_f64())
                .unwrap_or(f64::NAN),
            best_epoch = best.as_ref().map_or(0, |b| b.epoch + 1),
            "training complete"
        );

        Ok(TrainingOutcome {
            regressor,
            class_weights,
            history,
            best,
        })
    }
}
