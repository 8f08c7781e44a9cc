//! Input validation for training configuration and labelled data.
//!
//! ## Purpose
//!
//! This module provides the validation functions run when a configuration is
//! built or a dataset enters an experiment. It checks learning rates, epoch
//! and fold counts, class counts and label ranges.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not check per-fold class coverage (the weight
//!   computation reports empty classes when it meets them).

use num_traits::Float;

use crate::primitives::dataset::Dataset;
use crate::primitives::errors::RegressError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for training configuration and input data.
///
/// Provides static methods that return `Result<(), RegressError>` and fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a labelled dataset against the configured class count.
    pub fn validate_dataset<T: Float>(
        data: &Dataset<T>,
        num_classes: usize,
    ) -> Result<(), RegressError> {
        // Check 1: Non-empty
        if data.is_empty() {
            return Err(RegressError::EmptyInput);
        }

        // Check 2: Labels in range
        Self::validate_labels(data.labels(), num_classes)
    }

    /// Validate that every label lies in `[0, num_classes)`.
    pub fn validate_labels(labels: &[usize], num_classes: usize) -> Result<(), RegressError> {
        Self::validate_num_classes(num_classes)?;
        if let Some(&label) = labels.iter().find(|&&l| l >= num_classes) {
            return Err(RegressError::LabelOutOfRange { label, num_classes });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the optimizer learning rate.
    pub fn validate_learning_rate<T: Float>(learning_rate: T) -> Result<(), RegressError> {
        if !learning_rate.is_finite() || learning_rate <= T::zero() {
            return Err(RegressError::InvalidLearningRate(
                learning_rate.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the number of training epochs.
    ///
    /// # Notes
    ///
    /// * At least one epoch is required so that every strategy produces a fitted model.
    pub fn validate_epochs(epochs: usize) -> Result<(), RegressError> {
        if epochs == 0 {
            return Err(RegressError::InvalidEpochs(epochs));
        }
        Ok(())
    }

    /// Validate the number of label classes.
    pub fn validate_num_classes(num_classes: usize) -> Result<(), RegressError> {
        if num_classes == 0 {
            return Err(RegressError::InvalidClassCount(num_classes));
        }
        Ok(())
    }

    /// Validate the number of folds for stratified k-fold cross-validation.
    ///
    /// Pass `usize::MAX` as `samples` to check only the lower bound.
    pub fn validate_folds(folds: usize, samples: usize) -> Result<(), RegressError> {
        if folds < 2 || folds > samples {
            return Err(RegressError::InvalidFolds { folds, samples });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), RegressError> {
        if let Some(param) = duplicate_param {
            return Err(RegressError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
