//! Stratified k-fold cross-validation of regression strategies.
//!
//! ## Purpose
//!
//! This module scores a [`FitStrategy`] by fitting it once per fold on the
//! training folds and measuring the class-weighted squared error on the
//! held-out fold, together with the wall-clock time each fold took.
//!
//! ## Design notes
//!
//! * **Generic Strategy**: Any `FitStrategy` can be cross-validated.
//! * **Fresh state per fold**: Each fold calls `fit` independently, so no
//!   regressor state or class weights leak between folds.
//! * **Uniform scoring**: The held-out loss is computed here from the returned
//!   model, identically for every strategy.
//!
//! ## Key concepts
//!
//! * **Held-out validation**: Train on k-1 folds, validate on the remaining one.
//! * **Training weights**: Validation samples are weighted with the class
//!   weights of the fold's training subset.
//!
//! ## Invariants
//!
//! * Training and validation sets are disjoint in each fold.
//! * Reported means are taken over all folds.
//!
//! ## Non-goals
//!
//! * This module does not select hyperparameters.
//! * This module does not run folds in parallel.

use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};

use num_traits::Float;
use tracing::{debug, info};

use crate::algorithms::strategy::FitStrategy;
use crate::evaluation::split::StratifiedKFold;
use crate::math::metrics::{mean, weighted_mean_squared_error};
use crate::primitives::dataset::Dataset;
use crate::primitives::errors::RegressError;

// ============================================================================
// Results
// ============================================================================

/// Score of one fold.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FoldOutcome<T> {
    /// Zero-based fold index.
    pub fold: usize,
    /// Class-weighted MSE on the held-out fold.
    pub val_loss: T,
    /// Wall-clock time for subsetting, fitting and scoring the fold.
    pub elapsed: Duration,
    /// Number of training samples.
    pub train_size: usize,
    /// Number of held-out samples.
    pub validation_size: usize,
}

/// Per-fold scores of one strategy and their means.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrossValidationReport<T> {
    /// Strategy name.
    pub strategy: String,
    /// One outcome per fold, in fold order.
    pub folds: Vec<FoldOutcome<T>>,
    /// Mean held-out loss across folds.
    pub mean_val_loss: T,
    /// Mean wall-clock time per fold.
    pub mean_elapsed: Duration,
}

/// Cross-validation summaries keyed by strategy name.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluationResult<T> {
    reports: BTreeMap<String, CrossValidationReport<T>>,
}

impl<T: Float> EvaluationResult<T> {
    /// `(mean validation loss, mean time per fold)` of a strategy.
    pub fn summary(&self, strategy: &str) -> Option<(T, Duration)> {
        self.reports
            .get(strategy)
            .map(|r| (r.mean_val_loss, r.mean_elapsed))
    }

    /// Full report of a strategy.
    pub fn report(&self, strategy: &str) -> Option<&CrossValidationReport<T>> {
        self.reports.get(strategy)
    }

    /// Reports in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CrossValidationReport<T>)> {
        self.reports.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of strategies evaluated.
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Whether no strategy was evaluated.
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Name of the strategy with the lowest mean validation loss.
    pub fn best(&self) -> Option<&str> {
        self.reports
            .iter()
            .filter(|(_, r)| !r.mean_val_loss.is_nan())
            .min_by(|(_, a), (_, b)| {
                a.mean_val_loss
                    .partial_cmp(&b.mean_val_loss)
                    .unwrap_or(core::cmp::Ordering::Equal)
            })
            .map(|(name, _)| name.as_str())
    }
}

impl<T: Float + fmt::Display> fmt::Display for EvaluationResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cross-validation:")?;
        writeln!(
            f,
            "  {:<28} {:>14} {:>14}",
            "Strategy", "Mean val loss", "Mean fold (s)"
        )?;
        writeln!(f, "  {}", "-".repeat(58))?;
        for (name, report) in &self.reports {
            writeln!(
                f,
                "  {:<28} {:>14.6} {:>14.4}",
                name,
                report.mean_val_loss,
                report.mean_elapsed.as_secs_f64()
            )?;
        }
        Ok(())
    }
}

// ============================================================================
// Cross Validator
// ============================================================================

/// Runs strategies over stratified folds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossValidator {
    splitter: StratifiedKFold,
}

impl CrossValidator {
    /// Create a validator with `num_folds` unshuffled stratified folds.
    pub fn new(num_folds: usize) -> Self {
        Self {
            splitter: StratifiedKFold::new(num_folds),
        }
    }

    /// Shuffle class groups with `seed` before assigning folds.
    pub fn seed(mut self, seed: u64) -> Self {
        self.splitter = self.splitter.seed(seed);
        self
    }

    /// Number of folds.
    pub fn num_folds(&self) -> usize {
        self.splitter.folds()
    }

    /// Cross-validate a single strategy.
    pub fn run<T, S>(
        &self,
        data: &Dataset<T>,
        strategy: &S,
    ) -> Result<CrossValidationReport<T>, RegressError>
    where
        T: Float,
        S: FitStrategy<T> + ?Sized,
    {
        let splits = self.splitter.split(data.labels())?;
        let mut folds = Vec::with_capacity(splits.len());

        for split in &splits {
            let start = Instant::now();

            let train = data.subset(&split.train);
            let validation = data.subset(&split.validation);

            let report = strategy.fit(&train, Some(&validation))?;
            let predictions = report.model.predict(validation.features())?;
            let weights = report.class_weights.lookup(validation.labels())?;
            let val_loss =
                weighted_mean_squared_error(&validation.targets(), &predictions, &weights);

            let elapsed = start.elapsed();
            debug!(
                strategy = strategy.name(),
                fold = split.fold + 1,
                folds = splits.len(),
                val_loss = val_loss.to_f64().unwrap_or(f64::NAN),
                elapsed_ms = elapsed.as_secs_f64() * 1e3,
                "fold complete"
            );

            folds.push(FoldOutcome {
                fold: split.fold,
                val_loss,
                elapsed,
                train_size: train.len(),
                validation_size: validation.len(),
            });
        }

        let losses: Vec<T> = folds.iter().map(|f| f.val_loss).collect();
        let total: Duration = folds.iter().map(|f| f.elapsed).sum();
        let mean_elapsed = total / u32::try_from(folds.len()).unwrap_or(u32::MAX);

        Ok(CrossValidationReport {
            strategy: strategy.name().to_string(),
            folds,
            mean_val_loss: mean(&losses),
            mean_elapsed,
        })
    }

    /// Cross-validate several strategies over the same folds.
    pub fn evaluate_strategies<T: Float>(
        &self,
        data: &Dataset<T>,
        strategies: &[&dyn FitStrategy<T>],
    ) -> Result<EvaluationResult<T>, RegressError> {
        let mut reports = BTreeMap::new();
        for strategy in strategies {
            let report = self.run(data, *strategy)?;
            info!(
                strategy = strategy.name(),
                mean_val_loss = report.mean_val_loss.to_f64().unwrap_or(f64::NAN),
                mean_fold_secs = report.mean_elapsed.as_secs_f64(),
                "cross-validation complete"
            );
            reports.insert(report.strategy.clone(), report);
        }
        Ok(EvaluationResult { reports })
    }
}
