//! Side-by-side comparison of strategies on a fixed train/test split.
//!
//! ## Purpose
//!
//! This module fits every strategy once on the full training set and scores
//! its predictions on a separate test set with MAE, RMSE and the
//! class-weighted squared error.
//!
//! ## Design notes
//!
//! * **No cross-validation**: One fit per strategy.
//! * **Test set as monitor**: The test set is handed to `fit` as the
//!   monitoring set, so iterative strategies record their test loss per epoch.
//! * **Predictions kept**: Full prediction vectors are returned; a preview of
//!   the first rows is available for inspection.
//!
//! ## Invariants
//!
//! * Entries are in the order the strategies were given.
//! * Every prediction vector has one value per test sample.
//!
//! ## Non-goals
//!
//! * This module does not print (the report implements `Display`).

use std::fmt;

use num_traits::Float;
use tracing::info;

use crate::algorithms::regressor::{LinearModel, ParameterSnapshot};
use crate::algorithms::strategy::FitStrategy;
use crate::math::metrics::{
    mean_absolute_error, root_mean_squared_error, weighted_mean_squared_error,
};
use crate::primitives::dataset::Dataset;
use crate::primitives::errors::RegressError;

/// Number of leading test samples shown by [`ComparisonReport::preview`] by default.
pub const DEFAULT_PREVIEW_ROWS: usize = 30;

// ============================================================================
// Results
// ============================================================================

/// Test-set scores of one strategy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonEntry<T> {
    /// Strategy name.
    pub name: String,
    /// Mean absolute error against the test labels.
    pub mae: T,
    /// Root mean squared error against the test labels.
    pub rmse: T,
    /// Class-weighted MSE using the training class weights.
    pub test_loss: T,
    /// One predicted score per test sample.
    pub predictions: Vec<T>,
    /// The fitted model.
    pub model: LinearModel<T>,
    /// Best snapshot seen during training, if the strategy tracks one.
    pub best: Option<ParameterSnapshot<T>>,
}

/// Ground truth and one prediction per strategy for a single test sample.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewRow<T> {
    /// Ground-truth label.
    pub label: usize,
    /// Predictions in strategy order.
    pub scores: Vec<T>,
}

/// Scores of all compared strategies.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonReport<T> {
    labels: Vec<usize>,
    entries: Vec<ComparisonEntry<T>>,
    preview_rows: usize,
}

impl<T: Float> ComparisonReport<T> {
    /// Entries in strategy order.
    pub fn entries(&self) -> &[ComparisonEntry<T>] {
        &self.entries
    }

    /// Entry of a strategy by name.
    pub fn get(&self, name: &str) -> Option<&ComparisonEntry<T>> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Test labels.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// First rows of ground truth next to each strategy's prediction.
    pub fn preview(&self) -> Vec<PreviewRow<T>> {
        self.labels
            .iter()
            .take(self.preview_rows)
            .enumerate()
            .map(|(i, &label)| PreviewRow {
                label,
                scores: self.entries.iter().map(|e| e.predictions[i]).collect(),
            })
            .collect()
    }
}

impl<T: Float + fmt::Display> fmt::Display for ComparisonReport<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Test samples: {}", self.labels.len())?;
        for entry in &self.entries {
            writeln!(
                f,
                "  {:<28} MAE: {:>10.6}  RMSE: {:>10.6}",
                entry.name, entry.mae, entry.rmse
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Predictions:")?;
        write!(f, "  {:>8}", "GT")?;
        for entry in &self.entries {
            write!(f, " {:>28}", entry.name)?;
        }
        writeln!(f)?;
        for row in self.preview() {
            write!(f, "  {:>8}", row.label)?;
            for score in row.scores {
                write!(f, " {:>28.6}", score)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ============================================================================
// Harness
// ============================================================================

/// Fits strategies on a train split and scores them on a test split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonHarness {
    preview_rows: usize,
}

impl Default for ComparisonHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparisonHarness {
    /// Create a harness previewing [`DEFAULT_PREVIEW_ROWS`] rows.
    pub fn new() -> Self {
        Self {
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }

    /// Set how many leading test rows the report previews.
    pub fn preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = rows;
        self
    }

    /// Fit each strategy on `train` and score it on `test`.
    pub fn compare<T: Float>(
        &self,
        strategies: &[&dyn FitStrategy<T>],
        train: &Dataset<T>,
        test: &Dataset<T>,
    ) -> Result<ComparisonReport<T>, RegressError> {
        if test.is_empty() {
            return Err(RegressError::EmptyInput);
        }
        if train.dimensions() != test.dimensions() {
            return Err(RegressError::DimensionMismatch {
                expected: train.dimensions(),
                got: test.dimensions(),
            });
        }

        let targets = test.targets();
        let mut entries = Vec::with_capacity(strategies.len());

        for strategy in strategies {
            let report = strategy.fit(train, Some(test))?;
            let predictions = report.model.predict(test.features())?;
            let weights = report.class_weights.lookup(test.labels())?;

            let entry = ComparisonEntry {
                name: strategy.name().to_string(),
                mae: mean_absolute_error(&targets, &predictions),
                rmse: root_mean_squared_error(&targets, &predictions),
                test_loss: weighted_mean_squared_error(&targets, &predictions, &weights),
                predictions,
                model: report.model,
                best: report.best,
            };

            info!(
                strategy = %entry.name,
                mae = entry.mae.to_f64().unwrap_or(f64::NAN),
                rmse = entry.rmse.to_f64().unwrap_or(f64::NAN),
                "comparison fit complete"
            );
            entries.push(entry);
        }

        Ok(ComparisonReport {
            labels: test.labels().to_vec(),
            entries,
            preview_rows: self.preview_rows,
        })
    }
}
