//! High-level API for class-balanced regression experiments.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for the training hyperparameters and the set of strategies
//! to evaluate, producing an [`Experiment`] that can cross-validate the
//! strategies or compare them on a train/test split.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated once, when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `Regression::new()`, chained setters, `.build()`.
//! * **Duplicate detection**: Setting a parameter twice is reported at build time.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`RegressionBuilder`] via `Regression::new()`.
//! 2. Chain configuration methods (`.learning_rate()`, `.epochs()`, etc.).
//! 3. Call `.build()` to obtain an [`Experiment`].

use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;

// Publicly re-exported types
pub use crate::adapters::source::{
    DiscriminatorConfig, ExtractorSource, FeatureSource, InMemorySource, Split,
};
pub use crate::algorithms::regressor::{LinearModel, ParameterSnapshot, WeightedLinearRegressor};
pub use crate::algorithms::strategy::{EpochRecord, FitReport, FitStrategy};
pub use crate::algorithms::weights::{ClassWeights, compute_class_weights, compute_sample_weights};
pub use crate::engine::strategies::{ConfiguredStrategy, RegressionStrategy};
pub use crate::engine::trainer::{
    DEFAULT_EPOCHS, DEFAULT_LEARNING_RATE, DEFAULT_NUM_CLASSES, DEFAULT_NUM_FOLDS, Trainer,
    TrainingConfig, TrainingOutcome,
};
pub use crate::evaluation::comparison::{
    ComparisonEntry, ComparisonHarness, ComparisonReport, DEFAULT_PREVIEW_ROWS, PreviewRow,
};
pub use crate::evaluation::cv::{
    CrossValidationReport, CrossValidator, EvaluationResult, FoldOutcome,
};
pub use crate::evaluation::split::{FoldSplit, StratifiedKFold};
pub use crate::primitives::dataset::{Dataset, FeatureMatrix};
pub use crate::primitives::errors::RegressError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a regression experiment.
#[derive(Debug, Clone)]
pub struct RegressionBuilder<T: FloatLinalg> {
    /// Number of label classes (default: 5).
    pub num_classes: Option<usize>,

    /// Adam learning rate (default: 0.1).
    pub learning_rate: Option<T>,

    /// Training epochs for iterative strategies (default: 2000).
    pub epochs: Option<usize>,

    /// Folds for cross-validation (default: 5).
    pub num_folds: Option<usize>,

    /// Seed for fold shuffling and dense initialisation (default: unshuffled, init seed 0).
    pub seed: Option<u64>,

    /// Restore the lowest-validation-loss snapshot after training (default: false).
    pub restore_best: Option<bool>,

    /// Strategies to evaluate (default: all).
    pub strategies: Option<Vec<RegressionStrategy>>,

    /// Leading test rows shown in comparison previews (default: 30).
    pub preview_rows: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg> Default for RegressionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> RegressionBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            num_classes: None,
            learning_rate: None,
            epochs: None,
            num_folds: None,
            seed: None,
            restore_best: None,
            strategies: None,
            preview_rows: None,
            duplicate_param: None,
        }
    }

    /// Set the number of label classes.
    pub fn num_classes(mut self, num_classes: usize) -> Self {
        if self.num_classes.is_some() {
            self.duplicate_param = Some("num_classes");
        }
        self.num_classes = Some(num_classes);
        self
    }

    /// Set the Adam learning rate.
    pub fn learning_rate(mut self, learning_rate: T) -> Self {
        if self.learning_rate.is_some() {
            self.duplicate_param = Some("learning_rate");
        }
        self.learning_rate = Some(learning_rate);
        self
    }

    /// Set the number of training epochs.
    pub fn epochs(mut self, epochs: usize) -> Self {
        if self.epochs.is_some() {
            self.duplicate_param = Some("epochs");
        }
        self.epochs = Some(epochs);
        self
    }

    /// Set the number of cross-validation folds.
    pub fn num_folds(mut self, num_folds: usize) -> Self {
        if self.num_folds.is_some() {
            self.duplicate_param = Some("num_folds");
        }
        self.num_folds = Some(num_folds);
        self
    }

    /// Shuffle folds and seed the dense initialisation.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Restore the best validation snapshot at the end of training.
    pub fn restore_best(mut self) -> Self {
        if self.restore_best.is_some() {
            self.duplicate_param = Some("restore_best");
        }
        self.restore_best = Some(true);
        self
    }

    /// Set the strategies to evaluate, in reporting order.
    pub fn strategies(mut self, strategies: &[RegressionStrategy]) -> Self {
        if self.strategies.is_some() {
            self.duplicate_param = Some("strategies");
        }
        self.strategies = Some(strategies.to_vec());
        self
    }

    /// Set how many leading test rows comparison reports preview.
    pub fn preview_rows(mut self, rows: usize) -> Self {
        if self.preview_rows.is_some() {
            self.duplicate_param = Some("preview_rows");
        }
        self.preview_rows = Some(rows);
        self
    }

    /// Validate the configuration and build an experiment.
    pub fn build(self) -> Result<Experiment<T>, RegressError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let defaults = TrainingConfig::<T>::default();
        let config = TrainingConfig {
            num_classes: self.num_classes.unwrap_or(defaults.num_classes),
            learning_rate: self.learning_rate.unwrap_or(defaults.learning_rate),
            epochs: self.epochs.unwrap_or(defaults.epochs),
            seed: self.seed.unwrap_or(defaults.seed),
            restore_best: self.restore_best.unwrap_or(defaults.restore_best),
        };
        config.validate()?;

        let num_folds = self.num_folds.unwrap_or(DEFAULT_NUM_FOLDS);
        Validator::validate_folds(num_folds, usize::MAX)?;

        let strategies = self
            .strategies
            .unwrap_or_else(|| RegressionStrategy::ALL.to_vec())
            .into_iter()
            .map(|kind| ConfiguredStrategy::new(kind, config.clone()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Experiment {
            config,
            num_folds,
            fold_seed: self.seed,
            strategies,
            preview_rows: self.preview_rows.unwrap_or(DEFAULT_PREVIEW_ROWS),
        })
    }
}

// ============================================================================
// Experiment
// ============================================================================

/// A validated configuration with the strategies it evaluates.
#[derive(Debug, Clone)]
pub struct Experiment<T: FloatLinalg> {
    config: TrainingConfig<T>,
    num_folds: usize,
    fold_seed: Option<u64>,
    strategies: Vec<ConfiguredStrategy<T>>,
    preview_rows: usize,
}

impl<T: FloatLinalg> Experiment<T> {
    /// Training hyperparameters shared by all strategies.
    pub fn config(&self) -> &TrainingConfig<T> {
        &self.config
    }

    /// Number of cross-validation folds.
    pub fn num_folds(&self) -> usize {
        self.num_folds
    }

    /// Strategies in reporting order.
    pub fn strategies(&self) -> Vec<RegressionStrategy> {
        self.strategies.iter().map(|s| s.kind()).collect()
    }

    /// Cross-validate every strategy on `data`.
    pub fn cross_validate(&self, data: &Dataset<T>) -> Result<EvaluationResult<T>, RegressError> {
        Validator::validate_dataset(data, self.config.num_classes)?;
        Validator::validate_folds(self.num_folds, data.len())?;

        let mut validator = CrossValidator::new(self.num_folds);
        if let Some(seed) = self.fold_seed {
            validator = validator.seed(seed);
        }
        validator.evaluate_strategies(data, &self.strategy_refs())
    }

    /// Fit every strategy on `train` and score it on `test`.
    pub fn compare(
        &self,
        train: &Dataset<T>,
        test: &Dataset<T>,
    ) -> Result<ComparisonReport<T>, RegressError> {
        Validator::validate_dataset(train, self.config.num_classes)?;
        Validator::validate_dataset(test, self.config.num_classes)?;

        ComparisonHarness::new()
            .preview_rows(self.preview_rows)
            .compare(&self.strategy_refs(), train, test)
    }

    /// Extract both splits from `source` and compare the strategies on them.
    pub fn compare_from<S>(&self, source: &S) -> Result<ComparisonReport<T>, RegressError>
    where
        S: FeatureSource<T> + ?Sized,
    {
        let train = source.extract(Split::Train)?;
        let test = source.extract(Split::Test)?;
        self.compare(&train, &test)
    }

    /// Fit a single strategy with this experiment's configuration.
    pub fn fit(
        &self,
        strategy: RegressionStrategy,
        train: &Dataset<T>,
        validation: Option<&Dataset<T>>,
    ) -> Result<FitReport<T>, RegressError> {
        Validator::validate_dataset(train, self.config.num_classes)?;
        if let Some(v) = validation {
            Validator::validate_dataset(v, self.config.num_classes)?;
        }
        ConfiguredStrategy::new(strategy, self.config.clone())?.fit(train, validation)
    }

    fn strategy_refs(&self) -> Vec<&dyn FitStrategy<T>> {
        self.strategies
            .iter()
            .map(|s| s as &dyn FitStrategy<T>)
            .collect()
    }
}
