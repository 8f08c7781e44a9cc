//! # balanced-regress — Class-balanced linear regression over ordinal labels
//!
//! Fits linear models that map image feature vectors to a scalar severity
//! score, while compensating for heavily imbalanced severity classes.
//!
//! ## What does it do?
//!
//! Each sample is a feature vector (typically taken from an intermediate layer
//! of a trained convolutional discriminator) labelled with an integer class in
//! `[0, num_classes)`. The label is regressed directly as a number, and every
//! sample's squared error is scaled by a *balanced class weight*:
//!
//! ```text
//! weight[c] = N / (num_classes * count[c])
//! ```
//!
//! so rare classes contribute as much to the loss as common ones.
//!
//! **Three strategies** fit the same model family:
//! - `Iterative`: Adam from zero parameters on the weighted squared error
//! - `OrdinaryLeastSquares`: closed-form weighted least squares with intercept
//! - `DenseLayer`: Adam from a Glorot-uniform initialised single dense unit
//!
//! **Two evaluations** compare them:
//! - Stratified k-fold cross-validation (mean held-out loss and time per fold)
//! - A train/test comparison with MAE, RMSE and a prediction preview
//!
//! ## Quick Start
//!
//! ```rust
//! use balanced_regress::prelude::*;
//!
//! let rows: Vec<Vec<f64>> = vec![
//!     vec![0.10, 1.00], vec![0.30, 0.80], vec![0.20, 1.10], vec![0.40, 0.90], vec![0.15, 1.20],
//!     vec![0.90, 0.20], vec![1.10, 0.10], vec![0.80, 0.30], vec![1.00, 0.40], vec![1.20, 0.15],
//! ];
//! let labels = vec![0, 0, 0, 0, 0, 1, 1, 1, 1, 1];
//! let data = Dataset::from_rows(&rows, labels)?;
//!
//! let experiment = Regression::new()
//!     .num_classes(2)        // Two severity grades
//!     .learning_rate(0.05)   // Adam step size
//!     .epochs(200)           // Full-batch epochs per fit
//!     .num_folds(2)          // Stratified folds
//!     .seed(7)               // Shuffled folds, seeded dense init
//!     .build()?;
//!
//! let result = experiment.cross_validate(&data)?;
//! let (loss, _elapsed) = result.summary("ordinary_least_squares").unwrap();
//! assert!(loss.is_finite());
//!
//! println!("{}", result);
//! # Result::<(), RegressError>::Ok(())
//! ```
//!
//! ```text
//! Cross-validation:
//!   Strategy                      Mean val loss  Mean fold (s)
//!   ----------------------------------------------------------
//!   dense_layer                        0.012345         0.0004
//!   iterative_weighted                 0.010234         0.0004
//!   ordinary_least_squares             0.009876         0.0000
//! ```
//!
//! ### Train/test comparison
//!
//! Features usually come from an external extractor. Wrap it in a
//! [`FeatureSource`](prelude::FeatureSource) and hand it to the experiment:
//!
//! ```rust
//! use balanced_regress::prelude::*;
//!
//! let train = Dataset::from_rows(
//!     &[vec![0.0], vec![1.0], vec![2.0], vec![3.0], vec![4.0], vec![5.0]],
//!     vec![0, 0, 1, 1, 2, 2],
//! )?;
//! let test = Dataset::from_rows(&[vec![0.5], vec![2.5], vec![4.5]], vec![0, 1, 2])?;
//! let source = InMemorySource::new(train, test);
//!
//! let report = Regression::new()
//!     .num_classes(3)
//!     .epochs(100)
//!     .strategies(&[OrdinaryLeastSquares])
//!     .build()?
//!     .compare_from(&source)?;
//!
//! let ols = report.get("ordinary_least_squares").unwrap();
//! assert!(ols.rmse < 0.5);
//! # Result::<(), RegressError>::Ok(())
//! ```
//!
//! ## Logging
//!
//! Progress is reported through `tracing`: per-epoch losses at `TRACE`,
//! per-fold and per-fit events at `DEBUG`, summaries at `INFO` and
//! under-populated classes at `WARN`. Install any subscriber to see them.

#![deny(missing_docs)]

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the error type and the labelled feature matrix.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains regression metrics, weighted normal equations and the Adam update.
mod math;

// Layer 3: Algorithms - core regression algorithms.
//
// Contains balanced class weights, the iterative regressor, closed-form
// least squares and the `FitStrategy` seam.
mod algorithms;

// Layer 4: Evaluation - scoring strategies.
//
// Contains stratified k-fold splitting, cross-validation and the train/test
// comparison harness.
mod evaluation;

// Layer 5: Engine - training orchestration.
//
// Contains validation, the epoch loop and the concrete strategies.
mod engine;

// Layer 6: Adapters - feature sources.
//
// Contains discriminator configurations and the `FeatureSource` trait.
mod adapters;

// High-level fluent API for regression experiments.
//
// Provides the `Regression` builder and the `Experiment` it produces.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use balanced_regress::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        ClassWeights, ComparisonEntry, ComparisonHarness, ComparisonReport, ConfiguredStrategy,
        CrossValidationReport, CrossValidator, Dataset, DiscriminatorConfig, EpochRecord,
        EvaluationResult, Experiment, ExtractorSource, FeatureMatrix, FeatureSource, FitReport,
        FitStrategy, FoldOutcome, InMemorySource, LinearModel, ParameterSnapshot, RegressError,
        RegressionBuilder as Regression, RegressionStrategy,
        RegressionStrategy::{DenseLayer, Iterative, OrdinaryLeastSquares},
        Split, StratifiedKFold, TrainingConfig, WeightedLinearRegressor, compute_class_weights,
        compute_sample_weights,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal evaluation.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal adapters.
    pub mod adapters {
        pub use crate::adapters::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
