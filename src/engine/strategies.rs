//! Concrete regression strategies.
//!
//! ## Purpose
//!
//! This module implements [`FitStrategy`] for the three ways of fitting a
//! class-weighted linear model: Adam from zero, closed-form least squares and
//! Adam from a randomly initialised dense unit.
//!
//! ## Design notes
//!
//! * **Enum + config**: [`RegressionStrategy`] names the method;
//!   [`ConfiguredStrategy`] binds it to validated hyperparameters.
//! * **One regressor type**: Both iterative variants run the same
//!   `WeightedLinearRegressor` through the same `Trainer`; they differ only in
//!   their starting parameters.
//! * **Deterministic init**: The dense unit's kernel is drawn from a seeded RNG.
//!
//! ## Key concepts
//!
//! * **Glorot uniform**: Kernel values in `[-limit, limit)` with
//!   `limit = sqrt(6 / (fan_in + fan_out))`, `fan_out = 1`; bias starts at zero.
//!
//! ## Invariants
//!
//! * Every strategy recomputes class weights from the training labels it receives.
//!
//! ## Non-goals
//!
//! * This module does not score the fitted models.

use num_traits::Float;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::algorithms::least_squares::fit_weighted_least_squares;
use crate::algorithms::regressor::WeightedLinearRegressor;
use crate::algorithms::strategy::{FitReport, FitStrategy};
use crate::algorithms::weights::ClassWeights;
use crate::engine::trainer::{Trainer, TrainingConfig};
use crate::math::linalg::FloatLinalg;
use crate::primitives::dataset::Dataset;
use crate::primitives::errors::RegressError;

// ============================================================================
// Strategy Kind
// ============================================================================

/// Method used to fit the linear model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RegressionStrategy {
    /// Adam on the weighted loss, starting from zero parameters.
    #[default]
    Iterative,

    /// Closed-form weighted least squares with intercept.
    OrdinaryLeastSquares,

    /// Adam on the weighted loss, starting from a Glorot-uniform kernel.
    DenseLayer,
}

impl RegressionStrategy {
    /// Every strategy, in reporting order.
    pub const ALL: [Self; 3] = [Self::Iterative, Self::OrdinaryLeastSquares, Self::DenseLayer];

    /// Name used as the key in evaluation results.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Iterative => "iterative_weighted",
            Self::OrdinaryLeastSquares => "ordinary_least_squares",
            Self::DenseLayer => "dense_layer",
        }
    }

    /// Bind this strategy to a validated configuration.
    pub fn with_config<T: Float>(
        self,
        config: TrainingConfig<T>,
    ) -> Result<ConfiguredStrategy<T>, RegressError> {
        ConfiguredStrategy::new(self, config)
    }
}

// ============================================================================
// Configured Strategy
// ============================================================================

/// A strategy together with the hyperparameters it runs with.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfiguredStrategy<T> {
    kind: RegressionStrategy,
    config: TrainingConfig<T>,
}

impl<T: Float> ConfiguredStrategy<T> {
    /// Validate `config` and bind it to `kind`.
    pub fn new(kind: RegressionStrategy, config: TrainingConfig<T>) -> Result<Self, RegressError> {
        config.validate()?;
        Ok(Self { kind, config })
    }

    /// The strategy kind.
    pub fn kind(&self) -> RegressionStrategy {
        self.kind
    }

    /// The bound configuration.
    pub fn config(&self) -> &TrainingConfig<T> {
        &self.config
    }

    fn fit_iterative(
        &self,
        regressor: WeightedLinearRegressor<T>,
        train: &Dataset<T>,
        validation: Option<&Dataset<T>>,
    ) -> Result<FitReport<T>, RegressError> {
        let outcome = Trainer::new(&self.config).train(regressor, train, validation)?;
        Ok(FitReport {
            model: outcome.regressor.to_model(),
            class_weights: outcome.class_weights,
            history: outcome.history,
            best: outcome.best,
        })
    }
}

impl<T: FloatLinalg> FitStrategy<T> for ConfiguredStrategy<T> {
    fn name(&self) -> &str {
        self.kind.name()
    }

    fn fit(
        &self,
        train: &Dataset<T>,
        validation: Option<&Dataset<T>>,
    ) -> Result<FitReport<T>, RegressError> {
        debug!(
            strategy = self.kind.name(),
            samples = train.len(),
            dimensions = train.dimensions(),
            "fitting"
        );

        match self.kind {
            RegressionStrategy::Iterative => {
                let regressor =
                    WeightedLinearRegressor::new(train.dimensions(), self.config.learning_rate)?;
                self.fit_iterative(regressor, train, validation)
            }
            RegressionStrategy::OrdinaryLeastSquares => {
                let class_weights =
                    ClassWeights::balanced(train.labels(), self.config.num_classes)?;
                let sample_weights = class_weights.lookup(train.labels())?;
                let model = fit_weighted_least_squares(train, &sample_weights)?;
                Ok(FitReport {
                    model,
                    class_weights,
                    history: Vec::new(),
                    best: None,
                })
            }
            RegressionStrategy::DenseLayer => {
                let params = glorot_uniform_params(train.dimensions(), self.config.seed);
                let regressor =
                    WeightedLinearRegressor::with_params(params, self.config.learning_rate)?;
                self.fit_iterative(regressor, train, validation)
            }
        }
    }
}

// ============================================================================
// Initialisation
// ============================================================================

/// Bias-last parameters for a single dense unit: Glorot-uniform kernel, zero bias.
pub fn glorot_uniform_params<T: Float>(dimensions: usize, seed: u64) -> Vec<T> {
    let limit = (6.0 / (dimensions as f64 + 1.0)).sqrt();
    let mut rng = StdRng::seed_from_u64(seed);

    let mut params: Vec<T> = (0..dimensions)
        .map(|_| T::from(rng.random_range(-limit..limit)).unwrap_or_else(T::zero))
        .collect();
    params.push(T::zero());
    params
}
