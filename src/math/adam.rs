//! Adam moment estimates for first-order parameter updates.
//!
//! ## Purpose
//!
//! This module holds the per-parameter first and second moment estimates of
//! the Adam update rule and applies one bias-corrected step to a parameter
//! vector given its gradient.
//!
//! ## Design notes
//!
//! * **Owned state**: One `Adam` per parameter vector, reset at construction.
//! * **Folded bias correction**: The step size is
//!   `lr * sqrt(1 - beta2^t) / (1 - beta1^t)` and epsilon is added to the raw
//!   `sqrt(v)`.
//!
//! ## Invariants
//!
//! * Moment vectors have the same length as the parameter vector.
//! * The step counter starts at zero and increases by one per update.

use num_traits::Float;

/// Exponential decay rate for the first moment.
pub const DEFAULT_BETA1: f64 = 0.9;

/// Exponential decay rate for the second moment.
pub const DEFAULT_BETA2: f64 = 0.999;

/// Denominator fuzz term.
pub const DEFAULT_EPSILON: f64 = 1e-7;

/// Adam optimizer state for a single parameter vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Adam<T> {
    learning_rate: T,
    beta1: T,
    beta2: T,
    epsilon: T,
    t: i32,
    m: Vec<T>,
    v: Vec<T>,
}

impl<T: Float> Adam<T> {
    /// Create zeroed moments for `len` parameters with default decay rates.
    pub fn new(len: usize, learning_rate: T) -> Self {
        Self {
            learning_rate,
            beta1: T::from(DEFAULT_BETA1).unwrap_or_else(T::zero),
            beta2: T::from(DEFAULT_BETA2).unwrap_or_else(T::zero),
            epsilon: T::from(DEFAULT_EPSILON).unwrap_or_else(T::epsilon),
            t: 0,
            m: vec![T::zero(); len],
            v: vec![T::zero(); len],
        }
    }

    /// Configured learning rate.
    pub fn learning_rate(&self) -> T {
        self.learning_rate
    }

    /// Number of updates applied so far.
    pub fn step_count(&self) -> usize {
        self.t as usize
    }

    /// Apply one update in place.
    pub fn step(&mut self, params: &mut [T], grads: &[T]) {
        self.t = self.t.saturating_add(1);

        let one = T::one();
        let lr_t = self.learning_rate * (one - self.beta2.powi(self.t)).sqrt()
            / (one - self.beta1.powi(self.t));

        for ((p, &g), (m, v)) in params
            .iter_mut()
            .zip(grads)
            .zip(self.m.iter_mut().zip(self.v.iter_mut()))
        {
            *m = self.beta1 * *m + (one - self.beta1) * g;
            *v = self.beta2 * *v + (one - self.beta2) * g * g;
            *p = *p - lr_t * *m / (v.sqrt() + self.epsilon);
        }
    }
}
