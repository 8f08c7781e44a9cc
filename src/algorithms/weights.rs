//! Balanced inverse-frequency class weights.
//!
//! ## Purpose
//!
//! This module derives per-class and per-sample weights from a label
//! distribution so that every class contributes the same total weight to a
//! weighted loss, regardless of how many samples it has.
//!
//! ## Design notes
//!
//! * **Formula**: `weight[c] = N / (count[c] * K)`; a uniform distribution yields 1.0 everywhere.
//! * **Strict**: An empty class is an error rather than an infinite weight.
//! * **Reusable table**: [`ClassWeights::lookup`] maps any label vector
//!   (e.g. a validation fold) through weights derived from another subset.
//!
//! ## Key concepts
//!
//! * **Balance**: `weight[c] * count[c] == N / K` for every class.
//! * **Locality**: Weights must be recomputed for each training subset.
//!
//! ## Invariants
//!
//! * All weights are strictly positive and finite.
//! * `counts.len() == weights.len() == num_classes`.
//!
//! ## Non-goals
//!
//! * This module does not smooth or clip weights.

use num_traits::Float;

use crate::primitives::errors::RegressError;

/// Per-class weights together with the class counts they were derived from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassWeights<T> {
    weights: Vec<T>,
    counts: Vec<usize>,
}

impl<T: Float> ClassWeights<T> {
    /// Compute balanced weights for `labels` over `num_classes` classes.
    pub fn balanced(labels: &[usize], num_classes: usize) -> Result<Self, RegressError> {
        let counts = class_counts(labels, num_classes)?;

        if let Some(class) = counts.iter().position(|&c| c == 0) {
            return Err(RegressError::InvalidLabelDistribution { class, num_classes });
        }

        let n = T::from(labels.len()).unwrap_or_else(T::nan);
        let k = T::from(num_classes).unwrap_or_else(T::nan);
        let weights = counts
            .iter()
            .map(|&c| n / (T::from(c).unwrap_or_else(T::nan) * k))
            .collect();

        Ok(Self { weights, counts })
    }

    /// Weight of class `class`.
    #[inline]
    pub fn weight(&self, class: usize) -> T {
        self.weights[class]
    }

    /// All class weights, indexed by class.
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Sample count per class in the weighted subset.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Number of classes.
    pub fn num_classes(&self) -> usize {
        self.weights.len()
    }

    /// Map each label to its class weight.
    pub fn lookup(&self, labels: &[usize]) -> Result<Vec<T>, RegressError> {
        labels
            .iter()
            .map(|&label| {
                self.weights
                    .get(label)
                    .copied()
                    .ok_or(RegressError::LabelOutOfRange {
                        label,
                        num_classes: self.weights.len(),
                    })
            })
            .collect()
    }
}

/// Count samples per class, rejecting labels outside `[0, num_classes)`.
pub fn class_counts(labels: &[usize], num_classes: usize) -> Result<Vec<usize>, RegressError> {
    if num_classes == 0 {
        return Err(RegressError::InvalidClassCount(num_classes));
    }
    if labels.is_empty() {
        return Err(RegressError::EmptyInput);
    }

    let mut counts = vec![0usize; num_classes];
    for &label in labels {
        match counts.get_mut(label) {
            Some(c) => *c += 1,
            None => return Err(RegressError::LabelOutOfRange { label, num_classes }),
        }
    }
    Ok(counts)
}

/// Balanced class weights for `labels`.
pub fn compute_class_weights<T: Float>(
    labels: &[usize],
    num_classes: usize,
) -> Result<ClassWeights<T>, RegressError> {
    ClassWeights::balanced(labels, num_classes)
}

/// Balanced weight of each sample's class, in sample order.
pub fn compute_sample_weights<T: Float>(
    labels: &[usize],
    num_classes: usize,
) -> Result<Vec<T>, RegressError> {
    ClassWeights::balanced(labels, num_classes)?.lookup(labels)
}
