//! Feature matrices and labelled datasets.
//!
//! ## Purpose
//!
//! This module defines the in-memory containers handed over by the feature
//! extraction pipeline: a row-major [`FeatureMatrix`] and a [`Dataset`] that
//! pairs it with integer class labels.
//!
//! ## Design notes
//!
//! * **Row-major**: Features are stored flat, `dimensions` values per sample.
//! * **Checked once**: Shape and finiteness are verified at construction, so
//!   downstream code indexes without re-checking.
//! * **Subsets copy**: Fold views are materialised with [`Dataset::subset`].
//!
//! ## Invariants
//!
//! * `values.len() == rows * dimensions` and `dimensions >= 1`.
//! * Every feature value is finite.
//! * A dataset has exactly one label per feature row.
//!
//! ## Non-goals
//!
//! * This module does not validate labels against a class count (see `algorithms::weights`).

use num_traits::Float;

use crate::primitives::errors::RegressError;

// ============================================================================
// FeatureMatrix
// ============================================================================

/// Dense row-major matrix of per-sample feature vectors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureMatrix<T> {
    values: Vec<T>,
    dimensions: usize,
}

impl<T: Float> FeatureMatrix<T> {
    /// Build a matrix from flat row-major values.
    pub fn new(values: Vec<T>, dimensions: usize) -> Result<Self, RegressError> {
        if dimensions == 0 {
            return Err(RegressError::DimensionMismatch {
                expected: 1,
                got: 0,
            });
        }
        if values.is_empty() {
            return Err(RegressError::EmptyInput);
        }
        if values.len() % dimensions != 0 {
            return Err(RegressError::DimensionMismatch {
                expected: (values.len() / dimensions + 1) * dimensions,
                got: values.len(),
            });
        }
        for (i, v) in values.iter().enumerate() {
            if !v.is_finite() {
                return Err(RegressError::InvalidNumericValue(format!(
                    "features[{}][{}]={}",
                    i / dimensions,
                    i % dimensions,
                    v.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(Self { values, dimensions })
    }

    /// Build a matrix from one vector per sample.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, RegressError> {
        let dimensions = rows.first().map(Vec::len).ok_or(RegressError::EmptyInput)?;
        let mut values = Vec::with_capacity(rows.len() * dimensions);
        for row in rows {
            if row.len() != dimensions {
                return Err(RegressError::DimensionMismatch {
                    expected: dimensions,
                    got: row.len(),
                });
            }
            values.extend_from_slice(row);
        }
        Self::new(values, dimensions)
    }

    /// Number of samples (rows).
    #[inline]
    pub fn rows(&self) -> usize {
        self.values.len() / self.dimensions
    }

    /// Number of features per sample.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Feature vector of sample `i`.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        &self.values[i * self.dimensions..(i + 1) * self.dimensions]
    }

    /// Iterate over feature vectors in sample order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        self.values.chunks_exact(self.dimensions)
    }

    /// Flat row-major storage.
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Copy the rows named by `indices`, in that order.
    pub fn select(&self, indices: &[usize]) -> Self {
        let mut values = Vec::with_capacity(indices.len() * self.dimensions);
        for &i in indices {
            values.extend_from_slice(self.row(i));
        }
        Self {
            values,
            dimensions: self.dimensions,
        }
    }
}

// ============================================================================
// Dataset
// ============================================================================

/// Feature matrix paired with one class label per row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dataset<T> {
    features: FeatureMatrix<T>,
    labels: Vec<usize>,
}

impl<T: Float> Dataset<T> {
    /// Pair a feature matrix with its labels.
    pub fn new(features: FeatureMatrix<T>, labels: Vec<usize>) -> Result<Self, RegressError> {
        if features.rows() != labels.len() {
            return Err(RegressError::DimensionMismatch {
                expected: features.rows(),
                got: labels.len(),
            });
        }
        Ok(Self { features, labels })
    }

    /// Build a dataset from one feature vector per sample.
    pub fn from_rows(rows: &[Vec<T>], labels: Vec<usize>) -> Result<Self, RegressError> {
        Self::new(FeatureMatrix::from_rows(rows)?, labels)
    }

    /// The feature matrix.
    pub fn features(&self) -> &FeatureMatrix<T> {
        &self.features
    }

    /// The class labels.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the dataset has no samples.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of features per sample.
    pub fn dimensions(&self) -> usize {
        self.features.dimensions()
    }

    /// Labels as continuous regression targets.
    pub fn targets(&self) -> Vec<T> {
        self.labels
            .iter()
            .map(|&l| T::from(l).unwrap_or_else(T::nan))
            .collect()
    }

    /// Copy the samples named by `indices`, in that order.
    pub fn subset(&self, indices: &[usize]) -> Self {
        Self {
            features: self.features.select(indices),
            labels: indices.iter().map(|&i| self.labels[i]).collect(),
        }
    }
}
