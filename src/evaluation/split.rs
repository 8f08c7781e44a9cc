//! Stratified k-fold index partitioning.
//!
//! ## Purpose
//!
//! This module partitions sample indices into `k` folds so that each fold
//! holds roughly the same share of every class as the full dataset.
//!
//! ## Design notes
//!
//! * **Grouping**: Indices are grouped by class (in index order, or shuffled
//!   when a seed is set).
//! * **Round-robin**: Group members are dealt to folds in turn; the dealing
//!   position carries over from one class to the next, so fold sizes differ
//!   by at most one.
//!
//! ## Invariants
//!
//! * Train and validation sets of a fold are disjoint and together cover all indices.
//! * Every index appears in exactly one validation set.
//! * Per fold and class, the count is `floor(n_c / k)` or `ceil(n_c / k)`.
//!
//! ## Non-goals
//!
//! * This module does not build the data subsets (see `Dataset::subset`).

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::warn;

use crate::primitives::errors::RegressError;

/// Train and validation indices of one fold.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FoldSplit {
    /// Zero-based fold index.
    pub fold: usize,
    /// Indices of all other folds, ascending.
    pub train: Vec<usize>,
    /// Indices held out in this fold, ascending.
    pub validation: Vec<usize>,
}

/// Stratified k-fold splitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StratifiedKFold {
    folds: usize,
    seed: Option<u64>,
}

impl StratifiedKFold {
    /// Create a splitter producing `folds` folds without shuffling.
    pub fn new(folds: usize) -> Self {
        Self { folds, seed: None }
    }

    /// Shuffle each class group with this seed before dealing.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of folds.
    pub fn folds(&self) -> usize {
        self.folds
    }

    /// Partition `0..labels.len()` into stratified folds.
    pub fn split(&self, labels: &[usize]) -> Result<Vec<FoldSplit>, RegressError> {
        let n = labels.len();
        let k = self.folds;
        if k < 2 || k > n {
            return Err(RegressError::InvalidFolds {
                folds: k,
                samples: n,
            });
        }

        let num_groups = labels.iter().copied().max().map_or(0, |m| m + 1);
        let mut groups: Vec<Vec<usize>> = vec![Vec::new(); num_groups];
        for (i, &label) in labels.iter().enumerate() {
            groups[label].push(i);
        }

        if let Some(seed) = self.seed {
            let mut rng = StdRng::seed_from_u64(seed);
            for group in groups.iter_mut() {
                group.shuffle(&mut rng);
            }
        }

        for (class, group) in groups.iter().enumerate() {
            if !group.is_empty() && group.len() < k {
                warn!(
                    class,
                    members = group.len(),
                    folds = k,
                    "least populated class has fewer members than folds"
                );
            }
        }

        let mut assignment = vec![0usize; n];
        let mut position = 0usize;
        for group in &groups {
            for &i in group {
                assignment[i] = position % k;
                position += 1;
            }
        }

        Ok((0..k)
            .map(|fold| {
                let (validation, train): (Vec<usize>, Vec<usize>) =
                    (0..n).partition(|&i| assignment[i] == fold);
                FoldSplit {
                    fold,
                    train,
                    validation,
                }
            })
            .collect())
    }
}
