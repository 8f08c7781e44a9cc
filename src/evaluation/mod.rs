//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer scores regression strategies:
//! - Stratified k-fold partitioning
//! - Cross-validation with per-fold timing
//! - Train/test comparison with MAE and RMSE
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Stratified k-fold partitioning.
pub mod split;

/// Cross-validation.
pub mod cv;

/// Train/test strategy comparison.
pub mod comparison;
