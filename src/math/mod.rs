//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical building blocks:
//! - Error metrics (MAE, RMSE, weighted MSE)
//! - Normal-equation assembly and solving
//! - Adam moment estimates
//!
//! These have no knowledge of classes, folds or strategies.
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
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Regression error metrics.
pub mod metrics;

/// Linear algebra backend (nalgebra).
pub mod linalg;

/// Adam optimizer state.
pub mod adam;
