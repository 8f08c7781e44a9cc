//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the regression algorithms:
//! - Balanced class and sample weights
//! - The Adam-trained weighted linear regressor
//! - Closed-form weighted least squares
//! - The strategy interface shared by all of them
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Balanced inverse-frequency class weights.
pub mod weights;

/// Adam-trained weighted linear regressor.
pub mod regressor;

/// Closed-form weighted least squares.
pub mod least_squares;

/// Strategy interface.
pub mod strategy;
