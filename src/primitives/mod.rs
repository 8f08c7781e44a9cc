//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental data containers and the crate error type:
//! - Feature matrices and labelled datasets
//! - Error definitions
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types.
pub mod errors;

/// Feature matrices and labelled datasets.
pub mod dataset;
