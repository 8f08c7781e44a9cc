//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer runs the regression strategies:
//! - Parameter and data validation
//! - The epoch loop with best-snapshot tracking
//! - The concrete strategies behind `FitStrategy`
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input validation.
pub mod validator;

/// Epoch loop and training configuration.
pub mod trainer;

/// Concrete fitting strategies.
pub mod strategies;
