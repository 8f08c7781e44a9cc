//! Layer 6: Adapters
//!
//! # Purpose
//!
//! This layer connects experiments to where their features come from:
//! - Versioned discriminator configurations
//! - The `FeatureSource` trait and its in-memory and closure-backed sources
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Feature sources.
pub mod source;
