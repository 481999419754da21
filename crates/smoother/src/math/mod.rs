//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout the
//! smoothing engine:
//! - Kernel functions for distance- and similarity-based weighting
//! - The local polynomial regression solver
//!
//! These are reusable mathematical building blocks with no operator-specific
//! logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Kernel (weight) functions for neighbor weighting.
pub mod kernel;

/// Closed-form local polynomial regression.
pub mod polyfit;
