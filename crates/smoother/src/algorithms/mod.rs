//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the single-pass smoothing operators, one module per
//! algorithm. Every operator maps a series to a new series of the same
//! length and x-values; none of them can fail. Degenerate inputs (length
//! ≤ 1, zero-weight windows, singular local fits) are recovered in place.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Edge-preserving bilateral average.
pub mod bilateral;

/// Gaussian kernel convolution.
pub mod convolution;

/// First-order exponential smoothing.
pub mod exponential;

/// Locally estimated scatterplot smoothing.
pub mod loess;

/// Simple moving average.
pub mod moving_average;

/// Savitzky-Golay polynomial filtering.
pub mod savitzky_golay;

/// Exponential-decay weighted window average.
pub mod window_average;

// ============================================================================
// Per-Index Evaluation
// ============================================================================

// Evaluate `f` at every index in `0..n`, collecting in index order.
//
// Each output sample of a pass depends only on the previous pass's full
// series, so the windowed operators fan this loop out over rayon when the
// `parallel` feature is enabled. Output is identical either way.
#[cfg(feature = "parallel")]
pub(crate) fn map_indices<T, F>(n: usize, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Send + Sync,
{
    (0..n).into_par_iter().map(f).collect()
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn map_indices<T, F>(n: usize, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Send + Sync,
{
    (0..n).map(f).collect()
}
