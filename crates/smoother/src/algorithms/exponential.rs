//! First-order exponential smoothing.
//!
//! ## Purpose
//!
//! The classical recurrence `out[i] = alpha * y[i] + (1 - alpha) *
//! out[i - 1]`, seeded with `out[0] = y[0]`. Unlike the windowed operators
//! this is inherently sequential: each output depends on the previous
//! *output*, not the previous input.
//!
//! ## Invariants
//!
//! * `out[0]` equals `y[0]` exactly, for any alpha.
//! * `alpha` is clamped to [0.01, 0.99] before use.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::series::Series;

/// Lower clamp of the smoothing factor.
const ALPHA_MIN: f64 = 0.01;

/// Upper clamp of the smoothing factor.
const ALPHA_MAX: f64 = 0.99;

/// Smooth a series with the first-order exponential recurrence.
pub fn exponential_smoothing<T: Float>(series: &Series<T>, alpha: T) -> Series<T> {
    let n = series.len();
    if n <= 1 {
        return series.clone();
    }

    let alpha = alpha
        .max(T::from(ALPHA_MIN).unwrap())
        .min(T::from(ALPHA_MAX).unwrap());
    let one_minus = T::one() - alpha;

    let y = series.y();
    let mut smoothed = Vec::with_capacity(n);
    smoothed.push(y[0]);
    for i in 1..n {
        let previous = smoothed[i - 1];
        smoothed.push(alpha * y[i] + one_minus * previous);
    }

    series.with_y(smoothed)
}
