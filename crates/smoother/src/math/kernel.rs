//! Kernel (weight) functions for smoothing.
//!
//! ## Purpose
//!
//! This module provides the per-neighbor weight functions the windowed
//! operators are built on, plus the fixed normalized [`Kernel`] vector used
//! by Gaussian convolution.
//!
//! ## Key concepts
//!
//! * **Exponential decay**: `exp(-alpha * |i - j|) * beta`, with the center
//!   sample emphasized 1.5×.
//! * **Gaussian**: `exp(-(i - j)^2 / (2 sigma^2))` on index distance; also
//!   the spatial term of the bilateral weight.
//! * **Bilateral**: spatial Gaussian × value-similarity Gaussian, so more
//!   similar neighbors contribute more even across flat windows.
//! * **Tri-cubic**: `(1 - u^3)^3` on normalized distance, the LOESS
//!   down-weighting profile.
//!
//! ## Invariants
//!
//! * All weights are non-negative and finite for finite inputs.
//! * [`Kernel`] weights have odd length and sum to 1.0 after normalization.
//!
//! ## Non-goals
//!
//! * This module does not select windows or aggregate values; the operators
//!   own those loops.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::window::Window;

// ============================================================================
// Constants
// ============================================================================

/// Extra factor applied to the center sample's exponential weight.
const CENTER_EMPHASIS: f64 = 1.5;

/// Smallest sigma the Gaussian terms are evaluated with.
///
/// Operators floor their sigma parameters here; a zero bandwidth degrades
/// to a near-delta weighting instead of dividing by zero.
pub const SIGMA_FLOOR: f64 = 1e-12;

// ============================================================================
// Weight Functions
// ============================================================================

/// Distance between two sample indices as a float.
#[inline]
fn index_distance<T: Float>(i: usize, j: usize) -> T {
    T::from(i.abs_diff(j)).unwrap_or_else(T::zero)
}

/// Gaussian falloff `exp(-d^2 / (2 sigma^2))`; the sign of `d` is
/// irrelevant.
#[inline]
fn gaussian_term<T: Float>(distance: T, sigma: T) -> T {
    let two = T::from(2.0).unwrap();
    (-(distance * distance) / (two * sigma * sigma)).exp()
}

/// Exponential-decay weight `exp(-alpha * |i - j|) * beta`.
///
/// The weight at `j == i` is scaled by an extra 1.5× so the sample being
/// smoothed keeps the dominant vote.
#[inline]
pub fn exponential_weight<T: Float>(i: usize, j: usize, alpha: T, beta: T) -> T {
    let weight = (-index_distance::<T>(i, j) * alpha).exp() * beta;
    if j == i {
        weight * T::from(CENTER_EMPHASIS).unwrap()
    } else {
        weight
    }
}

/// Gaussian spatial weight on index distance.
#[inline]
pub fn gaussian_weight<T: Float>(i: usize, j: usize, sigma: T) -> T {
    gaussian_term(index_distance::<T>(i, j), sigma)
}

/// Bilateral weight: spatial proximity × value similarity.
///
/// The spatial term is [`gaussian_weight`] on index distance; the value
/// term is the same falloff on `|yi - yj|`. The product down-weights
/// neighbors that are close in position but far in value, which is what
/// preserves edges.
#[inline]
pub fn bilateral_weight<T: Float>(
    i: usize,
    j: usize,
    spatial_sigma: T,
    value_sigma: T,
    yi: T,
    yj: T,
) -> T {
    gaussian_weight(i, j, spatial_sigma) * gaussian_term((yi - yj).abs(), value_sigma)
}

/// Tri-cubic weight `(1 - u^3)^3` for normalized distance `u` in `[0, 1]`.
#[inline]
pub fn tricube_weight<T: Float>(u: T) -> T {
    let tmp = T::one() - u * u * u;
    tmp * tmp * tmp
}

// ============================================================================
// Convolution Kernel
// ============================================================================

/// A normalized convolution kernel of odd length.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel<T> {
    weights: Vec<T>,
}

impl<T: Float> Kernel<T> {
    /// Build a normalized Gaussian kernel.
    ///
    /// `size` is rounded up to the next odd value (minimum 1) and `sigma`
    /// is floored at [`SIGMA_FLOOR`]. The returned weights sum to 1.0
    /// within floating tolerance.
    pub fn gaussian(size: usize, sigma: T) -> Self {
        let size = Window::force_odd(size.max(1));
        let center = (size / 2) as isize;
        let sigma = sigma.max(T::from(SIGMA_FLOOR).unwrap());

        let mut weights = Vec::with_capacity(size);
        let mut sum = T::zero();
        for i in 0..size {
            let distance = T::from(i as isize - center).unwrap();
            let weight = gaussian_term(distance, sigma);
            sum = sum + weight;
            weights.push(weight);
        }

        // The center tap is always 1, so the sum is never zero.
        for weight in weights.iter_mut() {
            *weight = *weight / sum;
        }

        Self { weights }
    }

    /// Kernel taps, center at `half()`.
    #[inline]
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Number of taps (always odd).
    #[allow(dead_code)]
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Check if the kernel has no taps (never true for constructed kernels).
    #[allow(dead_code)]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Index of the center tap.
    #[inline]
    pub fn half(&self) -> usize {
        self.weights.len() / 2
    }
}
