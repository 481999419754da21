#![cfg(feature = "dev")]
//! Tests for the kernel weight functions.
//!
//! These tests verify the per-neighbor weighting schemes the operators are
//! built on:
//! - Exponential decay with center emphasis
//! - Gaussian spatial and value-similarity terms
//! - The tri-cubic LOESS profile
//! - The normalized Gaussian convolution kernel
//!
//! ## Test Organization
//!
//! 1. **Exponential Weights** - decay rate, intensity, center emphasis
//! 2. **Gaussian & Bilateral Weights** - falloff, symmetry, similarity term
//! 3. **Tri-cubic Weights** - endpoint and midpoint values
//! 4. **Convolution Kernel** - normalization, shape, odd-length forcing

use approx::assert_relative_eq;

use smoother::internals::math::kernel::{
    bilateral_weight, exponential_weight, gaussian_weight, tricube_weight, Kernel,
};

// ============================================================================
// Exponential Weights
// ============================================================================

/// The center sample gets `beta * 1.5`; a neighbor at distance d gets
/// `exp(-alpha * d) * beta`.
#[test]
fn exponential_weight_values() {
    let alpha = 0.3f64;
    let beta = 0.7f64;

    // Center emphasis.
    assert_relative_eq!(
        exponential_weight(4, 4, alpha, beta),
        beta * 1.5,
        epsilon = 1e-12
    );

    // One step away.
    assert_relative_eq!(
        exponential_weight(4, 5, alpha, beta),
        (-alpha).exp() * beta,
        epsilon = 1e-12
    );

    // Three steps away.
    assert_relative_eq!(
        exponential_weight(4, 7, alpha, beta),
        (-3.0 * alpha).exp() * beta,
        epsilon = 1e-12
    );
}

/// The exponential weight depends only on |i - j|.
#[test]
fn exponential_weight_is_symmetric() {
    let left = exponential_weight(2, 6, 0.4f64, 0.7);
    let right = exponential_weight(6, 2, 0.4f64, 0.7);
    assert_relative_eq!(left, right, epsilon = 1e-12);
}

/// Weights decrease monotonically with distance.
#[test]
fn exponential_weight_decays_with_distance() {
    let mut previous = exponential_weight(0, 1, 0.3f64, 0.7);
    for j in 2..8 {
        let current = exponential_weight(0, j, 0.3f64, 0.7);
        assert!(current < previous, "weight should decay at distance {j}");
        previous = current;
    }
}

// ============================================================================
// Gaussian & Bilateral Weights
// ============================================================================

/// Gaussian weight is 1 at distance zero and falls off symmetrically.
#[test]
fn gaussian_weight_falloff() {
    assert_relative_eq!(gaussian_weight(3, 3, 2.0f64), 1.0, epsilon = 1e-12);

    let d1 = gaussian_weight(3, 4, 2.0f64);
    let d2 = gaussian_weight(3, 5, 2.0f64);
    assert!(d1 < 1.0 && d2 < d1);

    assert_relative_eq!(
        gaussian_weight(3, 5, 2.0f64),
        gaussian_weight(5, 3, 2.0f64),
        epsilon = 1e-12
    );

    // exp(-d^2 / (2 sigma^2)) at d = 2, sigma = 2.
    assert_relative_eq!(d2, (-0.5f64).exp(), epsilon = 1e-12);
}

/// With identical y-values the bilateral weight reduces to the spatial
/// term; a value gap shrinks it.
#[test]
fn bilateral_weight_tracks_value_similarity() {
    let spatial = gaussian_weight(0, 2, 2.0f64);

    let flat = bilateral_weight(0, 2, 2.0f64, 1.0, 5.0, 5.0);
    assert_relative_eq!(flat, spatial, epsilon = 1e-12);

    let stepped = bilateral_weight(0, 2, 2.0f64, 1.0, 5.0, 9.0);
    assert!(stepped < flat);

    // The value term itself: exp(-(4^2) / 2) at value_sigma = 1.
    assert_relative_eq!(stepped, spatial * (-8.0f64).exp(), epsilon = 1e-12);
}

// ============================================================================
// Tri-cubic Weights
// ============================================================================

/// Tri-cubic endpoints and midpoint: full weight at the center, zero at
/// the normalized boundary.
#[test]
fn tricube_weight_profile() {
    assert_relative_eq!(tricube_weight(0.0f64), 1.0, epsilon = 1e-12);
    assert_relative_eq!(tricube_weight(1.0f64), 0.0, epsilon = 1e-12);
    assert_relative_eq!(tricube_weight(0.5f64), 0.669_921_875, epsilon = 1e-12);
}

// ============================================================================
// Convolution Kernel
// ============================================================================

/// Kernel weights sum to 1.0 within 1e-9 for a range of shapes.
#[test]
fn gaussian_kernel_is_normalized() {
    for (size, sigma) in [(11usize, 2.0f64), (5, 0.8), (7, 3.5), (1, 1.0), (21, 0.4)] {
        let kernel = Kernel::gaussian(size, sigma);
        let sum: f64 = kernel.weights().iter().sum();
        assert_relative_eq!(sum, 1.0, epsilon = 1e-9);
    }
}

/// Even sizes are forced up to the next odd length.
#[test]
fn gaussian_kernel_forces_odd_length() {
    assert_eq!(Kernel::gaussian(4, 1.0f64).len(), 5);
    assert_eq!(Kernel::gaussian(5, 1.0f64).len(), 5);
    assert_eq!(Kernel::gaussian(0, 1.0f64).len(), 1);
    assert!(!Kernel::gaussian(3, 1.0f64).is_empty());
}

/// The kernel is symmetric about its center tap, which carries the
/// largest weight.
#[test]
fn gaussian_kernel_shape() {
    let kernel = Kernel::gaussian(9, 1.5f64);
    let taps = kernel.weights();
    let half = kernel.half();

    assert_eq!(half, 4);
    for offset in 1..=half {
        assert_relative_eq!(taps[half - offset], taps[half + offset], epsilon = 1e-12);
        assert!(taps[half] > taps[half + offset]);
    }
}

/// A zero sigma degrades to a near-delta kernel instead of NaN.
#[test]
fn gaussian_kernel_survives_zero_sigma() {
    let kernel = Kernel::gaussian(5, 0.0f64);
    let taps = kernel.weights();

    assert!(taps.iter().all(|w| w.is_finite()));
    assert_relative_eq!(taps[kernel.half()], 1.0, epsilon = 1e-12);
}
