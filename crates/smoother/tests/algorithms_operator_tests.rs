#![cfg(feature = "dev")]
//! Tests for the single-pass smoothing operators.
//!
//! These tests pin the documented operator semantics at the function
//! level, including the two deliberately preserved quirks: the LOESS
//! series-wide weight normalization and the Savitzky-Golay truncated-mean
//! borders.
//!
//! ## Test Organization
//!
//! 1. **LOESS** - global normalization, parameter clamping
//! 2. **Savitzky-Golay** - window shaping, order fallback
//! 3. **Windowed Averages** - weighting and fallback behavior
//! 4. **Convolution** - boundary renormalization

use approx::assert_relative_eq;

use smoother::internals::algorithms::bilateral::bilateral_average;
use smoother::internals::algorithms::convolution::gaussian_convolution;
use smoother::internals::algorithms::loess::loess;
use smoother::internals::algorithms::moving_average::moving_average;
use smoother::internals::algorithms::savitzky_golay::savitzky_golay;
use smoother::internals::algorithms::window_average::weighted_window_average;
use smoother::internals::primitives::series::Series;

// ============================================================================
// Helpers
// ============================================================================

fn fixture() -> Series<f64> {
    Series::from_columns(
        (0..10).map(|i| i as f64).collect(),
        vec![1.0, 3.0, 2.0, 5.0, 4.0, 6.0, 5.5, 7.0, 8.0, 7.5],
    )
    .unwrap()
}

// ============================================================================
// LOESS
// ============================================================================

/// Tri-cubic weights are normalized by the maximum distance over the
/// whole series, not the selected neighborhood. These values differ from
/// canonical LOESS (which would return the local fits 1.0 / 4.0 / 7.5
/// here) and pin the preserved behavior.
#[test]
fn loess_weighs_against_global_max_distance() {
    let series = fixture();

    let linear = loess(&series, 0.3, 1);
    assert_relative_eq!(linear.y()[0], 1.495_854_328_890_663_4, epsilon = 1e-9);
    assert_relative_eq!(linear.y()[4], 4.991_935_832_107_982, epsilon = 1e-9);
    assert_relative_eq!(linear.y()[9], 7.747_927_164_445_332, epsilon = 1e-9);

    let quadratic = loess(&series, 0.5, 2);
    assert_relative_eq!(quadratic.y()[0], 1.133_726_200_761_971_7, epsilon = 1e-9);
    assert_relative_eq!(quadratic.y()[4], 5.053_083_831_313_141, epsilon = 1e-9);
    assert_relative_eq!(quadratic.y()[9], 7.806_992_739_528_736, epsilon = 1e-9);
}

/// Span clamps to [0.1, 1.0] and degree clamps to [1, 2].
#[test]
fn loess_clamps_span_and_degree() {
    let series = fixture();

    assert_eq!(loess(&series, 5.0, 2), loess(&series, 1.0, 2));
    assert_eq!(loess(&series, -0.2, 1), loess(&series, 0.1, 1));
    assert_eq!(loess(&series, 0.4, 0), loess(&series, 0.4, 1));
    assert_eq!(loess(&series, 0.4, 9), loess(&series, 0.4, 2));
}

/// A full-span quadratic LOESS on exact quadratic data reproduces it.
#[test]
fn loess_full_span_recovers_quadratic_data() {
    let series = Series::from_pairs((0..8).map(|i| {
        let x = i as f64;
        (x, 2.0 * x * x - 3.0 * x + 1.0)
    }));

    let smoothed = loess(&series, 1.0, 2);
    for (got, want) in smoothed.y().iter().zip(series.y()) {
        assert_relative_eq!(*got, *want, epsilon = 1e-8);
    }
}

// ============================================================================
// Savitzky-Golay
// ============================================================================

/// Border samples get truncated means while interior samples get fits;
/// the method changes discontinuously at the half-window boundary.
#[test]
fn savitzky_golay_border_points_use_truncated_means() {
    let series = Series::from_pairs((0..5).map(|i| (i as f64, (i * i) as f64)));
    let smoothed = savitzky_golay(&series, 5, 2);
    let y = smoothed.y();

    assert_relative_eq!(y[0], 5.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(y[1], 3.5, epsilon = 1e-12);
    assert_relative_eq!(y[2], 4.0, epsilon = 1e-9);
    assert_relative_eq!(y[3], 7.5, epsilon = 1e-12);
    assert_relative_eq!(y[4], 29.0 / 3.0, epsilon = 1e-12);
}

/// Orders above 2 degrade to the windowed mean through the solver
/// fallback (the pipeline presets rely on this with order 3).
#[test]
fn savitzky_golay_high_order_degrades_to_window_mean() {
    let series = fixture();
    let smoothed = savitzky_golay(&series, 5, 3);

    let y = series.y();
    let expected = (y[2] + y[3] + y[4] + y[5] + y[6]) / 5.0;
    assert_relative_eq!(smoothed.y()[4], expected, epsilon = 1e-12);
}

/// Even windows are forced odd before use.
#[test]
fn savitzky_golay_forces_odd_windows() {
    let series = fixture();
    assert_eq!(savitzky_golay(&series, 4, 2), savitzky_golay(&series, 5, 2));
}

// ============================================================================
// Windowed Averages
// ============================================================================

/// With beta = 0 every weight vanishes; the operator returns each sample
/// unchanged instead of dividing by zero.
#[test]
fn window_average_zero_weights_fall_back() {
    let series = fixture();
    let smoothed = weighted_window_average(&series, 5, 0.3, 0.0);
    assert_eq!(smoothed.y(), series.y());
}

/// A window of one point leaves the sample untouched.
#[test]
fn window_average_single_point_windows_pass_through() {
    let series = fixture();
    let smoothed = weighted_window_average(&series, 1, 0.3, 0.7);
    assert_eq!(smoothed.y(), series.y());
}

/// The bilateral average with a huge value sigma converges to a purely
/// spatial weighting; with a tiny one it is nearly the identity.
#[test]
fn bilateral_value_sigma_controls_adaptivity() {
    let series = fixture();

    let near_identity = bilateral_average(&series, 5, 2.0, 1e-6);
    for (got, want) in near_identity.y().iter().zip(series.y()) {
        assert_relative_eq!(*got, *want, epsilon = 1e-9);
    }

    // A permissive value sigma smooths more than a strict one.
    let strict = bilateral_average(&series, 5, 2.0, 0.5);
    let permissive = bilateral_average(&series, 5, 2.0, 50.0);
    let roughness = |s: &Series<f64>| {
        s.y()
            .windows(2)
            .map(|w| (w[1] - w[0]).abs())
            .sum::<f64>()
    };
    assert!(roughness(&permissive) < roughness(&strict));
}

/// Moving-average windows clip to the series when oversized.
#[test]
fn moving_average_oversized_window_is_global_mean_at_center() {
    let series = fixture();
    let smoothed = moving_average(&series, 99);

    let mean = series.y().iter().sum::<f64>() / series.len() as f64;
    // With the window clipped to n, the middle sample sees every point.
    assert_relative_eq!(smoothed.y()[5], mean, epsilon = 1e-12);
}

// ============================================================================
// Convolution
// ============================================================================

/// Interior samples are the exact kernel-weighted sums; edge samples are
/// renormalized over the in-bounds taps (never zero-padded).
#[test]
fn gaussian_convolution_renormalizes_at_edges() {
    let series = fixture();
    let smoothed = gaussian_convolution(&series, 5, 1.0);
    let y = series.y();

    // Build the same kernel the operator uses.
    let kernel: Vec<f64> = (-2i32..=2)
        .map(|d| (-(d * d) as f64 / 2.0).exp())
        .collect();
    let total: f64 = kernel.iter().sum();
    let kernel: Vec<f64> = kernel.iter().map(|w| w / total).collect();

    // Interior: full kernel over the window centered at index 2.
    let interior: f64 = (0..5).map(|k| kernel[k] * y[k]).sum();
    assert_relative_eq!(smoothed.y()[2], interior, epsilon = 1e-12);

    // Left edge: only the in-bounds taps, renormalized.
    let partial: f64 = (2..5).map(|k| kernel[k] * y[k - 2]).sum();
    let partial_weight: f64 = kernel[2..5].iter().sum();
    assert_relative_eq!(smoothed.y()[0], partial / partial_weight, epsilon = 1e-12);
}

/// Convolving a constant series returns it exactly, edges included.
#[test]
fn gaussian_convolution_preserves_constants() {
    let series = Series::from_pairs((0..9).map(|i| (i as f64, 42.0)));
    let smoothed = gaussian_convolution(&series, 11, 2.0);

    for &v in smoothed.y() {
        assert_relative_eq!(v, 42.0, epsilon = 1e-12);
    }
}
