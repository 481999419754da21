//! Locally estimated scatterplot smoothing (LOESS).
//!
//! ## Purpose
//!
//! For each sample, the `ceil(span * n)` nearest neighbors *by x-distance*
//! are fitted with a tri-cubic-weighted polynomial on x-centered
//! coordinates, and the fit is evaluated at the sample. This is the only
//! operator whose neighborhood is defined by x-distance rather than index
//! distance.
//!
//! ## Design notes
//!
//! * **Global normalization**: Tri-cubic weights are normalized by the
//!   maximum distance across the *entire* series, not the neighborhood
//!   radius. Effective bandwidth is therefore wider than canonical LOESS;
//!   the behavior is deliberate and pinned by tests.
//! * **Clamping**: `span` is clamped to [0.1, 1.0] and `degree` to [1, 2].
//! * **Cost**: Every point ranks all n distances, so a pass is
//!   O(n² log n).
//!
//! ## Invariants
//!
//! * Output length and x-values match the input.
//! * Neighbor ranking is a stable sort; ties keep their index order, so
//!   repeated runs are bit-identical.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::map_indices;
use crate::math::kernel::tricube_weight;
use crate::math::polyfit::fit_polynomial;
use crate::primitives::series::Series;

/// Lower clamp of the span fraction.
const SPAN_MIN: f64 = 0.1;

/// Upper clamp of the span fraction.
const SPAN_MAX: f64 = 1.0;

/// Smooth a series with LOESS at the given span fraction and polynomial
/// degree.
pub fn loess<T>(series: &Series<T>, span: T, degree: usize) -> Series<T>
where
    T: Float + Send + Sync,
{
    let n = series.len();
    if n <= 1 {
        return series.clone();
    }

    let span = span
        .max(T::from(SPAN_MIN).unwrap())
        .min(T::from(SPAN_MAX).unwrap());
    let degree = degree.clamp(1, 2);

    // Neighborhood size from the span fraction.
    let window_size = (span * T::from(n).unwrap())
        .ceil()
        .to_usize()
        .unwrap_or(n)
        .clamp(1, n);

    let x = series.x();
    let y = series.y();
    let smoothed = map_indices(n, |i| fit_at(x, y, i, window_size, degree));

    series.with_y(smoothed)
}

/// Fit the neighborhood of `center` and evaluate at its x-position.
fn fit_at<T: Float>(x: &[T], y: &[T], center: usize, window_size: usize, degree: usize) -> T {
    let n = x.len();
    let x_center = x[center];

    // Distance from the center to every point, and the series-wide maximum.
    let distances: Vec<T> = x.iter().map(|&xj| (xj - x_center).abs()).collect();
    let max_distance = distances.iter().fold(T::zero(), |acc, &d| acc.max(d));

    // Rank every point by distance (stable, so ties keep index order).
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        distances[a]
            .partial_cmp(&distances[b])
            .unwrap_or(Ordering::Equal)
    });

    // Tri-cubic weights over the nearest neighbors, normalized by the
    // series-wide maximum distance.
    let denominator = if max_distance > T::zero() {
        max_distance
    } else {
        T::one()
    };

    let mut xs = Vec::with_capacity(window_size);
    let mut ys = Vec::with_capacity(window_size);
    let mut ws = Vec::with_capacity(window_size);
    for &idx in &order[..window_size] {
        xs.push(x[idx] - x_center);
        ys.push(y[idx]);
        ws.push(tricube_weight(distances[idx] / denominator));
    }

    fit_polynomial(&xs, &ys, Some(&ws), degree).evaluate(T::zero())
}
