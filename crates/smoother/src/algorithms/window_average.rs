//! Exponential-decay weighted window average.
//!
//! ## Purpose
//!
//! The classic adaptive weighted average: each output sample is the
//! weighted mean of its window, with weights decaying exponentially in
//! index distance and the center sample emphasized. `alpha` controls how
//! quickly influence falls off with distance; `beta` scales the overall
//! intensity.
//!
//! ## Invariants
//!
//! * Output length and x-values match the input.
//! * A series of length ≤ 1, or a single-point window, passes through
//!   unchanged.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::map_indices;
use crate::math::kernel::exponential_weight;
use crate::primitives::series::Series;
use crate::primitives::window::Window;

/// Smooth a series with the exponential-decay weighted window average.
pub fn weighted_window_average<T>(
    series: &Series<T>,
    window_size: usize,
    alpha: T,
    beta: T,
) -> Series<T>
where
    T: Float + Send + Sync,
{
    let n = series.len();
    if n <= 1 {
        return series.clone();
    }

    let y = series.y();
    let smoothed = map_indices(n, |i| {
        let window = Window::centered(i, window_size, n);
        if window.is_single() {
            return y[i];
        }

        let mut sum = T::zero();
        let mut total_weight = T::zero();
        for j in window.left..=window.right {
            let weight = exponential_weight(i, j, alpha, beta);
            sum = sum + y[j] * weight;
            total_weight = total_weight + weight;
        }

        if total_weight > T::zero() {
            sum / total_weight
        } else {
            y[i]
        }
    });

    series.with_y(smoothed)
}
