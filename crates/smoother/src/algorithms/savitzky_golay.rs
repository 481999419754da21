//! Savitzky-Golay polynomial filtering.
//!
//! ## Purpose
//!
//! Interior samples are replaced by the value at the center of an
//! unweighted local polynomial fit over index-centered coordinates.
//! Because the abscissae are the window offsets, the same centered
//! coordinate vector serves every interior window.
//!
//! ## Design notes
//!
//! * **Window shaping**: The window is forced odd, clamped to the series
//!   length, then raised to at least `order + 1` points, in that order.
//! * **Borders**: Samples within a half-window of either edge get the plain
//!   arithmetic mean of their truncated window, not a polynomial fit. The
//!   smoothing method therefore changes discontinuously at the
//!   border/interior boundary.
//! * **High orders**: Orders above 2 degrade to the windowed mean through
//!   the solver's degree fallback.
//!
//! ## Invariants
//!
//! * Output length and x-values match the input.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::map_indices;
use crate::math::polyfit::fit_polynomial;
use crate::primitives::series::Series;
use crate::primitives::window::Window;

/// Smooth a series with a Savitzky-Golay filter of the given window and
/// polynomial order.
pub fn savitzky_golay<T>(series: &Series<T>, window_size: usize, order: usize) -> Series<T>
where
    T: Float + Send + Sync,
{
    let n = series.len();
    if n <= 1 {
        return series.clone();
    }

    let mut width = Window::force_odd(window_size);
    width = Window::clamped_size(width, n);
    width = usize::max(width, order + 1);
    let half = width / 2;

    // Index-centered abscissae, shared by every interior window.
    let centered: Vec<T> = (0..width)
        .map(|j| T::from(j as isize - half as isize).unwrap())
        .collect();

    let y = series.y();
    let smoothed = map_indices(n, |i| {
        if i < half || i + half >= n {
            // Border sample: mean of the truncated window.
            let left = i.saturating_sub(half);
            let right = usize::min(i + half, n - 1);
            let mut sum = T::zero();
            for j in left..=right {
                sum = sum + y[j];
            }
            sum / T::from(right - left + 1).unwrap()
        } else {
            let start = i - half;
            fit_polynomial(&centered, &y[start..start + width], None, order).evaluate(T::zero())
        }
    });

    series.with_y(smoothed)
}
