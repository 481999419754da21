//! Simple moving average.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::map_indices;
use crate::primitives::series::Series;
use crate::primitives::window::Window;

/// Smooth a series with the unweighted mean over a clamped window.
///
/// Windows straddling a boundary are truncated, so edge samples average
/// over fewer points rather than padded or reflected ones.
pub fn moving_average<T>(series: &Series<T>, window_size: usize) -> Series<T>
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

        let mut sum = T::zero();
        for j in window.left..=window.right {
            sum = sum + y[j];
        }
        sum / T::from(window.len()).unwrap()
    });

    series.with_y(smoothed)
}
