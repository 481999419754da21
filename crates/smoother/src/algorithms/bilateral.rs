//! Edge-preserving bilateral average.
//!
//! ## Purpose
//!
//! A content-adaptive weighted average. Each neighbor's weight is the
//! product of a spatial Gaussian term on index distance and a
//! value-similarity Gaussian term on `|y[i] - y[j]|`, so neighbors on the
//! far side of a jump contribute almost nothing and the jump survives
//! smoothing.
//!
//! ## Invariants
//!
//! * Output length and x-values match the input.
//! * Zero total window weight falls back to the sample's own value.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::map_indices;
use crate::math::kernel::{bilateral_weight, SIGMA_FLOOR};
use crate::primitives::series::Series;
use crate::primitives::window::Window;

/// Smooth a series with the bilateral (spatial × value) average.
pub fn bilateral_average<T>(
    series: &Series<T>,
    window_size: usize,
    spatial_sigma: T,
    value_sigma: T,
) -> Series<T>
where
    T: Float + Send + Sync,
{
    let n = series.len();
    if n <= 1 {
        return series.clone();
    }

    // The weight functions assume positive bandwidths.
    let floor = T::from(SIGMA_FLOOR).unwrap();
    let spatial_sigma = spatial_sigma.max(floor);
    let value_sigma = value_sigma.max(floor);

    let y = series.y();
    let smoothed = map_indices(n, |i| {
        let window = Window::centered(i, window_size, n);

        let mut sum = T::zero();
        let mut total_weight = T::zero();
        for j in window.left..=window.right {
            let weight = bilateral_weight(i, j, spatial_sigma, value_sigma, y[i], y[j]);
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
