//! Execution engine for smoothing operations.
//!
//! ## Purpose
//!
//! This module provides the [`SmoothingMethod`] configuration (a tagged
//! selection of one operator and its parameters) and the
//! [`SmoothExecutor`] that applies the chosen operator for a configured
//! number of passes, feeding each pass's output into the next. It also
//! defines the fixed four-stage supersmoothing pipeline.
//!
//! ## Design notes
//!
//! * Dispatch is a pattern match on the method enum, not string comparison.
//! * Passes are strictly sequential; pass k+1 observes the completed output
//!   of pass k. A single iteration is identical to a bare single pass.
//! * Out-of-range operator parameters are clamped inside the operators, so
//!   execution itself can never fail.
//!
//! ## Invariants
//!
//! * Every pass preserves series length and x-values.
//! * Identical input and configuration produce bit-identical output.
//!
//! ## Non-goals
//!
//! * This module does not validate configuration (handled by `validator`).
//! * This module is not a general pipeline DSL; the supersmoothing pipeline
//!   is a fixed convenience preset.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::bilateral::bilateral_average;
use crate::algorithms::convolution::gaussian_convolution;
use crate::algorithms::exponential::exponential_smoothing;
use crate::algorithms::loess::loess;
use crate::algorithms::moving_average::moving_average;
use crate::algorithms::savitzky_golay::savitzky_golay;
use crate::algorithms::window_average::weighted_window_average;
use crate::primitives::series::Series;

// ============================================================================
// Classic Preset Constants
// ============================================================================

/// Window size of the classic weighted-window-average preset.
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Distance-decay rate of the classic preset.
pub const DEFAULT_ALPHA: f64 = 0.3;

/// Overall smoothing intensity of the classic preset.
pub const DEFAULT_BETA: f64 = 0.7;

// ============================================================================
// Method Configuration
// ============================================================================

/// Smoothing operator selection.
///
/// Each variant carries only the parameters its operator needs. Parameters
/// outside their documented bounds are clamped at apply time, never
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SmoothingMethod<T> {
    /// Exponential-decay weighted window average with center emphasis.
    WindowAverage {
        /// Sliding window size (clamped to the series length).
        window_size: usize,
        /// Distance-decay rate.
        alpha: T,
        /// Overall smoothing intensity.
        beta: T,
    },

    /// Edge-preserving bilateral average (spatial × value similarity).
    BilateralAverage {
        /// Sliding window size (clamped to the series length).
        window_size: usize,
        /// Bandwidth of the spatial term, in index units.
        spatial_sigma: T,
        /// Bandwidth of the value-similarity term, in y units.
        value_sigma: T,
    },

    /// Unweighted mean over a sliding window.
    MovingAverage {
        /// Sliding window size (clamped to the series length).
        window_size: usize,
    },

    /// First-order exponential recurrence.
    ExponentialSmoothing {
        /// Smoothing factor, clamped to [0.01, 0.99].
        alpha: T,
    },

    /// Local polynomial least-squares filter.
    SavitzkyGolay {
        /// Window size (forced odd, clamped, raised to at least order + 1).
        window_size: usize,
        /// Polynomial order; orders above 2 degrade to the windowed mean.
        order: usize,
    },

    /// Convolution with a fixed normalized Gaussian kernel.
    GaussianConvolution {
        /// Kernel size (forced odd).
        window_size: usize,
        /// Kernel standard deviation, in index units.
        sigma: T,
    },

    /// Nearest-neighbor tri-cubic weighted regression by x-distance.
    Loess {
        /// Fraction of the series per local fit, clamped to [0.1, 1.0].
        span: T,
        /// Polynomial degree, clamped to [1, 2].
        degree: usize,
    },
}

impl<T> SmoothingMethod<T> {
    /// Get the name of the smoothing method.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            SmoothingMethod::WindowAverage { .. } => "WindowAverage",
            SmoothingMethod::BilateralAverage { .. } => "BilateralAverage",
            SmoothingMethod::MovingAverage { .. } => "MovingAverage",
            SmoothingMethod::ExponentialSmoothing { .. } => "ExponentialSmoothing",
            SmoothingMethod::SavitzkyGolay { .. } => "SavitzkyGolay",
            SmoothingMethod::GaussianConvolution { .. } => "GaussianConvolution",
            SmoothingMethod::Loess { .. } => "Loess",
        }
    }
}

impl<T: Float> Default for SmoothingMethod<T> {
    /// The classic preset: weighted window average with window 5,
    /// alpha 0.3, beta 0.7.
    fn default() -> Self {
        SmoothingMethod::WindowAverage {
            window_size: DEFAULT_WINDOW_SIZE,
            alpha: T::from(DEFAULT_ALPHA).unwrap(),
            beta: T::from(DEFAULT_BETA).unwrap(),
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Applies a configured smoothing method for a number of passes.
#[derive(Debug, Clone)]
pub struct SmoothExecutor<T> {
    /// Selected smoothing method.
    pub method: SmoothingMethod<T>,

    /// Number of passes; each pass consumes the previous pass's output.
    pub iterations: usize,
}

impl<T: Float + Send + Sync> SmoothExecutor<T> {
    /// Create an executor for a single pass of `method`.
    pub fn new(method: SmoothingMethod<T>) -> Self {
        Self {
            method,
            iterations: 1,
        }
    }

    /// Set the number of passes.
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Run the configured number of passes over the series.
    pub fn run(&self, series: &Series<T>) -> Series<T> {
        if self.iterations == 0 {
            return series.clone();
        }

        let mut smoothed = self.single_pass(series);
        for _ in 1..self.iterations {
            smoothed = self.single_pass(&smoothed);
        }
        smoothed
    }

    /// Apply one pass of the configured method.
    pub fn single_pass(&self, series: &Series<T>) -> Series<T> {
        match self.method {
            SmoothingMethod::WindowAverage {
                window_size,
                alpha,
                beta,
            } => weighted_window_average(series, window_size, alpha, beta),
            SmoothingMethod::BilateralAverage {
                window_size,
                spatial_sigma,
                value_sigma,
            } => bilateral_average(series, window_size, spatial_sigma, value_sigma),
            SmoothingMethod::MovingAverage { window_size } => moving_average(series, window_size),
            SmoothingMethod::ExponentialSmoothing { alpha } => {
                exponential_smoothing(series, alpha)
            }
            SmoothingMethod::SavitzkyGolay { window_size, order } => {
                savitzky_golay(series, window_size, order)
            }
            SmoothingMethod::GaussianConvolution { window_size, sigma } => {
                gaussian_convolution(series, window_size, sigma)
            }
            SmoothingMethod::Loess { span, degree } => loess(series, span, degree),
        }
    }

    /// Run the fixed four-stage supersmoothing pipeline.
    ///
    /// Savitzky-Golay(7, 3) → Gaussian(11, 2.0) → LOESS(0.3, 2) →
    /// Savitzky-Golay(9, 3), in that exact order. A convenience preset,
    /// not a configurable pipeline.
    pub fn supersmooth(series: &Series<T>) -> Series<T> {
        // Stage 1: strip high-frequency noise.
        let stage1 = savitzky_golay(series, 7, 3);

        // Stage 2: Gaussian pass over the residual ripple.
        let stage2 = gaussian_convolution(&stage1, 11, T::from(2.0).unwrap());

        // Stage 3: LOESS refinement.
        let stage3 = loess(&stage2, T::from(0.3).unwrap(), 2);

        // Stage 4: final polish.
        savitzky_golay(&stage3, 9, 3)
    }
}
