//! # Smoother — Configurable 1-D Signal Smoothing for Rust
//!
//! A pure, allocation-light smoothing engine for ordered (x, y) data. Seven
//! interchangeable single-pass algorithms, from a simple moving average to
//! Savitzky-Golay filtering and LOESS, selected through one tagged
//! configuration and optionally applied over multiple passes or chained into
//! a fixed "supersmoothing" pipeline.
//!
//! ## What it does
//!
//! Each operator consumes a [`prelude::Series`] and returns a new series of
//! the same length and the same x-values; only the y-values change. The
//! engine performs no I/O, no plotting, and no randomness: two runs on the
//! same input and configuration produce bit-identical output. Degenerate
//! inputs (empty or singleton series, zero-weight windows, near-singular
//! local fits) are always recovered locally and never surface as errors.
//!
//! ## Algorithms
//!
//! * **Weighted-window average**: exponential distance decay with center
//!   emphasis (the classic default, window 5, alpha 0.3, beta 0.7).
//! * **Bilateral average**: spatial × value-similarity weighting that
//!   preserves edges.
//! * **Simple moving average**: unweighted mean over a clamped window.
//! * **Exponential smoothing**: first-order recurrence, `out[0] = y[0]`.
//! * **Savitzky-Golay**: local polynomial least squares on index-centered
//!   coordinates.
//! * **Gaussian convolution**: fixed normalized kernel with renormalized
//!   boundary taps.
//! * **LOESS**: nearest-neighbor tri-cubic weighted regression by
//!   x-distance.
//!
//! ## Quick Start
//!
//! ```rust
//! use smoother::prelude::*;
//!
//! let series = Series::from_columns(
//!     vec![0.0, 1.0, 2.0, 3.0, 4.0],
//!     vec![1.2, 1.9, 3.3, 3.8, 5.1],
//! )?;
//!
//! let model = Smoother::new()
//!     .method(MovingAverage { window_size: 3 })
//!     .build()?;
//!
//! let smoothed = model.smooth(&series)?;
//! assert_eq!(smoothed.len(), series.len());
//! # Result::<(), SmoothError>::Ok(())
//! ```
//!
//! ## Multi-pass and pipeline smoothing
//!
//! ```rust
//! use smoother::prelude::*;
//!
//! let series = Series::from_pairs((0..40).map(|i| {
//!     let x = i as f64 * 0.25;
//!     (x, x.sin() + if i % 2 == 0 { 0.2 } else { -0.2 })
//! }));
//!
//! // Three passes of Savitzky-Golay smoothing.
//! let model = Smoother::new()
//!     .method(SavitzkyGolay { window_size: 7, order: 2 })
//!     .iterations(3)
//!     .build()?;
//! let gentle = model.smooth(&series)?;
//!
//! // Or the fixed four-stage supersmoothing pipeline.
//! let aggressive = supersmooth(&series)?;
//!
//! assert_eq!(gentle.len(), series.len());
//! assert_eq!(aggressive.len(), series.len());
//! # Result::<(), SmoothError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Configuration mistakes (a missing method, a doubly-set parameter, an
//! iteration count outside `[1, 1000]`, mismatched input columns, or
//! non-finite sample values) are reported as [`prelude::SmoothError`]
//! before any smoothing runs. Out-of-range *operator* parameters are
//! clamped to their documented bounds instead of rejected, so a built model
//! never fails mid-pass.
//!
//! ```rust
//! use smoother::prelude::*;
//!
//! let err = Smoother::<f64>::new().build().unwrap_err();
//! assert_eq!(err, SmoothError::MissingMethod);
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments (an allocator is required).
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! smoother = { version = "0.1", default-features = false }
//! ```
//!
//! Use `f32` series and small windows to keep the footprint down; every
//! algorithm works identically without `std`.
//!
//! ## References
//!
//! - Savitzky, A. & Golay, M. J. E. (1964). "Smoothing and Differentiation
//!   of Data by Simplified Least Squares Procedures"
//! - Cleveland, W. S. (1979). "Robust Locally Weighted Regression and
//!   Smoothing Scatterplots"
//! - Tomasi, C. & Manduchi, R. (1998). "Bilateral Filtering for Gray and
//!   Color Images"

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - the single-pass smoothing operators.
mod algorithms;

// Layer 4: Engine - operator dispatch, iteration, and the fixed pipeline.
mod engine;

// High-level fluent API for smoothing.
mod api;

// Standard smoothing prelude.
pub mod prelude {
    pub use crate::api::{
        supersmooth, Sample, Series, SmoothError, SmoothModel, SmootherBuilder as Smoother,
        SmoothingMethod,
        SmoothingMethod::{
            BilateralAverage, ExponentialSmoothing, GaussianConvolution, Loess, MovingAverage,
            SavitzkyGolay, WindowAverage,
        },
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
