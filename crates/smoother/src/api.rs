//! High-level API for smoothing.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: a fluent
//! builder for configuring a smoothing model, the model itself, and the
//! fixed supersmoothing pipeline.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with a single-pass default.
//! * **Validated**: Configuration is checked once at `build()`; input data
//!   is checked once per `smooth()` call. A built model never fails
//!   mid-pass.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a builder via `Smoother::new()`.
//! 2. Select an operator with `.method(..)` and optionally `.iterations(..)`.
//! 3. Call `.build()` to obtain a [`SmoothModel`], then `.smooth(&series)`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::SmoothExecutor;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::executor::{
    SmoothingMethod, DEFAULT_ALPHA, DEFAULT_BETA, DEFAULT_WINDOW_SIZE,
};
pub use crate::primitives::errors::SmoothError;
pub use crate::primitives::series::{Sample, Series};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a smoothing model.
#[derive(Debug, Clone)]
pub struct SmootherBuilder<T> {
    /// Selected smoothing method.
    pub method: Option<SmoothingMethod<T>>,

    /// Number of passes (defaults to 1).
    pub iterations: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float + Send + Sync> Default for SmootherBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + Send + Sync> SmootherBuilder<T> {
    /// Create a new builder with no method selected.
    pub fn new() -> Self {
        Self {
            method: None,
            iterations: None,
            duplicate_param: None,
        }
    }

    /// Select the smoothing method and its parameters.
    pub fn method(mut self, method: SmoothingMethod<T>) -> Self {
        if self.method.is_some() {
            self.duplicate_param = Some("method");
        }
        self.method = Some(method);
        self
    }

    /// Set the number of passes (each pass smooths the previous output).
    pub fn iterations(mut self, iterations: usize) -> Self {
        if self.iterations.is_some() {
            self.duplicate_param = Some("iterations");
        }
        self.iterations = Some(iterations);
        self
    }

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<SmoothModel<T>, SmoothError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let method = self.method.ok_or(SmoothError::MissingMethod)?;
        let iterations = self.iterations.unwrap_or(1);
        Validator::validate_iterations(iterations)?;

        Ok(SmoothModel {
            executor: SmoothExecutor::new(method).iterations(iterations),
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A validated, ready-to-run smoothing model.
#[derive(Debug, Clone)]
pub struct SmoothModel<T> {
    executor: SmoothExecutor<T>,
}

impl<T: Float + Send + Sync> SmoothModel<T> {
    /// Smooth a series, returning a new series with the same length and
    /// x-values.
    ///
    /// Fails only if the input contains non-finite values; every numerical
    /// edge case inside the passes is recovered locally.
    pub fn smooth(&self, series: &Series<T>) -> Result<Series<T>, SmoothError> {
        Validator::validate_series(series)?;
        Ok(self.executor.run(series))
    }

    /// The configured smoothing method.
    #[inline]
    pub fn method(&self) -> &SmoothingMethod<T> {
        &self.executor.method
    }

    /// The configured number of passes.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.executor.iterations
    }
}

// ============================================================================
// Pipeline Entry Point
// ============================================================================

/// Run the fixed four-stage supersmoothing pipeline on a series.
///
/// Savitzky-Golay(7, 3) → Gaussian(11, 2.0) → LOESS(0.3, 2) →
/// Savitzky-Golay(9, 3). Fails only on non-finite input values.
pub fn supersmooth<T: Float + Send + Sync>(series: &Series<T>) -> Result<Series<T>, SmoothError> {
    Validator::validate_series(series)?;
    Ok(SmoothExecutor::supersmooth(series))
}
