//! Input and configuration validation.
//!
//! ## Purpose
//!
//! This module provides fail-fast validation for the configuration boundary
//! of the engine: sample finiteness, pass counts, and duplicate builder
//! parameters. The smoothing passes themselves never fail; everything an
//! operator could trip over (degenerate windows, singular fits) is handled
//! by local fallbacks instead of validation.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Non-goals
//!
//! * This module does not clamp operator parameters (operators own that).
//! * This module does not perform the smoothing itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SmoothError;
use crate::primitives::series::Series;

/// Maximum number of passes accepted by the configuration boundary.
const MAX_ITERATIONS: usize = 1000;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for smoothing configuration and input data.
///
/// Provides static methods returning `Result<(), SmoothError>` that fail
/// fast upon the first violation.
pub struct Validator;

impl Validator {
    /// Validate that every sample in the series is finite.
    pub fn validate_series<T: Float>(series: &Series<T>) -> Result<(), SmoothError> {
        let x = series.x();
        let y = series.y();

        for i in 0..series.len() {
            if !x[i].is_finite() {
                return Err(SmoothError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    x[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !y[i].is_finite() {
                return Err(SmoothError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    y[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate the number of passes.
    ///
    /// Zero passes would silently return the input unchanged; more than
    /// [`MAX_ITERATIONS`] is treated as a configuration mistake.
    pub fn validate_iterations(iterations: usize) -> Result<(), SmoothError> {
        if iterations == 0 || iterations > MAX_ITERATIONS {
            return Err(SmoothError::InvalidIterations(iterations));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SmoothError> {
        if let Some(parameter) = duplicate_param {
            return Err(SmoothError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
