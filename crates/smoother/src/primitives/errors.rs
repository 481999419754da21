//! Error types for smoothing operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur at the
//! configuration boundary of the smoothing engine: malformed input columns,
//! non-finite sample values, and invalid builder configuration.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual lengths).
//! * **Boundary-only**: The smoothing passes themselves never fail; every
//!   degenerate numerical condition is recovered locally by the operators
//!   and the regression solver.
//! * **No-std**: Supports `no_std` environments by using `alloc` for
//!   dynamic messages.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for smoothing configuration and input validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmoothError {
    /// `x` and `y` columns must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` column.
        x_len: usize,
        /// Number of elements in the `y` column.
        y_len: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// No smoothing method was configured on the builder.
    MissingMethod,

    /// Pass count must be in the range [1, 1000].
    InvalidIterations(usize),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SmoothError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::MissingMethod => {
                write!(f, "No smoothing method configured (call .method(..) before .build())")
            }
            Self::InvalidIterations(iter) => {
                write!(f, "Invalid iterations: {iter} (must be in [1, 1000])")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SmoothError {}
