//! Sample and series data model.
//!
//! ## Purpose
//!
//! This module defines the data carried through the smoothing engine: a
//! [`Sample`] is one (x, y) observation, and a [`Series`] is an ordered
//! sequence of samples stored as parallel x/y columns.
//!
//! ## Design notes
//!
//! * **Immutability**: Operators never mutate a series in place; each pass
//!   builds a fresh y-column and pairs it with the original x-column.
//! * **Column storage**: x and y live in separate vectors so operators can
//!   work on plain slices.
//! * **Boundary friendly**: Constructors accept the column and pair shapes
//!   produced by CSV-loading collaborators; `Display` renders the table a
//!   reporting collaborator expects.
//!
//! ## Invariants
//!
//! * The x and y columns always have identical lengths.
//! * A smoothing pass preserves length and x-values exactly.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SmoothError;

// ============================================================================
// Sample
// ============================================================================

/// A single (x, y) observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<T> {
    /// Position on the independent axis.
    pub x: T,

    /// Observed value.
    pub y: T,
}

// ============================================================================
// Series
// ============================================================================

/// An ordered sequence of samples, stored as parallel x/y columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Series<T> {
    x: Vec<T>,
    y: Vec<T>,
}

impl<T> Default for Series<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Series<T> {
    /// Create an empty series.
    pub fn new() -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
        }
    }

    /// Build a series from two parallel columns.
    ///
    /// Fails if the columns have different lengths; this is the input
    /// boundary for CSV-style two-column data.
    pub fn from_columns(x: Vec<T>, y: Vec<T>) -> Result<Self, SmoothError> {
        if x.len() != y.len() {
            return Err(SmoothError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    /// Build a series from (x, y) pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (T, T)>,
    {
        let (x, y) = pairs.into_iter().unzip();
        Self { x, y }
    }

    /// Build a series from samples.
    pub fn from_samples<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = Sample<T>>,
    {
        Self::from_pairs(samples.into_iter().map(|s| (s.x, s.y)))
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check whether the series holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// The x-column (independent variable).
    #[inline]
    pub fn x(&self) -> &[T] {
        &self.x
    }

    /// The y-column (observed values).
    #[inline]
    pub fn y(&self) -> &[T] {
        &self.y
    }

    /// Consume the series, returning its columns.
    pub fn into_columns(self) -> (Vec<T>, Vec<T>) {
        (self.x, self.y)
    }
}

impl<T: Copy> Series<T> {
    /// Get the sample at `idx`, if in bounds.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<Sample<T>> {
        match (self.x.get(idx), self.y.get(idx)) {
            (Some(&x), Some(&y)) => Some(Sample { x, y }),
            _ => None,
        }
    }

    /// Iterate over the samples.
    pub fn iter(&self) -> impl Iterator<Item = Sample<T>> + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .map(|(&x, &y)| Sample { x, y })
    }
}

impl<T: Clone> Series<T> {
    /// Pair this series' x-column with a replacement y-column.
    ///
    /// This is how every operator assembles its output; the new column must
    /// have the same length as the series.
    pub fn with_y(&self, y: Vec<T>) -> Self {
        debug_assert_eq!(
            self.x.len(),
            y.len(),
            "with_y: replacement column length mismatch"
        );
        Self {
            x: self.x.clone(),
            y,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Series<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Series:")?;
        writeln!(f, "  Data points: {}", self.len())?;
        writeln!(f)?;
        writeln!(f, "{:>9} {:>12}", "X", "Y")?;
        writeln!(f, "  {}", "-".repeat(20))?;
        for i in 0..self.len() {
            writeln!(f, "{:>9.2} {:>12.5}", self.x[i], self.y[i])?;
        }
        Ok(())
    }
}
