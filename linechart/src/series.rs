// Copyright 2025 the Linechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The set of numeric series a chart displays.
//!
//! Every series shares one implicit x domain: the value at position `i` is plotted at x index
//! `i`. The store requires all series to have the same, non-zero length, so hit testing and
//! the x domain (taken from the first series) stay meaningful for every series.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use tracing::{debug, warn};

/// Errors returned when adding a series to a [`SeriesStore`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeriesError {
    /// The series has no values.
    Empty,
    /// The series contains a NaN or infinite value.
    NonFinite {
        /// Position of the first offending value.
        index: usize,
    },
    /// The series length differs from the series already in the store.
    LengthMismatch {
        /// Length of the series already stored.
        expected: usize,
        /// Length of the rejected series.
        actual: usize,
    },
}

impl fmt::Display for SeriesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("series has no values"),
            Self::NonFinite { index } => write!(f, "series value at index {index} is not finite"),
            Self::LengthMismatch { expected, actual } => write!(
                f,
                "series has {actual} values but the chart's series have {expected}"
            ),
        }
    }
}

impl core::error::Error for SeriesError {}

/// An ordered collection of equal-length numeric series.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesStore {
    series: Vec<Vec<f64>>,
}

impl SeriesStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a series.
    ///
    /// The series must be non-empty, contain only finite values and, if the store already holds
    /// series, match their length.
    pub fn add_series(&mut self, values: impl Into<Vec<f64>>) -> Result<(), SeriesError> {
        let values = values.into();
        if let Err(err) = self.validate(&values) {
            warn!(%err, "rejected series");
            return Err(err);
        }
        let len = values.len();
        self.series.push(values);
        debug!(count = self.series.len(), len, "added series");
        Ok(())
    }

    fn validate(&self, values: &[f64]) -> Result<(), SeriesError> {
        if values.is_empty() {
            return Err(SeriesError::Empty);
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(SeriesError::NonFinite { index });
        }
        if let Some(expected) = self.reference_len()
            && expected != values.len()
        {
            return Err(SeriesError::LengthMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(())
    }

    /// Removes every series.
    pub fn clear(&mut self) {
        let removed = self.series.len();
        self.series.clear();
        debug!(removed, "cleared series");
    }

    /// Returns the number of series.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Returns `true` if the store holds no series.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Returns the series at `index`.
    pub fn get(&self, index: usize) -> Option<&[f64]> {
        self.series.get(index).map(Vec::as_slice)
    }

    /// Iterates the series in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.series.iter().map(Vec::as_slice)
    }

    /// Returns the length of the first series, which defines the x domain.
    pub fn reference_len(&self) -> Option<usize> {
        self.series.first().map(Vec::len)
    }

    /// Returns `(min, max)` over every value of every series.
    pub fn extent(&self) -> Option<(f64, f64)> {
        let mut values = self.series.iter().flatten().copied();
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}
