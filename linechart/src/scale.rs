// Copyright 2025 the Linechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear scale and “nice” tick computation.
//!
//! A [`ScaleLinear`] maps a data-space domain onto a pixel-space range and back. Ticks are
//! described by a [`TickSet`], an arithmetic sequence that callers enumerate with
//! [`TickSet::iter`].

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Upper bound on the number of values a [`TickSet`] will enumerate.
const MAX_TICKS: usize = 10_000;

/// A linear mapping from a continuous domain to a continuous range.
///
/// Scales are immutable: layout builds new ones whenever bounds or data change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl Default for ScaleLinear {
    fn default() -> Self {
        Self::new((0.0, 1.0), (0.0, 1.0))
    }
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Returns the domain as authored.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the range as authored.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns the domain sorted as `(min, max)`.
    pub fn extent(&self) -> (f64, f64) {
        let (d0, d1) = self.domain;
        if d0 <= d1 { (d0, d1) } else { (d1, d0) }
    }

    /// Maps a value from domain space into range space.
    ///
    /// A zero-width domain maps every input to the start of the range.
    pub fn map(&self, x: f64) -> f64 {
        bilinear(self.domain, self.range, x)
    }

    /// Maps a value from range space back into domain space.
    ///
    /// A zero-width range maps every input to the start of the domain.
    pub fn invert(&self, y: f64) -> f64 {
        bilinear(self.range, self.domain, y)
    }

    /// Returns a “nice” tick set covering the domain extent with roughly `count` ticks.
    ///
    /// The step is one of `{1, 2, 5, 10} × 10^k`. `start` is the smallest multiple of the step
    /// that is at or above the extent minimum; `stop` is half a step past the largest multiple
    /// at or below the extent maximum, so inclusive enumeration reaches it despite rounding.
    ///
    /// A `count` of zero is treated as one. A zero-span domain yields a single tick at the
    /// domain value, and a non-finite domain yields [`TickSet::EMPTY`].
    pub fn ticks(&self, count: usize) -> TickSet {
        let (min, max) = self.extent();
        if !min.is_finite() || !max.is_finite() {
            return TickSet::EMPTY;
        }
        let span = max - min;
        if span == 0.0 {
            return TickSet::single(min);
        }

        let m = count.max(1) as f64;
        let mut step = 10_f64.powi(exponent(span / m));
        let err = m / span * step;
        if err <= 0.15 {
            step *= 10.0;
        } else if err <= 0.35 {
            step *= 5.0;
        } else if err <= 0.75 {
            step *= 2.0;
        }

        let start = (min / step).ceil() * step;
        let stop = (max / step).floor() * step + step * 0.5;
        TickSet { start, stop, step }
    }
}

fn bilinear(from: (f64, f64), to: (f64, f64), v: f64) -> f64 {
    let (a0, a1) = from;
    let (b0, b1) = to;
    let denom = a1 - a0;
    let t = if denom == 0.0 { 0.0 } else { (v - a0) / denom };
    b0 + (b1 - b0) * t
}

fn exponent(x: f64) -> i32 {
    let e = x.log10().floor().clamp(f64::from(i32::MIN), f64::from(i32::MAX));
    #[allow(clippy::cast_possible_truncation, reason = "clamped to the i32 range")]
    {
        e as i32
    }
}

/// An arithmetic sequence of tick values: `start, start + step, …` up to `stop` (inclusive).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickSet {
    /// First tick value.
    pub start: f64,
    /// Inclusive upper bound for enumeration.
    pub stop: f64,
    /// Distance between consecutive ticks. Zero for a single-tick set.
    pub step: f64,
}

impl TickSet {
    /// A tick set that enumerates nothing.
    pub const EMPTY: Self = Self {
        start: 0.0,
        stop: -1.0,
        step: 0.0,
    };

    /// A tick set holding exactly one value.
    pub fn single(value: f64) -> Self {
        Self {
            start: value,
            stop: value,
            step: 0.0,
        }
    }

    /// Returns the number of tick values [`TickSet::iter`] yields.
    pub fn len(&self) -> usize {
        if self.start.is_nan() || self.stop.is_nan() || self.start > self.stop {
            return 0;
        }
        if self.step <= 0.0 || !self.step.is_finite() {
            return 1;
        }
        let n = ((self.stop - self.start) / self.step).floor();
        if !n.is_finite() {
            return 0;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite checks and capped at MAX_TICKS"
        )]
        let n = n.min(MAX_TICKS as f64 - 1.0) as usize;
        n + 1
    }

    /// Returns `true` if this tick set enumerates nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates tick values in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        let TickSet { start, step, .. } = *self;
        (0..self.len()).map(move |i| start + step * i as f64)
    }
}
