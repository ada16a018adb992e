// Copyright 2025 the Linechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale and tick layout for a chart.
//!
//! [`ChartLayout::compute`] derives both axes from the chart bounds, the inset and the current
//! series. It is recomputed from scratch for every draw and every pointer event; a layout is
//! never patched in place.
//!
//! Pixel space has y growing downward. Data space has y growing upward, so the y scale maps
//! into `[0, drawing height]` and points are flipped against the bounds height.

use core::fmt;

use kurbo::{Point, Rect, Size};
use tracing::trace;

use crate::config::{DEFAULT_GRID_COUNT, DEFAULT_INSET};
use crate::scale::{ScaleLinear, TickSet};
use crate::series::SeriesStore;

/// Errors returned by [`ChartLayout::compute`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// The store holds no series, so there is no x domain or value range.
    NoData,
    /// The bounds or inset are not finite, the inset is negative, or the inset leaves a
    /// negative drawing area.
    InvalidBounds,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoData => f.write_str("chart has no series to lay out"),
            Self::InvalidBounds => f.write_str("chart bounds leave no valid drawing area"),
        }
    }
}

impl core::error::Error for LayoutError {}

/// Layout inputs: outer bounds, inset and target tick counts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutSpec {
    /// Outer chart bounds.
    pub size: Size,
    /// Margin between the bounds and the plotting area, on every side.
    pub inset: f64,
    /// Target number of x ticks.
    pub x_tick_count: usize,
    /// Target number of y ticks.
    pub y_tick_count: usize,
}

impl Default for LayoutSpec {
    fn default() -> Self {
        Self {
            size: Size::ZERO,
            inset: DEFAULT_INSET,
            x_tick_count: DEFAULT_GRID_COUNT,
            y_tick_count: DEFAULT_GRID_COUNT,
        }
    }
}

impl LayoutSpec {
    /// Creates a layout spec for the given bounds with the default inset and tick counts.
    pub fn new(size: impl Into<Size>) -> Self {
        Self {
            size: size.into(),
            ..Self::default()
        }
    }

    /// Sets the inset.
    pub fn with_inset(mut self, inset: f64) -> Self {
        self.inset = inset;
        self
    }

    /// Sets the target tick counts for both axes.
    pub fn with_tick_counts(mut self, x: usize, y: usize) -> Self {
        self.x_tick_count = x;
        self.y_tick_count = y;
        self
    }
}

/// One axis of a layout: its scale and its ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    /// Maps data values to drawing-local pixels.
    pub scale: ScaleLinear,
    /// Ticks over the scale domain.
    pub ticks: TickSet,
}

impl Coordinate {
    fn new(scale: ScaleLinear, tick_count: usize) -> Self {
        Self {
            scale,
            ticks: scale.ticks(tick_count),
        }
    }
}

/// A computed chart layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    /// Outer chart bounds.
    pub size: Size,
    /// Margin between the bounds and the plotting area.
    pub inset: f64,
    /// Size of the plotting area (`size` minus twice the inset).
    pub drawing: Size,
    /// Index axis: `[0, len - 1]` of the first series onto `[0, drawing width]`.
    pub x: Coordinate,
    /// Value axis: `[min(0, min), max(1, max)]` over all series onto `[0, drawing height]`.
    pub y: Coordinate,
}

impl ChartLayout {
    /// Computes the layout for `store` within the bounds described by `spec`.
    pub fn compute(spec: &LayoutSpec, store: &SeriesStore) -> Result<Self, LayoutError> {
        let Size { width, height } = spec.size;
        let inset = spec.inset;
        if !width.is_finite() || !height.is_finite() || !inset.is_finite() || inset < 0.0 {
            return Err(LayoutError::InvalidBounds);
        }
        let drawing = Size::new(width - 2.0 * inset, height - 2.0 * inset);
        if drawing.width < 0.0 || drawing.height < 0.0 {
            return Err(LayoutError::InvalidBounds);
        }

        let (Some(len), Some((min, max))) = (store.reference_len(), store.extent()) else {
            return Err(LayoutError::NoData);
        };

        let last = len.saturating_sub(1) as f64;
        let x = Coordinate::new(
            ScaleLinear::new((0.0, last), (0.0, drawing.width)),
            spec.x_tick_count,
        );
        let y_domain = (min.min(0.0), max.max(1.0));
        let y = Coordinate::new(
            ScaleLinear::new(y_domain, (0.0, drawing.height)),
            spec.y_tick_count,
        );

        trace!(
            width,
            height,
            inset,
            x_max = last,
            y_min = y_domain.0,
            y_max = y_domain.1,
            "computed chart layout"
        );

        Ok(Self {
            size: spec.size,
            inset,
            drawing,
            x,
            y,
        })
    }

    /// Returns the pixel position of the value at `index`.
    pub fn point(&self, index: usize, value: f64) -> Point {
        Point::new(self.pixel_x(index as f64), self.pixel_y(value))
    }

    /// Returns the pixel x of a (possibly fractional) data index.
    pub fn pixel_x(&self, index: f64) -> f64 {
        self.x.scale.map(index) + self.inset
    }

    /// Returns the pixel y of a data value.
    pub fn pixel_y(&self, value: f64) -> f64 {
        self.size.height - self.y.scale.map(value) - self.inset
    }

    /// Returns the pixel y of the zero line.
    pub fn baseline_y(&self) -> f64 {
        self.pixel_y(0.0)
    }

    /// Returns the plotting area in pixels.
    pub fn plot_rect(&self) -> Rect {
        Rect::new(
            self.inset,
            self.inset,
            self.size.width - self.inset,
            self.size.height - self.inset,
        )
    }

    /// Returns the outer bounds in pixels.
    pub fn bounds(&self) -> Rect {
        self.size.to_rect()
    }
}
