// Copyright 2025 the Linechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Guide geometry: grid lines, axis lines and tick labels.
//!
//! Guides are laid out against the same [`ChartLayout`] as the series:
//! - vertical grid lines at each x tick and horizontal grid lines at each y tick;
//! - the x axis along the zero line and the y axis along the left edge of the plot;
//! - one x label per data index, centered under its vertex, and one y label per y tick,
//!   in the left inset.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::{Line, Rect};

use crate::config::ChartConfig;
use crate::layout::ChartLayout;

/// A text label and the box it is centered in.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    /// Label text.
    pub text: String,
    /// Box the text is centered in, in pixels.
    pub rect: Rect,
}

/// All guide geometry for a chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GuideGeometry {
    /// Vertical grid lines, one per x tick.
    pub x_grid: Vec<Line>,
    /// Horizontal grid lines, one per y tick.
    pub y_grid: Vec<Line>,
    /// The x axis line, along the zero line.
    pub x_axis: Option<Line>,
    /// The y axis line, along the left edge of the plot.
    pub y_axis: Option<Line>,
    /// One label per data index.
    pub x_labels: Vec<Label>,
    /// One label per y tick.
    pub y_labels: Vec<Label>,
}

impl GuideGeometry {
    /// Builds the guides enabled in `config` for a chart whose first series has
    /// `reference_len` values.
    pub fn build(layout: &ChartLayout, config: &ChartConfig, reference_len: usize) -> Self {
        let inset = layout.inset;
        let w = layout.size.width;
        let h = layout.size.height;

        let x_grid = if config.x.grid.visible {
            layout
                .x
                .ticks
                .iter()
                .map(|t| {
                    let x = layout.pixel_x(t);
                    Line::new((x, h - inset), (x, inset))
                })
                .collect()
        } else {
            Vec::new()
        };

        let y_grid = if config.y.grid.visible {
            layout
                .y
                .ticks
                .iter()
                .map(|t| {
                    let y = layout.pixel_y(t);
                    Line::new((inset, y), (w - inset, y))
                })
                .collect()
        } else {
            Vec::new()
        };

        let x_axis = config.x.axis.visible.then(|| {
            let y = layout.baseline_y();
            Line::new((inset, y), (w - inset, y))
        });
        let y_axis = config
            .y
            .axis
            .visible
            .then(|| Line::new((inset, h - inset), (inset, inset)));

        let x_labels = if config.x.labels.visible {
            x_labels(layout, &config.x.labels.values, reference_len)
        } else {
            Vec::new()
        };
        let y_labels = if config.y.labels.visible {
            y_labels(layout)
        } else {
            Vec::new()
        };

        Self {
            x_grid,
            y_grid,
            x_axis,
            y_axis,
            x_labels,
            y_labels,
        }
    }

    /// Returns all grid lines, x first.
    pub fn grid(&self) -> impl Iterator<Item = Line> + '_ {
        self.x_grid.iter().chain(&self.y_grid).copied()
    }

    /// Returns the visible axis lines, x first.
    pub fn axes(&self) -> impl Iterator<Item = Line> + '_ {
        self.x_axis.iter().chain(&self.y_axis).copied()
    }

    /// Returns all labels, x first.
    pub fn labels(&self) -> impl Iterator<Item = &Label> + '_ {
        self.x_labels.iter().chain(&self.y_labels)
    }
}

fn x_labels(layout: &ChartLayout, values: &[String], reference_len: usize) -> Vec<Label> {
    let inset = layout.inset;
    let top = layout.size.height - inset;
    // Each label is as wide as one tick step at a tick count of one per index.
    let step = layout.x.scale.ticks(reference_len).step;
    let width = layout.x.scale.map(step);
    (0..reference_len)
        .map(|i| {
            let cx = layout.pixel_x(i as f64);
            let text = values.get(i).cloned().unwrap_or_else(|| i.to_string());
            Label {
                text,
                rect: Rect::new(cx - width * 0.5, top, cx + width * 0.5, top + inset),
            }
        })
        .collect()
}

fn y_labels(layout: &ChartLayout) -> Vec<Label> {
    let inset = layout.inset;
    layout
        .y
        .ticks
        .iter()
        .map(|t| {
            let y0 = layout.size.height - layout.y.scale.map(t) - 1.5 * inset;
            Label {
                text: format_tick(t),
                rect: Rect::new(0.0, y0, inset, y0 + inset),
            }
        })
        .collect()
}

/// Formats a tick value rounded to the nearest integer.
pub fn format_tick(value: f64) -> String {
    let rounded = value.round();
    if rounded == 0.0 {
        // Avoid "-0".
        return String::from("0");
    }
    if rounded.abs() < 1e15 {
        #[allow(clippy::cast_possible_truncation, reason = "bounded by the check above")]
        let n = rounded as i64;
        n.to_string()
    } else {
        alloc::format!("{rounded:.0}")
    }
}
