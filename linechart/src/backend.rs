// Copyright 2025 the Linechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing surface a chart paints into, and the ordered draw list it replays.
//!
//! The library never rasterizes anything itself. Hosts implement [`DrawingBackend`] for their
//! canvas (SVG, a GPU scene, a test recorder) and call [`LineChart::draw`](crate::LineChart::draw).

use kurbo::{BezPath, Circle, Rect};
use peniko::Brush;

use crate::guides::Label;
use crate::style::StrokeStyle;

/// A 2D drawing surface.
pub trait DrawingBackend {
    /// Clears a previously drawn region.
    fn clear(&mut self, rect: Rect);

    /// Strokes an open or closed path.
    fn stroke_path(&mut self, path: &BezPath, style: &StrokeStyle);

    /// Fills a closed path.
    fn fill_path(&mut self, path: &BezPath, brush: &Brush);

    /// Fills a circle.
    fn fill_circle(&mut self, circle: Circle, brush: &Brush);

    /// Draws `label.text` centered in `label.rect`.
    fn draw_label(&mut self, label: &Label, brush: &Brush);
}

/// One drawing command.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Stroke a path.
    StrokePath {
        /// Path to stroke.
        path: BezPath,
        /// Paint and width.
        style: StrokeStyle,
    },
    /// Fill a path.
    FillPath {
        /// Path to fill.
        path: BezPath,
        /// Fill paint.
        brush: Brush,
    },
    /// Fill a circle.
    FillCircle {
        /// Circle to fill.
        circle: Circle,
        /// Fill paint.
        brush: Brush,
    },
    /// Draw a text label.
    Label {
        /// Text and placement.
        label: Label,
        /// Text paint.
        brush: Brush,
    },
}

impl DrawOp {
    /// Issues this command to `backend`.
    pub fn replay(&self, backend: &mut (impl DrawingBackend + ?Sized)) {
        match self {
            Self::StrokePath { path, style } => backend.stroke_path(path, style),
            Self::FillPath { path, brush } => backend.fill_path(path, brush),
            Self::FillCircle { circle, brush } => backend.fill_circle(*circle, brush),
            Self::Label { label, brush } => backend.draw_label(label, brush),
        }
    }
}

/// A drawing command with its paint order.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawItem {
    /// Paint order; lower values are drawn first. See [`crate::z_order`].
    pub z_index: i32,
    /// The command.
    pub op: DrawOp,
}

impl DrawItem {
    /// Creates a draw item.
    pub fn new(z_index: i32, op: DrawOp) -> Self {
        Self { z_index, op }
    }
}
