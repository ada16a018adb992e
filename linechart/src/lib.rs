// Copyright 2025 the Linechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line-chart geometry and interaction.
//!
//! This crate turns one or more numeric series into pixel-space geometry and maps pointer
//! positions back to data indices:
//! - **Scales** ([`ScaleLinear`]) map data values into pixels and back, and compute “nice”
//!   ticks.
//! - **Layout** ([`ChartLayout`]) derives the index and value axes from the chart bounds and
//!   the [`SeriesStore`].
//! - **Geometry** ([`SeriesGeometry`], [`GuideGeometry`]) produces polylines, area fills,
//!   dots, grid and axis lines, and label boxes.
//! - **Hit testing** ([`locate`]) resolves a pointer x coordinate to the nearest data index.
//!
//! [`LineChart`] ties these together for hosts: it owns the series and options, paints into
//! any [`DrawingBackend`] and reports pointer selections to a callback.
//!
//! Rasterization and text shaping are out of scope; labels carry unshaped strings and a box.

#![no_std]

extern crate alloc;

mod backend;
mod chart;
#[cfg(test)]
mod chart_tests;
mod config;
#[cfg(not(feature = "std"))]
mod float;
mod geometry;
mod guides;
mod layout;
mod palette;
mod scale;
mod series;
mod style;
pub mod z_order;

pub use backend::{DrawItem, DrawOp, DrawingBackend};
pub use chart::{ChartError, LineChart};
pub use config::{
    AxisConfig, AxisLineConfig, ChartConfig, DEFAULT_GRID_COUNT, DEFAULT_INSET, DotConfig,
    GridConfig, LabelConfig,
};
pub use geometry::{Dot, GeometryStyle, SeriesGeometry};
pub use guides::{GuideGeometry, Label, format_tick};
pub use hit_test::{DataPointSelection, HitTestError, locate};
pub use layout::{ChartLayout, Coordinate, LayoutError, LayoutSpec};
pub use palette::{CATEGORY10, Palette, PaletteError, lighten};
pub use scale::{ScaleLinear, TickSet};
pub use series::{SeriesError, SeriesStore};
pub use style::StrokeStyle;
