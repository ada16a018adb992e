// Copyright 2025 the Linechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for the chart draw list.
//!
//! Every [`DrawItem`](crate::DrawItem) carries a coarse z-index. The draw list is sorted by it
//! with a stable sort, so items sharing a layer keep series order.

/// Grid lines drawn behind series.
pub const GRID_LINES: i32 = -50;

/// Area fills beneath series lines.
pub const SERIES_FILL: i32 = 0;
/// Series polylines.
pub const SERIES_STROKE: i32 = 10;
/// Data-point dots drawn above lines.
pub const SERIES_POINTS: i32 = 20;

/// Axis lines.
pub const AXIS_RULES: i32 = 30;
/// Axis tick labels.
pub const AXIS_LABELS: i32 = 40;
