// Copyright 2025 the Linechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart configuration.
//!
//! Each axis carries its own label, grid and axis-line options ([`AxisConfig`]); chart-wide
//! options cover the inset, series line width, area fill and data-point dots.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;
use peniko::color::palette::css;

use crate::palette::Palette;

/// Default inset between the chart bounds and the plotting area, in pixels.
pub const DEFAULT_INSET: f64 = 15.0;

/// Default target number of grid lines per axis.
pub const DEFAULT_GRID_COUNT: usize = 10;

/// Tick label options for one axis.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelConfig {
    /// Whether to place labels.
    pub visible: bool,
    /// Custom label text by data index (x axis only).
    ///
    /// When empty, or shorter than the series, indices are used for the missing labels.
    pub values: Vec<String>,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            visible: true,
            values: Vec::new(),
        }
    }
}

/// Grid line options for one axis.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    /// Whether to draw grid lines.
    pub visible: bool,
    /// Target number of grid lines (the tick count passed to the scale).
    pub count: usize,
    /// Grid line color.
    pub color: Color,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            visible: true,
            count: DEFAULT_GRID_COUNT,
            color: Color::from_rgb8(0xee, 0xee, 0xee),
        }
    }
}

/// Axis line options for one axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLineConfig {
    /// Whether to draw the axis line.
    pub visible: bool,
    /// Axis line color.
    pub color: Color,
}

impl Default for AxisLineConfig {
    fn default() -> Self {
        Self {
            visible: true,
            color: Color::from_rgb8(0x60, 0x7d, 0x8b),
        }
    }
}

/// Labels, grid and axis line for one axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisConfig {
    /// Tick label options.
    pub labels: LabelConfig,
    /// Grid line options.
    pub grid: GridConfig,
    /// Axis line options.
    pub axis: AxisLineConfig,
}

impl AxisConfig {
    /// Enable or disable labels.
    pub fn with_labels(mut self, visible: bool) -> Self {
        self.labels.visible = visible;
        self
    }

    /// Set custom label text, one entry per data index.
    pub fn with_label_values<S: Into<String>>(mut self, values: impl IntoIterator<Item = S>) -> Self {
        self.labels.values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable grid lines.
    pub fn with_grid(mut self, visible: bool) -> Self {
        self.grid.visible = visible;
        self
    }

    /// Set the target grid line count.
    pub fn with_grid_count(mut self, count: usize) -> Self {
        self.grid.count = count;
        self
    }

    /// Enable or disable the axis line.
    pub fn with_axis(mut self, visible: bool) -> Self {
        self.axis.visible = visible;
        self
    }
}

/// Data-point dot options.
///
/// A dot is an outer disc in [`DotConfig::color`] with an inner disc in the series color.
#[derive(Clone, Debug, PartialEq)]
pub struct DotConfig {
    /// Whether to draw dots.
    pub visible: bool,
    /// Fill of the outer disc.
    pub color: Color,
    /// Inner disc radius.
    pub inner_radius: f64,
    /// Outer disc radius.
    pub outer_radius: f64,
    /// Inner disc radius for the highlighted data point.
    pub inner_radius_highlighted: f64,
    /// Outer disc radius for the highlighted data point.
    pub outer_radius_highlighted: f64,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            visible: true,
            color: css::WHITE,
            inner_radius: 4.0,
            outer_radius: 6.0,
            inner_radius_highlighted: 4.0,
            outer_radius_highlighted: 6.0,
        }
    }
}

/// Options for a whole chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    /// X axis options.
    pub x: AxisConfig,
    /// Y axis options.
    pub y: AxisConfig,
    /// Margin between the chart bounds and the plotting area.
    pub inset: f64,
    /// Series line width.
    pub line_width: f64,
    /// Whether to fill the area between each line and the zero line.
    pub area: bool,
    /// Opacity applied to the series color for the area fill.
    pub area_opacity: f32,
    /// Data-point dot options.
    pub dots: DotConfig,
    /// Series colors, assigned by series index.
    pub palette: Palette,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            x: AxisConfig::default(),
            y: AxisConfig::default(),
            inset: DEFAULT_INSET,
            line_width: 2.0,
            area: true,
            area_opacity: 0.2,
            dots: DotConfig::default(),
            palette: Palette::default(),
        }
    }
}

impl ChartConfig {
    /// Set the x axis options.
    pub fn with_x_axis(mut self, x: AxisConfig) -> Self {
        self.x = x;
        self
    }

    /// Set the y axis options.
    pub fn with_y_axis(mut self, y: AxisConfig) -> Self {
        self.y = y;
        self
    }

    /// Set the inset in pixels.
    pub fn with_inset(mut self, inset: f64) -> Self {
        self.inset = inset;
        self
    }

    /// Set the series line width.
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    /// Enable or disable the area fill.
    pub fn with_area(mut self, area: bool) -> Self {
        self.area = area;
        self
    }

    /// Set the area fill opacity.
    pub fn with_area_opacity(mut self, opacity: f32) -> Self {
        self.area_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Set the dot options.
    pub fn with_dots(mut self, dots: DotConfig) -> Self {
        self.dots = dots;
        self
    }

    /// Set the series palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}
