// Copyright 2025 the Linechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-facing line chart.
//!
//! [`LineChart`] owns the series, the options and the chart bounds. It recomputes layout for
//! every draw and every pointer event; there is no cached scene to invalidate.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{BezPath, Line, Size};
use peniko::Brush;
use tracing::debug;

use crate::backend::{DrawItem, DrawOp, DrawingBackend};
use crate::config::ChartConfig;
use crate::geometry::{Dot, GeometryStyle, SeriesGeometry};
use crate::guides::GuideGeometry;
use crate::hit_test::{DataPointSelection, HitTestError, locate};
use crate::layout::{ChartLayout, LayoutError, LayoutSpec};
use crate::palette::{PaletteError, lighten};
use crate::series::{SeriesError, SeriesStore};
use crate::style::StrokeStyle;
use crate::z_order;

/// Errors surfaced by [`LineChart`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChartError {
    /// A series was rejected.
    Series(SeriesError),
    /// Layout could not be computed.
    Layout(LayoutError),
    /// A pointer could not be resolved.
    HitTest(HitTestError),
    /// A series had no color.
    Palette(PaletteError),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Series(err) => write!(f, "invalid series: {err}"),
            Self::Layout(err) => write!(f, "layout failed: {err}"),
            Self::HitTest(err) => write!(f, "hit test failed: {err}"),
            Self::Palette(err) => write!(f, "no series color: {err}"),
        }
    }
}

impl core::error::Error for ChartError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Series(err) => Some(err),
            Self::Layout(err) => Some(err),
            Self::HitTest(err) => Some(err),
            Self::Palette(err) => Some(err),
        }
    }
}

impl From<SeriesError> for ChartError {
    fn from(err: SeriesError) -> Self {
        Self::Series(err)
    }
}

impl From<LayoutError> for ChartError {
    fn from(err: LayoutError) -> Self {
        Self::Layout(err)
    }
}

impl From<HitTestError> for ChartError {
    fn from(err: HitTestError) -> Self {
        Self::HitTest(err)
    }
}

impl From<PaletteError> for ChartError {
    fn from(err: PaletteError) -> Self {
        Self::Palette(err)
    }
}

type SelectionCallback = Box<dyn FnMut(usize, &[f64])>;

/// A line chart: series, options, bounds and pointer selection.
///
/// ```
/// use linechart::LineChart;
///
/// let mut chart = LineChart::new((320.0, 200.0));
/// chart.add_series([3.0, 4.0, 9.0, 11.0, 13.0, 15.0]).unwrap();
/// let selection = chart.on_pointer_event(320.0).unwrap();
/// assert_eq!(selection.index, 5);
/// assert_eq!(chart.highlighted(), Some(5));
/// ```
#[derive(Default)]
pub struct LineChart {
    store: SeriesStore,
    config: ChartConfig,
    size: Size,
    highlighted: Option<usize>,
    on_selected: Option<SelectionCallback>,
}

impl fmt::Debug for LineChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineChart")
            .field("store", &self.store)
            .field("config", &self.config)
            .field("size", &self.size)
            .field("highlighted", &self.highlighted)
            .field("on_selected", &self.on_selected.is_some())
            .finish()
    }
}

impl LineChart {
    /// Creates an empty chart with the given outer bounds and default options.
    pub fn new(size: impl Into<Size>) -> Self {
        Self {
            size: size.into(),
            ..Self::default()
        }
    }

    /// Sets the options.
    pub fn with_config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    /// Appends a series. See [`SeriesStore::add_series`] for the accepted input.
    pub fn add_series(&mut self, values: impl Into<Vec<f64>>) -> Result<(), SeriesError> {
        self.store.add_series(values)
    }

    /// Removes every series and the highlight.
    pub fn clear_series(&mut self) {
        self.store.clear();
        self.highlighted = None;
    }

    /// Returns the series.
    pub fn series(&self) -> &SeriesStore {
        &self.store
    }

    /// Sets the outer bounds.
    pub fn set_drawing_size(&mut self, width: f64, height: f64) {
        self.size = Size::new(width, height);
    }

    /// Returns the outer bounds.
    pub fn drawing_size(&self) -> Size {
        self.size
    }

    /// Returns the options.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Returns the options for in-place changes.
    pub fn config_mut(&mut self) -> &mut ChartConfig {
        &mut self.config
    }

    /// Replaces the options.
    pub fn set_config(&mut self, config: ChartConfig) {
        self.config = config;
    }

    /// Registers the function called with `(index, values)` whenever a pointer event resolves
    /// to a data point. Replaces any previous callback.
    pub fn set_on_data_point_selected(&mut self, f: impl FnMut(usize, &[f64]) + 'static) {
        self.on_selected = Some(Box::new(f));
    }

    /// Returns the highlighted data index, if a pointer event selected one.
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Clears the highlighted data index.
    pub fn clear_highlight(&mut self) {
        self.highlighted = None;
    }

    /// Computes the layout for the current bounds, options and series.
    pub fn layout(&self) -> Result<ChartLayout, LayoutError> {
        let spec = LayoutSpec {
            size: self.size,
            inset: self.config.inset,
            x_tick_count: self.config.x.grid.count,
            y_tick_count: self.config.y.grid.count,
        };
        ChartLayout::compute(&spec, &self.store)
    }

    /// Resolves the pixel x coordinate of a pointer to a data point.
    ///
    /// On success the data point becomes the highlighted index and the selection callback is
    /// called before returning. With no series this fails with [`LayoutError::NoData`] and the
    /// callback is not called.
    pub fn on_pointer_event(&mut self, pointer_x: f64) -> Result<DataPointSelection, ChartError> {
        let layout = self.layout()?;
        let selection = locate(&layout, &self.store, pointer_x)?;
        debug!(
            pointer_x,
            index = selection.index,
            series = selection.values.len(),
            "selected data point"
        );
        self.highlighted = Some(selection.index);
        if let Some(f) = self.on_selected.as_mut() {
            f(selection.index, selection.values.as_slice());
        }
        Ok(selection)
    }

    /// Builds the ordered draw list for the current state.
    ///
    /// With no series the list is empty.
    pub fn scene(&self) -> Result<Vec<DrawItem>, ChartError> {
        if self.store.is_empty() {
            return Ok(Vec::new());
        }
        let layout = self.layout()?;
        let config = &self.config;
        let mut items = Vec::new();

        let guides = GuideGeometry::build(
            &layout,
            config,
            self.store.reference_len().unwrap_or_default(),
        );
        let x_grid = StrokeStyle::solid(config.x.grid.color, 1.0);
        let y_grid = StrokeStyle::solid(config.y.grid.color, 1.0);
        for &line in &guides.x_grid {
            items.push(stroke_line(z_order::GRID_LINES, line, &x_grid));
        }
        for &line in &guides.y_grid {
            items.push(stroke_line(z_order::GRID_LINES, line, &y_grid));
        }

        let style = GeometryStyle::from_config(config);
        let dot_fill = Brush::from(config.dots.color);
        for (series_index, values) in self.store.iter().enumerate() {
            let color = config.palette.cycled(series_index)?;
            let geometry = SeriesGeometry::build(&layout, values, &style);

            if let Some(area) = geometry.area {
                items.push(DrawItem::new(
                    z_order::SERIES_FILL,
                    DrawOp::FillPath {
                        path: area,
                        brush: color.with_alpha(config.area_opacity).into(),
                    },
                ));
            }
            items.push(DrawItem::new(
                z_order::SERIES_STROKE,
                DrawOp::StrokePath {
                    path: geometry.line,
                    style: StrokeStyle::solid(color, config.line_width),
                },
            ));

            let highlighted = self.highlighted.map(|i| i.min(values.len().saturating_sub(1)));
            for (i, dot) in geometry.dots.iter().enumerate() {
                let (dot, outer_fill) = if highlighted == Some(i) {
                    let dot = Dot::new(
                        dot.center,
                        config.dots.outer_radius_highlighted,
                        config.dots.inner_radius_highlighted,
                    );
                    (dot, Brush::from(lighten(color)))
                } else {
                    (*dot, dot_fill.clone())
                };
                items.push(DrawItem::new(
                    z_order::SERIES_POINTS,
                    DrawOp::FillCircle {
                        circle: dot.outer_circle(),
                        brush: outer_fill,
                    },
                ));
                items.push(DrawItem::new(
                    z_order::SERIES_POINTS,
                    DrawOp::FillCircle {
                        circle: dot.inner_circle(),
                        brush: color.into(),
                    },
                ));
            }
        }

        if let Some(line) = guides.x_axis {
            let style = StrokeStyle::solid(config.x.axis.color, 1.0);
            items.push(stroke_line(z_order::AXIS_RULES, line, &style));
        }
        if let Some(line) = guides.y_axis {
            let style = StrokeStyle::solid(config.y.axis.color, 1.0);
            items.push(stroke_line(z_order::AXIS_RULES, line, &style));
        }
        let x_label_fill = Brush::from(config.x.axis.color);
        let y_label_fill = Brush::from(config.y.axis.color);
        for (labels, brush) in [
            (guides.x_labels, &x_label_fill),
            (guides.y_labels, &y_label_fill),
        ] {
            for label in labels {
                items.push(DrawItem::new(
                    z_order::AXIS_LABELS,
                    DrawOp::Label {
                        label,
                        brush: brush.clone(),
                    },
                ));
            }
        }

        items.sort_by_key(|item| item.z_index);
        Ok(items)
    }

    /// Clears the chart bounds on `backend` and paints the current state.
    ///
    /// With no series only the clear is issued.
    pub fn draw(&self, backend: &mut (impl DrawingBackend + ?Sized)) -> Result<(), ChartError> {
        let items = self.scene()?;
        backend.clear(self.size.to_rect());
        for item in &items {
            item.op.replay(&mut *backend);
        }
        debug!(items = items.len(), "drew chart");
        Ok(())
    }
}

fn stroke_line(z_index: i32, line: Line, style: &StrokeStyle) -> DrawItem {
    let mut path = BezPath::new();
    path.move_to(line.p0);
    path.line_to(line.p1);
    DrawItem::new(
        z_index,
        DrawOp::StrokePath {
            path,
            style: style.clone(),
        },
    )
}
