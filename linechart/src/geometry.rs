// Copyright 2025 the Linechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series geometry: polyline, area fill and data-point dots.
//!
//! Geometry is a pure function of a [`ChartLayout`] and a series. Nothing is cached between
//! draws; callers rebuild it whenever the layout changes.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Circle, Point, Rect};

use crate::config::ChartConfig;
use crate::layout::ChartLayout;

/// Sizing options for [`SeriesGeometry::build`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryStyle {
    /// Whether to build the area path.
    pub area: bool,
    /// Whether to build dots.
    pub dots: bool,
    /// Outer dot radius.
    pub outer_radius: f64,
    /// Inner dot radius.
    pub inner_radius: f64,
}

impl Default for GeometryStyle {
    fn default() -> Self {
        Self::from_config(&ChartConfig::default())
    }
}

impl GeometryStyle {
    /// Takes area and dot options from a chart config.
    pub fn from_config(config: &ChartConfig) -> Self {
        Self {
            area: config.area,
            dots: config.dots.visible,
            outer_radius: config.dots.outer_radius,
            inner_radius: config.dots.inner_radius,
        }
    }
}

/// A data-point marker: an outer disc with a smaller inner disc, both centered on the vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    /// Vertex the dot is centered on.
    pub center: Point,
    /// Outer disc radius.
    pub outer_radius: f64,
    /// Inner disc radius.
    pub inner_radius: f64,
}

impl Dot {
    /// Creates a dot centered on `center`.
    pub fn new(center: Point, outer_radius: f64, inner_radius: f64) -> Self {
        Self {
            center,
            outer_radius,
            inner_radius,
        }
    }

    /// The square frame of the outer disc.
    ///
    /// Its origin is the center offset by the outer radius, so the dot is centered on its
    /// vertex.
    pub fn frame(&self) -> Rect {
        let r = self.outer_radius;
        Rect::new(
            self.center.x - r,
            self.center.y - r,
            self.center.x + r,
            self.center.y + r,
        )
    }

    /// The outer disc.
    pub fn outer_circle(&self) -> Circle {
        Circle::new(self.center, self.outer_radius)
    }

    /// The inner disc.
    pub fn inner_circle(&self) -> Circle {
        Circle::new(self.center, self.inner_radius)
    }
}

/// Pixel geometry for one series.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesGeometry {
    /// One vertex per value, in index order.
    pub points: Vec<Point>,
    /// Polyline through `points`.
    pub line: BezPath,
    /// Closed area between the polyline and the zero line.
    pub area: Option<BezPath>,
    /// One dot per vertex (empty when dots are disabled).
    pub dots: Vec<Dot>,
}

impl SeriesGeometry {
    /// Builds the geometry for `values` under `layout`.
    pub fn build(layout: &ChartLayout, values: &[f64], style: &GeometryStyle) -> Self {
        let points: Vec<Point> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| layout.point(i, v))
            .collect();

        let line = polyline(&points);
        let area = if style.area {
            area_path(&points, layout.baseline_y())
        } else {
            None
        };
        let dots = if style.dots {
            points
                .iter()
                .map(|&p| Dot::new(p, style.outer_radius, style.inner_radius))
                .collect()
        } else {
            Vec::new()
        };

        Self {
            points,
            line,
            area,
            dots,
        }
    }
}

fn polyline(points: &[Point]) -> BezPath {
    let mut p = BezPath::new();
    let mut iter = points.iter();
    if let Some(&first) = iter.next() {
        p.move_to(first);
        for &pt in iter {
            p.line_to(pt);
        }
    }
    p
}

fn area_path(points: &[Point], baseline: f64) -> Option<BezPath> {
    let first = points.first()?;
    let last = points.last()?;
    let origin = Point::new(first.x, baseline);
    let mut p = BezPath::new();
    p.move_to(origin);
    for &pt in points {
        p.line_to(pt);
    }
    p.line_to((last.x, baseline));
    p.line_to(origin);
    p.close_path();
    Some(p)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::PathEl;

    use super::*;
    use crate::layout::LayoutSpec;
    use crate::series::SeriesStore;

    fn layout_for(values: &[f64]) -> ChartLayout {
        let mut store = SeriesStore::new();
        store.add_series(values.to_vec()).unwrap();
        ChartLayout::compute(&LayoutSpec::new((120.0, 120.0)).with_inset(10.0), &store).unwrap()
    }

    #[test]
    fn line_visits_every_point_in_order() {
        let values = [3.0, 4.0, 9.0, 11.0];
        let layout = layout_for(&values);
        let g = SeriesGeometry::build(&layout, &values, &GeometryStyle::default());
        assert_eq!(g.points.len(), 4);
        let els = g.line.elements();
        assert_eq!(els.len(), 4);
        assert_eq!(els[0], PathEl::MoveTo(g.points[0]));
        for i in 1..4 {
            assert_eq!(els[i], PathEl::LineTo(g.points[i]));
        }
        assert!(g.points.windows(2).all(|w| w[0].x < w[1].x));
    }

    #[test]
    fn single_point_series_has_one_vertex() {
        let layout = layout_for(&[5.0]);
        let g = SeriesGeometry::build(&layout, &[5.0], &GeometryStyle::default());
        assert_eq!(g.points.len(), 1);
        assert_eq!(g.line.elements(), &[PathEl::MoveTo(g.points[0])]);
        assert_eq!(g.dots.len(), 1);
        let area = g.area.expect("area should be built");
        assert_eq!(area.elements().len(), 5);
    }

    #[test]
    fn area_closes_against_the_zero_line() {
        let values = [2.0, 6.0, 4.0];
        let layout = layout_for(&values);
        let g = SeriesGeometry::build(&layout, &values, &GeometryStyle::default());
        let base = layout.baseline_y();
        let area = g.area.expect("area should be built");
        let els = area.elements();
        let first = g.points[0];
        let last = g.points[2];
        assert_eq!(els[0], PathEl::MoveTo(Point::new(first.x, base)));
        assert_eq!(els[1], PathEl::LineTo(first));
        assert_eq!(els[3], PathEl::LineTo(last));
        assert_eq!(els[4], PathEl::LineTo(Point::new(last.x, base)));
        assert_eq!(els[5], PathEl::LineTo(Point::new(first.x, base)));
        assert_eq!(els[6], PathEl::ClosePath);
    }

    #[test]
    fn area_and_dots_can_be_disabled() {
        let values = [1.0, 2.0];
        let layout = layout_for(&values);
        let style = GeometryStyle {
            area: false,
            dots: false,
            ..GeometryStyle::default()
        };
        let g = SeriesGeometry::build(&layout, &values, &style);
        assert!(g.area.is_none());
        assert!(g.dots.is_empty());
        assert_eq!(g.points.len(), 2);
    }

    #[test]
    fn dots_are_centered_on_vertices() {
        let values = [1.0, 3.0];
        let layout = layout_for(&values);
        let style = GeometryStyle {
            outer_radius: 6.0,
            inner_radius: 4.0,
            ..GeometryStyle::default()
        };
        let g = SeriesGeometry::build(&layout, &values, &style);
        for (dot, p) in g.dots.iter().zip(&g.points) {
            assert_eq!(dot.center, *p);
            let frame = dot.frame();
            assert_eq!(frame.origin(), Point::new(p.x - 6.0, p.y - 6.0));
            assert!((frame.width() - 12.0).abs() < 1e-9);
            assert!((frame.height() - 12.0).abs() < 1e-9);
            assert_eq!(dot.inner_circle().radius, 4.0);
        }
    }
}
