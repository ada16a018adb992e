// Copyright 2025 the Linechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::RefCell;

use kurbo::{BezPath, Circle, Rect};
use peniko::Brush;
use peniko::color::palette::css;

use crate::{
    AxisConfig, CATEGORY10, ChartConfig, ChartError, DrawOp, DrawingBackend, Label, LayoutError,
    LineChart, Palette, PaletteError, StrokeStyle, lighten, z_order,
};

#[derive(Debug, PartialEq)]
enum Call {
    Clear(Rect),
    Stroke(StrokeStyle),
    Fill(Brush),
    Circle(Circle, Brush),
    Label(String),
}

#[derive(Debug, Default)]
struct Recorder {
    calls: Vec<Call>,
}

impl DrawingBackend for Recorder {
    fn clear(&mut self, rect: Rect) {
        self.calls.push(Call::Clear(rect));
    }

    fn stroke_path(&mut self, _path: &BezPath, style: &StrokeStyle) {
        self.calls.push(Call::Stroke(style.clone()));
    }

    fn fill_path(&mut self, _path: &BezPath, brush: &Brush) {
        self.calls.push(Call::Fill(brush.clone()));
    }

    fn fill_circle(&mut self, circle: Circle, brush: &Brush) {
        self.calls.push(Call::Circle(circle, brush.clone()));
    }

    fn draw_label(&mut self, label: &Label, _brush: &Brush) {
        self.calls.push(Call::Label(label.text.clone()));
    }
}

fn sample_chart() -> LineChart {
    let mut chart = LineChart::new((300.0, 200.0));
    chart.add_series([3.0, 4.0, 9.0, 11.0, 13.0, 15.0]).unwrap();
    chart.add_series([5.0, 4.0, 3.0, 6.0, 6.0, 7.0]).unwrap();
    chart
}

#[test]
fn pointer_event_notifies_callback_and_highlights() {
    let mut chart = sample_chart();
    let seen: Rc<RefCell<Vec<(usize, Vec<f64>)>>> = Rc::default();
    let sink = Rc::clone(&seen);
    chart.set_on_data_point_selected(move |index, values| {
        sink.borrow_mut().push((index, values.to_vec()));
    });

    // Drawing width 270 over indices 0..=5: 54px per index, plot starts at 15.
    let sel = chart.on_pointer_event(15.0 + 2.0 * 54.0 + 10.0).unwrap();
    assert_eq!(sel.index, 2);
    assert_eq!(chart.highlighted(), Some(2));

    chart.on_pointer_event(-400.0).unwrap();
    chart.on_pointer_event(4000.0).unwrap();
    assert_eq!(chart.highlighted(), Some(5));

    assert_eq!(
        *seen.borrow(),
        vec![
            (2, vec![9.0, 3.0]),
            (0, vec![3.0, 5.0]),
            (5, vec![15.0, 7.0]),
        ]
    );
}

#[test]
fn pointer_event_without_data_is_an_error() {
    let mut chart = LineChart::new((300.0, 200.0));
    let calls = Rc::new(RefCell::new(0_usize));
    let sink = Rc::clone(&calls);
    chart.set_on_data_point_selected(move |_, _| *sink.borrow_mut() += 1);
    assert_eq!(
        chart.on_pointer_event(10.0),
        Err(ChartError::Layout(LayoutError::NoData))
    );
    assert_eq!(*calls.borrow(), 0);
    assert_eq!(chart.highlighted(), None);
}

#[test]
fn clearing_series_clears_highlight_and_blanks_the_chart() {
    let mut chart = sample_chart();
    chart.on_pointer_event(100.0).unwrap();
    assert!(chart.highlighted().is_some());

    chart.clear_series();
    assert_eq!(chart.highlighted(), None);
    assert!(chart.series().is_empty());

    let mut rec = Recorder::default();
    chart.draw(&mut rec).unwrap();
    assert_eq!(rec.calls, vec![Call::Clear(Rect::new(0.0, 0.0, 300.0, 200.0))]);
}

#[test]
fn scene_is_ordered_by_layer() {
    let chart = sample_chart();
    let scene = chart.scene().unwrap();
    assert!(!scene.is_empty());
    assert!(scene.windows(2).all(|w| w[0].z_index <= w[1].z_index));

    let first = |z: i32| scene.iter().position(|item| item.z_index == z);
    let grid = first(z_order::GRID_LINES).unwrap();
    let fill = first(z_order::SERIES_FILL).unwrap();
    let line = first(z_order::SERIES_STROKE).unwrap();
    let dots = first(z_order::SERIES_POINTS).unwrap();
    let axes = first(z_order::AXIS_RULES).unwrap();
    let labels = first(z_order::AXIS_LABELS).unwrap();
    assert!(grid < fill && fill < line && line < dots && dots < axes && axes < labels);
}

#[test]
fn series_take_palette_colors_in_order() {
    let chart = sample_chart();
    let scene = chart.scene().unwrap();
    let strokes: Vec<&StrokeStyle> = scene
        .iter()
        .filter(|item| item.z_index == z_order::SERIES_STROKE)
        .filter_map(|item| match &item.op {
            DrawOp::StrokePath { style, .. } => Some(style),
            _ => None,
        })
        .collect();
    assert_eq!(strokes.len(), 2);
    assert_eq!(strokes[0], &StrokeStyle::solid(CATEGORY10[0], 2.0));
    assert_eq!(strokes[1], &StrokeStyle::solid(CATEGORY10[1], 2.0));

    let fills: Vec<&Brush> = scene
        .iter()
        .filter_map(|item| match &item.op {
            DrawOp::FillPath { brush, .. } => Some(brush),
            _ => None,
        })
        .collect();
    assert_eq!(fills[0], &Brush::from(CATEGORY10[0].with_alpha(0.2)));
}

#[test]
fn palette_colors_cycle_past_the_end() {
    let mut chart = LineChart::new((300.0, 200.0))
        .with_config(ChartConfig::default().with_palette(Palette::new([css::RED])));
    chart.add_series([1.0, 2.0]).unwrap();
    chart.add_series([2.0, 1.0]).unwrap();
    let scene = chart.scene().unwrap();
    let red_lines = scene
        .iter()
        .filter(|item| {
            matches!(&item.op, DrawOp::StrokePath { style, .. }
                if item.z_index == z_order::SERIES_STROKE && style.brush == Brush::from(css::RED))
        })
        .count();
    assert_eq!(red_lines, 2);

    chart.config_mut().palette = Palette::new(Vec::<peniko::Color>::new());
    assert_eq!(
        chart.scene(),
        Err(ChartError::Palette(PaletteError::Empty))
    );
}

#[test]
fn highlighted_dot_is_enlarged_and_lightened() {
    let mut chart = sample_chart();
    chart.config_mut().dots.outer_radius_highlighted = 9.0;
    chart.on_pointer_event(15.0).unwrap();

    let mut rec = Recorder::default();
    chart.draw(&mut rec).unwrap();
    let outer: Vec<&Call> = rec
        .calls
        .iter()
        .filter(|c| matches!(c, Call::Circle(circle, _) if circle.radius == 9.0))
        .collect();
    assert_eq!(outer.len(), 2);
    assert_eq!(
        outer[0],
        &Call::Circle(
            Circle::new((15.0, outer_center_y(&chart, 3.0)), 9.0),
            Brush::from(lighten(CATEGORY10[0]))
        )
    );

    let plain = rec
        .calls
        .iter()
        .filter(|c| matches!(c, Call::Circle(circle, brush) if circle.radius == 6.0 && *brush == Brush::from(css::WHITE)))
        .count();
    assert_eq!(plain, 10);
}

fn outer_center_y(chart: &LineChart, value: f64) -> f64 {
    chart.layout().unwrap().point(0, value).y
}

#[test]
fn draw_clears_then_paints_the_scene() {
    let chart = sample_chart();
    let mut rec = Recorder::default();
    chart.draw(&mut rec).unwrap();
    assert_eq!(rec.calls[0], Call::Clear(Rect::new(0.0, 0.0, 300.0, 200.0)));
    assert_eq!(rec.calls.len(), chart.scene().unwrap().len() + 1);

    let labels: Vec<&str> = rec
        .calls
        .iter()
        .filter_map(|c| match c {
            Call::Label(text) => Some(text.as_str()),
            _ => None,
        })
        .take(6)
        .collect();
    assert_eq!(labels, vec!["0", "1", "2", "3", "4", "5"]);
}

#[test]
fn hidden_guides_leave_only_series() {
    let hidden = AxisConfig::default()
        .with_grid(false)
        .with_axis(false)
        .with_labels(false);
    let mut chart = sample_chart();
    chart.set_config(
        ChartConfig::default()
            .with_x_axis(hidden.clone())
            .with_y_axis(hidden)
            .with_area(false),
    );
    let scene = chart.scene().unwrap();
    assert!(scene.iter().all(|item| {
        item.z_index == z_order::SERIES_STROKE || item.z_index == z_order::SERIES_POINTS
    }));
    // Two lines plus two discs per data point.
    assert_eq!(scene.len(), 2 + 2 * 2 * 6);
}

#[test]
fn invalid_bounds_surface_as_layout_errors() {
    let mut chart = sample_chart();
    chart.set_drawing_size(10.0, 10.0);
    assert_eq!(
        chart.scene(),
        Err(ChartError::Layout(LayoutError::InvalidBounds))
    );
    let mut rec = Recorder::default();
    assert!(chart.draw(&mut rec).is_err());
    assert!(rec.calls.is_empty());
}

#[test]
fn chart_error_wraps_sources() {
    use core::error::Error as _;

    let err = ChartError::from(LayoutError::NoData);
    assert!(err.source().is_some());
    assert_eq!(
        std::format!("{err}"),
        "layout failed: chart has no series to lay out"
    );
}
