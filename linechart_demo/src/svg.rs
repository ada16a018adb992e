// Copyright 2025 the Linechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG drawing backend for `linechart_demo`.

use std::fmt::Write as _;

use kurbo::{BezPath, Circle, Rect};
use linechart::{DrawingBackend, Label, StrokeStyle};
use peniko::Brush;

/// Label font size in pixels.
const FONT_SIZE: f64 = 10.0;

/// Collects drawing calls as SVG elements.
#[derive(Debug, Default)]
pub(crate) struct SvgBackend {
    view_box: Option<Rect>,
    body: String,
}

impl SvgBackend {
    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = self
            .view_box
            .unwrap_or_else(|| Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        let _ = writeln!(
            out,
            r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        );
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

impl DrawingBackend for SvgBackend {
    fn clear(&mut self, rect: Rect) {
        self.view_box = Some(rect);
        self.body.clear();
    }

    fn stroke_path(&mut self, path: &BezPath, style: &StrokeStyle) {
        let _ = write!(self.body, r#"<path d="{}" fill="none""#, path.to_svg());
        write_paint_attr(&mut self.body, "stroke", &style.brush);
        let _ = writeln!(self.body, r#" stroke-width="{}"/>"#, style.stroke_width);
    }

    fn fill_path(&mut self, path: &BezPath, brush: &Brush) {
        let _ = write!(self.body, r#"<path d="{}""#, path.to_svg());
        write_paint_attr(&mut self.body, "fill", brush);
        self.body.push_str("/>\n");
    }

    fn fill_circle(&mut self, circle: Circle, brush: &Brush) {
        let _ = write!(
            self.body,
            r#"<circle cx="{}" cy="{}" r="{}""#,
            circle.center.x, circle.center.y, circle.radius
        );
        write_paint_attr(&mut self.body, "fill", brush);
        self.body.push_str("/>\n");
    }

    fn draw_label(&mut self, label: &Label, brush: &Brush) {
        let center = label.rect.center();
        let _ = write!(
            self.body,
            r#"<text x="{}" y="{}" font-size="{FONT_SIZE}" dominant-baseline="middle" text-anchor="middle""#,
            center.x, center.y
        );
        write_paint_attr(&mut self.body, "fill", brush);
        self.body.push('>');
        self.body.push_str(&escape_xml(&label.text));
        self.body.push_str("</text>\n");
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn clear_resets_body_and_sets_view_box() {
        let mut svg = SvgBackend::default();
        svg.fill_circle(Circle::new((1.0, 2.0), 3.0), &Brush::from(css::RED));
        svg.clear(Rect::new(0.0, 0.0, 40.0, 30.0));
        let out = svg.to_svg_string();
        assert!(out.contains(r#"viewBox="0 0 40 30""#));
        assert!(!out.contains("<circle"));
    }

    #[test]
    fn translucent_fills_carry_opacity() {
        let mut svg = SvgBackend::default();
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((1.0, 1.0));
        svg.fill_path(&path, &Brush::from(css::BLACK.with_alpha(0.2)));
        let out = svg.to_svg_string();
        assert!(out.contains(r##"fill="#000000""##));
        assert!(out.contains("fill-opacity="));
    }

    #[test]
    fn labels_are_escaped_and_centered() {
        let mut svg = SvgBackend::default();
        let label = Label {
            text: "<Q1 & Q2>".to_string(),
            rect: Rect::new(0.0, 0.0, 20.0, 10.0),
        };
        svg.draw_label(&label, &Brush::from(css::BLACK));
        let out = svg.to_svg_string();
        assert!(out.contains(r#"x="10" y="5""#));
        assert!(out.contains("&lt;Q1 &amp; Q2&gt;"));
    }
}
