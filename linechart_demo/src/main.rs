// Copyright 2025 the Linechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line chart demo.
//!
//! Renders two series to `linechart_demo.svg` (or the path given as the first argument), after
//! replaying a scripted pointer session that logs each selection.
//!
//! Set `RUST_LOG=linechart=debug` to see the library's own events.

mod svg;

use linechart::{AxisConfig, ChartConfig, LineChart};
use tracing::info;
use tracing_subscriber::EnvFilter;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 360.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let out_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "linechart_demo.svg".to_string());

    let config = ChartConfig::default().with_x_axis(
        AxisConfig::default().with_label_values(["Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]),
    );
    let mut chart = LineChart::new((WIDTH, HEIGHT)).with_config(config);
    chart
        .add_series([3.0, 4.0, 9.0, 11.0, 13.0, 15.0])
        .expect("first series is valid");
    chart
        .add_series([5.0, 4.0, 3.0, 6.0, 6.0, 7.0])
        .expect("second series is valid");

    chart.set_on_data_point_selected(|index, values| {
        info!(index, ?values, "data point selected");
    });

    // A pointer sweeping left to right, including positions outside the plot.
    for x in [-20.0, 15.0, 140.0, 333.0, 500.0, WIDTH, WIDTH + 50.0] {
        if let Err(err) = chart.on_pointer_event(x) {
            tracing::warn!(%err, x, "pointer event ignored");
        }
    }

    let mut backend = svg::SvgBackend::default();
    chart.draw(&mut backend).expect("chart bounds are valid");
    std::fs::write(&out_path, backend.to_svg_string())
        .unwrap_or_else(|err| panic!("write {out_path}: {err}"));
    info!(path = %out_path, highlighted = ?chart.highlighted(), "wrote chart");
}
