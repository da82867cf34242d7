use std::ops::Range;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::debug;

use crate::core::processing::colorspace::LabCloud;
use crate::render::view::{
    CANVAS_SIZE, Camera, ELEVATION_DEG, PANEL_GRID, ShadowPlanes, histogram_azimuths,
};

const POINT_RADIUS: i32 = 3;
const SHADOW_MARKER: i32 = 3;
const SHADOW_ALPHA: f64 = 0.05;

/// Chart position of a Lab sample: `a` is the first horizontal axis (chart z),
/// `b` the second (chart x) and lightness is vertical (chart y).
fn chart_point(a: f64, b: f64, l: f64) -> (f64, f64, f64) {
    (b, l, a)
}

fn chart_ranges(cloud: &LabCloud) -> (Range<f64>, Range<f64>, Range<f64>) {
    (cloud.b.span(), cloud.l.span(), cloud.a.span())
}

/// Render the Lab cloud from six azimuths into a single PNG.
pub fn draw_lab_cloud(output: &Path, cloud: &LabCloud) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(output, CANVAS_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let panels = root.split_evenly(PANEL_GRID);
    for (area, azimuth) in panels.iter().zip(histogram_azimuths()) {
        draw_cloud_panel(area, cloud, Camera::new(azimuth, ELEVATION_DEG))?;
    }

    root.present()?;
    Ok(())
}

fn draw_cloud_panel(
    area: &DrawingArea<BitMapBackend, Shift>,
    cloud: &LabCloud,
    camera: Camera,
) -> Result<(), Box<dyn std::error::Error>> {
    let planes = ShadowPlanes::for_azimuth(camera.azimuth_deg, cloud.a, cloud.b, cloud.l);
    debug!("Panel azimuth {}: shadow planes {:?}", camera.azimuth_deg, planes);

    let (x_range, y_range, z_range) = chart_ranges(cloud);
    let mut chart = ChartBuilder::on(area)
        .caption(
            format!("azim {:.0}  (x: b, y: L, z: a)", camera.azimuth_deg),
            ("sans-serif", 18),
        )
        .margin(8)
        .build_cartesian_3d(x_range, y_range, z_range)?;

    chart.with_projection(|pb| camera.projection(pb));

    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.1))
        .max_light_lines(3)
        .x_formatter(&|v| format!("{v:.2}"))
        .y_formatter(&|v| format!("{v:.2}"))
        .z_formatter(&|v| format!("{v:.2}"))
        .draw()?;

    chart.draw_series(cloud.points.iter().map(|p| {
        Cross::new(
            chart_point(p.a, planes.b, p.l),
            SHADOW_MARKER,
            RED.mix(SHADOW_ALPHA).stroke_width(1),
        )
    }))?;
    chart.draw_series(cloud.points.iter().map(|p| {
        Cross::new(
            chart_point(planes.a, p.b, p.l),
            SHADOW_MARKER,
            GREEN.mix(SHADOW_ALPHA).stroke_width(1),
        )
    }))?;
    chart.draw_series(cloud.points.iter().map(|p| {
        Cross::new(
            chart_point(p.a, p.b, planes.l),
            SHADOW_MARKER,
            BLACK.mix(SHADOW_ALPHA).stroke_width(1),
        )
    }))?;

    chart.draw_series(cloud.points.iter().map(|p| {
        let [r, g, b] = p.color;
        Circle::new(
            chart_point(p.a, p.b, p.l),
            POINT_RADIUS,
            RGBColor(r, g, b).filled(),
        )
    }))?;

    Ok(())
}
