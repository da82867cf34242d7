use std::borrow::Borrow;
use std::path::Path;

use ndarray::Array2;
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::debug;

use crate::core::processing::colorspace::AxisRange;
use crate::core::processing::contour::{contour_levels, iso_segments, profile_indices};
use crate::core::raster::Raster;
use crate::render::view::{CANVAS_SIZE, Camera, PANEL_GRID, far_bound, surface_camera};

const CONTOUR_LEVELS: usize = 8;
const PROFILE_COUNT: usize = 8;
const SURFACE_ALPHA: f64 = 0.6;

const CHANNEL_NAMES: [&str; 3] = ["R", "G", "B"];
const CHANNEL_TONES: [RGBColor; 3] = [
    RGBColor(220, 0, 0),
    RGBColor(0, 128, 0),
    RGBColor(0, 0, 220),
];

/// Hue ramp from blue (0.0) to red (1.0) shared by every contour projection.
pub fn level_color(t: f64) -> HSLColor {
    HSLColor((1.0 - t.clamp(0.0, 1.0)) * 0.66, 0.9, 0.45)
}

/// Intensity plane of one channel with its placement in image coordinates.
/// Columns are the first horizontal axis (chart z), rows the second (chart x).
struct ChannelGrid {
    values: Array2<f64>,
    origin: (usize, usize),
    value_range: AxisRange,
}

impl ChannelGrid {
    fn new(raster: &Raster, channel: usize, origin: (usize, usize)) -> Self {
        let values = raster.channel(channel).mapv(f64::from);
        let value_range = AxisRange::of(values.iter().copied());
        Self {
            values,
            origin,
            value_range,
        }
    }

    fn rows(&self) -> usize {
        self.values.dim().0
    }

    fn cols(&self) -> usize {
        self.values.dim().1
    }

    fn col_coord(&self, col: usize) -> f64 {
        (self.origin.0 + col) as f64
    }

    /// Rows are plotted negated so row 0 ends up at the top of the axis.
    fn row_coord(&self, row: usize) -> f64 {
        -((self.origin.1 + row) as f64)
    }

    fn col_range(&self) -> AxisRange {
        AxisRange::of([self.col_coord(0), self.col_coord(self.cols().saturating_sub(1))])
    }

    fn row_range(&self) -> AxisRange {
        AxisRange::of([self.row_coord(0), self.row_coord(self.rows().saturating_sub(1))])
    }

    /// Height at the grid node closest to chart coordinates `(x, z)`.
    fn value_at(&self, x: impl Borrow<f64>, z: impl Borrow<f64>) -> f64 {
        let row = (-x.borrow() - self.origin.1 as f64).round().max(0.0) as usize;
        let col = (z.borrow() - self.origin.0 as f64).round().max(0.0) as usize;
        self.values[[row.min(self.rows() - 1), col.min(self.cols() - 1)]]
    }

    /// Chart position of a height sample given in plotted row/column coordinates.
    fn chart_point(row: f64, col: f64, value: f64) -> (f64, f64, f64) {
        (row, value, col)
    }
}

/// Render R, G and B intensity surfaces for two camera rows into a single PNG.
/// `origin` is the `(col, row)` of the raster's first pixel in the source image.
pub fn draw_channel_surfaces(
    output: &Path,
    raster: &Raster,
    origin: (usize, usize),
    with_contours: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(output, CANVAS_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let grids: Vec<ChannelGrid> = (0..Raster::CHANNELS)
        .map(|channel| ChannelGrid::new(raster, channel, origin))
        .collect();

    let panels = root.split_evenly(PANEL_GRID);
    for (index, area) in panels.iter().enumerate() {
        let (view_row, channel) = (index / PANEL_GRID.1, index % PANEL_GRID.1);
        draw_surface_panel(
            area,
            &grids[channel],
            channel,
            surface_camera(view_row),
            with_contours,
        )?;
    }

    root.present()?;
    Ok(())
}

fn draw_surface_panel(
    area: &DrawingArea<BitMapBackend, Shift>,
    grid: &ChannelGrid,
    channel: usize,
    camera: Camera,
    with_contours: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (cols, rows, values) = (grid.col_range(), grid.row_range(), grid.value_range);

    let mut chart = ChartBuilder::on(area)
        .caption(
            format!(
                "{} channel, azim {:.0}  (x: row, z: col)",
                CHANNEL_NAMES[channel], camera.azimuth_deg
            ),
            ("sans-serif", 18),
        )
        .margin(8)
        .build_cartesian_3d(rows.span(), values.span(), cols.span())?;

    chart.with_projection(|pb| camera.projection(pb));

    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.1))
        .max_light_lines(3)
        .x_formatter(&|v| format!("{:.0}", -v))
        .y_formatter(&|v| format!("{v:.0}"))
        .z_formatter(&|v| format!("{v:.0}"))
        .draw()?;

    if with_contours {
        chart.draw_series(
            contour_projection_paths(grid, camera)
                .into_iter()
                .map(|(path, t)| PathElement::new(path, level_color(t).stroke_width(1))),
        )?;
    }

    let xs: Vec<f64> = (0..grid.rows()).map(|r| grid.row_coord(r)).collect();
    let zs: Vec<f64> = (0..grid.cols()).map(|c| grid.col_coord(c)).collect();
    chart.draw_series(
        SurfaceSeries::xoz(xs.into_iter(), zs.into_iter(), |x, z| grid.value_at(x, z))
            .style(CHANNEL_TONES[channel].mix(SURFACE_ALPHA).filled()),
    )?;

    Ok(())
}

/// 3D polyline with its color-map position in [0, 1].
type ProjectedPath = (Vec<(f64, f64, f64)>, f64);

/// Flatten iso-intensity lines onto the floor, and column and row profiles
/// onto the column and row walls farther from `camera`.
fn contour_projection_paths(grid: &ChannelGrid, camera: Camera) -> Vec<ProjectedPath> {
    let values = grid.value_range;
    let (col_range, row_range) = (grid.col_range(), grid.row_range());
    let (toward_col, toward_row) = camera.horizontal_direction();
    let col_plane = far_bound(col_range, toward_col);
    let row_plane = far_bound(row_range, toward_row);
    let normalize = |v: f64, range: AxisRange| (v - range.min) / (range.max - range.min);
    let mut paths = Vec::new();

    for level in contour_levels(values.min, values.max, CONTOUR_LEVELS) {
        let segments = iso_segments(grid.values.view(), level);
        debug!("Contour level {:.1}: {} segments", level, segments.len());
        let to_plot = |(c, r): (f64, f64)| {
            ChannelGrid::chart_point(
                -(grid.origin.1 as f64 + r),
                grid.origin.0 as f64 + c,
                values.min,
            )
        };
        paths.extend(segments.into_iter().map(|s| {
            (
                vec![to_plot(s.from), to_plot(s.to)],
                normalize(level, values),
            )
        }));
    }

    for col in profile_indices(grid.cols(), PROFILE_COUNT) {
        let path = (0..grid.rows())
            .map(|row| {
                ChannelGrid::chart_point(grid.row_coord(row), col_plane, grid.values[[row, col]])
            })
            .collect();
        paths.push((path, normalize(grid.col_coord(col), col_range)));
    }

    for row in profile_indices(grid.rows(), PROFILE_COUNT) {
        let path = (0..grid.cols())
            .map(|col| {
                ChannelGrid::chart_point(row_plane, grid.col_coord(col), grid.values[[row, col]])
            })
            .collect();
        paths.push((path, normalize(grid.row_coord(row), row_range)));
    }

    paths
}
