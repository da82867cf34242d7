use palette::{FromColor, Lab, LinSrgb, Srgb};
use tracing::debug;

use crate::core::raster::Raster;

/// Chroma axes are scaled by this so they land in [-1, 1].
const CHROMA_SCALE: f32 = 128.0;
/// Lightness is reported by palette in [0, 100].
const LIGHTNESS_SCALE: f32 = 100.0;
/// Half-width given to an axis whose samples are all equal.
const DEGENERATE_HALF_SPAN: f64 = 1e-3;

/// One pixel placed in normalized Lab space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabPoint {
    /// green (-1) .. red (+1)
    pub a: f64,
    /// blue (-1) .. yellow (+1)
    pub b: f64,
    /// black (0) .. white (1)
    pub l: f64,
    /// Display color of the source pixel
    pub color: [u8; 3],
}

/// Closed interval covered by one plot axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// Tightest range over `values`; equal samples get a small symmetric span
    /// so the axis never collapses.
    pub fn of(values: impl IntoIterator<Item = f64>) -> Self {
        let (mut min, mut max) = (f64::INFINITY, f64::NEG_INFINITY);
        for v in values {
            min = min.min(v);
            max = max.max(v);
        }
        if !min.is_finite() || !max.is_finite() {
            return AxisRange {
                min: -DEGENERATE_HALF_SPAN,
                max: DEGENERATE_HALF_SPAN,
            };
        }
        if max - min <= f64::EPSILON {
            return AxisRange {
                min: min - DEGENERATE_HALF_SPAN,
                max: max + DEGENERATE_HALF_SPAN,
            };
        }
        AxisRange { min, max }
    }

    pub fn span(&self) -> std::ops::Range<f64> {
        self.min..self.max
    }
}

/// Point cloud of a whole raster together with its per-axis bounds.
#[derive(Debug, Clone)]
pub struct LabCloud {
    pub points: Vec<LabPoint>,
    pub a: AxisRange,
    pub b: AxisRange,
    pub l: AxisRange,
}

/// Convert a single sRGB pixel to normalized Lab (D65).
pub fn rgb_to_lab_point(rgb: [u8; 3]) -> LabPoint {
    let srgb: Srgb<f32> = Srgb::new(rgb[0], rgb[1], rgb[2]).into_format();
    let lin: LinSrgb<f32> = srgb.into_linear();
    let lab: Lab = Lab::from_color(lin);

    LabPoint {
        a: (lab.a / CHROMA_SCALE).clamp(-1.0, 1.0) as f64,
        b: (lab.b / CHROMA_SCALE).clamp(-1.0, 1.0) as f64,
        l: (lab.l / LIGHTNESS_SCALE).clamp(0.0, 1.0) as f64,
        color: rgb,
    }
}

/// Project every pixel of `raster` into normalized Lab space.
pub fn project_to_lab(raster: &Raster) -> LabCloud {
    let points: Vec<LabPoint> = raster.pixels().map(rgb_to_lab_point).collect();

    let a = AxisRange::of(points.iter().map(|p| p.a));
    let b = AxisRange::of(points.iter().map(|p| p.b));
    let l = AxisRange::of(points.iter().map(|p| p.l));
    debug!(
        "Lab cloud: {} points, a {:.3}..{:.3}, b {:.3}..{:.3}, L {:.3}..{:.3}",
        points.len(),
        a.min,
        a.max,
        b.min,
        b.max,
        l.min,
        l.max
    );

    LabCloud { points, a, b, l }
}
