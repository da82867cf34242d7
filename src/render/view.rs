//! Panel layout and camera placement shared by all figures.
//!
//! Azimuth is measured from the first horizontal axis of a figure toward the
//! second one. Charts put that first axis on plotters' `z`, the second on `x`
//! and the vertical one on `y`; with that layout the plotters yaw equals the
//! azimuth and the picture is not mirrored.
use plotters::coord::ranged3d::{ProjectionMatrix, ProjectionMatrixBuilder};

use crate::core::processing::colorspace::AxisRange;

/// Figure size in pixels (19.2 x 9.6 inches at 100 dpi).
pub const CANVAS_SIZE: (u32, u32) = (1920, 960);
/// Panels as `(rows, cols)`.
pub const PANEL_GRID: (usize, usize) = (2, 3);
pub const ELEVATION_DEG: f64 = 30.0;
pub const PROJECTION_SCALE: f64 = 0.8;

pub const HISTOGRAM_VIEWS: usize = PANEL_GRID.0 * PANEL_GRID.1;
const HISTOGRAM_AZIMUTH_END: f64 = 180.0;

/// Viewing angles of one 3D panel, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub azimuth_deg: f64,
    pub elevation_deg: f64,
}

impl Camera {
    pub fn new(azimuth_deg: f64, elevation_deg: f64) -> Self {
        Self {
            azimuth_deg,
            elevation_deg,
        }
    }

    /// Rotation around the vertical axis, radians.
    pub fn yaw(&self) -> f64 {
        self.azimuth_deg.to_radians()
    }

    /// Tilt above the horizontal plane, radians.
    pub fn pitch(&self) -> f64 {
        self.elevation_deg.to_radians()
    }

    /// Horizontal direction from the scene toward the camera, as components
    /// along the first and second horizontal axes.
    pub fn horizontal_direction(&self) -> (f64, f64) {
        let azimuth = self.azimuth_deg.to_radians();
        (azimuth.cos(), azimuth.sin())
    }

    pub fn projection(&self, mut pb: ProjectionMatrixBuilder) -> ProjectionMatrix {
        pb.yaw = self.yaw();
        pb.pitch = self.pitch();
        pb.scale = PROJECTION_SCALE;
        pb.into_matrix()
    }
}

/// Bound of `range` away from a camera whose direction along that axis is `toward_camera`.
pub fn far_bound(range: AxisRange, toward_camera: f64) -> f64 {
    if toward_camera > 0.0 { range.min } else { range.max }
}

/// Azimuths evenly spaced over [0, 180], one per histogram panel.
pub fn histogram_azimuths() -> [f64; HISTOGRAM_VIEWS] {
    let step = HISTOGRAM_AZIMUTH_END / (HISTOGRAM_VIEWS - 1) as f64;
    std::array::from_fn(|i| step * i as f64)
}

/// Camera for a row of surface panels: 45 degrees for the first row, 135 for the second.
pub fn surface_camera(view_row: usize) -> Camera {
    let azimuth = 45.0 + if view_row == 0 { 0.0 } else { 90.0 };
    Camera::new(azimuth, ELEVATION_DEG)
}

/// Positions of the three planes that receive flattened copies of the cloud.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowPlanes {
    /// `b` coordinate of the plane holding `(a, L)` shadows
    pub b: f64,
    /// `a` coordinate of the plane holding `(b, L)` shadows
    pub a: f64,
    /// `L` coordinate of the plane holding `(a, b)` shadows
    pub l: f64,
}

impl ShadowPlanes {
    /// Only exercised for azimuths in [0, 180]; other angles follow the same
    /// range tests without any guarantee of landing on the far side.
    pub fn for_azimuth(azimuth_deg: f64, a: AxisRange, b: AxisRange, l: AxisRange) -> Self {
        let b_plane = if (0.0..=180.0).contains(&azimuth_deg) {
            b.min
        } else {
            b.max
        };
        let a_plane = if (-90.0..=90.0).contains(&azimuth_deg) {
            a.min
        } else {
            a.max
        };
        ShadowPlanes {
            b: b_plane,
            a: a_plane,
            l: l.min,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: AxisRange = AxisRange { min: -0.5, max: 0.4 };
    const B: AxisRange = AxisRange { min: -0.3, max: 0.7 };
    const L: AxisRange = AxisRange { min: 0.1, max: 0.9 };

    #[test]
    fn six_azimuths_from_0_to_180() {
        assert_eq!(
            histogram_azimuths(),
            [0.0, 36.0, 72.0, 108.0, 144.0, 180.0]
        );
    }

    #[test]
    fn shadow_planes_for_histogram_views() {
        let expected_a = [A.min, A.min, A.min, A.max, A.max, A.max];
        for (azimuth, a_plane) in histogram_azimuths().into_iter().zip(expected_a) {
            let planes = ShadowPlanes::for_azimuth(azimuth, A, B, L);
            assert_eq!(planes.b, B.min, "azimuth {azimuth}");
            assert_eq!(planes.a, a_plane, "azimuth {azimuth}");
            assert_eq!(planes.l, L.min);
        }
    }

    #[test]
    fn shadow_planes_flip_outside_documented_range() {
        let planes = ShadowPlanes::for_azimuth(-45.0, A, B, L);
        assert_eq!((planes.a, planes.b), (A.min, B.max));
        let planes = ShadowPlanes::for_azimuth(270.0, A, B, L);
        assert_eq!((planes.a, planes.b), (A.max, B.max));
    }

    #[test]
    fn camera_direction_follows_azimuth() {
        let (first, second) = Camera::new(0.0, ELEVATION_DEG).horizontal_direction();
        assert_eq!((first, second), (1.0, 0.0));
        let (first, second) = Camera::new(135.0, ELEVATION_DEG).horizontal_direction();
        assert!(first < 0.0 && second > 0.0);
        assert_eq!(far_bound(A, 1.0), A.min);
        assert_eq!(far_bound(A, -0.5), A.max);
    }

    #[test]
    fn surface_rows_use_45_and_135() {
        assert_eq!(surface_camera(0), Camera::new(45.0, 30.0));
        assert_eq!(surface_camera(1), Camera::new(135.0, 30.0));
        assert!((surface_camera(0).pitch() - std::f64::consts::FRAC_PI_6).abs() < 1e-12);
    }
}
