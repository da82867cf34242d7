use tracing::debug;

use crate::core::raster::Raster;
use crate::error::{Error, Result};
use crate::types::Coords;

/// Sub-image cut out of a larger raster, with the absolute position of its
/// top-left pixel so plot axes can keep original coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Cropped {
    pub raster: Raster,
    /// `(col, row)` of the window's first pixel in the source image
    pub origin: (usize, usize),
}

/// Clamp `[center - size / 2, center - size / 2 + size)` to `[0, extent]`.
/// Returns `None` when nothing of the span lies inside.
fn clamp_span(center: i64, size: u32, extent: usize) -> Option<(usize, usize)> {
    let size = size as i64;
    let start = center - size.div_euclid(2);
    let end = start + size;

    let start = start.max(0);
    let end = end.min(extent as i64);
    if end - start <= 0 {
        return None;
    }
    Some((start as usize, end as usize))
}

/// Crop a `size`-sided window centered at `center`, clamped to the image bounds.
pub fn crop_window(raster: &Raster, center: Coords, size: u32) -> Result<Cropped> {
    let (width, height) = (raster.width(), raster.height());
    let out_of_bounds = || Error::WindowOutOfBounds {
        center,
        size,
        width,
        height,
    };

    let (row_start, row_end) = clamp_span(center.y, size, height).ok_or_else(out_of_bounds)?;
    let (col_start, col_end) = clamp_span(center.x, size, width).ok_or_else(out_of_bounds)?;

    debug!(
        "Crop window rows {}..{} cols {}..{}",
        row_start, row_end, col_start, col_end
    );

    Ok(Cropped {
        raster: raster.region(row_start..row_end, col_start..col_end),
        origin: (col_start, row_start),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indexed(cols: usize, rows: usize) -> Raster {
        let mut rgb = Vec::with_capacity(cols * rows * 3);
        for r in 0..rows {
            for c in 0..cols {
                rgb.extend_from_slice(&[c as u8, r as u8, ((c + r) % 256) as u8]);
            }
        }
        Raster::from_rgb_vec(cols, rows, rgb).unwrap()
    }

    #[test]
    fn window_inside_tall_image() {
        let img = indexed(50, 200);
        let cropped = crop_window(&img, Coords::new(25, 100), 32).unwrap();
        assert_eq!(cropped.origin, (9, 84));
        assert_eq!((cropped.raster.width(), cropped.raster.height()), (32, 32));
        assert_eq!(cropped.raster.pixel(0, 0), img.pixel(84, 9));
        assert_eq!(cropped.raster.pixel(31, 31), img.pixel(115, 40));
    }

    #[test]
    fn window_clamped_at_edges() {
        let img = indexed(20, 10);
        let cropped = crop_window(&img, Coords::new(0, 9), 8).unwrap();
        // cols [-4, 4) -> [0, 4), rows [5, 13) -> [5, 10)
        assert_eq!(cropped.origin, (0, 5));
        assert_eq!((cropped.raster.width(), cropped.raster.height()), (4, 5));
    }

    #[test]
    fn window_larger_than_image_yields_whole_image() {
        let img = indexed(12, 7);
        let cropped = crop_window(&img, Coords::new(6, 3), 64).unwrap();
        assert_eq!(cropped.origin, (0, 0));
        assert_eq!(cropped.raster, img);
    }

    #[test]
    fn odd_window_uses_floor_half() {
        let img = indexed(40, 40);
        let cropped = crop_window(&img, Coords::new(10, 20), 5).unwrap();
        // 5 / 2 = 2 -> cols [8, 13), rows [18, 23)
        assert_eq!(cropped.origin, (8, 18));
        assert_eq!((cropped.raster.width(), cropped.raster.height()), (5, 5));
    }

    #[test]
    fn window_outside_image_is_an_error() {
        let img = indexed(100, 100);
        let err = crop_window(&img, Coords::new(200, 200), 32).unwrap_err();
        let msg = err.to_string();
        assert!(matches!(
            err,
            Error::WindowOutOfBounds {
                size: 32,
                width: 100,
                height: 100,
                ..
            }
        ));
        assert!(msg.contains("(200, 200)"), "{msg}");
        assert!(msg.contains("32"), "{msg}");
        assert!(msg.contains("100x100"), "{msg}");
    }

    #[test]
    fn window_outside_on_one_axis_only_is_an_error() {
        let img = indexed(30, 30);
        assert!(crop_window(&img, Coords::new(10, -40), 16).is_err());
        assert!(crop_window(&img, Coords::new(46, 10), 32).is_err());
        assert!(crop_window(&img, Coords::new(10, 10), 0).is_err());
    }

    #[test]
    fn origin_maps_back_to_absolute_pixels() {
        let img = indexed(64, 48);
        let cropped = crop_window(&img, Coords::new(60, 3), 16).unwrap();
        let (x0, y0) = cropped.origin;
        for r in 0..cropped.raster.height() {
            for c in 0..cropped.raster.width() {
                assert_eq!(cropped.raster.pixel(r, c), img.pixel(r + y0, c + x0));
            }
        }
    }
}
