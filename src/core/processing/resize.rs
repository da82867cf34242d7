use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use tracing::{debug, info};

use crate::core::raster::Raster;
use crate::error::{Error, Result};

/// Target `(cols, rows)` so the longer side equals `max_size`, or `None` when the
/// image already fits strictly below it. The shorter side is rounded up.
pub fn calculate_fit_dimensions(
    original_cols: usize,
    original_rows: usize,
    max_size: usize,
) -> Option<(usize, usize)> {
    if original_cols.max(original_rows) < max_size {
        return None;
    }

    // Square images take the second branch: both sides end up at max_size.
    if original_cols > original_rows {
        let new_rows = (max_size * original_rows).div_ceil(original_cols);
        Some((max_size, new_rows))
    } else {
        let new_cols = (max_size * original_cols).div_ceil(original_rows);
        Some((new_cols, max_size))
    }
}

pub fn resize_rgb_image(
    data: &[u8],
    original_cols: usize,
    original_rows: usize,
    target_cols: usize,
    target_rows: usize,
) -> Result<Vec<u8>> {
    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Bilinear));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        original_cols as u32,
        original_rows as u32,
        data.to_vec(),
        PixelType::U8x3,
    )
    .map_err(|e| Error::Processing(e.to_string()))?;
    let mut dst_image = Image::new(target_cols as u32, target_rows as u32, PixelType::U8x3);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(|e| Error::Processing(e.to_string()))?;

    Ok(dst_image.into_vec())
}

/// Shrink `raster` so its longer side equals `max_size`, preserving aspect ratio.
/// Images whose longer side is already below `max_size` are returned unchanged.
pub fn fit_image_size(raster: &Raster, max_size: u32) -> Result<Raster> {
    let (cols, rows) = (raster.width(), raster.height());
    let Some((new_cols, new_rows)) = calculate_fit_dimensions(cols, rows, max_size as usize)
    else {
        debug!("Image {}x{} already below {}, keeping size", cols, rows, max_size);
        return Ok(raster.clone());
    };

    info!("Shrink image size to {}x{}", new_cols, new_rows);

    let resized = resize_rgb_image(&raster.to_rgb_vec(), cols, rows, new_cols, new_rows)?;
    Raster::from_rgb_vec(new_cols, new_rows, resized).map_err(Error::Processing)
}
