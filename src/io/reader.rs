use std::path::Path;

use image::DynamicImage;
use tracing::{debug, info};

use crate::core::raster::Raster;
use crate::error::{Error, Result};

/// Convert any decoded image to an 8-bit RGB raster. Alpha is dropped, gray is
/// replicated and 16-bit or float samples are scaled down.
pub fn raster_from_dynamic(image: DynamicImage) -> Result<Raster> {
    debug!("Decoded color type: {:?}", image.color());
    let rgb = image.into_rgb8();
    let (cols, rows) = rgb.dimensions();
    Raster::from_rgb_vec(cols as usize, rows as usize, rgb.into_raw()).map_err(Error::Processing)
}

/// Decode the image at `path` into a raster.
pub fn load_raster(path: &Path) -> Result<Raster> {
    let image = image::open(path)?;
    info!(
        "Loaded {:?}: {}x{}",
        path,
        image.width(),
        image.height()
    );
    raster_from_dynamic(image)
}
