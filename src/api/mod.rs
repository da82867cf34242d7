//! High-level library API: load an image, sample it (crop around a point or
//! shrink to a maximum size) and render the selected figure to a PNG. Prefer
//! these entrypoints over the low-level `core` and `render` modules.
use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::params::PlotParams;
use crate::core::processing::colorspace::project_to_lab;
use crate::core::processing::crop::{Cropped, crop_window};
use crate::core::processing::resize::fit_image_size;
use crate::core::raster::Raster;
use crate::error::{Error, Result};
use crate::io::load_raster;
use crate::render::{draw_channel_surfaces, draw_lab_cloud};
use crate::types::PlotKind;

const OUTPUT_SUFFIX: &str = ".plt.png";

/// Raster ready for plotting, with the source position of its first pixel
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedImage {
    pub raster: Raster,
    /// `(col, row)` offset into the source image; `(0, 0)` unless cropped
    pub origin: (usize, usize),
}

impl From<Cropped> for PreparedImage {
    fn from(cropped: Cropped) -> Self {
        Self {
            raster: cropped.raster,
            origin: cropped.origin,
        }
    }
}

/// `<basename(input)>.plt.png`, relative to the current directory
pub fn output_filename(input: &Path) -> Result<PathBuf> {
    let name = input.file_name().ok_or_else(|| {
        Error::Processing(format!("Input path has no file name: {}", input.display()))
    })?;
    let mut name = name.to_os_string();
    name.push(OUTPUT_SUFFIX);
    Ok(PathBuf::from(name))
}

/// Crop around `params.at` when given, otherwise shrink to the effective max size
pub fn prepare_image(raster: &Raster, params: &PlotParams) -> Result<PreparedImage> {
    match params.at {
        Some(center) => Ok(crop_window(raster, center, params.wsize)?.into()),
        None => Ok(PreparedImage {
            raster: fit_image_size(raster, params.effective_maxsize())?,
            origin: (0, 0),
        }),
    }
}

/// Render an already prepared image to `output`
pub fn plot_prepared(image: &PreparedImage, plot: PlotKind, output: &Path) -> Result<()> {
    info!(
        "Plotting {} figure of {}x{} pixels at origin {:?}",
        plot,
        image.raster.width(),
        image.raster.height(),
        image.origin
    );

    match plot {
        PlotKind::Hist => {
            let cloud = project_to_lab(&image.raster);
            draw_lab_cloud(output, &cloud).map_err(Error::external)
        }
        PlotKind::Surface => draw_channel_surfaces(output, &image.raster, image.origin, false)
            .map_err(Error::external),
        PlotKind::Contour => draw_channel_surfaces(output, &image.raster, image.origin, true)
            .map_err(Error::external),
    }
}

/// Load `input`, sample it and write the figure. Returns the written path, which
/// is `output` when given and [`output_filename`] otherwise.
pub fn plot_image_to_path(
    input: &Path,
    output: Option<&Path>,
    params: &PlotParams,
) -> Result<PathBuf> {
    params.validate()?;
    let output = match output {
        Some(path) => path.to_path_buf(),
        None => output_filename(input)?,
    };

    let raster = load_raster(input)?;
    let prepared = prepare_image(&raster, params)?;
    plot_prepared(&prepared, params.plot, &output)?;

    info!("Saved figure to {:?}", output);
    Ok(output)
}
