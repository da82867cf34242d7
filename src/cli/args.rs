use clap::Parser;
use std::path::PathBuf;

use colorcloud::{Coords, PlotKind};

#[derive(Parser, Debug)]
#[command(name = "colorcloud", version, about = "Plot an image region as a 3D color cloud or channel surfaces")]
pub struct CliArgs {
    /// Image to plot
    pub image: PathBuf,

    /// Figure to draw (hist: Lab point cloud, surface: channel surfaces, contour: surfaces with contour projections)
    #[arg(long, value_enum)]
    pub plot: Option<PlotKind>,

    /// Shrink large images so the longer side has this size
    /// (default: 50 for hist, 600 for surface and contour)
    #[arg(long)]
    pub maxsize: Option<u32>,

    /// Size of the sampled window
    #[arg(long)]
    pub wsize: Option<u32>,

    /// Center of the sampled window as `x,y`; when given the image is cropped instead of resized
    #[arg(long, allow_hyphen_values = true)]
    pub at: Option<Coords>,

    /// Output file (default: `<image name>.plt.png` in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON preset with plot parameters; explicit flags take precedence
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
