#![doc = r#"
colorcloud — inspect the color and intensity distribution of an image region in 3D.

The crate loads a raster, samples it (either a window cropped around a pixel or the
whole image shrunk to a maximum size) and renders a 2x3 panel figure to PNG:

- `hist`: every pixel placed in normalized CIE L*a*b* space, drawn in its own color
  from six azimuths, with faint shadows on the far bounding planes.
- `surface`: R, G and B intensities as height fields over (col, row), seen from two
  camera angles.
- `contour`: the surfaces plus iso-intensity lines and row/column profiles flattened
  onto the bounding planes.

It powers the `colorcloud` CLI and can be embedded in your own tools.

Quick start: plot a file
------------------------
```rust,no_run
use std::path::Path;
use colorcloud::{plot_image_to_path, PlotKind, PlotParams};

fn main() -> colorcloud::Result<()> {
    let params = PlotParams {
        plot: PlotKind::Hist,
        ..Default::default()
    };
    let written = plot_image_to_path(Path::new("photo.jpg"), None, &params)?;
    println!("wrote {}", written.display());
    Ok(())
}
```

Crop a window and keep absolute coordinates
-------------------------------------------
```rust
use ndarray::Array3;
use colorcloud::{crop_window, Coords, Raster};

let image = Raster::new(Array3::zeros((200, 50, 3))).unwrap();
let cropped = crop_window(&image, Coords::new(25, 100), 32).unwrap();
assert_eq!(cropped.origin, (9, 84));
assert_eq!(cropped.raster.width(), 32);
```

Error handling
--------------
All fallible functions return `colorcloud::Result<T>`; match on `colorcloud::Error`
for specific cases such as a window that misses the image entirely.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — `Raster`, `PlotParams` and the resize / crop / color-space transforms.
- [`render`] — plotters-based figure drawing.
- [`io`] — image decoding.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod render;
pub mod types;

// Types
pub use core::params::PlotParams;
pub use core::raster::Raster;
pub use error::{Error, Result};
pub use types::{Coords, PlotKind};

// Transforms
pub use core::processing::colorspace::{LabCloud, LabPoint, project_to_lab};
pub use core::processing::crop::{Cropped, crop_window};
pub use core::processing::resize::{calculate_fit_dimensions, fit_image_size};

// High-level API re-exports
pub use api::{PreparedImage, output_filename, plot_image_to_path, plot_prepared, prepare_image};
pub use io::load_raster;
