//! I/O layer: decoding input images into `Raster`s. Output figures are encoded
//! by the plotting backend in `render`.
pub mod reader;
pub use reader::{load_raster, raster_from_dynamic};
