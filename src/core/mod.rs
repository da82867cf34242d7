//! Core building blocks: the `Raster` pixel grid, plot parameters and the pure
//! transforms (resize, crop, color-space projection, contours). These are
//! internal primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
pub mod raster;
