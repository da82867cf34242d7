//! Figure rendering with plotters: six 3D panels on a fixed 1920x960 canvas,
//! encoded straight to PNG by the bitmap backend.
pub mod scatter;
pub mod surface;
pub mod view;

pub use scatter::draw_lab_cloud;
pub use surface::draw_channel_surfaces;
