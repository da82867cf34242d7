pub mod colorspace;
pub mod contour;
pub mod crop;
pub mod resize;
