//! Crate-level error type and `Result` alias for structured error handling.
//! Converts underlying I/O, image decode and preset parsing errors, and provides
//! semantic variants for argument validation and crop geometry failures.
use thiserror::Error;

use crate::types::Coords;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid coords input: {0}")]
    InvalidCoords(String),

    #[error(
        "Window centered at {center} of size {size} is out of the image of size {width}x{height}"
    )]
    WindowOutOfBounds {
        center: Coords,
        size: u32,
        width: usize,
        height: usize,
    },

    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: u32 },

    #[error("Invalid parameter preset: {0}")]
    Params(#[from] serde_json::Error),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }
}
