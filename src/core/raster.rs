use std::ops::Range;

use ndarray::{Array3, ArrayView2, Axis, s};

/// 8-bit RGB pixel grid stored as `(rows, cols, channel)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    data: Array3<u8>,
}

impl Raster {
    pub const CHANNELS: usize = 3;

    /// Wrap an array of shape `(rows, cols, 3)`.
    pub fn new(data: Array3<u8>) -> Result<Self, String> {
        let (_, _, channels) = data.dim();
        if channels != Self::CHANNELS {
            return Err(format!(
                "expected {} channels, got {}",
                Self::CHANNELS,
                channels
            ));
        }
        Ok(Self { data })
    }

    /// Build from an interleaved RGB buffer in row-major order.
    pub fn from_rgb_vec(cols: usize, rows: usize, rgb: Vec<u8>) -> Result<Self, String> {
        let data = Array3::from_shape_vec((rows, cols, Self::CHANNELS), rgb)
            .map_err(|e| e.to_string())?;
        Ok(Self { data })
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn data(&self) -> &Array3<u8> {
        &self.data
    }

    pub fn pixel(&self, row: usize, col: usize) -> [u8; 3] {
        [
            self.data[[row, col, 0]],
            self.data[[row, col, 1]],
            self.data[[row, col, 2]],
        ]
    }

    /// Intensity plane of one channel (0 = R, 1 = G, 2 = B).
    pub fn channel(&self, channel: usize) -> ArrayView2<'_, u8> {
        self.data.index_axis(Axis(2), channel)
    }

    /// Copy of the half-open region `rows x cols`.
    pub fn region(&self, rows: Range<usize>, cols: Range<usize>) -> Raster {
        Raster {
            data: self.data.slice(s![rows, cols, ..]).to_owned(),
        }
    }

    /// Interleaved RGB bytes in row-major order.
    pub fn to_rgb_vec(&self) -> Vec<u8> {
        self.data.iter().copied().collect()
    }

    /// Iterate pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.data
            .lanes(Axis(2))
            .into_iter()
            .map(|px| [px[0], px[1], px[2]])
    }
}
